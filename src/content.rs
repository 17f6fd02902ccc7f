//! Static copy for every page. Pages only read from here.

#[derive(Debug, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Program {
    pub title: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub author: &'static str,
    pub quote: &'static str,
    pub image: Option<&'static str>,
}

#[derive(Debug, PartialEq)]
pub struct Partner {
    pub name: &'static str,
    pub logo: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub bio: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct FaqGroup {
    pub id: &'static str,
    pub title: &'static str,
    pub entries: &'static [FaqEntry],
}

#[derive(Debug, PartialEq)]
pub struct AgeGroup {
    pub ages: &'static str,
    pub level: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ScheduleRow {
    pub day: &'static str,
    pub time: &'static str,
    pub activity: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct StudentProfile {
    pub name: &'static str,
    pub image: &'static str,
    pub achievements: &'static [&'static str],
    pub story: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct CompetitionResult {
    pub competition: &'static str,
    pub placement: &'static str,
    pub date: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct NewsArticle {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub link: &'static str,
}

// Home

pub const APPROACH: &[Feature] = &[
    Feature {
        icon: "🚲",
        title: "Expert Coaching",
        body: "Certified coaches with years of experience in competitive cycling.",
    },
    Feature {
        icon: "🏆",
        title: "Personalized Training",
        body: "Customized training plans tailored to each child's skill level and goals.",
    },
    Feature {
        icon: "🤝",
        title: "Supportive Community",
        body: "A positive and encouraging environment where young cyclists can thrive.",
    },
];

pub const PROGRAMS: &[Program] = &[
    Program {
        title: "Beginner Program",
        summary: "For children who are new to cycling and want to learn the basics.",
        highlights: &["Basic cycling skills", "Safety techniques", "Fun cycling games"],
    },
    Program {
        title: "Intermediate Program",
        summary: "For children who have some cycling experience and want to improve their skills.",
        highlights: &["Advanced cycling techniques", "Endurance training", "Race preparation"],
    },
    Program {
        title: "Advanced Program",
        summary: "For children who are serious about competitive cycling and want to excel.",
        highlights: &["High-intensity training", "Competition strategies", "Personalized coaching"],
    },
];

pub const PARENT_REVIEWS: &[Testimonial] = &[
    Testimonial {
        author: "Priya Sharma",
        quote: "Pushpedal has transformed my child's cycling skills and confidence. The coaches are amazing!",
        image: None,
    },
    Testimonial {
        author: "Rajesh Kumar",
        quote: "The personalized training plans helped my child excel in competitions. Highly recommended!",
        image: None,
    },
];

pub const PARTNERS: &[Partner] = &[
    Partner {
        name: "Partner 1",
        logo: "/partner1.png",
    },
    Partner {
        name: "Partner 2",
        logo: "/partner2.png",
    },
    Partner {
        name: "Partner 3",
        logo: "/partner3.png",
    },
];

// About

pub const STORY: &[&str] = &[
    "Pushpedal began with a simple vision: to empower young cyclists in Bangalore to reach their full potential. Founded by passionate cycling enthusiasts, we recognized a gap in professional training tailored to young athletes.",
    "With years of experience in competitive cycling and youth development, we built a program that combines expert coaching, personalized training plans, and a supportive community. Our commitment is to nurture talent, build confidence, and help our students achieve victory, one pedal stroke at a time.",
];

pub const MISSION: &str = "To provide world-class cycling training and mentorship to young athletes, fostering a winning mindset and a lifelong love for the sport.";

pub const VISION: &str = "To be the leading cycling academy in India, recognized for developing champion cyclists and empowering them to excel on the national and international stage.";

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Coach Anya Sharma",
        title: "Head Coach",
        image: "/anya.jpg",
        bio: "Anya is a former national cycling champion with over 10 years of coaching experience.",
    },
    TeamMember {
        name: "Dr. Rohan Patel",
        title: "Sports Psychologist",
        image: "/rohan.jpg",
        bio: "Rohan specializes in mental conditioning and performance enhancement for young athletes.",
    },
    TeamMember {
        name: "Priya Menon",
        title: "Nutritionist",
        image: "/priya.jpg",
        bio: "Priya provides personalized nutrition plans to optimize performance and recovery.",
    },
];

pub const VALUES: &[Card] = &[
    Card {
        icon: "🏅",
        title: "Excellence",
        body: "We strive for the highest standards in training and development.",
    },
    Card {
        icon: "🤝",
        title: "Teamwork",
        body: "We believe in the power of collaboration and mutual support.",
    },
    Card {
        icon: "💡",
        title: "Innovation",
        body: "We continuously seek new and effective training methods.",
    },
    Card {
        icon: "❤️",
        title: "Passion",
        body: "We are driven by our love for cycling and our commitment to our students.",
    },
];

pub const SOCIAL_IMPACT_INTRO: &str = "At Pushpedal, we are committed to making a positive impact on our community. We believe in using cycling as a tool for social change, promoting healthy lifestyles, and empowering young people from all backgrounds.";

pub const SOCIAL_IMPACT: &[Card] = &[
    Card {
        icon: "🎓",
        title: "Scholarship Programs",
        body: "We provide scholarships to talented cyclists from underprivileged backgrounds, giving them access to professional training and opportunities.",
    },
    Card {
        icon: "🌍",
        title: "Community Outreach",
        body: "We organize cycling workshops and events in local communities to promote cycling as a healthy and sustainable mode of transportation.",
    },
];

// FAQ

pub const FAQ_GROUPS: &[FaqGroup] = &[
    FaqGroup {
        id: "general",
        title: "General Questions",
        entries: &[
            FaqEntry {
                question: "What is Pushpedal?",
                answer: "Pushpedal is a professional cycling training program designed to help young cyclists in Bangalore, India, excel in competitions. We provide expert coaching and a supportive environment to nurture their talent.",
            },
            FaqEntry {
                question: "What age groups do you cater to?",
                answer: "We cater to children aged 5-16 years old.",
            },
            FaqEntry {
                question: "Where are the training sessions held?",
                answer: "Our training sessions are held at designated cycling tracks and parks across Bangalore. Specific locations will be communicated upon registration.",
            },
        ],
    },
    FaqGroup {
        id: "programs",
        title: "Program Specific Questions",
        entries: &[
            FaqEntry {
                question: "What programs do you offer?",
                answer: "We offer beginner, intermediate, and advanced training programs tailored to different skill levels and age groups. Each program focuses on specific techniques, endurance, and competition strategies.",
            },
            FaqEntry {
                question: "How long is each training session?",
                answer: "Each training session is typically 1.5 to 2 hours long, depending on the program level.",
            },
            FaqEntry {
                question: "What equipment do I need?",
                answer: "Participants need their own bicycle, helmet, and appropriate cycling attire. We may provide additional equipment for specific drills and exercises.",
            },
        ],
    },
    FaqGroup {
        id: "registration",
        title: "Registration Questions",
        entries: &[
            FaqEntry {
                question: "How do I register my child for a program?",
                answer: "You can register your child through our website by filling out the registration form and paying the program fee. Alternatively, you can visit our office for in-person registration.",
            },
            FaqEntry {
                question: "What is the registration fee?",
                answer: "The registration fee varies depending on the program. Please check our website or contact us for the latest fee structure.",
            },
            FaqEntry {
                question: "What is the refund policy?",
                answer: "We have a flexible refund policy. If you cancel before the program starts, you will receive a full refund. Partial refunds are available for cancellations made after the program has commenced, subject to certain conditions.",
            },
        ],
    },
    FaqGroup {
        id: "competitions",
        title: "Competition Questions",
        entries: &[
            FaqEntry {
                question: "What kind of competitions do you prepare the children for?",
                answer: "We prepare children for local, regional, and national level cycling competitions. Our training programs are designed to enhance their competitive edge.",
            },
            FaqEntry {
                question: "Do you provide competition support?",
                answer: "Yes, we provide comprehensive competition support, including pre-race guidance, on-site coaching, and logistical assistance.",
            },
            FaqEntry {
                question: "What are the success stories of Pushpedal?",
                answer: "Many of our students have achieved significant success in cycling competitions. Visit our website to read their inspiring stories and achievements.",
            },
        ],
    },
];

// Regional impact

pub const COMMUNITY_ENGAGEMENT: &[Card] = &[
    Card {
        icon: "📅",
        title: "Community Events",
        body: "Regular cycling events for all ages and skill levels, fostering a sense of community and promoting healthy lifestyles.",
    },
    Card {
        icon: "🔧",
        title: "Skills Workshops",
        body: "Workshops focused on cycling skills, safety, and maintenance, empowering individuals to confidently navigate the roads.",
    },
    Card {
        icon: "❤️",
        title: "Charity Rides",
        body: "Organized rides to raise funds for local charities, combining the joy of cycling with the opportunity to give back to the community.",
    },
];

pub const PARTNERSHIPS: &[Card] = &[
    Card {
        icon: "🏪",
        title: "Local Businesses",
        body: "Collaborations with local bike shops and sports retailers to provide discounts and resources for our participants.",
    },
    Card {
        icon: "🏫",
        title: "Schools & Organizations",
        body: "Partnerships with schools and youth organizations to integrate cycling programs into their activities.",
    },
];

pub const OUTREACH: &[Card] = &[Card {
    icon: "🦺",
    title: "Cycling Safety Programs",
    body: "Free cycling safety workshops for children and adults, promoting safe riding habits and awareness.",
}];

pub const IMPACT_METRICS: &[Card] = &[
    Card {
        icon: "📈",
        title: "Increased Participation",
        body: "30% increase in cycling participation in local communities.",
    },
    Card {
        icon: "🛡️",
        title: "Improved Safety",
        body: "20% reduction in cycling-related accidents.",
    },
    Card {
        icon: "👥",
        title: "Community Growth",
        body: "Expansion of cycling clubs and groups by 40%.",
    },
    Card {
        icon: "❤️",
        title: "Healthier Lifestyles",
        body: "Increased awareness of the health benefits of cycling.",
    },
];

pub const FUTURE_PLANS: &[Card] = &[Card {
    icon: "📍",
    title: "Expansion to New Regions",
    body: "Plan to extend Pushpedal's outreach programs to other regions, bringing the benefits of cycling to more communities.",
}];

// Success stories

pub const STUDENTS: &[StudentProfile] = &[
    StudentProfile {
        name: "Anya Sharma",
        image: "/anya.jpg",
        achievements: &["State Champion", "National Rank 3", "Best Cyclist Award"],
        story: "Anya started with Pushpedal at age 8 and has consistently shown exceptional talent and dedication. Her achievements are a testament to her hard work and our coaching.",
    },
    StudentProfile {
        name: "Rohan Patel",
        image: "/rohan.jpg",
        achievements: &["District Winner", "Zonal Runner-up", "Most Improved Player"],
        story: "Rohan's journey is one of perseverance. He joined us with basic skills and has transformed into a competitive cyclist, thanks to his commitment and our tailored training.",
    },
    StudentProfile {
        name: "Diya Menon",
        image: "/diya.jpg",
        achievements: &["National Champion", "Asian Games Qualifier", "Sportsmanship Award"],
        story: "Diya's passion for cycling is unmatched. Her dedication and our advanced training programs have helped her achieve remarkable success on the national and international stage.",
    },
];

pub const RESULTS: &[CompetitionResult] = &[
    CompetitionResult {
        competition: "State Cycling Championship",
        placement: "1st Place",
        date: "2024-03-15",
    },
    CompetitionResult {
        competition: "National Junior Games",
        placement: "3rd Place",
        date: "2024-05-20",
    },
    CompetitionResult {
        competition: "Zonal Cycling Tournament",
        placement: "2nd Place",
        date: "2024-07-10",
    },
];

pub const FAMILY_TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        author: "Priya Sharma (Anya's Mother)",
        quote: "Pushpedal has been instrumental in Anya's success. The coaches are dedicated, and the training is top-notch.",
        image: Some("/priya.jpg"),
    },
    Testimonial {
        author: "Vikram Patel (Rohan's Father)",
        quote: "We've seen a tremendous improvement in Rohan's skills and confidence since he joined Pushpedal. Highly recommended!",
        image: Some("/vikram.jpg"),
    },
    Testimonial {
        author: "Meera Menon (Diya's Mother)",
        quote: "Pushpedal's holistic approach to training has helped Diya excel not just in cycling but also in her overall development.",
        image: Some("/meera.jpg"),
    },
];

pub const GALLERY: &[&str] = &[
    "/gallery1.jpg",
    "/gallery2.jpg",
    "/gallery3.jpg",
    "/gallery4.jpg",
    "/gallery5.jpg",
    "/gallery6.jpg",
];

pub const NEWS: &[NewsArticle] = &[
    NewsArticle {
        title: "Anya Sharma Wins State Championship",
        excerpt: "Anya Sharma, a Pushpedal student, has won the State Cycling Championship, showcasing her exceptional talent and hard work.",
        link: "#",
    },
    NewsArticle {
        title: "Rohan Patel Secures Second Position in Zonal Tournament",
        excerpt: "Rohan Patel, another promising cyclist from Pushpedal, has secured the second position in the Zonal Cycling Tournament.",
        link: "#",
    },
    NewsArticle {
        title: "Diya Menon Qualifies for Asian Games",
        excerpt: "Diya Menon has qualified for the Asian Games, marking a significant milestone in her cycling career and bringing pride to Pushpedal.",
        link: "#",
    },
];

// Training programs

pub const PHILOSOPHY: &[&str] = &[
    "At Pushpedal, we believe in nurturing young talents with a holistic approach. Our training programs are designed to not only enhance cycling skills but also instill discipline, teamwork, and a winning mindset.",
    "We focus on personalized coaching, age-appropriate training modules, and a supportive environment that encourages every child to reach their full potential.",
];

pub const CURRICULUM: &[&str] = &[
    "Fundamental Cycling Techniques",
    "Advanced Race Strategies",
    "Physical Conditioning and Endurance",
    "Nutrition and Recovery",
    "Bike Maintenance and Safety",
];

pub const AGE_GROUPS: &[AgeGroup] = &[
    AgeGroup {
        ages: "5-8",
        level: "Beginner",
        description: "Introduction to cycling basics and safety.",
    },
    AgeGroup {
        ages: "9-12",
        level: "Intermediate",
        description: "Developing advanced techniques and race strategies.",
    },
    AgeGroup {
        ages: "13-16",
        level: "Advanced",
        description: "Preparing for competitive cycling and tournaments.",
    },
];

pub const SCHEDULE: &[ScheduleRow] = &[
    ScheduleRow {
        day: "Monday",
        time: "4:00 PM - 5:30 PM",
        activity: "Skills Training",
    },
    ScheduleRow {
        day: "Wednesday",
        time: "4:00 PM - 5:30 PM",
        activity: "Endurance Drills",
    },
    ScheduleRow {
        day: "Friday",
        time: "4:00 PM - 5:30 PM",
        activity: "Race Simulation",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn filled(values: &[&str]) -> bool {
        values.iter().all(|v| !v.trim().is_empty())
    }

    #[test]
    fn cards_have_copy() {
        for group in [VALUES, SOCIAL_IMPACT, COMMUNITY_ENGAGEMENT, PARTNERSHIPS, OUTREACH, IMPACT_METRICS, FUTURE_PLANS] {
            assert!(!group.is_empty());
            for card in group {
                assert!(filled(&[card.icon, card.title, card.body]), "{}", card.title);
            }
        }
        for feature in APPROACH {
            assert!(filled(&[feature.icon, feature.title, feature.body]));
        }
    }

    #[test]
    fn faq_groups_are_unique_and_complete() {
        let ids: HashSet<_> = FAQ_GROUPS.iter().map(|g| g.id).collect();
        assert_eq!(ids.len(), FAQ_GROUPS.len());
        for group in FAQ_GROUPS {
            assert!(!group.entries.is_empty(), "{}", group.title);
            for entry in group.entries {
                assert!(entry.question.ends_with('?'), "{}", entry.question);
                assert!(filled(&[entry.answer]));
            }
        }
    }

    #[test]
    fn people_and_programs_have_copy() {
        for program in PROGRAMS {
            assert!(filled(&[program.title, program.summary]));
            assert!(filled(program.highlights));
        }
        for member in TEAM {
            assert!(filled(&[member.name, member.title, member.image, member.bio]));
        }
        for student in STUDENTS {
            assert!(filled(&[student.name, student.image, student.story]));
            assert!(filled(student.achievements));
        }
        for testimonial in PARENT_REVIEWS.iter().chain(FAMILY_TESTIMONIALS) {
            assert!(filled(&[testimonial.author, testimonial.quote]));
        }
    }

    #[test]
    fn tables_have_every_column() {
        for row in SCHEDULE {
            assert!(filled(&[row.day, row.time, row.activity]));
        }
        for group in AGE_GROUPS {
            assert!(filled(&[group.ages, group.level, group.description]));
        }
        for result in RESULTS {
            assert!(filled(&[result.competition, result.placement]));
            assert_eq!(result.date.len(), "2024-03-15".len());
        }
        for article in NEWS {
            assert!(filled(&[article.title, article.excerpt, article.link]));
        }
    }

    #[test]
    fn image_paths_are_rooted() {
        let paths = GALLERY
            .iter()
            .copied()
            .chain(PARTNERS.iter().map(|p| p.logo))
            .chain(TEAM.iter().map(|m| m.image))
            .chain(STUDENTS.iter().map(|s| s.image))
            .chain(FAMILY_TESTIMONIALS.iter().filter_map(|t| t.image));
        for path in paths {
            assert!(path.starts_with('/'), "{path}");
        }
    }
}
