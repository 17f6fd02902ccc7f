use yew::prelude::*;

use crate::components::reveal_section::{RevealItem, RevealSection, Trigger};
use crate::content::{Card, COMMUNITY_ENGAGEMENT, FUTURE_PLANS, IMPACT_METRICS, OUTREACH, PARTNERSHIPS};
use crate::motion::reveal::{Pose, Reveal, Stagger, Timing};

const PAGE: Reveal = Reveal::fade(500.0);
const GRID: Reveal =
    Reveal::fade(0.0).staggered(Stagger::new(150.0, Pose::lowered(30.0), Timing::new(750.0)));

#[derive(Properties, PartialEq)]
struct CardGridProps {
    id: AttrValue,
    title: AttrValue,
    cards: &'static [Card],
    #[prop_or_default]
    muted: bool,
    #[prop_or_default]
    metrics: bool,
}

#[function_component(CardGrid)]
fn card_grid(props: &CardGridProps) -> Html {
    let columns = match props.cards.len() {
        1 => "one",
        2 => "two",
        3 => "three",
        _ => "four",
    };

    html! {
        <RevealSection
            reveal={GRID}
            items={props.cards.len()}
            id={props.id.clone()}
            class={classes!("band", props.muted.then_some("muted"))}
        >
            <div class="container">
                <h2>{&props.title}</h2>
                <div class={classes!("grid", columns)}>
                    { for props.cards.iter().enumerate().map(|(i, card)| html! {
                        <RevealItem
                            index={i}
                            class={classes!("card", (!props.muted).then_some("muted"), props.metrics.then_some("centered"))}
                        >
                            if props.metrics {
                                <span class="card-icon">{card.icon}</span>
                            }
                            <h3>{card.title}</h3>
                            <p>{card.body}</p>
                        </RevealItem>
                    }) }
                </div>
            </div>
        </RevealSection>
    }
}

#[function_component(RegionalImpact)]
pub fn regional_impact() -> Html {
    html! {
        <RevealSection reveal={PAGE} trigger={Trigger::Mount} class="regional-page">
            <header class="band grid-overlay centered">
                <div class="container narrow">
                    <h1>{"Regional Impact"}</h1>
                    <p class="lead">
                        {"Learn about Pushpedal's influence on the local community, including our outreach programs and partnerships."}
                    </p>
                </div>
            </header>
            <CardGrid id="community" title="Community Engagement" cards={COMMUNITY_ENGAGEMENT} muted={true} />
            <CardGrid id="partnerships" title="Partnerships" cards={PARTNERSHIPS} />
            <CardGrid id="outreach" title="Outreach Programs" cards={OUTREACH} muted={true} />
            <CardGrid id="metrics" title="Impact Metrics" cards={IMPACT_METRICS} metrics={true} />
            <CardGrid id="future" title="Future Plans" cards={FUTURE_PLANS} muted={true} />
        </RevealSection>
    }
}
