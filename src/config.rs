use log::Level;

pub const BRAND: &str = "Pushpedal";

pub const CONTACT_EMAIL: &str = "info@pushpedal.com";
pub const SUPPORT_EMAIL: &str = "support@pushpedal.com";
pub const PHONE_DISPLAY: &str = "+91 98765 43210";
pub const PHONE_LINK: &str = "+919876543210";
pub const ADDRESS: &str = "123 Cycling Lane, Bangalore, India";

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3888.490424780533!2d77.63093927475178!3d12.943028887367974!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3bae15a4ef891c39%3A0x99c8a04c7353c161!2sNational%20Games%20Village!5e0!3m2!1sen!2sin!4v1701940424792!5m2!1sen!2sin";

/// Scroll offset in pixels after which the nav bar switches to its solid style.
pub const NAV_SOLID_AFTER_PX: f64 = 80.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
