use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose recomputation logs while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Messaging deep link
pub const WHATSAPP_HOST: &str = "wa.me";
pub const WHATSAPP_RECIPIENT: &str = "50670000000";

// Scroll thresholds, in CSS pixels
pub const HEADER_SCROLLED_AT: f64 = 50.0;
pub const BACK_TO_TOP_AT: f64 = 350.0;
pub const SECTION_TOP_OFFSET: f64 = 100.0;
pub const MOBILE_BREAKPOINT: f64 = 768.0;

// Hero zoom
pub const ZOOM_MIN_SCALE: f64 = 0.75;
pub const ZOOM_MAX_SCALE: f64 = 1.5;
/// Fraction of the hero height over which the zoom runs from min to max.
pub const ZOOM_PROGRESS_RATIO: f64 = 0.5;

// Timings, in milliseconds
pub const SCROLLING_SETTLE_MS: u32 = 150;
pub const SUBMIT_DELAY_MS: u32 = 1_500;
pub const NOTIFICATION_DISPLAY_MS: u32 = 5_000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;

pub const SCROLL_REVEAL_CDN: &str = "https://unpkg.com/scrollreveal@4.0.9/dist/scrollreveal.min.js";
