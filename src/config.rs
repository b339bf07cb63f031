use log::Level;

/// Vertical offset (px) past which the header switches to its scrolled style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Fraction of a card that must be visible before its reveal is scheduled.
pub const CARD_VISIBILITY_RATIO: f64 = 0.3;

/// Per-index reveal delay for the solution cards.
pub const CARD_STAGGER_MS: u32 = 200;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
