use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose state transitions when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Length of a disclosure open or close transition.
pub const DISCLOSURE_DURATION_MS: f64 = 250.0;

/// Period of the animation clock while a disclosure is mid-transition.
pub const FRAME_INTERVAL_MS: u32 = 16;

/// FAQ entry expanded when the page first renders. `None` starts fully collapsed.
pub const DEFAULT_FAQ_OPEN: Option<usize> = Some(0);

/// Share of a section that has to be on screen before its entrance plays.
pub const REVEAL_AMOUNT: f64 = 0.3;
