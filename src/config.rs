//! Site-wide tuning knobs. Everything time- or distance-based lives here so
//! the motion modules stay free of magic numbers.

/// Scroll samples are throttled to one per this window.
pub const SCROLL_THROTTLE_MS: u32 = 100;
/// Resize handling waits for the drag to settle.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;
/// Pointer sampling rate for the sparkle layer.
pub const POINTER_THROTTLE_MS: u32 = 100;

/// Offset past which the navbar gets its solid background.
pub const NAV_SOLID_OFFSET: f64 = 100.0;
/// Offset past which scrolling down hides the navbar.
pub const NAV_HIDE_OFFSET: f64 = 200.0;
/// Fixed-navbar allowance for anchor scrolling.
pub const ANCHOR_ALLOWANCE: f64 = 80.0;

// Viewport breakpoints. Mobile is strictly below the first, tablet strictly
// below the second.
pub const MOBILE_BREAKPOINT: f64 = 768.0;
pub const TABLET_BREAKPOINT: f64 = 1024.0;

/// Fraction of an element that must enter the viewport to count as visible.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Pulls the trigger line 50px up from the viewport bottom.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
/// Upper bound on the random delay applied to staggered reveals.
pub const STAGGER_JITTER_MS: f64 = 200.0;

pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_STEPS: u32 = 100;
/// Fallback when a stat element's text has no usable number in it.
pub const COUNTER_DEFAULT_TARGET: u32 = 100;

pub const SPARKLE_BUDGET: usize = 5;
pub const SPARKLE_LIFETIME_MS: u32 = 1000;
/// Sparkles only spawn while the pointer is over one of these surfaces.
pub const SPARKLE_SURFACES: &str = ".service-card, .value-card, .story-card, .btn-custom, .hero";

pub const TOAST_DISMISS_MS: u32 = 5000;
/// Simulated delivery delay for the contact form.
pub const FORM_SEND_MS: u32 = 2000;

/// Divisor bounding the card tilt rotation magnitude.
pub const TILT_DIVISOR: f64 = 10.0;

/// Hero entrance: base delay plus per-element spacing.
pub const HERO_BASE_DELAY_MS: u32 = 500;
pub const HERO_STEP_DELAY_MS: u32 = 200;

/// Timeline items reveal this far apart.
pub const TIMELINE_STEP_MS: u32 = 200;

/// Service filter: per-item reveal spacing and hide settle time.
pub const FILTER_STEP_MS: u32 = 50;
pub const FILTER_SETTLE_MS: u32 = 300;

/// The studio's local timezone, used for the office-hours chip.
pub const STUDIO_TZ: chrono_tz::Tz = chrono_tz::Tz::Europe__Lisbon;

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}
