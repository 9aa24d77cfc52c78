// Animation Token System
// Timings and keyframe names shared by the effect binders

// Transition durations
pub const TRANSITION_SPEED: &str = "0.3s";
pub const PRESS_TRANSITION_SPEED: &str = "0.1s";

// Default easing for every inline transition
pub const EASE_DEFAULT: &str = "ease";

// Interaction scale factors
pub const BUTTON_HOVER_SCALE: f64 = 1.05;
pub const BUTTON_PRESS_SCALE: f64 = 0.98;

// Hover offsets
pub const CARD_HOVER_TRANSFORM: &str = "translateY(-5px)";
pub const NAV_HOVER_TRANSFORM: &str = "translateY(-2px)";
pub const NAV_REST_TRANSFORM: &str = "translateY(0)";

// Keyframe rule names
pub const KEYFRAME_PULSE: &str = "pulse";
pub const KEYFRAME_BLINK: &str = "blink";
pub const KEYFRAME_GRADIENT_SHIFT: &str = "gradientShift";
pub const KEYFRAME_RIPPLE: &str = "ripple";

// Standing animation shorthands
pub const PULSE_ANIMATION: &str = "pulse 2s infinite";
pub const BLINK_ANIMATION: &str = "blink 1.5s infinite";
pub const GRADIENT_SHIFT_ANIMATION: &str = "gradientShift 8s ease infinite";

// Ripple overlay lifetime; matches the 0.6s ripple keyframe duration
pub const RIPPLE_LIFETIME_MS: u32 = 600;

/// `all <duration> ease` shorthand used by every hover transition.
pub fn transition_all(duration: &str) -> String {
    format!("all {} {}", duration, EASE_DEFAULT)
}
