// Shadow Token System
// Elevation and ring colors for the AniData panel

// Button/card elevation (violet-tinted)
pub const ELEVATION_RESTING: &str = "0px 2px 8px rgba(108, 92, 231, 0.15)";
pub const ELEVATION_HOVER: &str = "0px 6px 16px rgba(108, 92, 231, 0.25)";

// Status indicator ring (teal), full and fully-faded stops of the pulse
pub const STATUS_RING: &str = "rgba(56, 178, 172, 0.4)";
pub const STATUS_RING_FADED: &str = "rgba(56, 178, 172, 0)";

// Ripple overlay fill
pub const RIPPLE_FILL: &str = "rgba(255, 255, 255, 0.3)";
