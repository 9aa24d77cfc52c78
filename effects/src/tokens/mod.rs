// Effect Token System
// Shared durations, keyframe names and shadow values for the panel effects

pub mod animation;
pub mod shadow;
pub use animation::*;
pub use shadow::*;
