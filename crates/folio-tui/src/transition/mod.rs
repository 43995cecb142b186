//! Carousel slide transitions
//!
//! - `easing` - pure easing curves
//! - `animator` - eased offset tracking for one carousel track

pub mod animator;
pub mod easing;

pub use animator::OffsetAnimator;
pub use easing::{EasingType, EasingTypeExt};
