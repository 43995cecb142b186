pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;

pub use carousel::{Breakpoints, CarouselController};
pub use config::{AppConfig, EasingType, TransitionConfig};
pub use error::{Error, Result};
