//! Carousel paging shared by every paged portfolio section
//!
//! - `breakpoints` - viewport width to items-per-view table
//! - `controller` - clamped index, navigation and indicator state

pub mod breakpoints;
pub mod controller;

mod proptests;

pub use breakpoints::Breakpoints;
pub use controller::CarouselController;
