mod about;
mod cards;
mod carousel;
mod contact_form;
mod header;
mod popup;
mod status_bar;
mod text;

pub use about::{AboutWidget, LeadershipWidget};
pub use carousel::CarouselWidget;
pub use contact_form::ContactFormWidget;
pub use header::HeaderWidget;
pub use popup::PopupWidget;
pub use status_bar::StatusBarWidget;
pub use text::truncate_to_width;
