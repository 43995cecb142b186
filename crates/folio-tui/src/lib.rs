pub mod app;
pub mod event;
pub mod form;
pub mod input;
pub mod keymap;
pub mod theme;
pub mod themes;
pub mod transition;
pub mod ui;
pub mod widgets;

pub use app::App;
pub use theme::Theme;
pub use themes::load_theme;
