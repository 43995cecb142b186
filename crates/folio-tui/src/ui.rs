use folio_core::content::Section;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::{App, Mode};
use crate::keymap::Keymap;
use crate::widgets::{
    AboutWidget, CarouselWidget, ContactFormWidget, HeaderWidget, LeadershipWidget, PopupWidget,
    StatusBarWidget,
};

/// Draw one full frame: header, current section, status bar, overlays
pub fn draw(frame: &mut Frame, app: &App, keymap: &Keymap) {
    let size = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(app.theme.bg0)), size);

    // Header + body + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    HeaderWidget::render(frame, main_layout[0], app);

    match app.section {
        Section::About => AboutWidget::render(frame, main_layout[1], app),
        Section::Leadership => LeadershipWidget::render(frame, main_layout[1], app),
        Section::Contact => ContactFormWidget::render(frame, main_layout[1], app),
        section => CarouselWidget::render(frame, main_layout[1], app, section),
    }

    StatusBarWidget::render(frame, main_layout[2], app);

    if app.mode == Mode::Help {
        PopupWidget::render_help(frame, &app.theme, keymap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use folio_core::content::Portfolio;
    use folio_core::AppConfig;
    use ratatui::{backend::TestBackend, Terminal};

    use crate::theme::Theme;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        let keymap = Keymap::default();
        terminal.draw(|frame| draw(frame, app, &keymap)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        App::new(
            Arc::new(AppConfig::default()),
            Theme::default(),
            Portfolio::bundled().unwrap(),
            120,
        )
    }

    #[test]
    fn test_every_section_draws() {
        let mut app = app();
        for section in Section::ALL {
            app.select_section(section);
            let text = screen(&app);
            assert!(text.contains("Alex Morgan"), "{section}");
        }
    }

    #[test]
    fn test_about_shows_profile() {
        let app = app();
        let text = screen(&app);
        assert!(text.contains("Software Engineer, Systems & Web"));
        assert!(text.contains("https://github.com/example"));
    }

    #[test]
    fn test_leadership_timeline() {
        let mut app = app();
        app.select_section(Section::Leadership);
        let text = screen(&app);
        assert!(text.contains("Tech Lead"));
        assert!(text.contains("Local Rust Meetup"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = app();
        app.mode = Mode::Help;
        let text = screen(&app);
        assert!(text.contains("slide forward"));
        assert!(text.contains("press any key to close"));
    }

    #[test]
    fn test_contact_hint_without_relay() {
        let mut app = app();
        app.select_section(Section::Contact);
        let text = screen(&app);
        assert!(text.contains("Contact relay is not configured"));
    }
}
