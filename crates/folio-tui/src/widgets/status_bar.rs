use folio_core::content::Section;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let mode_str = match app.mode {
            Mode::Help => "HELP",
            Mode::Normal if app.is_input_mode() => "INSERT",
            Mode::Normal => "NORMAL",
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            let mut text = format!(" {} | {} | {}px", mode_str, app.section.title(), app.viewport_width_px());
            if let Some(carousel) = app.current_carousel() {
                text.push_str(&format!(
                    " | {}/view | {}/{}",
                    carousel.controller.items_per_view(),
                    carousel.controller.current_index() + 1,
                    carousel.controller.page_indicator_count()
                ));
            }
            text
        };

        let help_hint = match app.section {
            Section::Contact if app.is_input_mode() => " Tab:field Enter:send Esc:leave ",
            _ => " q:quit Tab:section h/l:slide o:open ?:help ",
        };
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.muted).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
