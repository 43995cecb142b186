use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::keymap::Keymap;
use crate::theme::Theme;

/// Bindings that exist regardless of configuration
const FIXED_KEYS: &[(&str, &str)] = &[
    ("←/→", "slide back / forward"),
    ("1-9", "jump to dot"),
    ("Home/End", "first / last item"),
    ("Esc", "close overlay, leave form"),
];

pub struct PopupWidget;

impl PopupWidget {
    /// Render the key help overlay centered on screen
    pub fn render_help(frame: &mut Frame, theme: &Theme, keymap: &Keymap) {
        let area = frame.area();

        let key_style = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(theme.fg0);

        let mut lines: Vec<Line> = keymap
            .descriptions()
            .iter()
            .map(|(key, help)| help_line(key, help, key_style, text_style))
            .collect();
        lines.push(Line::default());
        lines.extend(
            FIXED_KEYS
                .iter()
                .map(|(key, help)| help_line(key, help, key_style, text_style)),
        );
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled("press any key to close", Style::default().fg(theme.muted)))
                .alignment(Alignment::Center),
        );

        let popup_width = 44u16.min(area.width.saturating_sub(4));
        let popup_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

fn help_line<'a>(key: &'a str, help: &'a str, key_style: Style, text_style: Style) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", key), key_style),
        Span::styled(help, text_style),
    ])
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
