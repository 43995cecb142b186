use folio_core::content::Section;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Name plus section tabs across the top of the screen
pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.bg2))
            .style(Style::default().bg(theme.bg0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let name = format!(" {} ", app.portfolio.profile.name);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(name.width() as u16 + 1), Constraint::Min(1)])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(
                name,
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )),
            columns[0],
        );

        let titles: Vec<Line> = Section::ALL
            .iter()
            .map(|section| Line::from(section.title()))
            .collect();

        let tabs = Tabs::new(titles)
            .select(app.section.position())
            .style(Style::default().fg(theme.muted))
            .highlight_style(
                Style::default()
                    .fg(theme.fg0)
                    .bg(theme.selection)
                    .add_modifier(Modifier::BOLD),
            )
            .divider(Span::styled("│", Style::default().fg(theme.bg2)));

        frame.render_widget(tabs, columns[1]);
    }
}
