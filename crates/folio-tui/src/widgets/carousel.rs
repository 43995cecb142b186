use folio_core::content::Section;
use folio_core::CarouselController;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::cards::render_card;
use crate::app::App;
use crate::theme::Theme;

/// Horizontal track of cards for one paged section, with arrows and dots
pub struct CarouselWidget;

impl CarouselWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, section: Section) {
        let theme = &app.theme;
        let Some(carousel) = app.carousel(section) else {
            return;
        };
        let controller = &carousel.controller;

        let position = if controller.total_items() == 0 {
            String::new()
        } else {
            format!(
                " {}-{} of {} ",
                controller.visible_range().start + 1,
                controller.visible_range().end,
                controller.total_items()
            )
        };

        let block = Block::default()
            .title(format!(" {} ", section.title()))
            .title(Line::from(position).right_aligned())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if controller.total_items() == 0 {
            let empty = Paragraph::new(Span::styled("Nothing here yet.", Style::default().fg(theme.muted)))
                .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(inner);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(2), Constraint::Min(1), Constraint::Length(2)])
            .split(rows[0]);

        Self::render_arrow(frame, columns[0], "‹", controller.can_go_previous(), theme);
        Self::render_arrow(frame, columns[2], "›", controller.can_go_next(), theme);
        Self::render_track(frame, columns[1], app, section, carousel.animator.current());
        Self::render_dots(frame, rows[1], controller, theme);
    }

    fn render_track(frame: &mut Frame, track: Rect, app: &App, section: Section, offset_percent: f64) {
        let Some(carousel) = app.carousel(section) else {
            return;
        };
        let controller = &carousel.controller;
        let width = f64::from(track.width);
        let card_width = width / controller.items_per_view() as f64;
        let shift = offset_percent / 100.0 * width;

        for index in 0..controller.total_items() {
            let x0 = index as f64 * card_width - shift;
            let x1 = x0 + card_width;
            if x1 <= 0.0 || x0 >= width {
                continue;
            }
            let left = x0.max(0.0).round() as u16;
            let right = x1.min(width).round() as u16;
            // Too narrow to draw a bordered card
            if right < left + 3 {
                continue;
            }
            let rect = Rect::new(track.x + left, track.y, right - left, track.height);
            render_card(
                frame,
                rect,
                &app.theme,
                &app.portfolio,
                section,
                index,
                index == controller.current_index(),
            );
        }
    }

    fn render_arrow(frame: &mut Frame, area: Rect, glyph: &str, enabled: bool, theme: &Theme) {
        let style = if enabled {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.bg2)
        };
        let middle = Rect::new(area.x, area.y + area.height / 2, area.width, 1.min(area.height));
        frame.render_widget(Paragraph::new(Span::styled(glyph, style)).alignment(Alignment::Center), middle);
    }

    fn render_dots(frame: &mut Frame, area: Rect, controller: &CarouselController, theme: &Theme) {
        let count = controller.page_indicator_count();
        let current = controller.current_index();

        // Two cells per dot; fall back to a counter when they do not fit
        let line = if count * 2 <= area.width as usize {
            let spans: Vec<Span> = (0..count)
                .map(|i| {
                    if i == current {
                        Span::styled("● ", Style::default().fg(theme.accent))
                    } else {
                        Span::styled("○ ", Style::default().fg(theme.muted))
                    }
                })
                .collect();
            Line::from(spans)
        } else {
            Line::from(Span::styled(
                format!("{} / {}", current + 1, count),
                Style::default().fg(theme.muted),
            ))
        };

        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use folio_core::content::Portfolio;
    use folio_core::{AppConfig, TransitionConfig};
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| CarouselWidget::render(frame, frame.area(), app, app.section))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn app(columns: u16) -> App {
        let mut config = AppConfig::default();
        config.ui.transition = TransitionConfig {
            enabled: false,
            ..Default::default()
        };
        let mut app = App::new(
            Arc::new(config),
            Theme::default(),
            Portfolio::bundled().unwrap(),
            columns,
        );
        app.select_section(Section::Blog);
        app
    }

    #[test]
    fn test_renders_visible_cards_only() {
        let app = app(160);
        let screen = render_to_string(&app, 160, 16);
        assert!(screen.contains("Backpressure Without Tears"));
        assert!(screen.contains("Feature Flags"));
        assert!(!screen.contains("Reading Flame Graphs"));
        assert!(screen.contains("1-3 of 7"));
    }

    #[test]
    fn test_slides_after_navigation() {
        let mut app = app(160);
        app.carousel_next();
        let screen = render_to_string(&app, 160, 16);
        assert!(!screen.contains("Backpressure Without Tears"));
        assert!(screen.contains("Reading Flame Graphs"));
        assert!(screen.contains("2-4 of 7"));
    }

    #[test]
    fn test_dot_per_stop() {
        let app = app(160);
        let screen = render_to_string(&app, 160, 16);
        assert_eq!(screen.matches('●').count(), 1);
        assert_eq!(screen.matches('○').count(), 4);
    }

    #[test]
    fn test_empty_section() {
        let mut app = app(80);
        let mut portfolio = Portfolio::bundled().unwrap();
        portfolio.blog.clear();
        app.set_portfolio(portfolio);
        let screen = render_to_string(&app, 80, 10);
        assert!(screen.contains("Nothing here yet."));
    }
}
