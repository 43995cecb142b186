use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

/// Profile, bio and links
pub struct AboutWidget;

impl AboutWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let profile = &app.portfolio.profile;

        let mut lines = vec![
            Line::from(Span::styled(
                profile.name.as_str(),
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(profile.headline.as_str(), Style::default().fg(theme.accent))),
        ];

        let contact: Vec<&str> = [profile.location.as_deref(), profile.email.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if !contact.is_empty() {
            lines.push(Line::from(Span::styled(contact.join(" · "), Style::default().fg(theme.muted))));
        }

        for paragraph in &profile.bio {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(paragraph.as_str(), Style::default().fg(theme.fg1))));
        }

        if !profile.links.is_empty() {
            lines.push(Line::default());
            for link in &profile.links {
                lines.push(Line::from(vec![
                    Span::styled(format!("{:<10}", link.label), Style::default().fg(theme.info)),
                    Span::styled(link.url.as_str(), Style::default().fg(theme.muted)),
                ]));
            }
        }

        let block = Block::default()
            .title(" About ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(theme.bg0));

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

/// Leadership roles as a vertical timeline
pub struct LeadershipWidget;

impl LeadershipWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let roles = &app.portfolio.leadership;

        let mut lines = Vec::new();
        for (i, role) in roles.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled("◆ ", Style::default().fg(theme.accent)),
                Span::styled(
                    role.role.as_str(),
                    Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" · {}", role.organization), Style::default().fg(theme.fg1)),
            ]));
            lines.push(Line::from(vec![
                Span::styled("│ ", Style::default().fg(theme.bg2)),
                Span::styled(role.period.as_str(), Style::default().fg(theme.muted)),
            ]));
            for highlight in &role.highlights {
                lines.push(Line::from(vec![
                    Span::styled("│   ", Style::default().fg(theme.bg2)),
                    Span::styled(format!("- {}", highlight), Style::default().fg(theme.fg1)),
                ]));
            }
            if i + 1 < roles.len() {
                lines.push(Line::from(Span::styled("│", Style::default().fg(theme.bg2))));
            }
        }

        if lines.is_empty() {
            lines.push(Line::from(Span::styled("Nothing here yet.", Style::default().fg(theme.muted))));
        }

        let block = Block::default()
            .title(" Leadership ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(theme.bg0));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
