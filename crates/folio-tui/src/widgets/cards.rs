use folio_core::content::{Portfolio, Section};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::text::{level_bar, truncate_to_width};
use crate::theme::Theme;

const BAR_CELLS: usize = 10;

/// Render one carousel card for `section[index]`
pub fn render_card(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    portfolio: &Portfolio,
    section: Section,
    index: usize,
    leading: bool,
) {
    let border_style = if leading {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.muted)
    };

    let title_width = area.width.saturating_sub(4) as usize;
    let title = portfolio.title_at(section, index).unwrap_or_default();

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", truncate_to_width(title, title_width)),
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(theme.bg1));

    let inner_width = area.width.saturating_sub(2) as usize;
    let lines = card_lines(theme, portfolio, section, index, inner_width);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn card_lines<'a>(
    theme: &Theme,
    portfolio: &'a Portfolio,
    section: Section,
    index: usize,
    width: usize,
) -> Vec<Line<'a>> {
    let text = Style::default().fg(theme.fg1);
    let muted = Style::default().fg(theme.muted);
    let accent = Style::default().fg(theme.accent);

    match section {
        Section::Skills => {
            let Some(category) = portfolio.skills.get(index) else {
                return Vec::new();
            };
            let label_width = width.saturating_sub(BAR_CELLS + 5).max(1);
            category
                .skills
                .iter()
                .map(|skill| {
                    Line::from(vec![
                        Span::styled(
                            format!("{:<label_width$}", truncate_to_width(&skill.name, label_width)),
                            text,
                        ),
                        Span::styled(level_bar(skill.level, BAR_CELLS), accent),
                        Span::styled(format!(" {:>3}", skill.level), muted),
                    ])
                })
                .collect()
        }
        Section::Projects => {
            let Some(project) = portfolio.projects.get(index) else {
                return Vec::new();
            };
            let mut lines = vec![Line::from(Span::styled(project.summary.as_str(), text))];
            if !project.tech.is_empty() {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(project.tech.join(" · "), accent)));
            }
            if let Some(url) = project.url.as_ref().or(project.repository.as_ref()) {
                lines.push(Line::from(Span::styled(url.to_string(), muted)));
            }
            lines
        }
        Section::Certifications => {
            let Some(cert) = portfolio.certifications.get(index) else {
                return Vec::new();
            };
            let mut lines = vec![
                Line::from(Span::styled(cert.issuer.as_str(), text)),
                Line::from(Span::styled(
                    format!("Issued {}", cert.issued.format("%b %Y")),
                    muted,
                )),
            ];
            if cert.credential_url.is_some() {
                lines.push(Line::from(Span::styled("Credential available (o)", accent)));
            }
            lines
        }
        Section::Testimonials => {
            let Some(testimonial) = portfolio.testimonials.get(index) else {
                return Vec::new();
            };
            let attribution = match &testimonial.company {
                Some(company) => format!("- {}, {} @ {}", testimonial.author, testimonial.role, company),
                None => format!("- {}, {}", testimonial.author, testimonial.role),
            };
            vec![
                Line::from(Span::styled(
                    format!("\u{201c}{}\u{201d}", testimonial.quote),
                    text.add_modifier(Modifier::ITALIC),
                )),
                Line::default(),
                Line::from(Span::styled(attribution, muted)),
            ]
        }
        Section::Blog => {
            let Some(post) = portfolio.blog.get(index) else {
                return Vec::new();
            };
            let mut meta = post.published.format("%d %b %Y").to_string();
            if post.read_minutes > 0 {
                meta.push_str(&format!(" · {} min read", post.read_minutes));
            }
            let mut lines = vec![
                Line::from(Span::styled(meta, muted)),
                Line::default(),
                Line::from(Span::styled(post.summary.as_str(), text)),
            ];
            if !post.tags.is_empty() {
                let tags: Vec<String> = post.tags.iter().map(|t| format!("#{t}")).collect();
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(tags.join(" "), accent)));
            }
            lines
        }
        Section::About | Section::Leadership | Section::Contact => Vec::new(),
    }
}
