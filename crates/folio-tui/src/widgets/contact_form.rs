use folio_core::contact::ContactField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::form::FormStatus;

pub struct ContactFormWidget;

impl ContactFormWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let form = &app.contact;

        let block = Block::default()
            .title(" Contact ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Name
                Constraint::Length(4), // Email
                Constraint::Length(4), // Phone
                Constraint::Min(5),    // Message
                Constraint::Length(1), // Status
            ])
            .split(inner);

        for (field, chunk) in ContactField::ALL.iter().zip(chunks.iter()) {
            let focused = app.is_input_mode() && form.focused == *field;
            let error = form.error_for(*field);

            let border_color = if error.is_some() {
                theme.error
            } else if focused {
                theme.accent
            } else {
                theme.bg2
            };

            let label = match field {
                ContactField::Phone => format!(" {} (optional) ", field.label()),
                _ => format!(" {} ", field.label()),
            };

            let mut value = form.value(*field).to_string();
            if focused && !form.is_sending() {
                value.push('▏');
            }

            let mut field_block = Block::default()
                .title(Span::styled(label, Style::default().fg(theme.fg1)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color));
            if let Some(error) = error {
                field_block = field_block.title_bottom(Span::styled(
                    format!(" {} ", error),
                    Style::default().fg(theme.error),
                ));
            }

            let paragraph = Paragraph::new(Span::styled(value, Style::default().fg(theme.fg0)))
                .block(field_block)
                .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, *chunk);
        }

        let status = match &form.status {
            FormStatus::Editing if !app.config.contact.is_configured() => Line::from(Span::styled(
                "Contact relay is not configured; set [contact] in config.toml to send.",
                Style::default().fg(theme.warning),
            )),
            FormStatus::Editing => Line::from(Span::styled(
                "Enter to send, Tab to move between fields, Esc to leave.",
                Style::default().fg(theme.muted),
            )),
            FormStatus::Sending => Line::from(Span::styled(
                "Sending...",
                Style::default().fg(theme.info).add_modifier(Modifier::ITALIC),
            )),
            FormStatus::Sent => Line::from(Span::styled(
                "Message sent. Thanks for reaching out!",
                Style::default().fg(theme.success),
            )),
            FormStatus::Failed(error) => Line::from(Span::styled(
                format!("Could not send: {}", error),
                Style::default().fg(theme.error),
            )),
        };
        frame.render_widget(Paragraph::new(status), chunks[4]);
    }
}
