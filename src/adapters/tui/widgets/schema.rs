use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::domain::ArgumentSchema;

/// Right-hand pane of the selection screen: the argument names the
/// selected playbook will be asked for, or why it cannot run.
pub(crate) fn render_schema_preview(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    preview: Option<&Result<ArgumentSchema, String>>,
) {
    let lines = match preview {
        Some(Ok(schema)) if schema.is_empty() => {
            vec![Line::from(Span::styled(
                "No arguments. Enter runs it immediately.",
                Style::default().fg(Color::Gray),
            ))]
        }
        Some(Ok(schema)) => schema
            .names()
            .iter()
            .map(|name| {
                Line::from(vec![
                    Span::styled(format!("-{}", name), Style::default().fg(Color::Yellow)),
                    Span::styled(" <value>", Style::default().fg(Color::DarkGray)),
                ])
            })
            .collect(),
        Some(Err(message)) => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        ))],
        None => vec![Line::from(Span::styled(
            "Nothing selected.",
            Style::default().fg(Color::Gray),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
