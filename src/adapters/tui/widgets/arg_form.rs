use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::super::app::App;
use super::super::theme;

pub(crate) fn render_arg_form(frame: &mut Frame, area: Rect, app: &mut App) {
    let script_name = app
        .form_script
        .as_ref()
        .map(|script| script.name.as_str())
        .unwrap_or("<unknown>");

    let label_style = Style::default().fg(Color::Gray);
    let header_lines = vec![
        Line::from(vec![
            Span::styled("Playbook: ", label_style),
            Span::raw(script_name.to_string()),
        ]),
        Line::from(Span::styled(
            "Values are passed verbatim; empty is allowed.",
            label_style,
        )),
    ];
    let header_height = header_lines.len() as u16 + 2;
    let header = Paragraph::new(header_lines)
        .block(Block::default().borders(Borders::ALL).title("Run"))
        .wrap(Wrap { trim: true });

    let footer = Paragraph::new("Tab/Shift+Tab to move, Enter to run, Esc to cancel")
        .style(Style::default().fg(Color::Gray));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(header, chunks[0]);
    render_argument_boxes(frame, chunks[1], app);
    frame.render_widget(footer, chunks[2]);
}

fn render_argument_boxes(frame: &mut Frame, area: Rect, app: &App) {
    let outer = Block::default().borders(Borders::ALL).title("Arguments");
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let names = app.form_names();
    if names.is_empty() {
        let empty = Paragraph::new("No arguments declared.").wrap(Wrap { trim: true });
        frame.render_widget(empty, inner);
        return;
    }

    let box_height = 3u16;
    let max_boxes = (inner.height / box_height).max(1) as usize;
    let total = names.len();
    let mut start = if app.field_index >= max_boxes {
        app.field_index + 1 - max_boxes
    } else {
        0
    };
    if total > max_boxes {
        start = start.min(total - max_boxes);
    }
    let end = (start + max_boxes).min(total);

    let mut y = inner.y;
    for idx in start..end {
        let name = &names[idx];
        let is_selected = idx == app.field_index;
        let border_style = if is_selected {
            Style::default()
                .fg(theme::brand_accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let value = app.field_inputs.get(idx).map(String::as_str).unwrap_or("");
        let value_span = if value.is_empty() {
            Span::styled("<empty>", Style::default().fg(Color::DarkGray))
        } else if is_selected {
            Span::styled(value.to_string(), Style::default().fg(Color::Cyan))
        } else {
            Span::raw(value.to_string())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("-{}", name))
            .border_style(border_style);
        let rect = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: box_height,
        };
        let paragraph = Paragraph::new(Line::from(value_span))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, rect);
        y = y.saturating_add(box_height);
    }
}
