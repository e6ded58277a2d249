use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::super::app::App;

/// Static panel shown while the child process runs. Output is not
/// streamed; the panel stays put until the process exits.
pub(crate) fn render_running(frame: &mut Frame, area: Rect, app: &mut App) {
    let script_name = app
        .form_script
        .as_ref()
        .map(|script| script.name.as_str())
        .unwrap_or("<unknown>");

    let names = app.form_names();
    let arguments = if names.is_empty() {
        "-".to_string()
    } else {
        names
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let value = app.field_inputs.get(idx).map(String::as_str).unwrap_or("");
                format!("-{} {}", name, value)
            })
            .collect::<Vec<_>>()
            .join(" ")
    };

    let lines = vec![
        Line::from("Running playbook with elevated privileges..."),
        Line::from(""),
        Line::from(format!("Playbook: {}", script_name)),
        Line::from(format!("Arguments: {}", arguments)),
        Line::from(""),
        Line::from("Output appears when the process exits."),
    ];
    let block = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Executing"))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(block, area);
}
