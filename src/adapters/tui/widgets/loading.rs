use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::banner::FALLBACK_NOTICE;

/// Startup screen: the operator's ASCII-art banner when the asset exists,
/// a plain notice otherwise.
pub(crate) fn render_loading(frame: &mut Frame, area: Rect, banner: Option<&str>) {
    let lines: Vec<Line> = match banner {
        Some(art) => art.lines().map(|line| Line::from(line.to_string())).collect(),
        None => vec![
            Line::from("red2net"),
            Line::from(FALLBACK_NOTICE),
            Line::from(""),
            Line::from("Scanning playbooks..."),
        ],
    };
    let block = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Loading"))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(block, area);
}
