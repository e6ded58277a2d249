use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use super::super::theme;
use crate::domain::Script;

pub(crate) fn render_scripts(
    frame: &mut Frame,
    area: Rect,
    scripts: &[Script],
    list_state: &mut ListState,
) {
    if scripts.is_empty() {
        let empty_lines = vec![
            Line::from("No playbooks found."),
            Line::from("Add .py, .sh or .c files and press r to refresh."),
        ];
        let empty = Paragraph::new(empty_lines)
            .block(Block::default().borders(Borders::ALL).title("Playbooks"))
            .wrap(Wrap { trim: true });
        frame.render_widget(empty, area);
    } else {
        let items: Vec<ListItem> = scripts
            .iter()
            .map(|script| {
                ListItem::new(Line::from(vec![
                    Span::raw(script.name.clone()),
                    Span::styled(
                        format!("  ({})", script.kind.label()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Playbooks"))
            .highlight_style(theme::selection_style())
            .highlight_symbol(theme::selection_symbol_str());

        frame.render_stateful_widget(list, area, list_state);
    }
}
