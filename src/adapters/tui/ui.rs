use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::app::{App, Screen};
use super::theme::{BRAND_GRADIENT_END, BRAND_GRADIENT_START};
use super::widgets::{
    arg_form, error as error_widget, history, loading as loading_widget, run_result, running,
    schema, scripts,
};

pub(crate) fn render_ui(frame: &mut Frame, app: &mut App) {
    match app.screen {
        Screen::ScriptSelect => render_script_select(frame, app),
        Screen::ArgumentForm => arg_form::render_arg_form(frame, frame.size(), app),
        Screen::History => history::render_history(frame, frame.size(), app),
        Screen::Running => running::render_running(frame, frame.size(), app),
        Screen::RunResult => run_result::render_run_result(frame, frame.size(), app),
        Screen::Error => render_error(frame, app),
    }
}

pub(crate) fn render_loading(frame: &mut Frame, banner: Option<&str>) {
    loading_widget::render_loading(frame, frame.size(), banner);
}

fn render_script_select(frame: &mut Frame, app: &mut App) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(red2net_title_line());
    let inner = outer.inner(frame.size());
    frame.render_widget(outer, frame.size());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(inner);

    let info = Paragraph::new(vec![Line::from(vec![
        Span::styled("Playbooks: ", Style::default().fg(Color::Gray)),
        Span::raw(app.playbooks.root().display().to_string()),
    ])])
    .block(Block::default().borders(Borders::ALL).title("Directory"));
    frame.render_widget(info, chunks[0]);

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    scripts::render_scripts(frame, body_chunks[0], &app.scripts, &mut app.list_state);
    let schema_title = schema_title(app);
    schema::render_schema_preview(frame, body_chunks[1], &schema_title, app.schema_preview.as_ref());

    let footer_text = if app.scripts.is_empty() {
        "Directory is empty. r refresh, h history, q quit"
    } else {
        "Up/Down move, Enter run, r refresh, h history, q quit"
    };
    let footer = Paragraph::new(footer_text).style(Style::default().fg(Color::Gray));
    frame.render_widget(footer, chunks[2]);
}

fn render_error(frame: &mut Frame, app: &mut App) {
    let message = app.error.as_deref().unwrap_or("Unknown error");
    error_widget::render_error(frame, frame.size(), message);
}

fn schema_title(app: &App) -> String {
    match app.selected_script() {
        Some(script) => format!("Arguments: {}", script.name),
        None => "Arguments".to_string(),
    }
}

fn red2net_title_line() -> Line<'static> {
    gradient_line("red2net", BRAND_GRADIENT_START, BRAND_GRADIENT_END)
}

fn gradient_line(text: &str, start: (u8, u8, u8), end: (u8, u8, u8)) -> Line<'static> {
    let len = text.chars().count().max(1);
    let spans = text
        .chars()
        .enumerate()
        .map(|(idx, ch)| {
            let t = if len <= 1 {
                0.0
            } else {
                idx as f32 / (len - 1) as f32
            };
            let color = lerp_color(start, end, t);
            Span::styled(ch.to_string(), Style::default().fg(color).add_modifier(Modifier::BOLD))
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

fn lerp_color(start: (u8, u8, u8), end: (u8, u8, u8), t: f32) -> Color {
    let lerp = |a, b| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color::Rgb(lerp(start.0, end.0), lerp(start.1, end.1), lerp(start.2, end.2))
}
