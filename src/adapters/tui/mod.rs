mod app;
mod events;
mod theme;
mod ui;
mod widgets;

use crate::banner;
use crate::history;
use crate::playbooks::Playbooks;
use crate::use_cases::LaunchService;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::error::Error;
use std::io;
use std::time::Duration;

use app::{App, Screen};
use events::handle_key_event;
use ui::{render_loading, render_ui};

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn Error>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    Ok(terminal)
}

pub fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn Error>> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    service: &LaunchService,
    playbooks: Playbooks,
) -> Result<(), Box<dyn Error>> {
    let art = banner::load_banner(playbooks.banner_path());
    terminal.draw(|frame| render_loading(frame, art.as_deref()))?;

    // A missing playbook directory is fatal: there is no list to show.
    let scripts = service.list_scripts()?;
    let history_entries = history::load_entries(&playbooks).unwrap_or_default();
    let mut app = App::new(service, playbooks, scripts, history_entries);

    loop {
        terminal.draw(|frame| render_ui(frame, &mut app))?;

        if event::poll(Duration::from_millis(200))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(&mut app, key)
                }
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }

        // One run at a time: the confirmed form blocks the loop here until
        // the child exits. Spawn failures and nonzero exits are recorded
        // and shown; neither takes the launcher down.
        if let Some(run) = app.pending.take() {
            app.screen = Screen::Running;
            terminal.draw(|frame| render_ui(frame, &mut app))?;
            let entry = match app.service().execute(&run.script, &run.schema, &run.values) {
                Ok((command, output)) => {
                    history::run_entry(&run.script.name, command.tokens().to_vec(), output)
                }
                Err(err) => history::error_entry(&run.script.name, Vec::new(), err.to_string()),
            };
            let _ = history::record_entry(&app.playbooks, &entry);
            app.add_history_entry(entry);
            app.back_to_script_select();
            app.reset_run_output_scroll();
            app.screen = Screen::RunResult;
        }
    }
}
