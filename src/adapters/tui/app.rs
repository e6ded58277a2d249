use crate::domain::{ArgumentSchema, ArgumentValues, Script};
use crate::history::HistoryEntry;
use crate::playbooks::Playbooks;
use crate::use_cases::LaunchService;
use ratatui::widgets::{ListState, TableState};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Screen {
    ScriptSelect,
    ArgumentForm,
    History,
    Running,
    RunResult,
    Error,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum HistoryFocus {
    List,
    Output,
}

#[derive(Debug, Clone)]
pub(crate) enum ExecutionStatus {
    Success,
    Failed(Option<i32>),
    Error,
}

/// A confirmed form, waiting for the event loop to execute it. Exactly one
/// run is in flight at a time; the loop takes this between draws.
pub(crate) struct PendingRun {
    pub(crate) script: Script,
    pub(crate) schema: ArgumentSchema,
    pub(crate) values: ArgumentValues,
}

pub(crate) struct App<'a> {
    service: &'a LaunchService,
    pub(crate) playbooks: Playbooks,
    pub(crate) scripts: Vec<Script>,
    pub(crate) list_state: ListState,
    selection: usize,
    pub(crate) schema_preview: Option<Result<ArgumentSchema, String>>,
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) history_state: TableState,
    history_selection: usize,
    pub(crate) history_focus: HistoryFocus,
    pub(crate) screen: Screen,
    pub(crate) form_script: Option<Script>,
    form_schema: Option<ArgumentSchema>,
    pub(crate) field_index: usize,
    pub(crate) field_inputs: Vec<String>,
    pub(crate) error: Option<String>,
    pub(crate) pending: Option<PendingRun>,
    pub(crate) should_quit: bool,
    pub(crate) run_output_scroll: u16,
}

impl<'a> App<'a> {
    pub(crate) fn new(
        service: &'a LaunchService,
        playbooks: Playbooks,
        scripts: Vec<Script>,
        history: Vec<HistoryEntry>,
    ) -> Self {
        let mut list_state = ListState::default();
        if !scripts.is_empty() {
            list_state.select(Some(0));
        }
        let mut history_state = TableState::default();
        if !history.is_empty() {
            history_state.select(Some(0));
        }
        let mut app = Self {
            service,
            playbooks,
            scripts,
            list_state,
            selection: 0,
            schema_preview: None,
            history,
            history_state,
            history_selection: 0,
            history_focus: HistoryFocus::List,
            screen: Screen::ScriptSelect,
            form_script: None,
            form_schema: None,
            field_index: 0,
            field_inputs: Vec::new(),
            error: None,
            pending: None,
            should_quit: false,
            run_output_scroll: 0,
        };
        app.update_schema_preview();
        app
    }

    pub(crate) fn service(&self) -> &LaunchService {
        self.service
    }

    pub(crate) fn selected_script(&self) -> Option<&Script> {
        self.scripts.get(self.selection)
    }

    pub(crate) fn move_selection(&mut self, delta: isize) {
        if self.scripts.is_empty() {
            return;
        }
        let len = self.scripts.len() as isize;
        let mut new_index = self.selection as isize + delta;
        if new_index < 0 {
            new_index = 0;
        } else if new_index >= len {
            new_index = len - 1;
        }
        self.selection = new_index as usize;
        self.list_state.select(Some(self.selection));
        self.update_schema_preview();
    }

    /// Opens the argument form for the selected playbook, or queues the run
    /// directly when its schema declares no arguments.
    pub(crate) fn enter_selected(&mut self) {
        let script = match self.selected_script() {
            Some(script) => script.clone(),
            None => return,
        };

        match self.service.resolve_schema(&script) {
            Ok(schema) if schema.is_empty() => {
                self.form_script = Some(script.clone());
                self.form_schema = Some(schema.clone());
                self.field_inputs.clear();
                self.pending = Some(PendingRun {
                    script,
                    schema,
                    values: ArgumentValues::new(),
                });
            }
            Ok(schema) => {
                self.form_script = Some(script);
                self.field_index = 0;
                self.field_inputs = vec![String::new(); schema.len()];
                self.form_schema = Some(schema);
                self.error = None;
                self.screen = Screen::ArgumentForm;
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.screen = Screen::Error;
            }
        }
    }

    pub(crate) fn form_names(&self) -> &[String] {
        self.form_schema
            .as_ref()
            .map(|schema| schema.names())
            .unwrap_or(&[])
    }

    pub(crate) fn move_field_selection(&mut self, delta: isize) {
        let len = self.form_names().len() as isize;
        if len == 0 {
            return;
        }
        let mut new_index = self.field_index as isize + delta;
        while new_index < 0 {
            new_index += len;
        }
        while new_index >= len {
            new_index -= len;
        }
        self.field_index = new_index as usize;
    }

    pub(crate) fn append_field_char(&mut self, ch: char) {
        if let Some(value) = self.field_inputs.get_mut(self.field_index) {
            value.push(ch);
        }
    }

    pub(crate) fn pop_field_char(&mut self) {
        if let Some(value) = self.field_inputs.get_mut(self.field_index) {
            value.pop();
        }
    }

    /// Confirms the form. Inputs are taken verbatim, empty strings
    /// included; validation is the playbook's job.
    pub(crate) fn submit_form(&mut self) {
        let (script, schema) = match (self.form_script.clone(), self.form_schema.clone()) {
            (Some(script), Some(schema)) => (script, schema),
            _ => return,
        };

        let values: ArgumentValues = schema
            .names()
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let input = self.field_inputs.get(idx).cloned().unwrap_or_default();
                (name.clone(), input)
            })
            .collect();

        self.pending = Some(PendingRun {
            script,
            schema,
            values,
        });
    }

    /// Cancels whatever was in flight and returns to the list. Nothing is
    /// spawned from a cancelled form.
    pub(crate) fn back_to_script_select(&mut self) {
        self.screen = Screen::ScriptSelect;
        self.form_script = None;
        self.form_schema = None;
        self.field_index = 0;
        self.field_inputs.clear();
        self.error = None;
        self.pending = None;
    }

    pub(crate) fn refresh_scripts(&mut self) {
        match self.service.list_scripts() {
            Ok(scripts) => {
                self.scripts = scripts;
                self.selection = 0;
                if self.scripts.is_empty() {
                    self.list_state.select(None);
                } else {
                    self.list_state.select(Some(0));
                }
                self.update_schema_preview();
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.screen = Screen::Error;
            }
        }
    }

    pub(crate) fn move_history_selection(&mut self, delta: isize) {
        if self.history.is_empty() {
            return;
        }
        let len = self.history.len() as isize;
        let mut new_index = self.history_selection as isize + delta;
        if new_index < 0 {
            new_index = 0;
        } else if new_index >= len {
            new_index = len - 1;
        }
        self.history_selection = new_index as usize;
        self.history_state.select(Some(self.history_selection));
        self.reset_run_output_scroll();
    }

    pub(crate) fn add_history_entry(&mut self, entry: HistoryEntry) {
        self.history.insert(0, entry);
        self.history_selection = 0;
        self.history_state.select(Some(0));
    }

    pub(crate) fn current_history_entry(&self) -> Option<&HistoryEntry> {
        self.history.get(self.history_selection)
    }

    pub(crate) fn reset_run_output_scroll(&mut self) {
        self.run_output_scroll = 0;
    }

    pub(crate) fn scroll_run_output(&mut self, delta: i16) {
        if delta > 0 {
            self.run_output_scroll = self.run_output_scroll.saturating_add(delta as u16);
        } else if delta < 0 {
            let amount = (-delta) as u16;
            self.run_output_scroll = self.run_output_scroll.saturating_sub(amount);
        }
    }

    // The preview pane re-reads the argument document on every selection
    // change, so edits show up without leaving the list.
    fn update_schema_preview(&mut self) {
        self.schema_preview = self
            .selected_script()
            .map(|script| self.service.resolve_schema(script).map_err(|err| err.to_string()));
    }
}

impl ExecutionStatus {
    pub(crate) fn from_history(entry: &HistoryEntry) -> Self {
        if entry.error.is_some() {
            ExecutionStatus::Error
        } else if entry.success {
            ExecutionStatus::Success
        } else {
            ExecutionStatus::Failed(entry.exit_code)
        }
    }
}
