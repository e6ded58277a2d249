pub mod process_runner;
pub mod prompt_collector;
pub mod registry;
pub mod schema_store;
pub mod system_checks;
pub mod tui;
