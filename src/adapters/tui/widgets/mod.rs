pub(crate) mod arg_form;
pub(crate) mod error;
pub(crate) mod history;
pub(crate) mod loading;
pub(crate) mod run_result;
pub(crate) mod running;
pub(crate) mod schema;
pub(crate) mod scripts;
