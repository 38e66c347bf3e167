pub mod client;
pub mod config;
pub mod error;
pub mod field;
pub mod fields;
pub mod form;
pub mod keys;
pub mod mask;
pub mod orchestrator;
pub mod protocol;
pub mod snapshot;
pub mod validator;
// cmd, reports and the terminal view belong to the binary (main.rs).
