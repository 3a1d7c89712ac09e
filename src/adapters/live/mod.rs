//! Live adapters for real external interactions.

pub mod shell;

pub use shell::LiveShellExecutor;
