//! Port traits defining external boundaries.
//!
//! The shell is the only boundary: everything that leaves the process goes
//! through [`ShellExecutor`]. Implementations live in `src/adapters/`.

pub mod shell;

pub use shell::{ShellExecutor, ShellOutput};
