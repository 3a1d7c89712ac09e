//! Adapters implementing the shell port.

pub mod live;
pub mod recording;
pub mod replaying;
