//! IPC message protocol for split-normal editing
//!
//! Defines the commands and selection context a mesh editing host sends to
//! the normal editing core.

pub mod commands;
pub mod error;
pub mod messages;

pub use commands::*;
pub use error::IpcError;
pub use messages::NormalEditRequest;
