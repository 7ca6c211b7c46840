//! IPC message protocol for Skinloader
//!
//! Defines all message types exchanged between a front end (the Bevy shell,
//! or a webview) and the editor core. Messages serialize as
//! `{"type": ..., "data": ...}` JSON.

pub mod commands;
pub mod error;
pub mod messages;

pub use commands::*;
pub use error::IpcError;
pub use messages::*;
