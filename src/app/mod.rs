//! Core add-on logic: state, host events, open-request dispatch.

pub mod action;
pub mod dispatch;
pub mod event;
pub mod handler;
pub mod history;
pub mod host;
pub mod state;

/// Prefix of every user-visible line.
pub const ADDON_NAME: &str = "buffer_open";
