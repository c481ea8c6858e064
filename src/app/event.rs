/// A request to open a buffer, broadcast to every registered open handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    pub full_name: String,
    /// Open in the background without switching the current window to it.
    pub noswitch: bool,
}

impl OpenRequest {
    pub fn new(full_name: impl Into<String>, noswitch: bool) -> Self {
        Self { full_name: full_name.into(), noswitch }
    }
}

/// Notifications the host delivers to the add-on.
#[derive(Debug)]
pub enum HostEvent {
    /// `/buffer_open <args>` was run by the user.
    Command {
        args: String,
    },

    /// The host is about to close a buffer.
    BufferClosing {
        full_name: String,
    },

    /// Any host command is about to run (command-run interception point).
    CommandRun {
        command: String,
    },
}
