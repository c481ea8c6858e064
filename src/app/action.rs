/// Output the add-on asks the host to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Run `command` in the context of `plugin`, i.e. `/command <plugin> <command>`.
    Command { plugin: String, command: String },
    /// Print a line in the core buffer.
    Print { error: bool, text: String },
}

impl Action {
    pub fn command(plugin: &str, command: impl Into<String>) -> Self {
        Action::Command { plugin: plugin.to_string(), command: command.into() }
    }

    /// The string handed to the host command interpreter, if any.
    pub fn host_command(&self) -> Option<String> {
        match self {
            Action::Command { plugin, command } => {
                Some(format!("/command {} {}", plugin, command))
            }
            Action::Print { .. } => None,
        }
    }
}

/// Status returned to the host from every callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnCode {
    Ok,
    Error,
}
