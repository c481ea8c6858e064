use crate::app::action::{Action, ReturnCode};
use crate::app::event::{HostEvent, OpenRequest};
use crate::app::host::Host;
use crate::app::state::AddonState;
use crate::command::{self, ParsedCommand};
use crate::error::OpenError;
use crate::logging;
use tracing::{debug, warn};

/// What a host callback hands back: its status and the actions to perform.
#[derive(Debug)]
pub struct Reply {
    pub code: ReturnCode,
    pub actions: Vec<Action>,
}

impl Reply {
    fn ok(actions: Vec<Action>) -> Self {
        Self { code: ReturnCode::Ok, actions }
    }

    fn error(err: OpenError) -> Self {
        warn!(%err, "command failed");
        Self { code: ReturnCode::Error, actions: vec![logging::error_line(err)] }
    }
}

pub fn handle_event(state: &mut AddonState, host: &dyn Host, event: HostEvent) -> Reply {
    match event {
        HostEvent::Command { args } => handle_command(state, host, &args),
        HostEvent::BufferClosing { full_name } => {
            debug!(%full_name, "buffer closing");
            state.closed.push(full_name);
            Reply::ok(vec![])
        }
        HostEvent::CommandRun { command } => handle_command_run(state, host, &command),
    }
}

/// Broadcast a single open request.
pub fn open(state: &AddonState, host: &dyn Host, request: &OpenRequest) -> Vec<Action> {
    let dispatched = state.dispatcher.dispatch(request, host);
    debug!(full_name = %request.full_name, claimed_by = ?dispatched.claimed_by, "dispatched");
    dispatched.actions
}

fn handle_command(state: &mut AddonState, host: &dyn Host, args: &str) -> Reply {
    let parsed = match command::parse_command(args) {
        Ok(parsed) => parsed,
        Err(err) => return Reply::error(err),
    };

    match parsed {
        ParsedCommand::Open { full_name, noswitch } => {
            Reply::ok(open(state, host, &OpenRequest::new(full_name, noswitch)))
        }
        ParsedCommand::ReopenClosed { noswitch } => match state.closed.pop() {
            Some(full_name) => Reply::ok(open(state, host, &OpenRequest::new(full_name, noswitch))),
            None => {
                warn!("closed buffer history is empty");
                Reply::ok(vec![logging::error_line(OpenError::EmptyHistory)])
            }
        },
        ParsedCommand::ListClosed => {
            if state.closed.is_empty() {
                return Reply::ok(vec![logging::info_line(OpenError::EmptyHistory)]);
            }
            let mut actions =
                vec![logging::info_line(format!("closed buffers ({}):", state.closed.len()))];
            actions.extend(
                state
                    .closed
                    .iter_recent()
                    .enumerate()
                    .map(|(i, name)| logging::info_line(format!("  {}. {}", i + 1, name))),
            );
            Reply::ok(actions)
        }
    }
}

/// Command-run interception. Never eats the host command.
fn handle_command_run(state: &AddonState, host: &dyn Host, command: &str) -> Reply {
    let Some(layout) = command::parse_layout_apply(command) else {
        return Reply::ok(vec![]);
    };
    if !state.options.layout_apply {
        debug!(%layout, "layout reopening disabled");
        return Reply::ok(vec![]);
    }
    let Some(buffers) = host.layout_buffers(&layout) else {
        warn!(%layout, "layout not found");
        return Reply::ok(vec![logging::error_line(OpenError::UnknownLayout(layout))]);
    };

    let mut actions = Vec::new();
    for full_name in buffers.into_iter().filter(|name| !host.buffer_exists(name)) {
        actions.extend(open(state, host, &OpenRequest::new(full_name, true)));
    }
    Reply::ok(actions)
}
