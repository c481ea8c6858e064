//! Buffers with fixed full names, each opened by a known plugin command.

use crate::app::action::Action;
use crate::app::dispatch::{OpenHandler, Outcome, PRIORITY_RESOLVE};
use crate::app::event::OpenRequest;
use crate::app::host::Host;

/// `(full name, plugin, command)`
pub const TABLE: &[(&str, &str, &str)] = &[
    ("core.secured_data", "core", "/secure"),
    ("core.color", "core", "/color"),
    ("fset.fset", "fset", "/fset"),
    ("irc.irc_raw", "irc", "/server raw"),
    ("relay.relay.list", "relay", "/relay"),
    ("relay.relay_raw", "relay", "/relay raw"),
    ("script.scripts", "script", "/script"),
    ("trigger.monitor", "trigger", "/trigger monitor"),
    ("xfer.xfer.list", "xfer", "/xfer"),
];

/// Look up the `(plugin, command)` that opens `full_name`.
pub fn lookup(full_name: &str) -> Option<(&'static str, &'static str)> {
    TABLE
        .iter()
        .find(|(name, _, _)| *name == full_name)
        .map(|&(_, plugin, command)| (plugin, command))
}

pub struct FixedTable;

impl OpenHandler for FixedTable {
    fn name(&self) -> &'static str {
        "table"
    }

    fn priority(&self) -> i32 {
        PRIORITY_RESOLVE
    }

    fn handle(&self, request: &OpenRequest, _: &dyn Host, actions: &mut Vec<Action>) -> Outcome {
        match lookup(&request.full_name) {
            Some((plugin, command)) => {
                actions.push(Action::command(plugin, command));
                Outcome::Eat
            }
            None => Outcome::Pass,
        }
    }
}
