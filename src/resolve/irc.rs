use crate::app::action::Action;
use crate::app::dispatch::{OpenHandler, Outcome, PRIORITY_RESOLVE};
use crate::app::event::OpenRequest;
use crate::app::host::Host;
use crate::irc::names::IrcBuffer;

/// Opens IRC server, channel and query buffers through the IRC plugin.
pub struct IrcPatterns;

impl OpenHandler for IrcPatterns {
    fn name(&self) -> &'static str {
        "irc"
    }

    fn priority(&self) -> i32 {
        PRIORITY_RESOLVE
    }

    fn handle(&self, request: &OpenRequest, _: &dyn Host, actions: &mut Vec<Action>) -> Outcome {
        match IrcBuffer::parse(&request.full_name) {
            Some(buffer) => {
                actions.push(Action::command("irc", buffer.open_command(request.noswitch)));
                Outcome::Eat
            }
            None => Outcome::Pass,
        }
    }
}
