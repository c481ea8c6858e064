use crate::app::action::Action;
use crate::app::dispatch::{OpenHandler, Outcome, PRIORITY_OPENED};
use crate::app::event::OpenRequest;
use crate::app::host::Host;

/// Claims requests for buffers the host already has open, doing nothing.
pub struct AlreadyOpen;

impl OpenHandler for AlreadyOpen {
    fn name(&self) -> &'static str {
        "opened"
    }

    fn priority(&self) -> i32 {
        PRIORITY_OPENED
    }

    fn handle(&self, request: &OpenRequest, host: &dyn Host, _: &mut Vec<Action>) -> Outcome {
        if host.buffer_exists(&request.full_name) {
            Outcome::Eat
        } else {
            Outcome::Pass
        }
    }
}
