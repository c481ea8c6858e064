use crate::app::action::Action;
use crate::app::dispatch::{OpenHandler, Outcome, PRIORITY_UNHANDLED};
use crate::app::event::OpenRequest;
use crate::app::host::Host;
use crate::error::OpenError;
use crate::logging;
use tracing::warn;

/// Last in line: reaching it means nothing above could open the buffer.
pub struct Unhandled;

impl OpenHandler for Unhandled {
    fn name(&self) -> &'static str {
        "unhandled"
    }

    fn priority(&self) -> i32 {
        PRIORITY_UNHANDLED
    }

    fn handle(&self, request: &OpenRequest, _: &dyn Host, actions: &mut Vec<Action>) -> Outcome {
        let err = OpenError::Unhandled(request.full_name.clone());
        warn!(full_name = %request.full_name, "unhandled open request");
        actions.push(logging::error_line(&err));
        Outcome::Pass
    }
}
