//! Priority-ordered broadcast of open requests.
//!
//! Every handler sees the request in descending priority order until one of
//! them eats it. Handlers sharing a priority run in registration order.

use crate::app::action::Action;
use crate::app::event::OpenRequest;
use crate::app::host::Host;
use tracing::{debug, info};

/// Priority of the already-open check.
pub const PRIORITY_OPENED: i32 = 10000;
/// Priority of the built-in resolvers.
pub const PRIORITY_RESOLVE: i32 = 500;
/// Priority of the unhandled-request fallback.
pub const PRIORITY_UNHANDLED: i32 = 0;

/// What a handler did with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Not mine, keep going.
    Pass,
    /// Handled, stop propagation.
    Eat,
}

/// A participant in open-request resolution.
pub trait OpenHandler {
    /// Short name used in logs and in [`Dispatched::claimed_by`].
    fn name(&self) -> &'static str;

    fn priority(&self) -> i32;

    /// Inspect `request` and push any actions it needs into `actions`.
    fn handle(&self, request: &OpenRequest, host: &dyn Host, actions: &mut Vec<Action>)
        -> Outcome;
}

/// Result of broadcasting one request.
#[derive(Debug, Default)]
pub struct Dispatched {
    pub actions: Vec<Action>,
    pub claimed_by: Option<&'static str>,
}

#[derive(Default)]
pub struct Dispatcher {
    handlers: Vec<Box<dyn OpenHandler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `handler` after every handler with a priority greater than or
    /// equal to its own.
    pub fn register(&mut self, handler: Box<dyn OpenHandler>) {
        let priority = handler.priority();
        let pos = self
            .handlers
            .iter()
            .position(|h| h.priority() < priority)
            .unwrap_or(self.handlers.len());
        self.handlers.insert(pos, handler);
    }

    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    pub fn dispatch(&self, request: &OpenRequest, host: &dyn Host) -> Dispatched {
        let mut out = Dispatched::default();
        for handler in &self.handlers {
            match handler.handle(request, host, &mut out.actions) {
                Outcome::Pass => {
                    debug!(handler = handler.name(), full_name = %request.full_name, "passed");
                }
                Outcome::Eat => {
                    info!(handler = handler.name(), full_name = %request.full_name, "claimed");
                    out.claimed_by = Some(handler.name());
                    break;
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::host::fake::FakeHost;

    struct Probe {
        name: &'static str,
        priority: i32,
        eats: bool,
    }

    impl OpenHandler for Probe {
        fn name(&self) -> &'static str {
            self.name
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        fn handle(&self, _: &OpenRequest, _: &dyn Host, actions: &mut Vec<Action>) -> Outcome {
            actions.push(Action::Print { error: false, text: self.name.to_string() });
            if self.eats {
                Outcome::Eat
            } else {
                Outcome::Pass
            }
        }
    }

    fn probe(name: &'static str, priority: i32, eats: bool) -> Box<dyn OpenHandler> {
        Box::new(Probe { name, priority, eats })
    }

    fn visited(d: &Dispatched) -> Vec<String> {
        d.actions
            .iter()
            .filter_map(|a| match a {
                Action::Print { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_register_orders_by_descending_priority() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(probe("low", 0, false));
        dispatcher.register(probe("high", 10000, false));
        dispatcher.register(probe("mid-a", 500, false));
        dispatcher.register(probe("mid-b", 500, false));
        assert_eq!(dispatcher.handler_names(), vec!["high", "mid-a", "mid-b", "low"]);
    }

    #[test]
    fn test_first_eat_stops_propagation() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(probe("first", 10, false));
        dispatcher.register(probe("second", 5, true));
        dispatcher.register(probe("third", 1, true));

        let host = FakeHost::default();
        let out = dispatcher.dispatch(&OpenRequest::new("x.y", false), &host);
        assert_eq!(out.claimed_by, Some("second"));
        assert_eq!(visited(&out), vec!["first", "second"]);
    }

    #[test]
    fn test_nobody_claims() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(probe("a", 1, false));
        dispatcher.register(probe("b", 0, false));

        let host = FakeHost::default();
        let out = dispatcher.dispatch(&OpenRequest::new("x.y", false), &host);
        assert_eq!(out.claimed_by, None);
        assert_eq!(visited(&out), vec!["a", "b"]);
    }
}
