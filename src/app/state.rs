use crate::app::dispatch::Dispatcher;
use crate::app::history::ClosedHistory;
use crate::config::model::AddonOptions;
use crate::resolve;

/// Everything the add-on owns between host callbacks.
pub struct AddonState {
    pub options: AddonOptions,
    pub closed: ClosedHistory,
    pub dispatcher: Dispatcher,
}

impl AddonState {
    /// State with the built-in open handlers registered.
    pub fn new(options: AddonOptions) -> Self {
        let mut dispatcher = Dispatcher::new();
        resolve::register_builtin(&mut dispatcher);
        Self {
            closed: ClosedHistory::new(options.max_closed),
            options,
            dispatcher,
        }
    }
}
