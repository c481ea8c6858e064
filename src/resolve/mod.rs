//! Built-in open handlers.
//!
//! [`register_builtin`] installs them in the order they must be consulted:
//! the already-open check, the fixed-name table, the IRC name patterns and
//! finally the unhandled-request fallback.

pub mod irc;
pub mod opened;
pub mod table;
pub mod unhandled;

use crate::app::dispatch::Dispatcher;

pub fn register_builtin(dispatcher: &mut Dispatcher) {
    dispatcher.register(Box::new(opened::AlreadyOpen));
    dispatcher.register(Box::new(table::FixedTable));
    dispatcher.register(Box::new(irc::IrcPatterns));
    dispatcher.register(Box::new(unhandled::Unhandled));
}
