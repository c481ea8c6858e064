//! Read-only view of the host application.
//!
//! The host owns every buffer, window and layout. Handlers only ever ask it
//! questions through [`Host`]; anything that changes host state goes out as
//! an [`Action`](crate::app::action::Action).

/// Queries the add-on may make against the host.
pub trait Host {
    /// Whether a buffer with exactly this full name is currently open.
    fn buffer_exists(&self, full_name: &str) -> bool;

    /// Full names of the buffers referenced by a saved layout, or `None` if
    /// no layout with that name exists.
    fn layout_buffers(&self, layout: &str) -> Option<Vec<String>>;
}

#[cfg(test)]
pub mod fake {
    use super::Host;
    use std::collections::{BTreeSet, HashMap};

    /// In-memory host for handler tests.
    #[derive(Debug, Default)]
    pub struct FakeHost {
        pub buffers: BTreeSet<String>,
        pub layouts: HashMap<String, Vec<String>>,
    }

    impl FakeHost {
        pub fn with_buffers(names: &[&str]) -> Self {
            Self {
                buffers: names.iter().map(|n| n.to_string()).collect(),
                layouts: HashMap::new(),
            }
        }

        pub fn layout(mut self, name: &str, buffers: &[&str]) -> Self {
            self.layouts
                .insert(name.to_string(), buffers.iter().map(|b| b.to_string()).collect());
            self
        }
    }

    impl Host for FakeHost {
        fn buffer_exists(&self, full_name: &str) -> bool {
            self.buffers.contains(full_name)
        }

        fn layout_buffers(&self, layout: &str) -> Option<Vec<String>> {
            self.layouts.get(layout).cloned()
        }
    }
}
