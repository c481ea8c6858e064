//! Bounded stack of recently closed buffer names.

use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct ClosedHistory {
    entries: VecDeque<String>,
    max: usize,
}

impl ClosedHistory {
    pub fn new(max: usize) -> Self {
        Self { entries: VecDeque::new(), max }
    }

    /// Remember a closed buffer, evicting the oldest names past the limit.
    pub fn push(&mut self, full_name: String) {
        self.entries.push_back(full_name);
        while self.entries.len() > self.max {
            self.entries.pop_front();
        }
    }

    /// Take the most recently closed name.
    pub fn pop(&mut self) -> Option<String> {
        self.entries.pop_back()
    }

    /// Newest first.
    pub fn iter_recent(&self) -> impl Iterator<Item = &String> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_evicts_oldest() {
        let mut history = ClosedHistory::new(3);
        for name in ["a", "b", "c", "d", "e"] {
            history.push(name.to_string());
        }
        assert_eq!(history.len(), 3);
        let recent: Vec<&str> = history.iter_recent().map(String::as_str).collect();
        assert_eq!(recent, vec!["e", "d", "c"]);
    }

    #[test]
    fn test_pop_is_lifo() {
        let mut history = ClosedHistory::new(10);
        history.push("irc.libera.#rust".into());
        history.push("irc.libera.alice".into());
        assert_eq!(history.pop().as_deref(), Some("irc.libera.alice"));
        assert_eq!(history.pop().as_deref(), Some("irc.libera.#rust"));
        assert_eq!(history.pop(), None);
        assert!(history.is_empty());
    }

    #[test]
    fn test_zero_max_keeps_nothing() {
        let mut history = ClosedHistory::new(0);
        history.push("irc.libera.#rust".into());
        assert!(history.is_empty());
    }
}
