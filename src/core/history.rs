//! Undo/redo history tracking.
//!
//! History is a pair of stacks of state names, most recent last. Forward
//! moves push onto the undo stack and invalidate the redo stack; undo and
//! redo shuttle the current state between the two.

use std::mem;

/// Linear undo/redo history of state names.
///
/// # Example
///
/// ```rust
/// use stepwise::core::UndoHistory;
///
/// let mut history = UndoHistory::new();
/// let mut current = "b".to_string();
/// history.record("a".to_string());
///
/// assert!(history.undo(&mut current));
/// assert_eq!(current, "a");
///
/// assert!(history.redo(&mut current));
/// assert_eq!(current, "b");
///
/// assert!(!history.redo(&mut current));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UndoHistory {
    undo: Vec<String>,
    redo: Vec<String>,
}

impl UndoHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a forward move away from `previous`.
    ///
    /// Pushes `previous` onto the undo stack and discards all redo entries,
    /// since they no longer describe a path from the new state.
    pub fn record(&mut self, previous: String) {
        self.undo.push(previous);
        self.redo.clear();
    }

    /// Step back one entry, swapping it into `current`.
    ///
    /// Returns `false` and leaves `current` untouched when there is nothing
    /// to undo.
    pub fn undo(&mut self, current: &mut String) -> bool {
        shift(&mut self.undo, &mut self.redo, current)
    }

    /// Step forward one entry, swapping it into `current`.
    ///
    /// Returns `false` and leaves `current` untouched when there is nothing
    /// to redo.
    pub fn redo(&mut self, current: &mut String) -> bool {
        shift(&mut self.redo, &mut self.undo, current)
    }

    /// Drop both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Undo entries, oldest first.
    pub fn undo_stack(&self) -> &[String] {
        &self.undo
    }

    /// Redo entries, oldest first.
    pub fn redo_stack(&self) -> &[String] {
        &self.redo
    }

    pub fn is_empty(&self) -> bool {
        self.undo.is_empty() && self.redo.is_empty()
    }
}

// Pop from `source` into `current`, pushing the displaced value onto `sink`.
fn shift(source: &mut Vec<String>, sink: &mut Vec<String>, current: &mut String) -> bool {
    let Some(next) = source.pop() else {
        return false;
    };
    sink.push(mem::replace(current, next));
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_through(states: &[&str]) -> (UndoHistory, String) {
        let mut history = UndoHistory::new();
        let mut current = states[0].to_string();
        for next in &states[1..] {
            let previous = mem::replace(&mut current, next.to_string());
            history.record(previous);
        }
        (history, current)
    }

    #[test]
    fn new_history_is_empty() {
        let history = UndoHistory::new();
        assert!(history.is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn record_pushes_undo_entry() {
        let (history, current) = history_through(&["a", "b", "c"]);

        assert_eq!(current, "c");
        assert_eq!(history.undo_stack(), ["a", "b"]);
        assert!(history.redo_stack().is_empty());
    }

    #[test]
    fn undo_on_empty_history_is_noop() {
        let mut history = UndoHistory::new();
        let mut current = "only".to_string();

        assert!(!history.undo(&mut current));
        assert_eq!(current, "only");
        assert!(history.is_empty());
    }

    #[test]
    fn undo_moves_current_to_redo() {
        let (mut history, mut current) = history_through(&["a", "b", "c"]);

        assert!(history.undo(&mut current));
        assert_eq!(current, "b");
        assert_eq!(history.undo_stack(), ["a"]);
        assert_eq!(history.redo_stack(), ["c"]);
    }

    #[test]
    fn redo_reverses_undo() {
        let (mut history, mut current) = history_through(&["a", "b", "c"]);

        history.undo(&mut current);
        history.undo(&mut current);
        assert_eq!(current, "a");

        assert!(history.redo(&mut current));
        assert!(history.redo(&mut current));
        assert_eq!(current, "c");
        assert!(!history.redo(&mut current));
        assert_eq!(current, "c");
    }

    #[test]
    fn record_clears_redo() {
        let (mut history, mut current) = history_through(&["a", "b"]);
        history.undo(&mut current);
        assert!(history.can_redo());

        history.record(mem::replace(&mut current, "z".to_string()));

        assert!(!history.can_redo());
        assert_eq!(history.undo_stack(), ["a"]);
    }

    #[test]
    fn clear_drops_both_stacks() {
        let (mut history, mut current) = history_through(&["a", "b", "c"]);
        history.undo(&mut current);

        history.clear();

        assert!(history.is_empty());
        assert!(!history.undo(&mut current));
        assert!(!history.redo(&mut current));
        assert_eq!(current, "b");
    }
}
