//! Linear undo/redo history.
//!
//! Each entry is a full snapshot of the cell buffer taken before a mutation.
//! Undo and redo swap the current buffer with the top of the opposite stack,
//! so a snapshot is never cloned twice.

use super::Rgb;

/// A full copy of the cell buffer
pub type Snapshot = Box<[Rgb]>;

#[derive(Clone, Debug, Default)]
pub struct History {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state before a mutation. Discards everything redoable.
    pub fn record(&mut self, before: Snapshot) {
        self.undo_stack.push(before);
        self.redo_stack.clear();
    }

    /// Pop the most recent snapshot, stashing `current` for redo.
    /// Returns None (and keeps `current` untouched by the caller) when empty.
    pub fn undo(&mut self, current: impl FnOnce() -> Snapshot) -> Option<Snapshot> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current());
        Some(previous)
    }

    /// Pop the most recently undone snapshot, stashing `current` for undo.
    pub fn redo(&mut self, current: impl FnOnce() -> Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current());
        Some(next)
    }

    /// Drop both stacks
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Approximate heap usage of all stored snapshots
    pub fn memory_bytes(&self) -> usize {
        self.undo_stack
            .iter()
            .chain(self.redo_stack.iter())
            .map(|s| s.len() * std::mem::size_of::<Rgb>())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(color: Rgb) -> Snapshot {
        vec![color; 4].into_boxed_slice()
    }

    #[test]
    fn test_empty_undo_is_none() {
        let mut history = History::new();
        assert!(history.undo(|| snap(Rgb::WHITE)).is_none());
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_undo_moves_current_to_redo() {
        let mut history = History::new();
        history.record(snap(Rgb::WHITE));
        let restored = history.undo(|| snap(Rgb::BLACK)).unwrap();
        assert_eq!(restored[0], Rgb::WHITE);
        assert_eq!(history.undo_depth(), 0);
        assert_eq!(history.redo_depth(), 1);
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::new();
        history.record(snap(Rgb::WHITE));
        history.undo(|| snap(Rgb::BLACK));
        history.record(snap(Rgb::WHITE));
        assert_eq!(history.redo_depth(), 0);
        assert_eq!(history.undo_depth(), 1);
    }

    #[test]
    fn test_memory_bytes_counts_both_stacks() {
        let mut history = History::new();
        history.record(snap(Rgb::WHITE));
        history.record(snap(Rgb::WHITE));
        history.undo(|| snap(Rgb::BLACK));
        assert_eq!(history.memory_bytes(), 2 * 4 * std::mem::size_of::<Rgb>());
    }
}
