//! Undo/redo over record snapshots
//!
//! Snapshot-based history: each mutating operation first pushes a full copy
//! of the record sequence. Snapshots are independent clones, so later
//! mutation of the live sequence never alters what undo restores.

use crate::models::ExpenseRecord;

/// Two-stack undo/redo history of record-sequence snapshots
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    /// Past states, most recent last
    history: Vec<Vec<ExpenseRecord>>,
    /// States reachable by redo after an undo
    redo_stack: Vec<Vec<ExpenseRecord>>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call immediately before any mutation of the record sequence
    ///
    /// Pushes a snapshot of `current` and clears the redo stack: redo is
    /// only valid directly after an undo, not after further edits.
    pub fn record_mutation(&mut self, current: &[ExpenseRecord]) {
        self.history.push(current.to_vec());
        self.redo_stack.clear();
    }

    /// Step back one snapshot, returning the state to restore
    ///
    /// No-op (returns None) when there is nothing to undo.
    pub fn undo(&mut self, current: &[ExpenseRecord]) -> Option<Vec<ExpenseRecord>> {
        let snapshot = self.history.pop()?;
        self.redo_stack.push(current.to_vec());
        Some(snapshot)
    }

    /// Step forward one snapshot, returning the state to restore
    ///
    /// No-op (returns None) when there is nothing to redo.
    pub fn redo(&mut self, current: &[ExpenseRecord]) -> Option<Vec<ExpenseRecord>> {
        let snapshot = self.redo_stack.pop()?;
        self.history.push(current.to_vec());
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
