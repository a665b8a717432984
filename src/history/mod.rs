//! Grouped, replayable undo/redo over explicit edit commands.
//!
//! [`History`] keeps a bounded stack of named groups, each holding the
//! reversible edits one user action produced. Groups are collected
//! between [`History::begin_action`] and [`History::end_action`]; a
//! commit invalidates the redo stack, keeping the timeline linear. Each
//! replay batch runs inside the host's transactional boundary so the
//! host's own undo system sees one step per group.
//!
//! # Examples
//!
//! ```
//! use rigpicker::history::{Edit, History, NullBoundary};
//!
//! struct SetValue {
//!     before: i32,
//!     after: i32,
//! }
//!
//! impl Edit for SetValue {
//!     type Target = i32;
//!
//!     fn apply(&self, target: &mut i32) -> anyhow::Result<()> {
//!         *target = self.after;
//!         Ok(())
//!     }
//!
//!     fn revert(&self, target: &mut i32) -> anyhow::Result<()> {
//!         *target = self.before;
//!         Ok(())
//!     }
//! }
//!
//! let mut history = History::new();
//! let mut value = 0;
//!
//! history.begin_action("Set Value");
//! history.record(SetValue { before: value, after: 5 });
//! value = 5;
//! history.end_action();
//!
//! assert!(history.undo(&mut value, &NullBoundary));
//! assert_eq!(value, 0);
//! assert!(history.redo(&mut value, &NullBoundary));
//! assert_eq!(value, 5);
//! ```

pub mod boundary;

pub use boundary::{ChunkGuard, NullBoundary, TransactionBoundary};

use crate::constants::DEFAULT_HISTORY_CAPACITY;
use anyhow::Result;
use std::collections::VecDeque;
use tracing::{debug, warn};

/// A reversible edit: a command object holding enough state (before and
/// after values, or a diff) to move its target in either direction.
pub trait Edit {
    /// State the edit applies to.
    type Target;

    /// Re-applies the edit (the redo direction).
    ///
    /// # Errors
    ///
    /// Fails when the target no longer matches the state the edit was
    /// recorded against; replay treats this as best-effort and continues.
    fn apply(&self, target: &mut Self::Target) -> Result<()>;

    /// Reverses the edit (the undo direction).
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::apply`].
    fn revert(&self, target: &mut Self::Target) -> Result<()>;
}

/// One committed user action: a named batch of edits.
struct EditGroup<E> {
    name: String,
    ops: Vec<E>,
}

/// Bounded undo/redo stack of edit groups.
///
/// State machine: Idle until [`Self::begin_action`] opens a group,
/// collecting until [`Self::end_action`] commits it. Opening a new group
/// while one is open commits the previous one first.
pub struct History<E: Edit> {
    undo_stack: VecDeque<EditGroup<E>>,
    redo_stack: Vec<EditGroup<E>>,
    capacity: usize,
    open: Option<EditGroup<E>>,
}

impl<E: Edit> History<E> {
    /// Creates a history with the default group capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Creates a history bounded to `capacity` committed groups; the
    /// oldest group is evicted when the bound is exceeded.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            capacity: capacity.max(1),
            open: None,
        }
    }

    /// Opens a named group. An already-open group is committed first.
    pub fn begin_action(&mut self, name: impl Into<String>) {
        if self.open.is_some() {
            self.end_action();
        }
        self.open = Some(EditGroup {
            name: name.into(),
            ops: Vec::new(),
        });
    }

    /// Commits the open group.
    ///
    /// Empty groups are discarded without touching the redo stack; a
    /// non-empty commit clears it, so redo is invalidated by any new
    /// action, including ones performed after an undo.
    pub fn end_action(&mut self) {
        let Some(group) = self.open.take() else {
            return;
        };
        if group.ops.is_empty() {
            return;
        }

        self.undo_stack.push_back(group);
        if self.undo_stack.len() > self.capacity {
            self.undo_stack.pop_front();
        }
        self.redo_stack.clear();
    }

    /// Adds an edit to the open group.
    ///
    /// Dropped when no group is open — callers must pair every
    /// `begin_action`/`end_action`, or the mutation becomes
    /// unrecoverable.
    pub fn record(&mut self, op: E) {
        if let Some(group) = &mut self.open {
            group.ops.push(op);
        } else {
            debug!("edit recorded outside an action, dropped");
        }
    }

    /// Undoes the most recent group; false when there is nothing to undo.
    ///
    /// Edits revert in reverse insertion order inside the host boundary.
    /// A failing edit is logged and the rest of the group still replays.
    pub fn undo(&mut self, target: &mut E::Target, boundary: &dyn TransactionBoundary) -> bool {
        let Some(group) = self.undo_stack.pop_back() else {
            return false;
        };

        {
            let _chunk = ChunkGuard::open(boundary);
            for op in group.ops.iter().rev() {
                if let Err(error) = op.revert(target) {
                    warn!(action = %group.name, "undo operation failed: {error:#}");
                }
            }
        }

        self.redo_stack.push(group);
        true
    }

    /// Redoes the most recently undone group; false when there is
    /// nothing to redo.
    ///
    /// Edits re-apply in original insertion order, mirroring
    /// [`Self::undo`].
    pub fn redo(&mut self, target: &mut E::Target, boundary: &dyn TransactionBoundary) -> bool {
        let Some(group) = self.redo_stack.pop() else {
            return false;
        };

        {
            let _chunk = ChunkGuard::open(boundary);
            for op in &group.ops {
                if let Err(error) = op.apply(target) {
                    warn!(action = %group.name, "redo operation failed: {error:#}");
                }
            }
        }

        self.undo_stack.push_back(group);
        true
    }

    /// Menu label for the next undo: `"Undo <name>"`, or `"Undo"` when
    /// the stack is empty.
    #[must_use]
    pub fn undo_label(&self) -> String {
        self.undo_stack
            .back()
            .map_or_else(|| "Undo".to_string(), |g| format!("Undo {}", g.name))
    }

    /// Menu label for the next redo: `"Redo <name>"`, or `"Redo"` when
    /// the stack is empty.
    #[must_use]
    pub fn redo_label(&self) -> String {
        self.redo_stack
            .last()
            .map_or_else(|| "Redo".to_string(), |g| format!("Redo {}", g.name))
    }

    /// Whether an undo would do anything.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether a redo would do anything.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of committed groups available to undo.
    #[must_use]
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of undone groups available to redo.
    #[must_use]
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Drops all history, including any open group.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.open = None;
    }
}

impl<E: Edit> Default for History<E> {
    fn default() -> Self {
        Self::new()
    }
}
