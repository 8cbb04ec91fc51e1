//! Pointer identity, input events, and the active-pointer registry.
//!
//! This module defines how touch/cursor input integrates into the simulation:
//! - Identify contacts with [`PointerId`].
//! - Feed host input through [`PointerEvent`].
//! - Track current contact positions with [`PointerRegistry`].
use std::collections::HashMap;

use glam::Vec2;

/// Identifier for a touch contact or mouse cursor, stable for the duration of contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(
    /// Host-assigned cursor id.
    pub u64,
);

/// Pointer input event as reported by the host.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// A new contact touched down at `position`.
    Down { id: PointerId, position: Vec2 },

    /// An active contact moved to `position`.
    Moved { id: PointerId, position: Vec2 },

    /// A contact lifted off.
    Up { id: PointerId },
}

/// Registry of active pointers and their current positions.
///
/// Absence of an id means "not currently touching". Writes come from input
/// handlers; reads come from field evaluation. Under the single-threaded
/// stepping model the borrow checker enforces that a read never observes a
/// mutation in progress.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct PointerRegistry {
    pointers: HashMap<PointerId, Vec2>,
}

impl PointerRegistry {
    /// Creates a new, empty [`PointerRegistry`].
    pub fn new() -> Self {
        Self {
            pointers: HashMap::new(),
        }
    }

    /// Creates an empty [`PointerRegistry`] with room for `n` pointers.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            pointers: HashMap::with_capacity(n),
        }
    }

    /// Returns the number of active pointers.
    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    /// Returns `true` if no pointer is currently active.
    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }

    /// Removes all active pointers.
    pub fn clear(&mut self) {
        self.pointers.clear();
    }

    /// Inserts or overwrites the position for `id`.
    pub fn upsert(&mut self, id: PointerId, position: Vec2) {
        self.pointers.insert(id, position);
    }

    /// Removes the entry for `id`. Returns `true` if the pointer was present;
    /// removing an absent id is a no-op, not an error.
    pub fn remove(&mut self, id: PointerId) -> bool {
        self.pointers.remove(&id).is_some()
    }

    /// Checks whether `id` is currently active.
    pub fn contains(&self, id: PointerId) -> bool {
        self.pointers.contains_key(&id)
    }

    /// Returns the current position for `id`, if active.
    pub fn get(&self, id: PointerId) -> Option<Vec2> {
        self.pointers.get(&id).copied()
    }

    /// Iterates over the current pointer positions.
    ///
    /// The iterator is lazy, finite, and restartable: each call starts a fresh
    /// pass over the registry contents at call time.
    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.pointers.values().copied()
    }

    /// Applies a host input event: down and move upsert, up removes.
    ///
    /// A move for an unseen id establishes the contact, which subsumes the
    /// usual down-before-move ordering.
    pub fn apply(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { id, position } | PointerEvent::Moved { id, position } => {
                self.upsert(id, position);
            }
            PointerEvent::Up { id } => {
                self.remove(id);
            }
        }
    }
}
