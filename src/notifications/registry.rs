// SPDX-License-Identifier: MPL-2.0
//! Per-corner ordered lists of live notifications.
//!
//! Order within a corner is stacking order: the first entry sits closest to
//! the anchored edge. Entries are appended on open and removed on close; the
//! relative order of the rest never changes.

use super::position::Position;

/// Four ordered queues, one per [`Position`].
#[derive(Debug, Clone)]
pub struct PositionRegistry<T> {
    queues: [Vec<T>; 4],
}

impl<T> Default for PositionRegistry<T> {
    fn default() -> Self {
        Self {
            queues: std::array::from_fn(|_| Vec::new()),
        }
    }
}

impl<T> PositionRegistry<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries of a corner, in stacking order.
    #[must_use]
    pub fn get(&self, position: Position) -> &[T] {
        &self.queues[position.index()]
    }

    pub fn get_mut(&mut self, position: Position) -> &mut [T] {
        &mut self.queues[position.index()]
    }

    /// Appends an entry to the tail of a corner.
    pub fn insert(&mut self, position: Position, item: T) {
        self.queues[position.index()].push(item);
    }

    /// Removes the entry at `index` and returns it together with the
    /// remaining entries of the corner. `None` if `index` is out of range.
    pub fn remove_at(&mut self, position: Position, index: usize) -> Option<(T, &mut [T])> {
        let queue = &mut self.queues[position.index()];
        if index >= queue.len() {
            return None;
        }
        let removed = queue.remove(index);
        Some((removed, queue.as_mut_slice()))
    }

    /// Index of the first entry in `position` matching `predicate`.
    pub fn index_of(&self, position: Position, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.get(position).iter().position(predicate)
    }

    /// Corner and index of the first entry matching `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<(Position, usize)> {
        Position::ALL.into_iter().find_map(|position| {
            self.index_of(position, &mut predicate)
                .map(|index| (position, index))
        })
    }

    /// Iterates all entries, corner by corner.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        Position::ALL
            .into_iter()
            .flat_map(move |position| self.get(position).iter().map(move |item| (position, item)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.queues.iter_mut().flat_map(|queue| queue.iter_mut())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queues.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queues.iter().all(Vec::is_empty)
    }
}
