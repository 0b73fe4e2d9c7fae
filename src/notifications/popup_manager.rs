// SPDX-License-Identifier: MPL-2.0
//! Stacking-order allocation shared by all popup-style UI.

use crate::config::DEFAULT_Z_INDEX_BASE;
use std::cell::Cell;
use std::rc::Rc;

/// Hands out stacking-order values.
pub trait ZIndexAllocator {
    /// Returns a value greater than every value returned before.
    fn next_z_index(&self) -> u32;
}

/// Default allocator: a counter shared between clones.
///
/// Every popup surface (notifications, dialogs, menus) should hold a clone
/// of the same manager so that later popups always layer above earlier ones.
#[derive(Debug, Clone)]
pub struct PopupManager {
    next: Rc<Cell<u32>>,
}

impl PopupManager {
    #[must_use]
    pub fn new(base: u32) -> Self {
        Self {
            next: Rc::new(Cell::new(base)),
        }
    }
}

impl Default for PopupManager {
    fn default() -> Self {
        Self::new(DEFAULT_Z_INDEX_BASE)
    }
}

impl ZIndexAllocator for PopupManager {
    fn next_z_index(&self) -> u32 {
        let value = self.next.get();
        self.next.set(value.saturating_add(1));
        value
    }
}
