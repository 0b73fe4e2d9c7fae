// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Stacking**: Baseline offset and gap between stacked toasts
//! - **Timing**: Auto-dismiss duration and exit animation length
//! - **Layering**: First z-index handed out by the popup manager
//! - **Diagnostics**: Event buffer capacity bounds

// ==========================================================================
// Stacking Defaults
// ==========================================================================

/// Distance in pixels between the anchored edge and the first toast, before
/// the trailing gap is added. Also the height assumed for an unmeasured toast.
pub const DEFAULT_BASE_OFFSET: f32 = 80.0;

/// Vertical gap in pixels between two consecutive toasts of a corner.
pub const DEFAULT_GAP: f32 = 16.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Auto-dismiss delay in milliseconds. Zero keeps the toast until closed.
pub const DEFAULT_DURATION_MS: u64 = 4500;

/// Length of the fade-out played before a toast leaves the stack.
pub const DEFAULT_EXIT_ANIMATION_MS: u64 = 300;

// ==========================================================================
// Layering Defaults
// ==========================================================================

/// First z-index handed out by the popup manager.
pub const DEFAULT_Z_INDEX_BASE: u32 = 2000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_bounds_are_ordered() {
        assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY <= DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY);
        assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
    }

    #[test]
    fn stacking_defaults_are_positive() {
        assert!(DEFAULT_BASE_OFFSET > 0.0);
        assert!(DEFAULT_GAP > 0.0);
    }
}
