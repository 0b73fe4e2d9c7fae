// SPDX-License-Identifier: MPL-2.0
//! Iced rendering for the notification stacks.
//!
//! - [`toast`] - `ToastLayer`, the [`Renderer`](crate::notifications::Renderer)
//!   that draws every corner's toasts and plays their exit fade
//! - [`design_tokens`] - Colors, spacing and sizes used by the toasts

pub mod design_tokens;
pub mod toast;
