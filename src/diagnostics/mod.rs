// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the notification lifecycle.
//!
//! The notification service reports opens, closes, reflows and teardowns as
//! [`DiagnosticEvent`]s through a non-blocking [`DiagnosticsHandle`]. A
//! [`DiagnosticsCollector`] keeps the most recent events in a bounded
//! [`CircularBuffer`] and can export them as JSON.

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind};
