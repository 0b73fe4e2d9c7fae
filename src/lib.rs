// SPDX-License-Identifier: MPL-2.0
//! `iced_notify` stacks transient toast notifications in the four corners of
//! a window.
//!
//! The core lives in [`notifications`]: a per-corner registry of live
//! notifications, the offset arithmetic that keeps them from overlapping, and
//! a two-phase close that lets the view finish its exit animation before the
//! stack collapses. [`ui::toast`] renders the stacks with Iced, and [`app`]
//! is a small demo application wiring both together.

#![doc(html_root_url = "https://docs.rs/iced_notify/0.3.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod notifications;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
