// SPDX-License-Identifier: MPL-2.0
//! Toast notifications stacked per screen corner.
//!
//! # Components
//!
//! - [`position`] - The four corners and the edge each one is measured from
//! - [`registry`] - Ordered per-corner lists of live notifications
//! - [`notification`] - Options, mount properties and the registry handle
//! - [`popup_manager`] - Z-index allocation shared with other popups
//! - [`renderer`] - The view-layer trait and the environment probe
//! - [`service`] - Open, close/reflow, close-all and auto-dismiss
//!
//! # Usage
//!
//! ```ignore
//! use iced_notify::notifications::{NotificationService, Options, Position};
//!
//! let mut service = NotificationService::new(renderer);
//! let handle = service.error("Disk full");
//! service.open(Options::new("Saved").position(Position::BottomLeft));
//!
//! // Starts the exit animation; the renderer reports back through
//! // `finalize_close` and `destroy`.
//! if let Some(handle) = handle {
//!     handle.close(&mut service);
//! }
//! ```
//!
//! # Stacking
//!
//! The first toast of a corner sits at `base + gap` from its edge (96px with
//! the defaults). Each later toast adds the height of every toast before it
//! plus one gap each. Closing a toast moves every toast after it toward the
//! edge by the closed toast's height plus one gap.

pub mod notification;
pub mod popup_manager;
pub mod position;
pub mod registry;
pub mod renderer;
mod service;

pub use notification::{
    Classification, Message, Notification, NotificationId, OnClose, Options, Phase, Props,
};
pub use popup_manager::{PopupManager, ZIndexAllocator};
pub use position::{Edge, Position};
pub use registry::PositionRegistry;
pub use renderer::{Environment, Renderer};
pub use service::{CloseHandle, NotificationService};
