// SPDX-License-Identifier: MPL-2.0
//! Seams to the view layer.

use super::notification::{Message, Props};

/// The view layer that draws notifications.
///
/// The service mounts one instance per notification, pushes offsets to it,
/// and asks it to hide. The renderer owns the exit animation: after
/// `set_visible(false)` it reports the start of the leave transition through
/// [`NotificationService::finalize_close`] and its end through
/// [`NotificationService::destroy`].
///
/// [`NotificationService::finalize_close`]: super::NotificationService::finalize_close
/// [`NotificationService::destroy`]: super::NotificationService::destroy
pub trait Renderer {
    type Instance;

    /// Builds the view off-screen, then attaches it. `slot` carries rich
    /// message content that replaces the default body.
    fn mount(&mut self, props: &Props, slot: Option<&Message>) -> Self::Instance;

    /// Detaches the view and releases everything bound to it.
    fn unmount(&mut self, instance: Self::Instance);

    /// Moves the view to a new distance from its anchored edge.
    fn set_offset(&mut self, instance: &Self::Instance, offset: f32);

    /// Setting `false` starts the exit animation.
    fn set_visible(&mut self, instance: &Self::Instance, visible: bool);

    /// Current laid-out height, `None` if not measured yet.
    fn rendered_height(&self, instance: &Self::Instance) -> Option<f32>;

    /// Current distance from the anchored edge as drawn, for renderers that
    /// move toasts on their own.
    fn rendered_offset(&self, _instance: &Self::Instance) -> Option<f32> {
        None
    }
}

/// Whether notifications can be shown at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// A window is available.
    #[default]
    Interactive,
    /// No display (tests, batch jobs); opening a notification does nothing.
    Headless,
}

impl Environment {
    #[must_use]
    pub fn is_interactive(self) -> bool {
        matches!(self, Environment::Interactive)
    }
}
