// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `NotificationService` opens notifications into their corner, keeps
//! each corner's offsets contiguous, and routes every close through the same
//! path: `request_close` hides the view, `finalize_close` removes the entry
//! and collapses the gap, `destroy` unmounts the view.

use super::notification::{
    Classification, Notification, NotificationId, OnClose, Options, Phase, Props,
};
use super::popup_manager::{PopupManager, ZIndexAllocator};
use super::position::Position;
use super::registry::PositionRegistry;
use super::renderer::{Environment, Renderer};
use crate::config::Config;
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle};
use std::time::{Duration, Instant};

/// A registered notification and the view instance drawing it.
struct Entry<I> {
    notification: Notification,
    instance: I,
    on_close: Option<OnClose>,
}

/// A notification that left its corner and waits for its view to unmount.
struct Leaving<I> {
    notification: Notification,
    instance: I,
}

/// Returned by [`NotificationService::open`]; closes the notification it
/// came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseHandle {
    id: NotificationId,
}

impl CloseHandle {
    #[must_use]
    pub fn id(&self) -> &NotificationId {
        &self.id
    }

    /// Starts the exit animation. Removal happens when the renderer reports
    /// that the view begins to leave.
    pub fn close<R: Renderer>(&self, service: &mut NotificationService<R>) -> bool {
        service.request_close(&self.id)
    }
}

/// Owns the per-corner registry and every live notification.
pub struct NotificationService<R: Renderer> {
    renderer: R,
    registry: PositionRegistry<Entry<R::Instance>>,
    leaving: Vec<Leaving<R::Instance>>,
    seed: u64,
    z_index: Box<dyn ZIndexAllocator>,
    environment: Environment,
    config: Config,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<R: Renderer> NotificationService<R> {
    /// Creates a service with default settings and its own popup manager.
    pub fn new(renderer: R) -> Self {
        Self::with_config(renderer, Config::default())
    }

    pub fn with_config(renderer: R, config: Config) -> Self {
        let popups = PopupManager::new(config.z_index_base);
        Self {
            renderer,
            registry: PositionRegistry::new(),
            leaving: Vec::new(),
            seed: 1,
            z_index: Box::new(popups),
            environment: Environment::default(),
            config,
            diagnostics: None,
        }
    }

    /// Shares stacking order with other popup surfaces.
    #[must_use]
    pub fn with_z_index_allocator(mut self, allocator: impl ZIndexAllocator + 'static) -> Self {
        self.z_index = Box::new(allocator);
        self
    }

    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Opens a notification and returns a handle to close it.
    ///
    /// Returns `None` without doing anything when the environment is not
    /// interactive.
    pub fn open(&mut self, options: Options) -> Option<CloseHandle> {
        self.open_at(options, Instant::now())
    }

    /// Like [`open`](Self::open) with an explicit clock for the auto-dismiss
    /// deadline.
    pub fn open_at(&mut self, options: Options, now: Instant) -> Option<CloseHandle> {
        if !self.environment.is_interactive() {
            self.log(DiagnosticEventKind::SkippedHeadless);
            return None;
        }

        let Options {
            position,
            offset,
            message,
            classification,
            on_close,
            title,
            duration,
            show_close,
            custom_class,
        } = options;

        let position = position.unwrap_or(self.config.default_position);
        let offset = self.initial_offset(position, offset);
        let id = NotificationId::from_seed(self.seed);
        self.seed += 1;
        let z_index = self.z_index.next_z_index();
        let deadline = self.resolve_duration(duration).map(|d| now + d);

        let props = Props {
            id: id.clone(),
            position,
            offset,
            z_index,
            classification,
            title,
            message: (!message.is_rich()).then(|| message.as_str().to_string()),
            show_close,
            custom_class,
        };
        let slot = message.is_rich().then_some(&message);
        let instance = self.renderer.mount(&props, slot);

        self.log(DiagnosticEventKind::Opened {
            id: id.to_string(),
            position,
            offset,
            z_index,
        });
        if let Some(kind) = classification
            .and_then(|c| DiagnosticEventKind::for_classification(c, message.as_str()))
        {
            self.log(kind);
        }

        self.registry.insert(
            position,
            Entry {
                notification: Notification {
                    id: id.clone(),
                    position,
                    offset,
                    z_index,
                    classification,
                    phase: Phase::Visible,
                    deadline,
                },
                instance,
                on_close,
            },
        );

        Some(CloseHandle { id })
    }

    /// Opens a notification tagged with `classification`.
    ///
    /// Accepts a bare message or full [`Options`]; a bare message becomes
    /// `Options { message, .. }`.
    pub fn notify(
        &mut self,
        classification: Classification,
        options: impl Into<Options>,
    ) -> Option<CloseHandle> {
        let mut options = options.into();
        options.classification = Some(classification);
        self.open(options)
    }

    pub fn success(&mut self, options: impl Into<Options>) -> Option<CloseHandle> {
        self.notify(Classification::Success, options)
    }

    pub fn info(&mut self, options: impl Into<Options>) -> Option<CloseHandle> {
        self.notify(Classification::Info, options)
    }

    pub fn warning(&mut self, options: impl Into<Options>) -> Option<CloseHandle> {
        self.notify(Classification::Warning, options)
    }

    pub fn error(&mut self, options: impl Into<Options>) -> Option<CloseHandle> {
        self.notify(Classification::Error, options)
    }

    /// Hides a visible notification so its view plays the exit animation.
    ///
    /// Returns `false` if the id is unknown or already closing.
    pub fn request_close(&mut self, id: &NotificationId) -> bool {
        let Some((position, index)) = self.registry.find(|e| &e.notification.id == id) else {
            return false;
        };
        let entry = &mut self.registry.get_mut(position)[index];
        if entry.notification.phase != Phase::Visible {
            return false;
        }
        entry.notification.phase = Phase::Closing;
        self.renderer.set_visible(&entry.instance, false);
        self.log(DiagnosticEventKind::CloseRequested { id: id.to_string() });
        true
    }

    /// Called by the renderer when the view starts to leave: runs the
    /// notification's own close callback, removes it and reflows its corner.
    pub fn finalize_close(&mut self, id: &NotificationId) -> bool {
        let Some((position, index)) = self.registry.find(|e| &e.notification.id == id) else {
            return false;
        };
        let on_close = self.registry.get_mut(position)[index].on_close.take();
        self.close(id, position, on_close)
    }

    /// Removes a notification from `position` and moves every notification
    /// stacked after it toward the edge by the removed height plus the gap.
    ///
    /// `on_close` runs first, while the view is still attached. Unknown ids
    /// are ignored and return `false`.
    pub fn close(
        &mut self,
        id: &NotificationId,
        position: Position,
        on_close: Option<OnClose>,
    ) -> bool {
        let Some(index) = self
            .registry
            .index_of(position, |e| &e.notification.id == id)
        else {
            return false;
        };

        let entry = &self.registry.get(position)[index];
        if let Some(callback) = on_close {
            callback(&entry.notification);
        }
        let removed_height = self.measured_height(&entry.instance);
        let shift = removed_height + self.config.gap;
        let read_back = self.config.read_back_offsets;

        let Some((removed, remaining)) = self.registry.remove_at(position, index) else {
            return false;
        };

        let mut reflowed = 0;
        for entry in remaining.iter_mut().skip(index) {
            let current = if read_back {
                self.renderer
                    .rendered_offset(&entry.instance)
                    .unwrap_or(entry.notification.offset)
            } else {
                entry.notification.offset
            };
            entry.notification.offset = current - shift;
            self.renderer
                .set_offset(&entry.instance, entry.notification.offset);
            reflowed += 1;
        }

        if removed.notification.phase == Phase::Visible {
            // Closed without a prior request: the view still has to leave.
            self.renderer.set_visible(&removed.instance, false);
        }
        let mut notification = removed.notification;
        notification.phase = Phase::Leaving;
        self.leaving.push(Leaving {
            notification,
            instance: removed.instance,
        });
        self.log(DiagnosticEventKind::Closed {
            id: id.to_string(),
            position,
            reflowed,
        });
        true
    }

    /// Called by the renderer once the exit animation is over: unmounts the
    /// view. A notification still registered is finalized first, so removal
    /// happens exactly once whichever signal arrives.
    pub fn destroy(&mut self, id: &NotificationId) -> bool {
        self.finalize_close(id);
        let Some(index) = self
            .leaving
            .iter()
            .position(|l| &l.notification.id == id)
        else {
            return false;
        };
        let leaving = self.leaving.remove(index);
        self.renderer.unmount(leaving.instance);
        self.log(DiagnosticEventKind::Destroyed { id: id.to_string() });
        true
    }

    /// Hides every visible notification in every corner.
    ///
    /// Nothing is removed here; each view leaves through the usual
    /// `finalize_close` and `destroy` signals. Returns how many were hidden.
    pub fn close_all(&mut self) -> usize {
        let mut count = 0;
        for entry in self.registry.iter_mut() {
            if entry.notification.phase == Phase::Visible {
                entry.notification.phase = Phase::Closing;
                self.renderer.set_visible(&entry.instance, false);
                count += 1;
            }
        }
        self.log(DiagnosticEventKind::CloseAllRequested { count });
        count
    }

    /// Requests close for every visible notification whose auto-dismiss
    /// deadline has passed. Returns how many were closed.
    pub fn tick(&mut self, now: Instant) -> usize {
        let expired: Vec<NotificationId> = self
            .registry
            .iter()
            .map(|(_, entry)| &entry.notification)
            .filter(|n| n.phase == Phase::Visible && n.is_expired(now))
            .map(|n| n.id.clone())
            .collect();

        expired.iter().filter(|id| self.request_close(id)).count()
    }

    /// Notifications of a corner, in stacking order.
    pub fn notifications(&self, position: Position) -> impl Iterator<Item = &Notification> {
        self.registry
            .get(position)
            .iter()
            .map(|entry| &entry.notification)
    }

    /// Looks up a notification that is registered or still leaving.
    #[must_use]
    pub fn get(&self, id: &NotificationId) -> Option<&Notification> {
        self.registry
            .iter()
            .map(|(_, entry)| &entry.notification)
            .chain(self.leaving.iter().map(|l| &l.notification))
            .find(|n| &n.id == id)
    }

    /// Number of registered notifications across all corners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Number of views removed from the registry but not yet unmounted.
    #[must_use]
    pub fn leaving_count(&self) -> usize {
        self.leaving.len()
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Offset for a new toast in `position`: the base, plus each current
    /// occupant's height and gap, plus one trailing gap. A zero base counts
    /// as unset.
    fn initial_offset(&self, position: Position, base: Option<f32>) -> f32 {
        let gap = self.config.gap;
        let occupied: f32 = self
            .registry
            .get(position)
            .iter()
            .map(|entry| self.measured_height(&entry.instance) + gap)
            .sum();
        let base = base
            .filter(|base| *base != 0.0)
            .unwrap_or(self.config.base_offset);
        base + occupied + gap
    }

    fn measured_height(&self, instance: &R::Instance) -> f32 {
        self.renderer
            .rendered_height(instance)
            .filter(|height| *height > 0.0)
            .unwrap_or(self.config.base_offset)
    }

    fn resolve_duration(&self, requested: Option<Duration>) -> Option<Duration> {
        match requested {
            Some(duration) if duration.is_zero() => None,
            Some(duration) => Some(duration),
            None => self.config.default_duration(),
        }
    }

    fn log(&self, kind: DiagnosticEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }
}

impl<R: Renderer + Default> Default for NotificationService<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R: Renderer> std::fmt::Debug for NotificationService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationService")
            .field("registered", &self.registry.len())
            .field("leaving", &self.leaving.len())
            .field("environment", &self.environment)
            .finish()
    }
}
