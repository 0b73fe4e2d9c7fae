// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! [`Options`] describes a notification to open, [`Props`] is what the
//! renderer receives when mounting it, and [`Notification`] is the registry
//! handle that lives until the notification leaves the screen.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a notification, rendered as `notification_<seed>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotificationId(String);

impl NotificationId {
    pub(crate) fn from_seed(seed: u64) -> Self {
        Self(format!("notification_{seed}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Semantic tag attached by the typed shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    Success,
    Info,
    Warning,
    Error,
}

impl Classification {
    /// Every classification the shortcuts cover.
    pub const ALL: [Classification; 4] = [
        Classification::Success,
        Classification::Info,
        Classification::Warning,
        Classification::Error,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Success => "success",
            Classification::Info => "info",
            Classification::Warning => "warning",
            Classification::Error => "error",
        }
    }
}

/// Body of a notification.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Plain text, passed to the renderer through [`Props::message`].
    Text(String),
    /// Rich content, handed to the renderer as slot content at mount time.
    Rich(String),
}

impl Message {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Message::Text(text) | Message::Rich(text) => text,
        }
    }

    #[must_use]
    pub fn is_rich(&self) -> bool {
        matches!(self, Message::Rich(_))
    }
}

impl Default for Message {
    fn default() -> Self {
        Message::Text(String::new())
    }
}

/// Callback run once when a notification is closed, while its view is
/// still attached and measurable.
pub type OnClose = Box<dyn FnOnce(&Notification)>;

/// Configuration for a notification to open.
pub struct Options {
    pub position: Option<Position>,
    /// Distance from the anchored edge for the first toast of the corner.
    pub offset: Option<f32>,
    pub message: Message,
    pub classification: Option<Classification>,
    pub on_close: Option<OnClose>,
    pub title: Option<String>,
    /// Auto-dismiss delay. `None` uses the configured default, zero keeps
    /// the notification until it is closed.
    pub duration: Option<Duration>,
    pub show_close: bool,
    pub custom_class: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            position: None,
            offset: None,
            message: Message::default(),
            classification: None,
            on_close: None,
            title: None,
            duration: None,
            show_close: true,
            custom_class: None,
        }
    }
}

impl Options {
    pub fn new(message: impl Into<Message>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: f32) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn classification(mut self, classification: Classification) -> Self {
        self.classification = Some(classification);
        self
    }

    #[must_use]
    pub fn show_close(mut self, show_close: bool) -> Self {
        self.show_close = show_close;
        self
    }

    #[must_use]
    pub fn custom_class(mut self, class: impl Into<String>) -> Self {
        self.custom_class = Some(class.into());
        self
    }

    #[must_use]
    pub fn on_close(mut self, callback: impl FnOnce(&Notification) + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("position", &self.position)
            .field("offset", &self.offset)
            .field("message", &self.message)
            .field("classification", &self.classification)
            .field("on_close", &self.on_close.is_some())
            .field("title", &self.title)
            .field("duration", &self.duration)
            .field("show_close", &self.show_close)
            .field("custom_class", &self.custom_class)
            .finish()
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<&str> for Options {
    fn from(text: &str) -> Self {
        Options::new(text)
    }
}

impl From<String> for Options {
    fn from(text: String) -> Self {
        Options::new(text)
    }
}

impl From<Message> for Options {
    fn from(message: Message) -> Self {
        Options::new(message)
    }
}

/// Properties handed to the renderer when a notification is mounted.
#[derive(Debug, Clone, PartialEq)]
pub struct Props {
    pub id: NotificationId,
    pub position: Position,
    pub offset: f32,
    pub z_index: u32,
    pub classification: Option<Classification>,
    pub title: Option<String>,
    /// Plain-text body. `None` when the body is passed as slot content.
    pub message: Option<String>,
    pub show_close: bool,
    pub custom_class: Option<String>,
}

/// Where a notification is in its close lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// On screen.
    Visible,
    /// The view is playing its exit animation; still registered.
    Closing,
    /// Removed from its corner, waiting for the view to be unmounted.
    Leaving,
}

/// Registry handle for one live notification.
#[derive(Debug, Clone)]
pub struct Notification {
    pub(crate) id: NotificationId,
    pub(crate) position: Position,
    pub(crate) offset: f32,
    pub(crate) z_index: u32,
    pub(crate) classification: Option<Classification>,
    pub(crate) phase: Phase,
    pub(crate) deadline: Option<Instant>,
}

impl Notification {
    #[must_use]
    pub fn id(&self) -> &NotificationId {
        &self.id
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current distance from the anchored edge.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[must_use]
    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    #[must_use]
    pub fn classification(&self) -> Option<Classification> {
        self.classification
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// When the notification closes itself, `None` if it never does.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns whether the auto-dismiss deadline has passed at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }
}
