// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types emitted by the notification service.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::notifications::{Classification, Position};

/// What happened to a notification.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A notification was mounted and registered in its corner.
    Opened {
        id: String,
        position: Position,
        offset: f32,
        z_index: u32,
    },
    /// An open was skipped because no interactive environment is available.
    SkippedHeadless,
    /// The view was asked to play its exit animation.
    CloseRequested { id: String },
    /// The notification left the registry; `reflowed` counts the toasts
    /// that moved to close the gap.
    Closed {
        id: String,
        position: Position,
        reflowed: usize,
    },
    /// The view instance was unmounted after its exit animation.
    Destroyed { id: String },
    /// Every live notification was asked to close.
    CloseAllRequested { count: usize },
    /// A warning-classified notification was shown.
    Warning { message: String },
    /// An error-classified notification was shown.
    Error { message: String },
}

impl DiagnosticEventKind {
    /// Builds the warning/error echo for a classified message, if any.
    #[must_use]
    pub fn for_classification(classification: Classification, message: &str) -> Option<Self> {
        match classification {
            Classification::Warning => Some(Self::Warning {
                message: message.to_string(),
            }),
            Classification::Error => Some(Self::Error {
                message: message.to_string(),
            }),
            Classification::Success | Classification::Info => None,
        }
    }
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_warnings_and_errors_are_echoed() {
        assert!(DiagnosticEventKind::for_classification(Classification::Success, "ok").is_none());
        assert!(DiagnosticEventKind::for_classification(Classification::Info, "fyi").is_none());
        assert_eq!(
            DiagnosticEventKind::for_classification(Classification::Error, "boom"),
            Some(DiagnosticEventKind::Error {
                message: "boom".into()
            })
        );
    }

    #[test]
    fn event_serializes_with_kind_tag() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Destroyed {
            id: "notification_1".into(),
        });
        let json = serde_json::to_string(&event).expect("serialize");
        assert!(json.contains("\"kind\":\"destroyed\""));
        assert!(json.contains("\"id\":\"notification_1\""));
        assert!(json.contains("\"timestamp\""));
    }
}
