// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::notifications::{Classification, Position};
use crate::ui::toast;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open a notification, tagged when a classification is given.
    Open(Option<Classification>),
    /// Choose the corner for the next notifications.
    SetPosition(Position),
    CloseAll,
    Toast(toast::Message),
    Tick(Instant), // Frame tick for fades and auto-dismiss
}

/// Runtime flags parsed from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Corner used until another one is picked.
    pub position: Option<Position>,
    /// Settings file to load instead of the per-user one.
    pub config_path: Option<PathBuf>,
}
