// SPDX-License-Identifier: MPL-2.0
//! Demo application: buttons that open notifications in a chosen corner.
//!
//! The `App` struct owns the notification service (drawn by a
//! [`ToastLayer`]) and a diagnostics collector, and drives the toast
//! lifecycle from a frame subscription while any toast is mounted.

mod message;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsCollector;
use crate::notifications::{Classification, NotificationService, Options, Position};
use crate::ui::design_tokens::spacing;
use crate::ui::toast::{self, ToastLayer};
use iced::widget::{button, Column, Row, Stack, Text};
use iced::{time, Element, Length, Subscription, Task};
use std::fmt;
use std::time::Duration;

/// Interval between lifecycle frames while toasts are on screen.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Root Iced application state.
pub struct App {
    notifications: NotificationService<ToastLayer>,
    diagnostics: DiagnosticsCollector,
    position: Position,
    opened: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("position", &self.position)
            .field("notifications", &self.notifications)
            .finish()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot function; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = load_config(&flags);
        (Self::with_config(config, flags.position), Task::none())
    }

    fn with_config(config: Config, position: Option<Position>) -> Self {
        let position = position.unwrap_or(config.default_position);
        let diagnostics = DiagnosticsCollector::default();
        let mut notifications = NotificationService::with_config(ToastLayer::new(), config);
        notifications.set_diagnostics(diagnostics.handle());

        Self {
            notifications,
            diagnostics,
            position,
            opened: 0,
        }
    }

    fn title(&self) -> String {
        format!("IcedNotify ({} shown)", self.notifications.len())
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.notifications.renderer().is_empty() {
            Subscription::none()
        } else {
            time::every(FRAME_INTERVAL).map(Message::Tick)
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Open(classification) => {
                self.opened += 1;
                let options = Options::new(format!("Notification #{}", self.opened))
                    .title(
                        classification
                            .map(Classification::as_str)
                            .unwrap_or("notice"),
                    )
                    .position(self.position);
                match classification {
                    Some(classification) => self.notifications.notify(classification, options),
                    None => self.notifications.open(options),
                };
            }
            Message::SetPosition(position) => {
                self.position = position;
            }
            Message::CloseAll => {
                self.notifications.close_all();
            }
            Message::Toast(toast::Message::Dismiss(id)) => {
                self.notifications.request_close(&id);
            }
            Message::Tick(now) => {
                toast::drive(&mut self.notifications, now);
                self.diagnostics.process_pending();
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let kinds = [
            ("Plain", None),
            ("Success", Some(Classification::Success)),
            ("Info", Some(Classification::Info)),
            ("Warning", Some(Classification::Warning)),
            ("Error", Some(Classification::Error)),
        ]
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, (label, kind)| {
            row.push(control(label, Message::Open(kind)))
        });

        let corners = Position::ALL
            .into_iter()
            .fold(Row::new().spacing(spacing::XS), |row, position| {
                row.push(control(position.as_str(), Message::SetPosition(position)))
            });

        let controls = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(Text::new(format!("Corner: {}", self.position)))
            .push(kinds)
            .push(corners)
            .push(control("Close all", Message::CloseAll));

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(controls)
            .push(self.notifications.renderer().view().map(Message::Toast))
            .into()
    }
}

fn control(label: &str, message: Message) -> Element<'_, Message> {
    button(Text::new(label))
        .on_press(message)
        .padding(spacing::XS)
        .into()
}

fn load_config(flags: &Flags) -> Config {
    let loaded = match &flags.config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    loaded.unwrap_or_else(|err| {
        eprintln!("Failed to load notification settings: {err}");
        Config::default()
    })
}
