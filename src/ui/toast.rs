// SPDX-License-Identifier: MPL-2.0
//! Toast layer: the Iced view of every corner's notification stack.
//!
//! `ToastLayer` is the [`Renderer`] behind a
//! [`NotificationService`]. It keeps one `ToastView` per mounted
//! notification, draws them in a full-window [`Stack`] at their offsets, and
//! fades hidden toasts out over [`EXIT_ANIMATION`]. [`drive`] feeds the fade
//! back into the service: the first frame of a fade finalizes the close
//! (removal and reflow), the last one destroys the view.

use crate::config::DEFAULT_EXIT_ANIMATION_MS;
use crate::notifications::{
    Classification, Edge, Message as Body, NotificationId, NotificationService, Props, Renderer,
};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Stack, Text};
use iced::{alignment, font, Color, Element, Font, Length, Padding, Theme};
use std::time::{Duration, Instant};

/// How long a hidden toast takes to fade out.
pub const EXIT_ANIMATION: Duration = Duration::from_millis(DEFAULT_EXIT_ANIMATION_MS);

/// Messages emitted by the toast layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The close button of a toast was pressed.
    Dismiss(NotificationId),
}

/// Lifecycle signals produced while a toast fades out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The toast started leaving; it can still be measured.
    BeforeLeave(NotificationId),
    /// The fade is over; the view can be unmounted.
    AfterLeave(NotificationId),
}

#[derive(Debug, Clone)]
struct ToastView {
    props: Props,
    body: String,
    offset: f32,
    height: f32,
    visible: bool,
    hidden_at: Option<Instant>,
    before_leave_sent: bool,
    after_leave_sent: bool,
    alpha: f32,
}

impl ToastView {
    fn new(props: &Props, slot: Option<&Body>) -> Self {
        let body = slot
            .map(|content| content.as_str().to_owned())
            .or_else(|| props.message.clone())
            .unwrap_or_default();
        Self {
            height: estimated_height(props.title.as_deref(), &body),
            props: props.clone(),
            body,
            offset: props.offset,
            visible: true,
            hidden_at: None,
            before_leave_sent: false,
            after_leave_sent: false,
            alpha: opacity::OPAQUE,
        }
    }
}

/// Renders mounted notifications and plays their exit fade.
#[derive(Debug, Default)]
pub struct ToastLayer {
    /// Mounted toasts in mount order.
    views: Vec<ToastView>,
}

impl ToastLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of mounted toasts, including fading ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Drawn distance of a toast from its anchored edge.
    #[must_use]
    pub fn offset_of(&self, id: &NotificationId) -> Option<f32> {
        self.find(id).map(|view| view.offset)
    }

    /// Current opacity of a toast, `1.0` while fully shown.
    #[must_use]
    pub fn alpha_of(&self, id: &NotificationId) -> Option<f32> {
        self.find(id).map(|view| view.alpha)
    }

    /// Advances every fade to `now` and returns the lifecycle signals that
    /// became due, `BeforeLeave` always ahead of `AfterLeave` for a toast.
    pub fn advance(&mut self, now: Instant) -> Vec<Transition> {
        let mut transitions = Vec::new();
        for view in self.views.iter_mut().filter(|view| !view.visible) {
            // the fade starts on the first frame after the hide
            let hidden_at = *view.hidden_at.get_or_insert(now);
            let elapsed = now.saturating_duration_since(hidden_at);
            let progress = (elapsed.as_secs_f32() / EXIT_ANIMATION.as_secs_f32()).min(1.0);
            view.alpha = opacity::OPAQUE - progress;

            if !view.before_leave_sent {
                view.before_leave_sent = true;
                transitions.push(Transition::BeforeLeave(view.props.id.clone()));
            }
            if elapsed >= EXIT_ANIMATION && !view.after_leave_sent {
                view.after_leave_sent = true;
                transitions.push(Transition::AfterLeave(view.props.id.clone()));
            }
        }
        transitions
    }

    /// Renders every toast in its corner, later z-indices on top.
    pub fn view(&self) -> Element<'_, Message> {
        if self.views.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let mut ordered: Vec<&ToastView> = self.views.iter().collect();
        ordered.sort_by_key(|view| view.props.z_index);

        ordered
            .into_iter()
            .fold(
                Stack::new().width(Length::Fill).height(Length::Fill),
                |stack, view| stack.push(positioned(view)),
            )
            .into()
    }

    fn find(&self, id: &NotificationId) -> Option<&ToastView> {
        self.views.iter().find(|view| &view.props.id == id)
    }

    fn find_mut(&mut self, id: &NotificationId) -> Option<&mut ToastView> {
        self.views.iter_mut().find(|view| &view.props.id == id)
    }
}

impl Renderer for ToastLayer {
    type Instance = NotificationId;

    fn mount(&mut self, props: &Props, slot: Option<&Body>) -> NotificationId {
        let view = ToastView::new(props, slot);
        self.views.push(view);
        props.id.clone()
    }

    fn unmount(&mut self, instance: NotificationId) {
        self.views.retain(|view| view.props.id != instance);
    }

    fn set_offset(&mut self, instance: &NotificationId, offset: f32) {
        if let Some(view) = self.find_mut(instance) {
            view.offset = offset;
        }
    }

    fn set_visible(&mut self, instance: &NotificationId, visible: bool) {
        if let Some(view) = self.find_mut(instance) {
            if view.visible == visible {
                return;
            }
            view.visible = visible;
            view.hidden_at = None;
            if visible {
                view.alpha = opacity::OPAQUE;
                view.before_leave_sent = false;
                view.after_leave_sent = false;
            }
        }
    }

    fn rendered_height(&self, instance: &NotificationId) -> Option<f32> {
        self.find(instance).map(|view| view.height)
    }

    fn rendered_offset(&self, instance: &NotificationId) -> Option<f32> {
        self.offset_of(instance)
    }
}

/// Runs one frame of the notification lifecycle: auto-dismisses expired
/// toasts, advances fades, and reports leave signals back to the service.
pub fn drive(service: &mut NotificationService<ToastLayer>, now: Instant) {
    service.tick(now);
    for transition in service.renderer_mut().advance(now) {
        match transition {
            Transition::BeforeLeave(id) => {
                service.finalize_close(&id);
            }
            Transition::AfterLeave(id) => {
                service.destroy(&id);
            }
        }
    }
}

/// Height a toast will take once laid out, from its title and wrapped body.
#[must_use]
pub fn estimated_height(title: Option<&str>, body: &str) -> f32 {
    let text_width = sizing::TOAST_WIDTH - 2.0 * spacing::SM - 2.0 * sizing::ICON_MD - 2.0 * spacing::SM;
    // average glyph advance is a bit over half the font size
    let chars_per_line = (text_width / (typography::BODY * 0.55)).floor().max(1.0);
    let body_lines: f32 = body
        .lines()
        .map(|line| (line.chars().count() as f32 / chars_per_line).ceil().max(1.0))
        .sum::<f32>()
        .max(1.0);

    let mut height = 2.0 * spacing::SM + body_lines * typography::BODY * typography::LINE_HEIGHT;
    if title.is_some() {
        height += typography::TITLE_SM * typography::LINE_HEIGHT + spacing::XXS;
    }
    height.max(sizing::ICON_MD + 2.0 * spacing::SM)
}

/// Places a toast card in its corner at its offset.
fn positioned(view: &ToastView) -> Element<'_, Message> {
    let position = view.props.position;
    let (padding, vertical) = match position.edge() {
        Edge::Top => (
            Padding {
                top: view.offset,
                right: spacing::MD,
                bottom: 0.0,
                left: spacing::MD,
            },
            alignment::Vertical::Top,
        ),
        Edge::Bottom => (
            Padding {
                top: 0.0,
                right: spacing::MD,
                bottom: view.offset,
                left: spacing::MD,
            },
            alignment::Vertical::Bottom,
        ),
    };
    let horizontal = if position.is_left() {
        alignment::Horizontal::Left
    } else {
        alignment::Horizontal::Right
    };

    Container::new(card(view))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(horizontal)
        .align_y(vertical)
        .padding(padding)
        .into()
}

/// Layout: [glyph] [title / body] [dismiss]
fn card(view: &ToastView) -> Element<'_, Message> {
    let accent = accent_color(view.props.classification);
    let alpha = view.alpha;

    let mut body = Column::new().spacing(spacing::XXS);
    if let Some(title) = view.props.title.as_deref() {
        body = body.push(
            Text::new(title)
                .size(typography::TITLE_SM)
                .font(Font {
                    weight: font::Weight::Bold,
                    ..Font::DEFAULT
                })
                .style(move |theme: &Theme| text::Style {
                    color: Some(fade(theme.palette().text, alpha)),
                }),
        );
    }
    body = body.push(
        Text::new(view.body.as_str())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(fade(theme.palette().text, alpha)),
            }),
    );

    let glyph = Text::new(classification_glyph(view.props.classification))
        .size(typography::TITLE_SM)
        .style(move |_theme: &Theme| text::Style {
            color: Some(fade(accent, alpha)),
        });

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(glyph)
                .width(Length::Fixed(sizing::ICON_MD))
                .align_x(alignment::Horizontal::Center),
        )
        .push(
            Container::new(body)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    // a fading toast no longer accepts a second dismiss
    if view.props.show_close && view.visible {
        content = content.push(
            button(Text::new("×").size(typography::BODY))
                .on_press(Message::Dismiss(view.props.id.clone()))
                .padding(spacing::XXS)
                .style(dismiss_button_style),
        );
    }

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent, alpha))
        .into()
}

fn accent_color(classification: Option<Classification>) -> Color {
    match classification {
        Some(Classification::Success) => palette::SUCCESS_500,
        Some(Classification::Info) => palette::INFO_500,
        Some(Classification::Warning) => palette::WARNING_500,
        Some(Classification::Error) => palette::ERROR_500,
        None => palette::GRAY_400,
    }
}

fn classification_glyph(classification: Option<Classification>) -> &'static str {
    match classification {
        Some(Classification::Success) => "✓",
        Some(Classification::Info) | None => "i",
        Some(Classification::Warning) => "!",
        Some(Classification::Error) => "✕",
    }
}

fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(fade(bg_color, alpha))),
        border: iced::Border {
            color: fade(accent_color, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: fade(shadow::MD.color, alpha * opacity::OVERLAY_MEDIUM),
            ..shadow::MD
        },
        text_color: Some(fade(theme.palette().text, alpha)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_fill = |a: f32| {
        Some(iced::Background::Color(Color {
            a,
            ..palette::GRAY_400
        }))
    };

    let (background, text_color) = match status {
        button::Status::Active => (None, base.text),
        button::Status::Hovered => (hover_fill(opacity::OVERLAY_SUBTLE), base.text),
        button::Status::Pressed => (hover_fill(opacity::OVERLAY_MEDIUM), base.text),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
        ),
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{Options, Position};
    use crate::test_utils::{assert_abs_diff_eq, PX_EPSILON};

    fn later(by: Duration) -> Instant {
        Instant::now() + by
    }

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent, opacity::OPAQUE);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn faded_container_is_transparent() {
        let style = toast_container_style(&Theme::Light, palette::ERROR_500, opacity::TRANSPARENT);
        assert_abs_diff_eq!(style.border.color.a, 0.0, epsilon = PX_EPSILON);
    }

    #[test]
    fn dismiss_button_is_flat_until_hovered() {
        let theme = Theme::Dark;
        assert!(dismiss_button_style(&theme, button::Status::Active).background.is_none());
        assert!(dismiss_button_style(&theme, button::Status::Hovered).background.is_some());
    }

    #[test]
    fn height_grows_with_title_and_long_bodies() {
        let short = estimated_height(None, "Saved");
        let titled = estimated_height(Some("Export"), "Saved");
        let long = estimated_height(None, &"word ".repeat(60));
        let multiline = estimated_height(None, "one\ntwo\nthree");

        assert_abs_diff_eq!(short, sizing::ICON_MD + 2.0 * spacing::SM, epsilon = PX_EPSILON);
        assert!(titled > short);
        assert!(long > short);
        assert!(multiline > short);
    }

    #[test]
    fn mount_measures_and_positions() {
        let mut service = NotificationService::new(ToastLayer::new());
        let a = service.open(Options::new("A").title("Hello")).expect("interactive");
        let b = service.open(Options::new("B")).expect("interactive");

        let layer = service.renderer();
        assert_eq!(layer.len(), 2);
        let height_a = layer.rendered_height(a.id()).expect("mounted");
        assert_abs_diff_eq!(
            layer.offset_of(b.id()).unwrap_or_default(),
            80.0 + height_a + 16.0 + 16.0,
            epsilon = PX_EPSILON
        );
    }

    #[test]
    fn fade_reports_before_then_after_leave() {
        let mut layer = ToastLayer::new();
        let props = Props {
            id: NotificationId::from_seed(1),
            position: Position::TopLeft,
            offset: 96.0,
            z_index: 1,
            classification: None,
            title: None,
            message: Some("x".into()),
            show_close: true,
            custom_class: None,
        };
        let id = layer.mount(&props, None);
        assert!(layer.advance(later(Duration::ZERO)).is_empty());

        layer.set_visible(&id, false);
        let first = layer.advance(Instant::now());
        assert_eq!(first, vec![Transition::BeforeLeave(id.clone())]);

        let last = layer.advance(later(EXIT_ANIMATION));
        assert_eq!(last, vec![Transition::AfterLeave(id.clone())]);
        assert_abs_diff_eq!(layer.alpha_of(&id).unwrap_or(1.0), 0.0, epsilon = PX_EPSILON);
        assert!(layer.advance(later(EXIT_ANIMATION * 2)).is_empty());
    }

    #[test]
    fn fade_follows_the_frame_clock() {
        let mut layer = ToastLayer::new();
        let props = Props {
            id: NotificationId::from_seed(1),
            position: Position::BottomRight,
            offset: 96.0,
            z_index: 1,
            classification: None,
            title: None,
            message: Some("x".into()),
            show_close: true,
            custom_class: None,
        };
        let id = layer.mount(&props, None);
        layer.set_visible(&id, false);

        // a frame clock well ahead of the wall clock
        let start = later(Duration::from_secs(3600));
        assert_eq!(layer.advance(start), vec![Transition::BeforeLeave(id.clone())]);
        assert!(layer.advance(start + EXIT_ANIMATION / 2).is_empty());
        assert_abs_diff_eq!(layer.alpha_of(&id).unwrap_or_default(), 0.5, epsilon = 1e-3);
        assert_eq!(
            layer.advance(start + EXIT_ANIMATION),
            vec![Transition::AfterLeave(id.clone())]
        );
    }

    #[test]
    fn drive_collapses_gap_then_unmounts() {
        let mut service = NotificationService::new(ToastLayer::new());
        let a = service.open(Options::new("A")).expect("interactive");
        let b = service.open(Options::new("B")).expect("interactive");

        a.close(&mut service);
        drive(&mut service, Instant::now());

        assert_eq!(service.len(), 1);
        assert_eq!(service.renderer().len(), 2);
        assert_abs_diff_eq!(
            service.renderer().offset_of(b.id()).unwrap_or_default(),
            96.0,
            epsilon = PX_EPSILON
        );

        drive(&mut service, later(EXIT_ANIMATION));
        assert_eq!(service.renderer().len(), 1);
        assert_eq!(service.leaving_count(), 0);
    }

    #[test]
    fn dismiss_button_disappears_once_hidden() {
        let mut service = NotificationService::new(ToastLayer::new());
        let a = service.open(Options::new("A")).expect("interactive");
        a.close(&mut service);

        let layer = service.renderer();
        let view = layer.find(a.id()).expect("still mounted");
        assert!(!view.visible);
        // building the element must not panic for fading toasts
        let _ = layer.view();
    }

    #[test]
    fn empty_layer_renders() {
        let layer = ToastLayer::new();
        let _ = layer.view();
    }
}
