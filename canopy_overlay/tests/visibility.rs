// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Behavioral tests for the visibility machine over a recording surface.

use canopy_overlay::{
    token, AnchorBoundary, DocumentEvent, OverlayVisibility, Subscription, Surface,
    VisibilityState, XAlign, YAlign, HIDDEN_ATTR,
};
use kurbo::{Rect, Size};

/// Surface that records every mutation the machine performs, so tests can
/// assert on the full side-effect trace of each operation.
struct RecordingSurface {
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    styles: Vec<(String, String)>,
    subscriptions: Vec<(DocumentEvent, Subscription)>,
    next_subscription: u64,
    subscribe_count: u32,
    unsubscribe_count: u32,
    hidden_notifications: u32,
    viewport: Size,
    overlay: Size,
    anchor: Option<Rect>,
    rtl: bool,
}

impl RecordingSurface {
    fn new() -> Self {
        Self {
            attributes: Vec::new(),
            classes: Vec::new(),
            styles: Vec::new(),
            subscriptions: Vec::new(),
            next_subscription: 0,
            subscribe_count: 0,
            unsubscribe_count: 0,
            hidden_notifications: 0,
            viewport: Size::new(500.0, 300.0),
            overlay: Size::new(100.0, 30.0),
            anchor: Some(Rect::new(32.0, 15.0, 82.0, 35.0)),
            rtl: false,
        }
    }

    fn style(&self, name: &str) -> Option<&str> {
        self.styles
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl Surface for RecordingSurface {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.push((name.into(), value.into()));
    }

    fn add_class(&mut self, token: &str) {
        if !self.has_class(token) {
            self.classes.push(token.into());
        }
    }

    fn remove_class(&mut self, token: &str) {
        self.classes.retain(|t| t != token);
    }

    fn has_class(&self, token: &str) -> bool {
        self.classes.iter().any(|t| t == token)
    }

    fn set_style_property(&mut self, name: &str, value: &str) {
        self.styles.push((name.into(), value.into()));
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn overlay_size(&self) -> Size {
        self.overlay
    }

    fn anchor_rect(&self) -> Option<Rect> {
        self.anchor
    }

    fn is_right_to_left(&self) -> bool {
        self.rtl
    }

    fn subscribe_document(&mut self, event: DocumentEvent) -> Subscription {
        self.next_subscription += 1;
        self.subscribe_count += 1;
        let subscription = Subscription(self.next_subscription);
        self.subscriptions.push((event, subscription));
        subscription
    }

    fn unsubscribe_document(&mut self, subscription: Subscription) {
        self.unsubscribe_count += 1;
        self.subscriptions.retain(|(_, s)| *s != subscription);
    }

    fn notify_hidden(&mut self) {
        self.hidden_notifications += 1;
    }
}

#[test]
fn show_applies_tokens_position_and_subscriptions() {
    let mut surface = RecordingSurface::new();
    let mut overlay = OverlayVisibility::new();

    assert!(overlay.begin_show(&mut surface));

    assert_eq!(surface.attribute(HIDDEN_ATTR).as_deref(), Some("false"));
    assert!(surface.has_class(token::SHOWING));
    assert!(!surface.has_class(token::SHOWN));
    assert_eq!(surface.style("top"), Some("39px"));
    assert_eq!(surface.style("left"), Some("32px"));
    assert_eq!(surface.subscriptions.len(), 2);
    assert!(
        surface
            .subscriptions
            .iter()
            .any(|(e, _)| *e == DocumentEvent::Click),
        "click handler should be subscribed while shown"
    );
    assert!(
        surface
            .subscriptions
            .iter()
            .any(|(e, _)| *e == DocumentEvent::KeyDown),
        "keydown handler should be subscribed while shown"
    );

    overlay.finish_show_frame(&mut surface);
    assert!(surface.has_class(token::SHOWN));
}

#[test]
fn double_show_produces_side_effects_exactly_once() {
    let mut surface = RecordingSurface::new();
    let mut overlay = OverlayVisibility::new();

    assert!(overlay.begin_show(&mut surface));
    assert!(!overlay.begin_show(&mut surface));

    assert_eq!(surface.subscribe_count, 2);
    assert_eq!(surface.styles.len(), 2);
    assert_eq!(surface.attributes.len(), 1);
}

#[test]
fn hide_before_show_touches_nothing() {
    let mut surface = RecordingSurface::new();
    let mut overlay = OverlayVisibility::new();

    assert!(!overlay.hide(&mut surface));

    assert!(surface.attributes.is_empty());
    assert!(surface.classes.is_empty());
    assert!(surface.styles.is_empty());
    assert_eq!(surface.unsubscribe_count, 0);
}

#[test]
fn hide_swaps_tokens_and_releases_subscriptions() {
    let mut surface = RecordingSurface::new();
    let mut overlay = OverlayVisibility::new();

    overlay.begin_show(&mut surface);
    overlay.finish_show_frame(&mut surface);
    overlay.handle_transition_end(&mut surface);
    assert!(overlay.hide(&mut surface));

    assert_eq!(surface.attribute(HIDDEN_ATTR).as_deref(), Some("true"));
    assert!(!surface.has_class(token::SHOWING));
    assert!(!surface.has_class(token::SHOWN));
    assert!(surface.has_class(token::HIDE));
    assert!(surface.has_class(token::HIDE_TRANSITION));
    assert!(
        surface.subscriptions.is_empty(),
        "document handlers must not leak past hide"
    );
    assert_eq!(surface.unsubscribe_count, 2);
}

#[test]
fn transition_end_after_hide_notifies_exactly_once() {
    let mut surface = RecordingSurface::new();
    let mut overlay = OverlayVisibility::new();

    overlay.begin_show(&mut surface);
    overlay.handle_transition_end(&mut surface);
    overlay.hide(&mut surface);
    overlay.handle_transition_end(&mut surface);

    assert_eq!(surface.hidden_notifications, 1);
    assert_eq!(overlay.state(), VisibilityState::Hidden);
    assert!(!surface.has_class(token::HIDE));
    assert!(!surface.has_class(token::HIDE_TRANSITION));

    // A stray transition end after settling does not notify again.
    overlay.handle_transition_end(&mut surface);
    assert_eq!(surface.hidden_notifications, 1);
}

#[test]
fn transition_end_after_show_never_notifies() {
    let mut surface = RecordingSurface::new();
    let mut overlay = OverlayVisibility::new();

    overlay.begin_show(&mut surface);
    overlay.finish_show_frame(&mut surface);
    overlay.handle_transition_end(&mut surface);

    assert_eq!(surface.hidden_notifications, 0);
    assert_eq!(overlay.state(), VisibilityState::Shown);
    assert!(!surface.has_class(token::SHOWING));
    assert!(surface.has_class(token::SHOWN));
}

#[test]
fn show_during_hiding_clears_hide_tokens_and_resubscribes() {
    let mut surface = RecordingSurface::new();
    let mut overlay = OverlayVisibility::new();

    overlay.begin_show(&mut surface);
    overlay.handle_transition_end(&mut surface);
    overlay.hide(&mut surface);

    assert!(overlay.begin_show(&mut surface));
    assert!(!surface.has_class(token::HIDE));
    assert!(!surface.has_class(token::HIDE_TRANSITION));
    assert!(surface.has_class(token::SHOWING));
    assert_eq!(surface.subscriptions.len(), 2);
    assert_eq!(surface.attribute(HIDDEN_ATTR).as_deref(), Some("false"));
}

#[test]
fn finish_show_frame_is_inert_after_hide() {
    let mut surface = RecordingSurface::new();
    let mut overlay = OverlayVisibility::new();

    overlay.begin_show(&mut surface);
    overlay.hide(&mut surface);
    // The coordinator cancels the frame, but a racing host may still deliver
    // it; the machine must not resurrect the shown token.
    overlay.finish_show_frame(&mut surface);

    assert!(!surface.has_class(token::SHOWN));
}

#[test]
fn absent_anchor_positions_at_origin() {
    let mut surface = RecordingSurface::new();
    surface.anchor = None;
    let mut overlay = OverlayVisibility::new();

    overlay.begin_show(&mut surface);

    assert_eq!(surface.style("top"), Some("0px"));
    assert_eq!(surface.style("left"), Some("0px"));
}

#[test]
fn placement_preferences_flow_through_to_styles() {
    let mut surface = RecordingSurface::new();
    surface.anchor = Some(Rect::new(100.0, 100.0, 300.0, 120.0));
    surface.overlay = Size::new(40.0, 30.0);
    let mut overlay = OverlayVisibility::new();
    overlay.set_alignment(XAlign::End, YAlign::Above);
    overlay.set_anchor_boundary(AnchorBoundary::Unbounded);

    overlay.begin_show(&mut surface);

    // End-aligned: 300 - 40; above with the unbounded gap: 100 - (8 + 30).
    assert_eq!(surface.style("left"), Some("260px"));
    assert_eq!(surface.style("top"), Some("62px"));
}

#[test]
fn rtl_layout_mirrors_detected_placement() {
    let mut surface = RecordingSurface::new();
    surface.anchor = Some(Rect::new(0.0, 15.0, 100.0, 35.0));
    surface.overlay = Size::new(50.0, 30.0);
    surface.rtl = true;
    let mut overlay = OverlayVisibility::new();
    overlay.set_alignment(XAlign::Start, YAlign::Detected);

    overlay.begin_show(&mut surface);

    assert_eq!(surface.style("left"), Some("50px"));
}

#[test]
fn destroy_removes_all_tokens_and_subscriptions() {
    let mut surface = RecordingSurface::new();
    let mut overlay = OverlayVisibility::new();

    overlay.begin_show(&mut surface);
    overlay.finish_show_frame(&mut surface);
    overlay.destroy(&mut surface);

    assert!(surface.classes.is_empty());
    assert!(surface.subscriptions.is_empty());
    assert_eq!(overlay.state(), VisibilityState::Hidden);
}

#[test]
fn subscriptions_pair_exactly_once_per_cycle() {
    let mut surface = RecordingSurface::new();
    let mut overlay = OverlayVisibility::new();

    for _ in 0..3 {
        overlay.begin_show(&mut surface);
        overlay.handle_transition_end(&mut surface);
        overlay.hide(&mut surface);
        overlay.handle_transition_end(&mut surface);
    }

    assert_eq!(surface.subscribe_count, 6);
    assert_eq!(surface.unsubscribe_count, 6);
    assert!(surface.subscriptions.is_empty());
}
