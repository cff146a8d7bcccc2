// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The overlay visibility state machine.

use alloc::format;
use alloc::string::String;

use canopy_position::{AnchorBoundary, PlacementRequest, XAlign, YAlign};

use crate::surface::{DocumentEvent, Subscription, Surface};

/// Class tokens forming the wire contract with styling.
///
/// Spellings are stable; stylesheets key their transitions off them.
pub mod token {
    /// Applied immediately on show; entry transition in progress.
    pub const SHOWING: &str = "canopy-overlay--showing";
    /// Applied one frame after [`SHOWING`]; the overlay is fully visible.
    pub const SHOWN: &str = "canopy-overlay--shown";
    /// Applied on hide; exit in progress.
    pub const HIDE: &str = "canopy-overlay--hide";
    /// Applied together with [`HIDE`]; removed with it on transition end.
    pub const HIDE_TRANSITION: &str = "canopy-overlay--hide-transition";
}

/// Attribute toggled to reflect visibility to assistive technology.
pub const HIDDEN_ATTR: &str = "aria-hidden";

/// Visibility of the overlay surface.
///
/// `Hidden` and `Shown` are stable; `Showing` and `Hiding` are transient,
/// bounded by the surface's transition-end signal or explicit cancellation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VisibilityState {
    /// Not visible; no transition in flight.
    #[default]
    Hidden,
    /// Entry transition in flight.
    Showing,
    /// Fully visible; no transition in flight.
    Shown,
    /// Exit transition in flight.
    Hiding,
}

/// State machine owning the visibility of one overlay.
///
/// All mutation goes through the [`Surface`] passed to each operation; the
/// machine persists only the [`VisibilityState`], the two document
/// subscriptions live while shown, and the placement preferences. Geometry
/// is queried fresh from the surface on every show.
#[derive(Clone, Debug, Default)]
pub struct OverlayVisibility {
    state: VisibilityState,
    boundary: AnchorBoundary,
    x_align: XAlign,
    y_align: YAlign,
    click_subscription: Option<Subscription>,
    keydown_subscription: Option<Subscription>,
}

impl OverlayVisibility {
    /// Creates a hidden overlay with default placement preferences.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current visibility state.
    #[must_use]
    pub fn state(&self) -> VisibilityState {
        self.state
    }

    /// Returns `true` while the overlay is showing or fully shown.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        matches!(
            self.state,
            VisibilityState::Showing | VisibilityState::Shown
        )
    }

    /// Sets the alignment preference used on subsequent shows.
    pub fn set_alignment(&mut self, x_align: XAlign, y_align: YAlign) {
        self.x_align = x_align;
        self.y_align = y_align;
    }

    /// Sets the anchor boundary type, selecting the gap preset used on
    /// subsequent shows.
    pub fn set_anchor_boundary(&mut self, boundary: AnchorBoundary) {
        self.boundary = boundary;
    }

    /// Starts showing the overlay.
    ///
    /// No-op returning `false` when already showing or shown. Otherwise
    /// clears any in-flight hide, applies the showing token, positions the
    /// overlay from fresh surface geometry, subscribes the document
    /// dismissal handlers, and returns `true` — the caller must then
    /// schedule [`finish_show_frame`](Self::finish_show_frame) for the next
    /// animation frame so the surface's transition engine observes a token
    /// change rather than starting in the end state.
    pub fn begin_show(&mut self, surface: &mut impl Surface) -> bool {
        if self.is_shown() {
            return false;
        }
        self.state = VisibilityState::Showing;

        surface.set_attribute(HIDDEN_ATTR, "false");
        // A show during Hiding cancels the exit transition in place.
        surface.remove_class(token::HIDE);
        surface.remove_class(token::HIDE_TRANSITION);
        surface.add_class(token::SHOWING);

        let position = PlacementRequest {
            anchor: surface.anchor_rect(),
            overlay: surface.overlay_size(),
            viewport: surface.viewport_size(),
            boundary: self.boundary,
            x_align: self.x_align,
            y_align: self.y_align,
            rtl: surface.is_right_to_left(),
        }
        .resolve();
        surface.set_style_property("top", &px(position.y));
        surface.set_style_property("left", &px(position.x));

        self.click_subscription = Some(surface.subscribe_document(DocumentEvent::Click));
        self.keydown_subscription = Some(surface.subscribe_document(DocumentEvent::KeyDown));
        true
    }

    /// Completes the two-step entry by applying the shown token.
    ///
    /// Invoked from the animation-frame callback scheduled after
    /// [`begin_show`](Self::begin_show); a no-op unless the overlay is still
    /// in the entry transition.
    pub fn finish_show_frame(&mut self, surface: &mut impl Surface) {
        if self.state != VisibilityState::Showing {
            return;
        }
        surface.add_class(token::SHOWN);
    }

    /// Starts hiding the overlay.
    ///
    /// No-op returning `false` when already hidden or hiding. Otherwise
    /// applies the hide tokens, releases the document subscriptions, and
    /// returns `true` — the caller must cancel any pending animation-frame
    /// request from the interrupted show.
    pub fn hide(&mut self, surface: &mut impl Surface) -> bool {
        if !self.is_shown() {
            return false;
        }
        self.state = VisibilityState::Hiding;

        surface.set_attribute(HIDDEN_ATTR, "true");
        surface.remove_class(token::SHOWING);
        surface.add_class(token::HIDE);
        surface.add_class(token::HIDE_TRANSITION);
        surface.remove_class(token::SHOWN);

        self.release_subscriptions(surface);
        true
    }

    /// Handles the surface's transition-end signal.
    ///
    /// Removes the transient tokens. When the completed transition was a
    /// hide — detected via the presence of the hide token at call time —
    /// the machine settles in `Hidden` and emits exactly one
    /// [`Surface::notify_hidden`]; when it was an entry the machine settles
    /// in `Shown`.
    pub fn handle_transition_end(&mut self, surface: &mut impl Surface) {
        let was_hiding = surface.has_class(token::HIDE);

        surface.remove_class(token::SHOWING);
        surface.remove_class(token::HIDE);
        surface.remove_class(token::HIDE_TRANSITION);

        if was_hiding {
            self.state = VisibilityState::Hidden;
            surface.notify_hidden();
        } else if self.state == VisibilityState::Showing {
            self.state = VisibilityState::Shown;
        }
    }

    /// Disposes of the machine's surface footprint.
    ///
    /// Forces immediate removal of all transition tokens and releases any
    /// live document subscriptions; the machine settles in `Hidden`. Safe to
    /// call in any state.
    pub fn destroy(&mut self, surface: &mut impl Surface) {
        surface.remove_class(token::SHOWING);
        surface.remove_class(token::SHOWN);
        surface.remove_class(token::HIDE);
        surface.remove_class(token::HIDE_TRANSITION);
        self.release_subscriptions(surface);
        self.state = VisibilityState::Hidden;
    }

    fn release_subscriptions(&mut self, surface: &mut impl Surface) {
        if let Some(subscription) = self.click_subscription.take() {
            surface.unsubscribe_document(subscription);
        }
        if let Some(subscription) = self.keydown_subscription.take() {
            surface.unsubscribe_document(subscription);
        }
    }
}

fn px(value: f64) -> String {
    format!("{value}px")
}
