// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tooltip controller: transient inputs mapped onto visibility operations.

use canopy_overlay::{OverlayVisibility, Surface};

use crate::scheduler::{FrameToken, Scheduler, TimerToken};

/// Delay between the pointer leaving the anchor and the overlay hiding,
/// in milliseconds.
pub const HIDE_DELAY_MS: u64 = 600;

/// Coordinates the inputs that drive one tooltip's visibility.
///
/// Owns the visibility machine plus the two scheduling handles: the pending
/// delayed-hide timer and the outstanding show-frame request. Both are
/// cancelled synchronously whenever the opposite operation begins, and both
/// are token-checked on delivery so a callback the host could not un-queue
/// is ignored once stale.
#[derive(Clone, Debug)]
pub struct TooltipController {
    visibility: OverlayVisibility,
    hide_timer: Option<TimerToken>,
    frame: Option<FrameToken>,
    hide_delay_ms: u64,
}

impl Default for TooltipController {
    fn default() -> Self {
        Self::new()
    }
}

impl TooltipController {
    /// Creates a controller around a fresh hidden overlay, using
    /// [`HIDE_DELAY_MS`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_visibility(OverlayVisibility::new())
    }

    /// Creates a controller around a pre-configured visibility machine.
    #[must_use]
    pub fn with_visibility(visibility: OverlayVisibility) -> Self {
        Self {
            visibility,
            hide_timer: None,
            frame: None,
            hide_delay_ms: HIDE_DELAY_MS,
        }
    }

    /// Overrides the delayed-hide interval.
    pub fn set_hide_delay_ms(&mut self, delay_ms: u64) {
        self.hide_delay_ms = delay_ms;
    }

    /// Returns the underlying visibility machine.
    #[must_use]
    pub fn visibility(&self) -> &OverlayVisibility {
        &self.visibility
    }

    /// Returns the visibility machine for configuration (alignment, anchor
    /// boundary) before the next show.
    pub fn visibility_mut(&mut self) -> &mut OverlayVisibility {
        &mut self.visibility
    }

    /// Shows the overlay immediately.
    ///
    /// Cancels any pending delayed hide first. When the machine actually
    /// begins showing, any outstanding frame request is replaced so exactly
    /// one is live for the handoff.
    pub fn show(&mut self, surface: &mut impl Surface, scheduler: &mut impl Scheduler) {
        self.clear_hide_timer(scheduler);
        if self.visibility.begin_show(surface) {
            self.clear_frame(scheduler);
            self.frame = Some(scheduler.request_frame());
        }
    }

    /// Hides the overlay immediately, bypassing the delay.
    pub fn hide(&mut self, surface: &mut impl Surface, scheduler: &mut impl Scheduler) {
        self.clear_hide_timer(scheduler);
        self.clear_frame(scheduler);
        self.visibility.hide(surface);
    }

    /// Pointer entered the anchor.
    pub fn handle_anchor_enter(
        &mut self,
        surface: &mut impl Surface,
        scheduler: &mut impl Scheduler,
    ) {
        self.show(surface, scheduler);
    }

    /// The anchor received keyboard focus.
    pub fn handle_anchor_focus(
        &mut self,
        surface: &mut impl Surface,
        scheduler: &mut impl Scheduler,
    ) {
        self.show(surface, scheduler);
    }

    /// Pointer left the anchor: schedule the delayed hide, replacing any
    /// pending one.
    pub fn handle_anchor_leave(&mut self, scheduler: &mut impl Scheduler) {
        self.clear_hide_timer(scheduler);
        self.hide_timer = Some(scheduler.schedule_timeout(self.hide_delay_ms));
    }

    /// The anchor lost keyboard focus: hide immediately.
    pub fn handle_anchor_blur(
        &mut self,
        surface: &mut impl Surface,
        scheduler: &mut impl Scheduler,
    ) {
        self.hide(surface, scheduler);
    }

    /// A document-level click fired while shown: hide immediately.
    pub fn handle_document_click(
        &mut self,
        surface: &mut impl Surface,
        scheduler: &mut impl Scheduler,
    ) {
        self.hide(surface, scheduler);
    }

    /// A document-level key press fired while shown; only escape dismisses.
    pub fn handle_document_keydown(
        &mut self,
        key: &str,
        surface: &mut impl Surface,
        scheduler: &mut impl Scheduler,
    ) {
        // "Esc" is the legacy spelling some hosts still report.
        if key == "Escape" || key == "Esc" {
            self.hide(surface, scheduler);
        }
    }

    /// Host delivery of a fired timeout. Stale tokens are ignored.
    pub fn handle_timeout(
        &mut self,
        token: TimerToken,
        surface: &mut impl Surface,
        scheduler: &mut impl Scheduler,
    ) {
        if self.hide_timer == Some(token) {
            self.hide_timer = None;
            self.hide(surface, scheduler);
        }
    }

    /// Host delivery of a fired animation frame. Stale tokens are ignored.
    pub fn handle_frame(&mut self, token: FrameToken, surface: &mut impl Surface) {
        if self.frame == Some(token) {
            self.frame = None;
            self.visibility.finish_show_frame(surface);
        }
    }

    /// Forwarded transition-end signal from the surface.
    pub fn handle_transition_end(&mut self, surface: &mut impl Surface) {
        self.visibility.handle_transition_end(surface);
    }

    /// Disposes of the controller: cancels the pending timer and frame and
    /// tears down the visibility machine's surface footprint. Nothing
    /// scheduled or subscribed outlives this call.
    pub fn destroy(&mut self, surface: &mut impl Surface, scheduler: &mut impl Scheduler) {
        self.clear_hide_timer(scheduler);
        self.clear_frame(scheduler);
        self.visibility.destroy(surface);
    }

    fn clear_hide_timer(&mut self, scheduler: &mut impl Scheduler) {
        if let Some(token) = self.hide_timer.take() {
            scheduler.cancel_timeout(token);
        }
    }

    fn clear_frame(&mut self, scheduler: &mut impl Scheduler) {
        if let Some(token) = self.frame.take() {
            scheduler.cancel_frame(token);
        }
    }
}
