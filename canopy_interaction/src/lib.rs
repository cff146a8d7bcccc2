// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Interaction: event and timer coordination for overlay surfaces.
//!
//! ## Overview
//!
//! The visibility machine in `canopy_overlay` is deliberately inert: it
//! mutates the surface when told to and nothing else. This crate supplies
//! the telling. [`TooltipController`] maps the transient inputs that drive a
//! tooltip — pointer enter/leave, focus/blur, outside clicks, the escape
//! key, timer and animation-frame callbacks — onto the machine's operations,
//! and owns the two pieces of scheduled work involved:
//!
//! - the **delayed hide**: leaving the anchor hides the overlay only after
//!   [`HIDE_DELAY_MS`], so the pointer can cross a small gap without the
//!   overlay flickering; re-entering cancels the pending hide.
//! - the **frame handoff**: a successful show schedules exactly one
//!   animation-frame callback that applies the shown token, giving the
//!   surface's transition engine a state change to animate.
//!
//! ## Scheduling model
//!
//! The controller never talks to a clock. The host implements [`Scheduler`],
//! issuing opaque [`TimerToken`]/[`FrameToken`] handles, and later delivers
//! fired callbacks through [`TooltipController::handle_timeout`] and
//! [`TooltipController::handle_frame`]. Delivery is token-checked: a
//! callback whose token no longer matches the stored handle — because it was
//! cancelled or replaced after the host had already queued it — is ignored.
//! This keeps cancellation deterministic even for hosts that cannot
//! un-queue work that is already in flight, and it lets
//! [`TooltipController::destroy`] guarantee that no timer, frame request, or
//! document subscription survives disposal.
//!
//! Everything is single-threaded and event-driven; "suspension" is only ever
//! a cooperative callback registered with the host.
//!
//! ## Minimal example
//!
//! ```
//! use canopy_interaction::{Scheduler, TimerToken, FrameToken, TooltipController};
//! use canopy_overlay::{DocumentEvent, Subscription, Surface, VisibilityState};
//! # use kurbo::{Rect, Size};
//! # #[derive(Default)]
//! # struct NullSurface(u64);
//! # impl Surface for NullSurface {
//! #     fn attribute(&self, _: &str) -> Option<String> { None }
//! #     fn set_attribute(&mut self, _: &str, _: &str) {}
//! #     fn add_class(&mut self, _: &str) {}
//! #     fn remove_class(&mut self, _: &str) {}
//! #     fn has_class(&self, _: &str) -> bool { false }
//! #     fn set_style_property(&mut self, _: &str, _: &str) {}
//! #     fn viewport_size(&self) -> Size { Size::new(500.0, 300.0) }
//! #     fn overlay_size(&self) -> Size { Size::new(100.0, 30.0) }
//! #     fn anchor_rect(&self) -> Option<Rect> { Some(Rect::new(32.0, 15.0, 82.0, 35.0)) }
//! #     fn is_right_to_left(&self) -> bool { false }
//! #     fn subscribe_document(&mut self, _: DocumentEvent) -> Subscription {
//! #         self.0 += 1;
//! #         Subscription(self.0)
//! #     }
//! #     fn unsubscribe_document(&mut self, _: Subscription) {}
//! #     fn notify_hidden(&mut self) {}
//! # }
//! # #[derive(Default)]
//! # struct NullScheduler(u64);
//! # impl Scheduler for NullScheduler {
//! #     fn schedule_timeout(&mut self, _: u64) -> TimerToken {
//! #         self.0 += 1;
//! #         TimerToken(self.0)
//! #     }
//! #     fn cancel_timeout(&mut self, _: TimerToken) {}
//! #     fn request_frame(&mut self) -> FrameToken {
//! #         self.0 += 1;
//! #         FrameToken(self.0)
//! #     }
//! #     fn cancel_frame(&mut self, _: FrameToken) {}
//! # }
//! let mut surface = NullSurface::default();
//! let mut scheduler = NullScheduler::default();
//! let mut tooltip = TooltipController::new();
//!
//! // Pointer enters the anchor: shown immediately, frame handoff scheduled.
//! tooltip.handle_anchor_enter(&mut surface, &mut scheduler);
//! assert_eq!(tooltip.visibility().state(), VisibilityState::Showing);
//!
//! // Pointer leaves: the hide happens only after the delay fires.
//! tooltip.handle_anchor_leave(&mut scheduler);
//! assert_eq!(tooltip.visibility().state(), VisibilityState::Showing);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod scheduler;

pub use controller::{TooltipController, HIDE_DELAY_MS};
pub use scheduler::{FrameToken, Scheduler, TimerToken};
