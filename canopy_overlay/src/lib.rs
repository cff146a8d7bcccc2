// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Overlay: a visibility state machine for anchored overlay surfaces.
//!
//! ## Overview
//!
//! This crate owns the lifecycle of a single overlay (a tooltip, a hint
//! bubble): when it is visible, which class tokens are applied to it, where
//! it is positioned, and which document-level dismissal subscriptions are
//! live. It performs no rendering itself. All mutation goes through the
//! [`Surface`] capability trait, which any concrete UI binding implements;
//! the machine is agnostic to how classes, attributes, and styles are
//! realized.
//!
//! ## State machine
//!
//! ```text
//! Hidden --begin_show--> Showing --transition end--> Shown
//!   ^                                                  |
//!   +--- transition end (notify_hidden) --- Hiding <--hide
//! ```
//!
//! `Hidden` and `Shown` are stable. `Showing` and `Hiding` are bounded by the
//! surface's transition-end signal. A show during `Hiding` or a hide during
//! `Showing` cancels the in-flight opposite and proceeds; there is no queued
//! state, and repeated shows or hides are idempotent no-ops.
//!
//! Entry is two-step on purpose: [`OverlayVisibility::begin_show`] applies
//! the showing token and positioning immediately and returns `true`, and the
//! caller schedules [`OverlayVisibility::finish_show_frame`] for the next
//! animation frame. The surface's transition engine then observes an actual
//! token change rather than starting in the end state. The companion crate
//! `canopy_interaction` owns that frame handoff along with the hide delay.
//!
//! ## Class-token contract
//!
//! The tokens in [`token`] and the [`HIDDEN_ATTR`] attribute are the wire
//! contract with styling; their spellings are stable. Stylesheets key
//! transitions off the showing/shown pair and the hide/hide-transition pair.
//!
//! ## Minimal example
//!
//! ```
//! use canopy_overlay::{DocumentEvent, OverlayVisibility, Subscription, Surface, VisibilityState};
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
//! let mut surface = NullSurface::default();
//! let mut overlay = OverlayVisibility::new();
//!
//! // Entry is two-step: the caller schedules the frame handoff.
//! assert!(overlay.begin_show(&mut surface));
//! overlay.finish_show_frame(&mut surface);
//! assert_eq!(overlay.state(), VisibilityState::Showing);
//!
//! // The surface reports the enter transition finished.
//! overlay.handle_transition_end(&mut surface);
//! assert_eq!(overlay.state(), VisibilityState::Shown);
//!
//! // A second show is absorbed.
//! assert!(!overlay.begin_show(&mut surface));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod surface;
mod visibility;

pub use canopy_position::{AnchorBoundary, XAlign, YAlign};
pub use surface::{DocumentEvent, Subscription, Surface};
pub use visibility::{token, HIDDEN_ATTR, OverlayVisibility, VisibilityState};
