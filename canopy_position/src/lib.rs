// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Position: viewport-aware placement for anchored overlay surfaces.
//!
//! ## Overview
//!
//! This crate answers one question: given the bounding rectangle of an anchor
//! element, the rendered size of an overlay (a tooltip, a popover), and the
//! size of the viewport that must contain it, where should the overlay's
//! top-left corner go?
//!
//! The answer honors a caller-supplied alignment preference when it can, keeps
//! the overlay clear of the viewport edges when it can, and always terminates
//! with a usable coordinate even when the anchor is degenerate or the viewport
//! is smaller than the overlay.
//!
//! ## Placement model
//!
//! Horizontal placement considers three candidates relative to the anchor:
//! *start*, *center*, and *end*. Under right-to-left layout the start and end
//! candidates swap edges, so `XAlign::Start` always means "the reading-order
//! start of the anchor". Vertical placement considers *below* (the default)
//! and *above*, separated from the anchor by a gap preset selected with
//! [`AnchorBoundary`].
//!
//! Candidates are ranked in two tiers:
//!
//! 1. **Clearance-safe**: at least [`MIN_VIEWPORT_CLEARANCE`] away from both
//!    viewport edges on the axis.
//! 2. **Viewport-safe**: merely not overflowing the viewport.
//!
//! The weaker tier is consulted only when the stronger one is empty. Within
//! the active tier the caller's preference wins if present; otherwise
//! detection order applies (center, start, end horizontally; below, above
//! vertically). When both tiers are empty the resolver falls back to the
//! centered/below coordinate unconditionally — the anchor is assumed to be
//! off-screen or the viewport narrower than the overlay, and the fallback
//! exists to guarantee termination, not to find an optimal layout.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect, Size};
//! use canopy_position::{AnchorBoundary, PlacementRequest};
//!
//! let request = PlacementRequest {
//!     anchor: Some(Rect::new(32.0, 15.0, 82.0, 35.0)),
//!     overlay: Size::new(100.0, 30.0),
//!     viewport: Size::new(500.0, 300.0),
//!     boundary: AnchorBoundary::Bounded,
//!     ..PlacementRequest::default()
//! };
//!
//! // The centered candidate would poke past the left viewport edge, so the
//! // start-aligned one is chosen; vertically the overlay sits below the
//! // anchor separated by the bounded gap.
//! assert_eq!(request.resolve(), Point::new(32.0, 39.0));
//! ```
//!
//! This crate is `no_std` compatible. Enable the `std` or `libm` feature to
//! select how Kurbo obtains its float intrinsics.

#![no_std]

mod align;
mod resolve;

pub use align::{
    AnchorBoundary, XAlign, YAlign, BOUNDED_ANCHOR_GAP, MIN_VIEWPORT_CLEARANCE,
    UNBOUNDED_ANCHOR_GAP,
};
pub use resolve::PlacementRequest;
