// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alignment preferences and spacing presets shared with stylesheets.

/// Gap between a bounded anchor and its overlay, in pixels.
pub const BOUNDED_ANCHOR_GAP: f64 = 4.0;

/// Gap between an unbounded anchor and its overlay, in pixels.
pub const UNBOUNDED_ANCHOR_GAP: f64 = 8.0;

/// Minimum clearance the overlay keeps from viewport edges when possible,
/// in pixels.
pub const MIN_VIEWPORT_CLEARANCE: f64 = 8.0;

/// Whether the anchor has a visually declared boundary.
///
/// The variant selects the gap preset used between the anchor and the
/// overlay: a bounded anchor (a button, a chip) reads well with a tight gap,
/// while an unbounded one (an icon without a drawn edge) needs more air.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnchorBoundary {
    /// The anchor has a visible boundary; use [`BOUNDED_ANCHOR_GAP`].
    #[default]
    Bounded,
    /// The anchor has no visible boundary; use [`UNBOUNDED_ANCHOR_GAP`].
    Unbounded,
}

impl AnchorBoundary {
    /// Returns the anchor-to-overlay gap preset for this boundary type.
    #[must_use]
    pub const fn gap(self) -> f64 {
        match self {
            Self::Bounded => BOUNDED_ANCHOR_GAP,
            Self::Unbounded => UNBOUNDED_ANCHOR_GAP,
        }
    }
}

/// Horizontal alignment preference relative to the anchor.
///
/// `Start` and `End` follow reading order: under right-to-left layout they
/// map to the mirrored anchor edges. A preference is a hint; the resolver
/// overrides it when honoring it would push the overlay out of the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum XAlign {
    /// Let the resolver pick: center, then start, then end.
    #[default]
    Detected,
    /// Align the overlay with the reading-order start edge of the anchor.
    Start,
    /// Center the overlay on the anchor.
    Center,
    /// Align the overlay with the reading-order end edge of the anchor.
    End,
}

/// Vertical alignment preference relative to the anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum YAlign {
    /// Let the resolver pick: below, then above.
    #[default]
    Detected,
    /// Place the overlay above the anchor.
    Above,
    /// Place the overlay below the anchor.
    Below,
}
