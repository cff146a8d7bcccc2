// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement resolution: map anchor geometry and preferences to a coordinate.

use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

use crate::align::{AnchorBoundary, MIN_VIEWPORT_CLEARANCE, XAlign, YAlign};

/// Horizontal candidate positions, in detection order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum XCandidate {
    Center,
    Start,
    End,
}

/// Vertical candidate positions, in detection order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum YCandidate {
    Below,
    Above,
}

/// One placement query: anchor geometry, overlay size, viewport bounds, and
/// caller preferences.
///
/// All geometric inputs are snapshots taken by the caller immediately before
/// resolution; nothing here is cached across shows.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementRequest {
    /// Bounding rectangle of the anchor, or `None` when the anchor could not
    /// be resolved. An absent anchor yields the origin rather than an error.
    pub anchor: Option<Rect>,
    /// Rendered size of the overlay being placed.
    pub overlay: Size,
    /// Size of the viewport the overlay must stay within.
    pub viewport: Size,
    /// Boundary type of the anchor, selecting the gap preset.
    pub boundary: AnchorBoundary,
    /// Horizontal alignment preference.
    pub x_align: XAlign,
    /// Vertical alignment preference.
    pub y_align: YAlign,
    /// Whether the surrounding layout is right-to-left.
    pub rtl: bool,
}

impl Default for PlacementRequest {
    fn default() -> Self {
        Self {
            anchor: None,
            overlay: Size::ZERO,
            viewport: Size::ZERO,
            boundary: AnchorBoundary::default(),
            x_align: XAlign::default(),
            y_align: YAlign::default(),
            rtl: false,
        }
    }
}

impl PlacementRequest {
    /// Resolves the request to a top-left coordinate for the overlay.
    ///
    /// Never fails: an absent anchor resolves to [`Point::ZERO`], and inputs
    /// where no candidate fits the viewport fall back to the centered/below
    /// coordinate to guarantee termination.
    #[must_use]
    pub fn resolve(&self) -> Point {
        let Some(anchor) = self.anchor else {
            return Point::ZERO;
        };
        Point::new(self.resolve_x(&anchor), self.resolve_y(&anchor))
    }

    fn resolve_x(&self, anchor: &Rect) -> f64 {
        let width = self.overlay.width;
        // Reading-order start/end swap edges under RTL.
        let (start, end) = if self.rtl {
            (anchor.x1 - width, anchor.x0)
        } else {
            (anchor.x0, anchor.x1 - width)
        };
        let center = anchor.x0 + (anchor.width() - width) / 2.0;
        let position = |candidate: XCandidate| match candidate {
            XCandidate::Start => start,
            XCandidate::Center => center,
            XCandidate::End => end,
        };

        let mut clearance_safe: SmallVec<[XCandidate; 3]> = SmallVec::new();
        let mut viewport_safe: SmallVec<[XCandidate; 3]> = SmallVec::new();
        for candidate in [XCandidate::Center, XCandidate::Start, XCandidate::End] {
            let pos = position(candidate);
            if self.x_honors_clearance(pos) {
                clearance_safe.push(candidate);
            } else if self.x_fits_viewport(pos) {
                viewport_safe.push(candidate);
            }
        }
        // The weaker tier is consulted only when the stronger one is empty.
        let active = if clearance_safe.is_empty() {
            &viewport_safe
        } else {
            &clearance_safe
        };

        let requested = match self.x_align {
            XAlign::Detected => None,
            XAlign::Start => Some(XCandidate::Start),
            XAlign::Center => Some(XCandidate::Center),
            XAlign::End => Some(XCandidate::End),
        };
        if let Some(requested) = requested {
            if active.contains(&requested) {
                return position(requested);
            }
        }
        for candidate in [XCandidate::Center, XCandidate::Start, XCandidate::End] {
            if active.contains(&candidate) {
                return position(candidate);
            }
        }
        // Last resort when nothing fits; guarantees termination only.
        center
    }

    fn resolve_y(&self, anchor: &Rect) -> f64 {
        let gap = self.boundary.gap();
        let below = anchor.y1 + gap;
        let above = anchor.y0 - (gap + self.overlay.height);
        let position = |candidate: YCandidate| match candidate {
            YCandidate::Below => below,
            YCandidate::Above => above,
        };

        let mut clearance_safe: SmallVec<[YCandidate; 2]> = SmallVec::new();
        let mut viewport_safe: SmallVec<[YCandidate; 2]> = SmallVec::new();
        for candidate in [YCandidate::Below, YCandidate::Above] {
            let pos = position(candidate);
            if self.y_honors_clearance(pos) {
                clearance_safe.push(candidate);
            } else if self.y_fits_viewport(pos) {
                viewport_safe.push(candidate);
            }
        }
        let active = if clearance_safe.is_empty() {
            &viewport_safe
        } else {
            &clearance_safe
        };

        let requested = match self.y_align {
            YAlign::Detected => None,
            YAlign::Above => Some(YCandidate::Above),
            YAlign::Below => Some(YCandidate::Below),
        };
        if let Some(requested) = requested {
            if active.contains(&requested) {
                return position(requested);
            }
        }
        for candidate in [YCandidate::Below, YCandidate::Above] {
            if active.contains(&candidate) {
                return position(candidate);
            }
        }
        below
    }

    fn x_honors_clearance(&self, pos: f64) -> bool {
        pos >= MIN_VIEWPORT_CLEARANCE
            && pos + self.overlay.width <= self.viewport.width - MIN_VIEWPORT_CLEARANCE
    }

    fn x_fits_viewport(&self, pos: f64) -> bool {
        pos >= 0.0 && pos + self.overlay.width <= self.viewport.width
    }

    fn y_honors_clearance(&self, pos: f64) -> bool {
        pos >= MIN_VIEWPORT_CLEARANCE
            && pos + self.overlay.height <= self.viewport.height - MIN_VIEWPORT_CLEARANCE
    }

    fn y_fits_viewport(&self, pos: f64) -> bool {
        pos >= 0.0 && pos + self.overlay.height <= self.viewport.height
    }
}
