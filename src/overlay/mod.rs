// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Overlay placement.
//!
//! Pure mapping from element geometry to screen-space anchors. Nothing here
//! caches screen coordinates: renderers call back in with the current
//! viewport after every pan/zoom notification.

use std::fmt;

use crate::model::{Bounds, Diagram, ElementId, Point, SelectionState};

/// Which corner of an element's bounding box an overlay attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AnchorCorner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// The host framework's current pan/zoom transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    scroll: Point,
    zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scroll: Point::new(0.0, 0.0),
            zoom: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(scroll: Point, zoom: f64) -> Result<Self, ViewportError> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(ViewportError::InvalidZoom { zoom });
        }
        Ok(Self { scroll, zoom })
    }

    pub fn scroll(&self) -> Point {
        self.scroll
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Maps a model-space point to screen space.
    pub fn to_screen(&self, point: Point) -> Point {
        Point::new(
            (point.x - self.scroll.x) * self.zoom,
            (point.y - self.scroll.y) * self.zoom,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportError {
    InvalidZoom { zoom: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoom { zoom } => {
                write!(f, "zoom must be finite and positive (got {zoom})")
            }
        }
    }
}

impl std::error::Error for ViewportError {}

/// Screen-space anchor for an overlay attached to `bounds` at `corner`.
pub fn anchor(bounds: &Bounds, corner: AnchorCorner, viewport: &Viewport) -> Point {
    let model_point = match corner {
        AnchorCorner::TopLeft => bounds.top_left(),
        AnchorCorner::TopRight => bounds.top_right(),
        AnchorCorner::BottomLeft => bounds.bottom_left(),
        AnchorCorner::BottomRight => bounds.bottom_right(),
    };
    viewport.to_screen(model_point)
}

/// The smallest bounds enclosing all given bounds.
pub fn union_bounds<'a>(bounds: impl IntoIterator<Item = &'a Bounds>) -> Option<Bounds> {
    let mut iter = bounds.into_iter();
    let first = *iter.next()?;
    Some(iter.fold(first, |acc, b| acc.union(b)))
}

/// Model-space extent of the current selection, for the bulk highlight.
///
/// Ids that no longer resolve contribute nothing.
pub fn selection_extent(diagram: &Diagram, selection: &SelectionState) -> Option<Bounds> {
    union_bounds(
        selection
            .ids()
            .iter()
            .filter_map(|id: &ElementId| diagram.element(id))
            .map(|element| element.bounds()),
    )
}

#[cfg(test)]
mod tests {
    use super::{anchor, selection_extent, union_bounds, AnchorCorner, Viewport, ViewportError};
    use crate::model::{Bounds, Point};

    #[test]
    fn viewport_rejects_non_positive_zoom() {
        let err = Viewport::new(Point::new(0.0, 0.0), 0.0).unwrap_err();
        assert!(matches!(err, ViewportError::InvalidZoom { .. }));
        Viewport::new(Point::new(0.0, 0.0), f64::NAN).unwrap_err();
        Viewport::new(Point::new(0.0, 0.0), -1.0).unwrap_err();
    }

    #[test]
    fn to_screen_applies_scroll_then_zoom() {
        let viewport = Viewport::new(Point::new(10.0, 20.0), 2.0).expect("viewport");
        assert_eq!(viewport.to_screen(Point::new(30.0, 30.0)), Point::new(40.0, 20.0));
    }

    #[test]
    fn anchor_picks_requested_corner() {
        let bounds = Bounds::new(100.0, 50.0, 120.0, 60.0);
        let viewport = Viewport::default();
        assert_eq!(anchor(&bounds, AnchorCorner::TopRight, &viewport), Point::new(220.0, 50.0));
        assert_eq!(
            anchor(&bounds, AnchorCorner::BottomLeft, &viewport),
            Point::new(100.0, 110.0)
        );
    }

    #[test]
    fn anchor_tracks_viewport_changes() {
        let bounds = Bounds::new(100.0, 50.0, 120.0, 60.0);
        let panned = Viewport::new(Point::new(50.0, 0.0), 1.0).expect("viewport");
        assert_eq!(anchor(&bounds, AnchorCorner::TopLeft, &panned), Point::new(50.0, 50.0));

        let zoomed = Viewport::new(Point::new(50.0, 0.0), 0.5).expect("viewport");
        assert_eq!(anchor(&bounds, AnchorCorner::TopLeft, &zoomed), Point::new(25.0, 25.0));
    }

    #[test]
    fn union_bounds_of_nothing_is_none() {
        assert_eq!(union_bounds([]), None);
    }

    #[test]
    fn union_bounds_encloses_all() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(40.0, 20.0, 10.0, 10.0);
        let c = Bounds::new(-10.0, 5.0, 5.0, 5.0);
        assert_eq!(union_bounds([&a, &b, &c]), Some(Bounds::new(-10.0, 0.0, 60.0, 30.0)));
    }

    #[test]
    fn selection_extent_spans_selected_elements() {
        use crate::model::{Diagram, DiagramId, Element, ElementId, ElementVariant, SelectionState};

        let mut diagram = Diagram::new(DiagramId::new("d").expect("diagram id"), "d");
        let mut selection = SelectionState::default();
        for (id, x) in [("a", 0.0), ("b", 200.0)] {
            let element_id = ElementId::new(id).expect("element id");
            diagram
                .insert_element(
                    element_id.clone(),
                    Element::new(ElementVariant::Activity, id, Bounds::new(x, 0.0, 100.0, 50.0)),
                    None,
                )
                .expect("insert");
            selection.push_unique(element_id);
        }

        assert_eq!(
            selection_extent(&diagram, &selection),
            Some(Bounds::new(0.0, 0.0, 300.0, 50.0))
        );
    }
}
