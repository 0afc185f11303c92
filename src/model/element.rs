// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::geometry::{Bounds, Point};
use super::ids::ElementId;

/// The closed set of element variants a process diagram is built from.
///
/// Action providers pattern-match on this tag; there is deliberately no
/// open extension point.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementVariant {
    StartEvent,
    EndEvent,
    IntermediateEvent,
    Gateway,
    Activity,
    SubActivity,
    Lane,
    Pool,
    Label,
    Edge(EdgeDetail),
}

impl ElementVariant {
    /// The wire-format tag for this variant, as the host framework reports it.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::StartEvent => "start-event",
            Self::EndEvent => "end-event",
            Self::IntermediateEvent => "intermediate-event",
            Self::Gateway => "gateway",
            Self::Activity => "activity",
            Self::SubActivity => "sub-activity",
            Self::Lane => "lane",
            Self::Pool => "pool",
            Self::Label => "label",
            Self::Edge(_) => "edge",
        }
    }

    pub fn is_edge(&self) -> bool {
        matches!(self, Self::Edge(_))
    }

    pub fn edge_detail(&self) -> Option<&EdgeDetail> {
        match self {
            Self::Edge(detail) => Some(detail),
            _ => None,
        }
    }
}

impl fmt::Display for ElementVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// How an edge's bendpoints are currently routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeRouting {
    Polyline,
    Orthogonal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeDetail {
    source: ElementId,
    target: ElementId,
    routing_points: Vec<Point>,
    routing: EdgeRouting,
}

impl EdgeDetail {
    pub fn new(source: ElementId, target: ElementId) -> Self {
        Self {
            source,
            target,
            routing_points: Vec::new(),
            routing: EdgeRouting::Polyline,
        }
    }

    pub fn new_with(
        source: ElementId,
        target: ElementId,
        routing_points: Vec<Point>,
        routing: EdgeRouting,
    ) -> Self {
        Self {
            source,
            target,
            routing_points,
            routing,
        }
    }

    pub fn source(&self) -> &ElementId {
        &self.source
    }

    pub fn target(&self) -> &ElementId {
        &self.target
    }

    pub fn routing_points(&self) -> &[Point] {
        &self.routing_points
    }

    pub fn routing(&self) -> EdgeRouting {
        self.routing
    }
}

/// One element of the diagram snapshot the core runs against.
///
/// The core reads elements; only the `hovered` flag is mutable, mirroring
/// the transient pointer feedback the host framework reports.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    variant: ElementVariant,
    label: String,
    bounds: Bounds,
    hovered: bool,
}

impl Element {
    pub fn new(variant: ElementVariant, label: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            variant,
            label: label.into(),
            bounds,
            hovered: false,
        }
    }

    pub fn variant(&self) -> &ElementVariant {
        &self.variant
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }
}
