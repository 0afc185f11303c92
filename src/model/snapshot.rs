// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Inbound element-tree wire format.
//!
//! The host diagram framework hands the core a JSON element tree of
//! `{ id, type, bounds, children }` records. Wire types are kept separate
//! from the model; conversion validates ids, variants, and edge endpoints
//! before anything reaches the [`Diagram`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::diagram::{Diagram, DiagramError};
use super::element::{EdgeDetail, EdgeRouting, Element, ElementVariant};
use super::geometry::{Bounds, Point};
use super::ids::{DiagramId, ElementId, IdError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramSnapshot {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub children: Vec<ElementSnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementSnapshot {
    pub id: String,
    #[serde(rename = "type")]
    pub element_type: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub bounds: BoundsSnapshot,
    #[serde(default)]
    pub children: Vec<ElementSnapshot>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default, rename = "routingPoints")]
    pub routing_points: Vec<PointSnapshot>,
    #[serde(default)]
    pub routing: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BoundsSnapshot {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PointSnapshot {
    pub x: f64,
    pub y: f64,
}

pub fn diagram_from_json(json: &str) -> Result<Diagram, SnapshotError> {
    let snapshot: DiagramSnapshot = serde_json::from_str(json).map_err(SnapshotError::Json)?;
    diagram_from_snapshot(&snapshot)
}

/// Builds a [`Diagram`] from a wire snapshot.
///
/// Nodes are inserted in tree order first; edges second, so forward
/// references between siblings resolve. Any validation failure aborts the
/// whole conversion.
pub fn diagram_from_snapshot(snapshot: &DiagramSnapshot) -> Result<Diagram, SnapshotError> {
    let diagram_id = parse_id::<super::ids::DiagramIdTag>(&snapshot.id)?;
    let name = snapshot.name.clone().unwrap_or_else(|| snapshot.id.clone());
    let mut diagram = Diagram::new(diagram_id, name);

    let mut edges: Vec<(ElementId, Option<ElementId>, &ElementSnapshot)> = Vec::new();
    for child in &snapshot.children {
        insert_subtree(&mut diagram, child, None, &mut edges)?;
    }

    for (element_id, parent, wire) in edges {
        let element = edge_element(&element_id, wire)?;
        diagram
            .insert_element(element_id, element, parent.as_ref())
            .map_err(SnapshotError::Diagram)?;
    }

    Ok(diagram)
}

fn insert_subtree<'a>(
    diagram: &mut Diagram,
    wire: &'a ElementSnapshot,
    parent: Option<&ElementId>,
    edges: &mut Vec<(ElementId, Option<ElementId>, &'a ElementSnapshot)>,
) -> Result<(), SnapshotError> {
    let element_id = parse_id::<super::ids::ElementIdTag>(&wire.id)?;

    if wire.element_type == "edge" {
        edges.push((element_id, parent.cloned(), wire));
        // Edge children (labels) are rare; reject rather than silently drop.
        if let Some(child) = wire.children.first() {
            return Err(SnapshotError::EdgeWithChildren {
                element_id: wire.id.clone(),
                child_id: child.id.clone(),
            });
        }
        return Ok(());
    }

    let variant = node_variant(wire)?;
    let element = Element::new(variant, wire.label.clone().unwrap_or_default(), bounds(&wire.bounds));
    diagram
        .insert_element(element_id.clone(), element, parent)
        .map_err(SnapshotError::Diagram)?;

    for child in &wire.children {
        insert_subtree(diagram, child, Some(&element_id), edges)?;
    }
    Ok(())
}

fn node_variant(wire: &ElementSnapshot) -> Result<ElementVariant, SnapshotError> {
    let variant = match wire.element_type.as_str() {
        "start-event" => ElementVariant::StartEvent,
        "end-event" => ElementVariant::EndEvent,
        "intermediate-event" => ElementVariant::IntermediateEvent,
        "gateway" => ElementVariant::Gateway,
        "activity" => ElementVariant::Activity,
        "sub-activity" => ElementVariant::SubActivity,
        "lane" => ElementVariant::Lane,
        "pool" => ElementVariant::Pool,
        "label" => ElementVariant::Label,
        other => {
            return Err(SnapshotError::UnknownVariant {
                element_id: wire.id.clone(),
                variant: other.to_owned(),
            })
        }
    };
    Ok(variant)
}

fn edge_element(element_id: &ElementId, wire: &ElementSnapshot) -> Result<Element, SnapshotError> {
    let source = wire
        .source
        .as_deref()
        .ok_or_else(|| SnapshotError::MissingEdgeEndpoint {
            element_id: element_id.to_string(),
        })?;
    let target = wire
        .target
        .as_deref()
        .ok_or_else(|| SnapshotError::MissingEdgeEndpoint {
            element_id: element_id.to_string(),
        })?;

    let routing = match wire.routing.as_deref() {
        None | Some("polyline") => EdgeRouting::Polyline,
        Some("orthogonal") => EdgeRouting::Orthogonal,
        Some(other) => {
            return Err(SnapshotError::UnknownRouting {
                element_id: element_id.to_string(),
                routing: other.to_owned(),
            })
        }
    };

    let routing_points = wire
        .routing_points
        .iter()
        .map(|p| Point::new(p.x, p.y))
        .collect();

    let detail = EdgeDetail::new_with(
        parse_id::<super::ids::ElementIdTag>(source)?,
        parse_id::<super::ids::ElementIdTag>(target)?,
        routing_points,
        routing,
    );
    Ok(Element::new(
        ElementVariant::Edge(detail),
        wire.label.clone().unwrap_or_default(),
        bounds(&wire.bounds),
    ))
}

fn bounds(wire: &BoundsSnapshot) -> Bounds {
    Bounds::new(wire.x, wire.y, wire.width, wire.height)
}

fn parse_id<T>(raw: &str) -> Result<super::ids::Id<T>, SnapshotError> {
    super::ids::Id::new(raw).map_err(|source| SnapshotError::InvalidId {
        raw: raw.to_owned(),
        source,
    })
}

#[derive(Debug)]
pub enum SnapshotError {
    Json(serde_json::Error),
    InvalidId { raw: String, source: IdError },
    UnknownVariant { element_id: String, variant: String },
    UnknownRouting { element_id: String, routing: String },
    MissingEdgeEndpoint { element_id: String },
    EdgeWithChildren { element_id: String, child_id: String },
    Diagram(DiagramError),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid snapshot json: {err}"),
            Self::InvalidId { raw, source } => write!(f, "invalid id '{raw}': {source}"),
            Self::UnknownVariant { element_id, variant } => {
                write!(f, "unknown element type '{variant}' (id={element_id})")
            }
            Self::UnknownRouting { element_id, routing } => {
                write!(f, "unknown edge routing '{routing}' (id={element_id})")
            }
            Self::MissingEdgeEndpoint { element_id } => {
                write!(f, "edge is missing source/target (id={element_id})")
            }
            Self::EdgeWithChildren { element_id, child_id } => {
                write!(f, "edge must not carry children (id={element_id}, child={child_id})")
            }
            Self::Diagram(err) => write!(f, "inconsistent snapshot: {err}"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::InvalidId { source, .. } => Some(source),
            Self::Diagram(err) => Some(err),
            _ => None,
        }
    }
}
