// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use super::element::Element;
use super::ids::{DiagramId, ElementId};

/// The element-tree snapshot the selection/feedback core runs against.
///
/// Elements are keyed by id; parent/child structure is kept separately so
/// lookups stay flat. Structural edits bump `rev`, which derived state can
/// use to detect staleness.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    diagram_id: DiagramId,
    name: String,
    elements: BTreeMap<ElementId, Element>,
    children: BTreeMap<ElementId, Vec<ElementId>>,
    roots: Vec<ElementId>,
    rev: u64,
}

impl Diagram {
    pub fn new(diagram_id: DiagramId, name: impl Into<String>) -> Self {
        Self {
            diagram_id,
            name: name.into(),
            elements: BTreeMap::new(),
            children: BTreeMap::new(),
            roots: Vec::new(),
            rev: 0,
        }
    }

    pub fn diagram_id(&self) -> &DiagramId {
        &self.diagram_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn elements(&self) -> &BTreeMap<ElementId, Element> {
        &self.elements
    }

    pub fn element(&self, element_id: &ElementId) -> Option<&Element> {
        self.elements.get(element_id)
    }

    pub fn element_mut(&mut self, element_id: &ElementId) -> Option<&mut Element> {
        self.elements.get_mut(element_id)
    }

    pub fn contains(&self, element_id: &ElementId) -> bool {
        self.elements.contains_key(element_id)
    }

    pub fn children(&self, element_id: &ElementId) -> &[ElementId] {
        self.children
            .get(element_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn roots(&self) -> &[ElementId] {
        &self.roots
    }

    /// Inserts an element under `parent` (or as a root).
    ///
    /// Edges are validated against already-inserted endpoints, so callers
    /// insert nodes before the edges that connect them.
    pub fn insert_element(
        &mut self,
        element_id: ElementId,
        element: Element,
        parent: Option<&ElementId>,
    ) -> Result<(), DiagramError> {
        if self.elements.contains_key(&element_id) {
            return Err(DiagramError::DuplicateElement { element_id });
        }

        if let Some(parent_id) = parent {
            if !self.elements.contains_key(parent_id) {
                return Err(DiagramError::UnknownParent {
                    element_id,
                    parent_id: parent_id.clone(),
                });
            }
        }

        if let Some(detail) = element.variant().edge_detail() {
            for endpoint in [detail.source(), detail.target()] {
                if !self.elements.contains_key(endpoint) {
                    return Err(DiagramError::UnknownEdgeEndpoint {
                        edge_id: element_id,
                        endpoint_id: endpoint.clone(),
                    });
                }
            }
        }

        match parent {
            Some(parent_id) => self
                .children
                .entry(parent_id.clone())
                .or_default()
                .push(element_id.clone()),
            None => self.roots.push(element_id.clone()),
        }
        self.elements.insert(element_id, element);
        self.rev = self.rev.wrapping_add(1);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    DuplicateElement {
        element_id: ElementId,
    },
    UnknownParent {
        element_id: ElementId,
        parent_id: ElementId,
    },
    UnknownEdgeEndpoint {
        edge_id: ElementId,
        endpoint_id: ElementId,
    },
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateElement { element_id } => {
                write!(f, "element already exists (id={element_id})")
            }
            Self::UnknownParent {
                element_id,
                parent_id,
            } => {
                write!(f, "parent not found (element={element_id}, parent={parent_id})")
            }
            Self::UnknownEdgeEndpoint {
                edge_id,
                endpoint_id,
            } => {
                write!(f, "edge endpoint not found (edge={edge_id}, endpoint={endpoint_id})")
            }
        }
    }
}

impl std::error::Error for DiagramError {}

#[cfg(test)]
mod tests {
    use super::{Diagram, DiagramError};
    use crate::model::element::{EdgeDetail, Element, ElementVariant};
    use crate::model::geometry::Bounds;
    use crate::model::ids::{DiagramId, ElementId};

    fn eid(value: &str) -> ElementId {
        ElementId::new(value).expect("element id")
    }

    fn activity(label: &str) -> Element {
        Element::new(
            ElementVariant::Activity,
            label,
            Bounds::new(0.0, 0.0, 120.0, 60.0),
        )
    }

    fn empty_diagram() -> Diagram {
        Diagram::new(DiagramId::new("proc").expect("diagram id"), "Process")
    }

    #[test]
    fn insert_tracks_roots_and_children() {
        let mut diagram = empty_diagram();
        let pool = eid("pool");
        diagram
            .insert_element(
                pool.clone(),
                Element::new(ElementVariant::Pool, "Order", Bounds::new(0.0, 0.0, 600.0, 400.0)),
                None,
            )
            .expect("insert pool");
        diagram
            .insert_element(eid("a"), activity("Review"), Some(&pool))
            .expect("insert activity");

        assert_eq!(diagram.roots(), &[pool.clone()]);
        assert_eq!(diagram.children(&pool), &[eid("a")]);
        assert!(diagram.contains(&eid("a")));
        assert_eq!(diagram.rev(), 2);
    }

    #[test]
    fn insert_rejects_duplicate_id() {
        let mut diagram = empty_diagram();
        diagram
            .insert_element(eid("a"), activity("Review"), None)
            .expect("first insert");

        let err = diagram
            .insert_element(eid("a"), activity("Again"), None)
            .unwrap_err();
        assert_eq!(err, DiagramError::DuplicateElement { element_id: eid("a") });
        assert_eq!(diagram.rev(), 1);
    }

    #[test]
    fn insert_rejects_unknown_parent() {
        let mut diagram = empty_diagram();
        let err = diagram
            .insert_element(eid("a"), activity("Review"), Some(&eid("missing")))
            .unwrap_err();
        assert_eq!(
            err,
            DiagramError::UnknownParent {
                element_id: eid("a"),
                parent_id: eid("missing"),
            }
        );
    }

    #[test]
    fn insert_rejects_edge_with_unknown_endpoint() {
        let mut diagram = empty_diagram();
        diagram
            .insert_element(eid("a"), activity("Review"), None)
            .expect("insert activity");

        let edge = Element::new(
            ElementVariant::Edge(EdgeDetail::new(eid("a"), eid("ghost"))),
            "",
            Bounds::default(),
        );
        let err = diagram.insert_element(eid("e1"), edge, None).unwrap_err();
        assert_eq!(
            err,
            DiagramError::UnknownEdgeEndpoint {
                edge_id: eid("e1"),
                endpoint_id: eid("ghost"),
            }
        );
        assert!(!diagram.contains(&eid("e1")));
    }
}
