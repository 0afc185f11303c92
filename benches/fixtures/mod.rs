// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use naiad::model::{
    Bounds, Diagram, DiagramId, EdgeDetail, EdgeRouting, Element, ElementId, ElementVariant, Point,
};

fn eid(value: &str) -> ElementId {
    ElementId::new(value).expect("element id")
}

/// A chain of `nodes` activities connected by bendy polyline edges, so both
/// edge smart-action providers fire when an edge is selected.
pub fn chain_process(nodes: usize) -> Diagram {
    assert!(nodes >= 2, "chain fixture needs at least two nodes");

    let mut diagram =
        Diagram::new(DiagramId::new("bench").expect("diagram id"), "Benchmark chain");

    for idx in 0..nodes {
        let x = idx as f64 * 160.0;
        diagram
            .insert_element(
                eid(&format!("n{idx:05}")),
                Element::new(
                    ElementVariant::Activity,
                    format!("Step {idx}"),
                    Bounds::new(x, 0.0, 120.0, 60.0),
                ),
                None,
            )
            .expect("bench node");
    }

    for idx in 0..nodes - 1 {
        let x = idx as f64 * 160.0 + 120.0;
        diagram
            .insert_element(
                eid(&format!("e{idx:05}")),
                Element::new(
                    ElementVariant::Edge(EdgeDetail::new_with(
                        eid(&format!("n{idx:05}")),
                        eid(&format!("n{:05}", idx + 1)),
                        vec![
                            Point::new(x, 30.0),
                            Point::new(x + 20.0, 10.0),
                            Point::new(x + 40.0, 30.0),
                        ],
                        EdgeRouting::Polyline,
                    )),
                    "",
                    Bounds::new(x, 10.0, 40.0, 20.0),
                ),
                None,
            )
            .expect("bench edge");
    }

    diagram
}

pub fn node_id(idx: usize) -> ElementId {
    eid(&format!("n{idx:05}"))
}

pub fn edge_id(idx: usize) -> ElementId {
    eid(&format!("e{idx:05}"))
}
