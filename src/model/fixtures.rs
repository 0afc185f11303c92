// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::diagram::Diagram;
use super::element::{EdgeDetail, EdgeRouting, Element, ElementVariant};
use super::geometry::{Bounds, Point};
use super::ids::{DiagramId, ElementId};

fn eid(value: &str) -> ElementId {
    ElementId::new(value).expect("element id")
}

fn insert(diagram: &mut Diagram, id: &str, element: Element, parent: Option<&str>) {
    let parent_id = parent.map(eid);
    diagram
        .insert_element(eid(id), element, parent_id.as_ref())
        .expect("fixture element");
}

/// A small order-handling process across two lanes: start, triage gateway,
/// a review activity, a billing sub-activity, a ship activity, and an end
/// event. `e:triage-review` has three bendpoints; `e:triage-billing` is the
/// only orthogonally routed edge.
pub(crate) fn demo_process() -> Diagram {
    let mut diagram = Diagram::new(DiagramId::new("order").expect("diagram id"), "Order handling");

    insert(
        &mut diagram,
        "pool:order",
        Element::new(ElementVariant::Pool, "Order", Bounds::new(0.0, 0.0, 640.0, 400.0)),
        None,
    );
    insert(
        &mut diagram,
        "lane:intake",
        Element::new(ElementVariant::Lane, "Intake", Bounds::new(0.0, 0.0, 640.0, 200.0)),
        Some("pool:order"),
    );
    insert(
        &mut diagram,
        "lane:fulfilment",
        Element::new(
            ElementVariant::Lane,
            "Fulfilment",
            Bounds::new(0.0, 200.0, 640.0, 200.0),
        ),
        Some("pool:order"),
    );

    insert(
        &mut diagram,
        "s:received",
        Element::new(ElementVariant::StartEvent, "Received", Bounds::new(40.0, 80.0, 30.0, 30.0)),
        Some("lane:intake"),
    );
    insert(
        &mut diagram,
        "g:triage",
        Element::new(ElementVariant::Gateway, "Triage", Bounds::new(130.0, 75.0, 40.0, 40.0)),
        Some("lane:intake"),
    );
    insert(
        &mut diagram,
        "a:review",
        Element::new(ElementVariant::Activity, "Review", Bounds::new(240.0, 65.0, 120.0, 60.0)),
        Some("lane:intake"),
    );
    insert(
        &mut diagram,
        "sub:billing",
        Element::new(
            ElementVariant::SubActivity,
            "Billing",
            Bounds::new(240.0, 260.0, 140.0, 70.0),
        ),
        Some("lane:fulfilment"),
    );
    insert(
        &mut diagram,
        "a:ship",
        Element::new(ElementVariant::Activity, "Ship", Bounds::new(440.0, 265.0, 120.0, 60.0)),
        Some("lane:fulfilment"),
    );
    insert(
        &mut diagram,
        "e:done",
        Element::new(ElementVariant::EndEvent, "Done", Bounds::new(590.0, 280.0, 30.0, 30.0)),
        Some("lane:fulfilment"),
    );
    insert(
        &mut diagram,
        "l:note",
        Element::new(ElementVariant::Label, "Rush orders", Bounds::new(130.0, 30.0, 90.0, 20.0)),
        Some("lane:intake"),
    );

    insert(
        &mut diagram,
        "edge:start-triage",
        Element::new(
            ElementVariant::Edge(EdgeDetail::new_with(
                eid("s:received"),
                eid("g:triage"),
                vec![Point::new(70.0, 95.0), Point::new(130.0, 95.0)],
                EdgeRouting::Polyline,
            )),
            "",
            Bounds::new(70.0, 95.0, 60.0, 0.0),
        ),
        None,
    );
    insert(
        &mut diagram,
        "edge:triage-review",
        Element::new(
            ElementVariant::Edge(EdgeDetail::new_with(
                eid("g:triage"),
                eid("a:review"),
                vec![Point::new(170.0, 95.0), Point::new(205.0, 60.0), Point::new(240.0, 95.0)],
                EdgeRouting::Polyline,
            )),
            "ok",
            Bounds::new(170.0, 60.0, 70.0, 35.0),
        ),
        None,
    );
    insert(
        &mut diagram,
        "edge:triage-billing",
        Element::new(
            ElementVariant::Edge(EdgeDetail::new_with(
                eid("g:triage"),
                eid("sub:billing"),
                vec![
                    Point::new(150.0, 115.0),
                    Point::new(150.0, 295.0),
                    Point::new(240.0, 295.0),
                ],
                EdgeRouting::Orthogonal,
            )),
            "bill",
            Bounds::new(150.0, 115.0, 90.0, 180.0),
        ),
        None,
    );
    insert(
        &mut diagram,
        "edge:billing-ship",
        Element::new(
            ElementVariant::Edge(EdgeDetail::new_with(
                eid("sub:billing"),
                eid("a:ship"),
                vec![Point::new(380.0, 295.0), Point::new(440.0, 295.0)],
                EdgeRouting::Polyline,
            )),
            "",
            Bounds::new(380.0, 295.0, 60.0, 0.0),
        ),
        None,
    );
    insert(
        &mut diagram,
        "edge:ship-done",
        Element::new(
            ElementVariant::Edge(EdgeDetail::new_with(
                eid("a:ship"),
                eid("e:done"),
                vec![Point::new(560.0, 295.0), Point::new(590.0, 295.0)],
                EdgeRouting::Polyline,
            )),
            "",
            Bounds::new(560.0, 295.0, 30.0, 0.0),
        ),
        None,
    );

    diagram
}

#[cfg(test)]
mod tests {
    use super::demo_process;
    use crate::model::element::EdgeRouting;
    use crate::model::ids::ElementId;

    #[test]
    fn demo_process_is_well_formed() {
        let diagram = demo_process();
        assert_eq!(diagram.roots().len(), 6); // pool + 5 edges
        assert_eq!(diagram.elements().len(), 15);

        let bendy = diagram
            .element(&ElementId::new("edge:triage-review").expect("id"))
            .and_then(|e| e.variant().edge_detail())
            .expect("edge detail");
        assert!(bendy.routing_points().len() > 2);
        assert_eq!(bendy.routing(), EdgeRouting::Polyline);

        let orthogonal = diagram
            .element(&ElementId::new("edge:triage-billing").expect("id"))
            .and_then(|e| e.variant().edge_detail())
            .expect("edge detail");
        assert_eq!(orthogonal.routing(), EdgeRouting::Orthogonal);
    }
}
