// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The built-in provider catalogue.
//!
//! Quick-action providers fill the per-element command menu; smart-action
//! providers contribute to the hint channel that only renders when at least
//! one of them matches. Gating is purely a pattern match on the element
//! variant.

use super::{Action, ActionProvider, Operation, ProviderError};
use crate::model::{Diagram, EdgeRouting, Element, ElementId, ElementVariant};
use crate::overlay::AnchorCorner;

/// Variants an outgoing sequence flow may continue from.
fn may_continue_flow(variant: &ElementVariant) -> bool {
    matches!(
        variant,
        ElementVariant::StartEvent
            | ElementVariant::IntermediateEvent
            | ElementVariant::Gateway
            | ElementVariant::Activity
            | ElementVariant::SubActivity
    )
}

fn is_container(variant: &ElementVariant) -> bool {
    matches!(variant, ElementVariant::Lane | ElementVariant::Pool)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteProvider;

impl ActionProvider for DeleteProvider {
    fn name(&self) -> &'static str {
        "delete"
    }

    fn provide(
        &self,
        _diagram: &Diagram,
        element_id: &ElementId,
        element: &Element,
    ) -> Result<Vec<Action>, ProviderError> {
        if is_container(element.variant()) {
            return Ok(Vec::new());
        }
        Ok(vec![Action::new(
            "Delete",
            "delete",
            "A",
            AnchorCorner::TopLeft,
            Operation::new("deleteElement", element_id.clone()),
        )])
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InspectProvider;

impl ActionProvider for InspectProvider {
    fn name(&self) -> &'static str {
        "inspect"
    }

    fn provide(
        &self,
        _diagram: &Diagram,
        element_id: &ElementId,
        element: &Element,
    ) -> Result<Vec<Action>, ProviderError> {
        let matches = matches!(
            element.variant(),
            ElementVariant::StartEvent
                | ElementVariant::EndEvent
                | ElementVariant::IntermediateEvent
                | ElementVariant::Gateway
                | ElementVariant::Activity
                | ElementVariant::SubActivity
        );
        if !matches {
            return Ok(Vec::new());
        }
        Ok(vec![Action::new(
            "Information",
            "information",
            "B",
            AnchorCorner::TopLeft,
            Operation::new("inspectElement", element_id.clone()),
        )
        .with_shortcut('i')])
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WrapToSubActivityProvider;

impl ActionProvider for WrapToSubActivityProvider {
    fn name(&self) -> &'static str {
        "wrap-to-sub-activity"
    }

    fn provide(
        &self,
        _diagram: &Diagram,
        element_id: &ElementId,
        element: &Element,
    ) -> Result<Vec<Action>, ProviderError> {
        if element.variant() != &ElementVariant::Activity {
            return Ok(Vec::new());
        }
        Ok(vec![Action::new(
            "Wrap to sub-activity",
            "wrap-to-subprocess",
            "C",
            AnchorCorner::TopLeft,
            Operation::new("wrapToSubActivity", element_id.clone()),
        )
        .with_shortcut('w')])
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SelectColorProvider;

impl ActionProvider for SelectColorProvider {
    fn name(&self) -> &'static str {
        "select-color"
    }

    fn provide(
        &self,
        _diagram: &Diagram,
        element_id: &ElementId,
        element: &Element,
    ) -> Result<Vec<Action>, ProviderError> {
        if is_container(element.variant()) {
            return Ok(Vec::new());
        }
        Ok(vec![Action::new(
            "Select color",
            "color",
            "D",
            AnchorCorner::TopLeft,
            Operation::new("selectColor", element_id.clone()),
        )])
    }
}

/// Contributes the follow-up node palette groups (events, gateways,
/// activities) for elements an outgoing flow may continue from.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateNodeGroupProvider;

impl ActionProvider for CreateNodeGroupProvider {
    fn name(&self) -> &'static str {
        "create-node-groups"
    }

    fn provide(
        &self,
        _diagram: &Diagram,
        element_id: &ElementId,
        element: &Element,
    ) -> Result<Vec<Action>, ProviderError> {
        if !may_continue_flow(element.variant()) {
            return Ok(Vec::new());
        }
        let groups = [
            ("Events", "events-group", "E", "events"),
            ("Gateways", "gateways-group", "F", "gateways"),
            ("Activities", "activities-group", "G", "activities"),
        ];
        Ok(groups
            .into_iter()
            .map(|(label, icon, sorting, group)| {
                Action::new(
                    label,
                    icon,
                    sorting,
                    AnchorCorner::TopLeft,
                    Operation::new_with_argument("openNodePalette", element_id.clone(), group),
                )
                .with_shortcut('a')
            })
            .collect())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectProvider;

impl ActionProvider for ConnectProvider {
    fn name(&self) -> &'static str {
        "connect"
    }

    fn provide(
        &self,
        _diagram: &Diagram,
        element_id: &ElementId,
        element: &Element,
    ) -> Result<Vec<Action>, ProviderError> {
        if !may_continue_flow(element.variant()) {
            return Ok(Vec::new());
        }
        Ok(vec![Action::new(
            "Connect",
            "connector",
            "Z",
            AnchorCorner::TopRight,
            Operation::new("connectElement", element_id.clone()),
        )])
    }
}

/// Offers to straighten an edge that has accumulated bendpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct StraightenEdgeProvider;

impl ActionProvider for StraightenEdgeProvider {
    fn name(&self) -> &'static str {
        "straighten-edge"
    }

    fn provide(
        &self,
        _diagram: &Diagram,
        element_id: &ElementId,
        element: &Element,
    ) -> Result<Vec<Action>, ProviderError> {
        match element.variant() {
            ElementVariant::Edge(detail) if detail.routing_points().len() > 2 => {
                Ok(vec![Action::new(
                    "Straighten",
                    "arrows-horizontal",
                    "A",
                    AnchorCorner::BottomLeft,
                    Operation::new("straightenEdge", element_id.clone()),
                )])
            }
            _ => Ok(Vec::new()),
        }
    }
}

/// Offers orthogonal re-routing for edges not already routed that way.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoBendEdgeProvider;

impl ActionProvider for AutoBendEdgeProvider {
    fn name(&self) -> &'static str {
        "auto-bend-edge"
    }

    fn provide(
        &self,
        _diagram: &Diagram,
        element_id: &ElementId,
        element: &Element,
    ) -> Result<Vec<Action>, ProviderError> {
        match element.variant() {
            ElementVariant::Edge(detail) if detail.routing() != EdgeRouting::Orthogonal => {
                Ok(vec![Action::new(
                    "Bend",
                    "bolt",
                    "B",
                    AnchorCorner::BottomLeft,
                    Operation::new("autoBendEdge", element_id.clone()),
                )])
            }
            _ => Ok(Vec::new()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JumpIntoSubActivityProvider;

impl ActionProvider for JumpIntoSubActivityProvider {
    fn name(&self) -> &'static str {
        "jump-into-sub-activity"
    }

    fn provide(
        &self,
        _diagram: &Diagram,
        element_id: &ElementId,
        element: &Element,
    ) -> Result<Vec<Action>, ProviderError> {
        if element.variant() != &ElementVariant::SubActivity {
            return Ok(Vec::new());
        }
        Ok(vec![Action::new(
            "Jump into",
            "jump",
            "C",
            AnchorCorner::BottomLeft,
            Operation::new("jumpInto", element_id.clone()),
        )
        .with_shortcut('j')])
    }
}

/// The built-in quick-action providers, in registration order.
///
/// Registration order is irrelevant for rendering (actions are re-sorted),
/// but keeping it alphabetical-by-sorting makes the list easy to audit.
pub fn default_quick_action_providers() -> Vec<Box<dyn ActionProvider>> {
    vec![
        Box::new(DeleteProvider),
        Box::new(InspectProvider),
        Box::new(WrapToSubActivityProvider),
        Box::new(SelectColorProvider),
        Box::new(CreateNodeGroupProvider),
        Box::new(ConnectProvider),
    ]
}

/// The built-in smart-action providers.
pub fn default_smart_action_providers() -> Vec<Box<dyn ActionProvider>> {
    vec![
        Box::new(StraightenEdgeProvider),
        Box::new(AutoBendEdgeProvider),
        Box::new(JumpIntoSubActivityProvider),
    ]
}
