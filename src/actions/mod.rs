// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Contextual actions and their providers.
//!
//! Providers are independent: each inspects one element and contributes
//! zero or more actions for it. The dispatcher concatenates contributions
//! and orders them by (sorting key, label), so the rendered order is stable
//! no matter how providers are registered.

mod providers;

use std::fmt;

use crate::model::{Diagram, Element, ElementId};
use crate::overlay::AnchorCorner;

pub use providers::{
    default_quick_action_providers, default_smart_action_providers, AutoBendEdgeProvider,
    ConnectProvider, CreateNodeGroupProvider, DeleteProvider, InspectProvider,
    JumpIntoSubActivityProvider, SelectColorProvider, StraightenEdgeProvider,
    WrapToSubActivityProvider,
};

/// A framework-level operation produced when an action is activated.
///
/// The operation kind is a stable string key consumed by the host command
/// pipeline (e.g. `straightenEdge`); `argument` carries an optional
/// operation-specific payload such as a palette group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    kind: String,
    element_id: ElementId,
    argument: Option<String>,
}

impl Operation {
    pub fn new(kind: impl Into<String>, element_id: ElementId) -> Self {
        Self {
            kind: kind.into(),
            element_id,
            argument: None,
        }
    }

    pub fn new_with_argument(
        kind: impl Into<String>,
        element_id: ElementId,
        argument: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            element_id,
            argument: Some(argument.into()),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn element_id(&self) -> &ElementId {
        &self.element_id
    }

    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }
}

/// One contextual command offered for an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    label: String,
    icon: String,
    sorting: String,
    shortcut: Option<char>,
    corner: AnchorCorner,
    operation: Operation,
}

impl Action {
    pub fn new(
        label: impl Into<String>,
        icon: impl Into<String>,
        sorting: impl Into<String>,
        corner: AnchorCorner,
        operation: Operation,
    ) -> Self {
        Self {
            label: label.into(),
            icon: icon.into(),
            sorting: sorting.into(),
            shortcut: None,
            corner,
            operation,
        }
    }

    pub fn with_shortcut(mut self, shortcut: char) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn sorting(&self) -> &str {
        &self.sorting
    }

    pub fn shortcut(&self) -> Option<char> {
        self.shortcut
    }

    pub fn corner(&self) -> AnchorCorner {
        self.corner
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }
}

/// Orders actions by sorting key, ties broken by label.
///
/// The sort is stable, so equal (sorting, label) pairs keep their
/// registration order.
pub fn sort_actions(actions: &mut [Action]) {
    actions.sort_by(|a, b| {
        a.sorting
            .cmp(&b.sorting)
            .then_with(|| a.label.cmp(&b.label))
    });
}

/// One independent source of contextual actions.
///
/// `provide` must be synchronous and side-effect-free; a provider that does
/// not recognize the element's variant returns an empty contribution.
pub trait ActionProvider {
    fn name(&self) -> &'static str;

    fn provide(
        &self,
        diagram: &Diagram,
        element_id: &ElementId,
        element: &Element,
    ) -> Result<Vec<Action>, ProviderError>;
}

/// A provider failed while being queried; its contribution is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    provider: &'static str,
    message: String,
}

impl ProviderError {
    pub fn new(provider: &'static str, message: impl Into<String>) -> Self {
        Self {
            provider,
            message: message.into(),
        }
    }

    pub fn provider(&self) -> &'static str {
        self.provider
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "provider '{}' failed: {}", self.provider, self.message)
    }
}

impl std::error::Error for ProviderError {}

#[cfg(test)]
mod tests {
    use super::{sort_actions, Action, Operation};
    use crate::model::ElementId;
    use crate::overlay::AnchorCorner;

    fn eid(value: &str) -> ElementId {
        ElementId::new(value).expect("element id")
    }

    fn action(label: &str, sorting: &str) -> Action {
        Action::new(
            label,
            "icon",
            sorting,
            AnchorCorner::TopRight,
            Operation::new("noop", eid("a")),
        )
    }

    #[test]
    fn sorts_by_sorting_key_then_label() {
        let mut actions = vec![
            action("Zeta", "B"),
            action("Alpha", "B"),
            action("Omega", "A"),
        ];
        sort_actions(&mut actions);
        let labels: Vec<_> = actions.iter().map(|a| a.label().to_owned()).collect();
        assert_eq!(labels, vec!["Omega", "Alpha", "Zeta"]);
    }

    #[test]
    fn operation_carries_optional_argument() {
        let plain = Operation::new("deleteElement", eid("a"));
        assert_eq!(plain.kind(), "deleteElement");
        assert_eq!(plain.argument(), None);

        let with_arg = Operation::new_with_argument("openNodePalette", eid("a"), "events");
        assert_eq!(with_arg.argument(), Some("events"));
    }

    #[test]
    fn shortcut_is_opt_in() {
        let action = action("Delete", "A");
        assert_eq!(action.shortcut(), None);
        let action = action.with_shortcut('d');
        assert_eq!(action.shortcut(), Some('d'));
    }
}
