// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The feedback channel registry.
//!
//! One registry instance lives per editor session. Each feedback kind holds
//! at most one active instruction; a new `show`/`hide` for a kind replaces
//! the previous instruction, it never stacks. Renderers and tests read the
//! registry as the single source of truth for what is currently visible.

use std::collections::BTreeMap;
use std::fmt;

use crate::actions::Action;
use crate::model::ElementId;

/// An independent channel of transient UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeedbackKind {
    SelectionHighlight,
    QuickActionMenu,
    SmartActionHint,
}

impl FeedbackKind {
    pub const ALL: [FeedbackKind; 3] = [
        FeedbackKind::SelectionHighlight,
        FeedbackKind::QuickActionMenu,
        FeedbackKind::SmartActionHint,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelectionHighlight => "selection-highlight",
            Self::QuickActionMenu => "quick-action-menu",
            Self::SmartActionHint => "smart-action-hint",
        }
    }

    /// Whether a `Show` with zero actions is still rendered for this kind.
    ///
    /// The quick-action menu renders empty (an empty menu is a valid state);
    /// the smart-action hint is suppressed instead, because a hint without
    /// actions is useless. Every new kind must pick a side here explicitly.
    pub fn shows_when_empty(&self) -> bool {
        match self {
            Self::SelectionHighlight => true,
            Self::QuickActionMenu => true,
            Self::SmartActionHint => false,
        }
    }
}

impl fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackInstruction {
    Show {
        kind: FeedbackKind,
        element_ids: Vec<ElementId>,
        actions: Vec<Action>,
    },
    Hide {
        kind: FeedbackKind,
    },
}

impl FeedbackInstruction {
    pub fn kind(&self) -> FeedbackKind {
        match self {
            Self::Show { kind, .. } | Self::Hide { kind } => *kind,
        }
    }

    pub fn is_show(&self) -> bool {
        matches!(self, Self::Show { .. })
    }
}

/// Mapping from feedback kind to its currently active instruction.
///
/// An entry is created on the first `show`/`hide` for a kind and overwritten
/// from then on; replacement is atomic from an observer's point of view
/// because the whole dispatch turn is synchronous.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedbackRegistry {
    active: BTreeMap<FeedbackKind, FeedbackInstruction>,
}

impl FeedbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, kind: FeedbackKind, element_ids: Vec<ElementId>, actions: Vec<Action>) {
        self.active.insert(
            kind,
            FeedbackInstruction::Show {
                kind,
                element_ids,
                actions,
            },
        );
    }

    /// Records `Hide` for the kind. Hiding a kind that never showed is
    /// harmless.
    pub fn hide(&mut self, kind: FeedbackKind) {
        self.active.insert(kind, FeedbackInstruction::Hide { kind });
    }

    pub fn instruction(&self, kind: FeedbackKind) -> Option<&FeedbackInstruction> {
        self.active.get(&kind)
    }

    pub fn current_state(&self) -> &BTreeMap<FeedbackKind, FeedbackInstruction> {
        &self.active
    }

    /// The kinds currently showing, in kind order.
    pub fn visible_kinds(&self) -> Vec<FeedbackKind> {
        self.active
            .values()
            .filter(|instruction| instruction.is_show())
            .map(FeedbackInstruction::kind)
            .collect()
    }
}
