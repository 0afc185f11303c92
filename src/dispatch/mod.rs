// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Selection-to-feedback dispatch.
//!
//! On every selection change the dispatcher queries the registered action
//! providers for the active element and rewrites the feedback registry.
//! There is no incremental patching and no caching: the same selection
//! state always produces the same instructions, and a repeated update
//! produces them again.

use std::fmt;

use tracing::warn;

use crate::actions::{
    default_quick_action_providers, default_smart_action_providers, sort_actions, Action,
    ActionProvider,
};
use crate::feedback::{FeedbackKind, FeedbackRegistry};
use crate::model::{Diagram, Element, ElementId, SelectionState};
use crate::overlay::Viewport;
use crate::select::{SelectionError, SelectionListener, SelectionTracker};

/// Where the dispatcher currently stands, derived from the selection length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    Idle,
    SingleActive,
    MultiSelected,
}

impl DispatchState {
    pub fn of(selection: &SelectionState) -> Self {
        match selection.len() {
            0 => Self::Idle,
            1 => Self::SingleActive,
            _ => Self::MultiSelected,
        }
    }
}

/// The single dispatch entry point's message type.
///
/// Events are handled synchronously, one complete turn at a time; a
/// selection update is fully dispatched (providers queried, feedback
/// rewritten) before the next event is looked at.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    SelectionChanged {
        added: Vec<ElementId>,
        removed: Vec<ElementId>,
    },
    ViewportChanged {
        viewport: Viewport,
    },
}

/// Queries providers and rewrites the feedback registry.
pub struct ActionDispatcher {
    quick_providers: Vec<Box<dyn ActionProvider>>,
    smart_providers: Vec<Box<dyn ActionProvider>>,
}

impl fmt::Debug for ActionDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDispatcher")
            .field("quick_providers", &self.quick_providers.len())
            .field("smart_providers", &self.smart_providers.len())
            .finish()
    }
}

impl ActionDispatcher {
    /// Providers are passed in explicitly; there is no runtime registration.
    pub fn new(
        quick_providers: Vec<Box<dyn ActionProvider>>,
        smart_providers: Vec<Box<dyn ActionProvider>>,
    ) -> Self {
        Self {
            quick_providers,
            smart_providers,
        }
    }

    pub fn with_default_providers() -> Self {
        Self::new(
            default_quick_action_providers(),
            default_smart_action_providers(),
        )
    }

    /// Rewrites all feedback kinds for the given selection.
    pub fn selection_changed(
        &self,
        diagram: &Diagram,
        selection: &SelectionState,
        registry: &mut FeedbackRegistry,
    ) {
        if selection.is_empty() {
            for kind in FeedbackKind::ALL {
                registry.hide(kind);
            }
            return;
        }

        registry.show(
            FeedbackKind::SelectionHighlight,
            selection.ids().to_vec(),
            Vec::new(),
        );

        // Non-empty selection always has an active element.
        let Some(active_id) = selection.active_element() else {
            return;
        };
        let Some(element) = diagram.element(active_id) else {
            // Stale selection: the tracker validates on update, so this only
            // happens if the diagram changed underneath us. Degrade to hide.
            warn!(element_id = %active_id, "active element vanished from diagram");
            registry.hide(FeedbackKind::QuickActionMenu);
            registry.hide(FeedbackKind::SmartActionHint);
            return;
        };

        let quick = self.collect(&self.quick_providers, diagram, active_id, element);
        publish(registry, FeedbackKind::QuickActionMenu, active_id, quick);

        let smart = self.collect(&self.smart_providers, diagram, active_id, element);
        publish(registry, FeedbackKind::SmartActionHint, active_id, smart);
    }

    /// Concatenates provider contributions for one element, in stable order.
    /// A failing provider contributes nothing and never aborts the dispatch.
    fn collect(
        &self,
        providers: &[Box<dyn ActionProvider>],
        diagram: &Diagram,
        element_id: &ElementId,
        element: &Element,
    ) -> Vec<Action> {
        let mut actions = Vec::new();
        for provider in providers {
            match provider.provide(diagram, element_id, element) {
                Ok(contribution) => actions.extend(contribution),
                Err(err) => {
                    warn!(provider = provider.name(), element_id = %element_id, %err,
                        "action provider failed; contribution dropped");
                }
            }
        }
        sort_actions(&mut actions);
        actions
    }
}

fn publish(
    registry: &mut FeedbackRegistry,
    kind: FeedbackKind,
    element_id: &ElementId,
    actions: Vec<Action>,
) {
    if actions.is_empty() && !kind.shows_when_empty() {
        registry.hide(kind);
    } else {
        registry.show(kind, vec![element_id.clone()], actions);
    }
}

/// One editor session: the diagram snapshot, its selection, the dispatcher,
/// the feedback registry, and the current viewport — owned together and
/// torn down together. All mutation flows through [`Editor::dispatch`].
pub struct Editor {
    diagram: Diagram,
    tracker: SelectionTracker,
    dispatcher: ActionDispatcher,
    registry: FeedbackRegistry,
    viewport: Viewport,
}

impl fmt::Debug for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("diagram", &self.diagram.diagram_id())
            .field("selection", &self.tracker.selection())
            .field("state", &self.state())
            .finish()
    }
}

impl Editor {
    pub fn new(diagram: Diagram) -> Self {
        Self::with_dispatcher(diagram, ActionDispatcher::with_default_providers())
    }

    pub fn with_dispatcher(diagram: Diagram, dispatcher: ActionDispatcher) -> Self {
        Self {
            diagram,
            tracker: SelectionTracker::new(),
            dispatcher,
            registry: FeedbackRegistry::new(),
            viewport: Viewport::default(),
        }
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    pub fn selection(&self) -> &SelectionState {
        self.tracker.selection()
    }

    pub fn feedback(&self) -> &FeedbackRegistry {
        &self.registry
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn state(&self) -> DispatchState {
        DispatchState::of(self.tracker.selection())
    }

    pub fn register_selection_listener(&mut self, listener: Box<dyn SelectionListener>) {
        self.tracker.register_listener(listener);
    }

    /// Processes one event in a single synchronous turn.
    ///
    /// A rejected selection update leaves selection and feedback untouched.
    pub fn dispatch(&mut self, event: EditorEvent) -> Result<(), SelectionError> {
        match event {
            EditorEvent::SelectionChanged { added, removed } => {
                self.tracker
                    .update_selection(&self.diagram, &added, &removed)?;
                self.dispatcher.selection_changed(
                    &self.diagram,
                    self.tracker.selection(),
                    &mut self.registry,
                );
            }
            EditorEvent::ViewportChanged { viewport } => {
                // Screen placement is computed from the viewport on demand,
                // so feedback instructions stay untouched here.
                self.viewport = viewport;
            }
        }
        Ok(())
    }
}
