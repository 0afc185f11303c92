// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Selection tracking.
//!
//! The tracker owns the ordered selection sequence and validates every
//! update against the current diagram before mutating anything; a rejected
//! update leaves the selection exactly as it was.

use std::fmt;

use tracing::debug;

use crate::model::{Diagram, ElementId, SelectionState};

/// Observer notified after every successful selection update.
pub trait SelectionListener {
    fn selection_changed(&mut self, diagram: &Diagram, selection: &SelectionState);
}

#[derive(Default)]
pub struct SelectionTracker {
    selection: SelectionState,
    listeners: Vec<Box<dyn SelectionListener>>,
}

impl fmt::Debug for SelectionTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionTracker")
            .field("selection", &self.selection)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn register_listener(&mut self, listener: Box<dyn SelectionListener>) {
        self.listeners.push(listener);
    }

    /// Applies one selection turn: `removed` ids leave the sequence, then
    /// `added` ids are appended in argument order (re-adding an existing id
    /// keeps its position). All ids must resolve in `diagram`, and no id may
    /// appear in both lists.
    pub fn update_selection(
        &mut self,
        diagram: &Diagram,
        added: &[ElementId],
        removed: &[ElementId],
    ) -> Result<&SelectionState, SelectionError> {
        for element_id in added.iter().chain(removed) {
            if !diagram.contains(element_id) {
                debug!(element_id = %element_id, "selection update rejected: unknown element");
                return Err(SelectionError::UnknownElement {
                    element_id: element_id.clone(),
                });
            }
        }
        for element_id in added {
            if removed.contains(element_id) {
                debug!(element_id = %element_id, "selection update rejected: added and removed");
                return Err(SelectionError::AddedAndRemoved {
                    element_id: element_id.clone(),
                });
            }
        }

        for element_id in removed {
            self.selection.remove(element_id);
        }
        for element_id in added {
            self.selection.push_unique(element_id.clone());
        }

        let Self { selection, listeners } = self;
        for listener in listeners {
            listener.selection_changed(diagram, selection);
        }

        Ok(&self.selection)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    UnknownElement { element_id: ElementId },
    AddedAndRemoved { element_id: ElementId },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownElement { element_id } => {
                write!(f, "element not found in diagram (id={element_id})")
            }
            Self::AddedAndRemoved { element_id } => {
                write!(f, "element appears in both added and removed (id={element_id})")
            }
        }
    }
}

impl std::error::Error for SelectionError {}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{SelectionError, SelectionListener, SelectionTracker};
    use crate::model::{Bounds, Diagram, DiagramId, Element, ElementId, ElementVariant, SelectionState};

    fn eid(value: &str) -> ElementId {
        ElementId::new(value).expect("element id")
    }

    fn diagram_with(ids: &[&str]) -> Diagram {
        let mut diagram = Diagram::new(DiagramId::new("d").expect("diagram id"), "d");
        for id in ids {
            diagram
                .insert_element(
                    eid(id),
                    Element::new(ElementVariant::Activity, *id, Bounds::new(0.0, 0.0, 10.0, 10.0)),
                    None,
                )
                .expect("insert");
        }
        diagram
    }

    struct Recorder {
        states: Rc<RefCell<Vec<Vec<String>>>>,
    }

    impl SelectionListener for Recorder {
        fn selection_changed(&mut self, _diagram: &Diagram, selection: &SelectionState) {
            self.states
                .borrow_mut()
                .push(selection.ids().iter().map(ToString::to_string).collect());
        }
    }

    #[test]
    fn applies_removed_then_added_in_order() {
        let diagram = diagram_with(&["a", "b", "c"]);
        let mut tracker = SelectionTracker::new();

        tracker
            .update_selection(&diagram, &[eid("a"), eid("b")], &[])
            .expect("select a b");
        let state = tracker
            .update_selection(&diagram, &[eid("c")], &[eid("a")])
            .expect("swap a for c");

        assert_eq!(state.ids(), &[eid("b"), eid("c")]);
        assert_eq!(state.active_element(), Some(&eid("c")));
    }

    #[test]
    fn rejects_unknown_element_without_mutating() {
        let diagram = diagram_with(&["a"]);
        let mut tracker = SelectionTracker::new();
        tracker
            .update_selection(&diagram, &[eid("a")], &[])
            .expect("select a");

        let err = tracker
            .update_selection(&diagram, &[eid("ghost")], &[eid("a")])
            .unwrap_err();
        assert_eq!(err, SelectionError::UnknownElement { element_id: eid("ghost") });
        assert_eq!(tracker.selection().ids(), &[eid("a")]);
    }

    #[test]
    fn rejects_id_in_both_lists() {
        let diagram = diagram_with(&["a"]);
        let mut tracker = SelectionTracker::new();

        let err = tracker
            .update_selection(&diagram, &[eid("a")], &[eid("a")])
            .unwrap_err();
        assert_eq!(err, SelectionError::AddedAndRemoved { element_id: eid("a") });
        assert!(tracker.selection().is_empty());
    }

    #[test]
    fn removing_unselected_id_is_a_no_op() {
        let diagram = diagram_with(&["a", "b"]);
        let mut tracker = SelectionTracker::new();
        tracker
            .update_selection(&diagram, &[eid("a")], &[])
            .expect("select a");

        let state = tracker
            .update_selection(&diagram, &[], &[eid("b")])
            .expect("remove unselected");
        assert_eq!(state.ids(), &[eid("a")]);
    }

    #[test]
    fn notifies_listeners_with_resulting_state() {
        let diagram = diagram_with(&["a", "b"]);
        let states = Rc::new(RefCell::new(Vec::new()));
        let mut tracker = SelectionTracker::new();
        tracker.register_listener(Box::new(Recorder { states: states.clone() }));

        tracker
            .update_selection(&diagram, &[eid("a")], &[])
            .expect("select a");
        tracker
            .update_selection(&diagram, &[eid("b")], &[eid("a")])
            .expect("swap");

        assert_eq!(
            *states.borrow(),
            vec![vec!["a".to_owned()], vec!["b".to_owned()]]
        );
    }

    #[test]
    fn failed_update_does_not_notify() {
        let diagram = diagram_with(&["a"]);
        let states = Rc::new(RefCell::new(Vec::new()));
        let mut tracker = SelectionTracker::new();
        tracker.register_listener(Box::new(Recorder { states: states.clone() }));

        tracker
            .update_selection(&diagram, &[eid("ghost")], &[])
            .unwrap_err();
        assert!(states.borrow().is_empty());
    }
}
