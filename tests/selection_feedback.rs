// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end: load a snapshot, drive selection turns, assert the feedback
//! registry after each one.

use naiad::dispatch::{Editor, EditorEvent};
use naiad::feedback::{FeedbackInstruction, FeedbackKind};
use naiad::model::{diagram_from_json, ElementId};

const SNAPSHOT: &str = r#"{
  "id": "proc",
  "name": "Approval",
  "children": [
    { "id": "start", "type": "start-event", "label": "Start",
      "bounds": { "x": 20, "y": 40, "width": 30, "height": 30 } },
    { "id": "check", "type": "activity", "label": "Check request",
      "bounds": { "x": 100, "y": 25, "width": 120, "height": 60 } },
    { "id": "archive", "type": "sub-activity", "label": "Archive",
      "bounds": { "x": 280, "y": 25, "width": 120, "height": 60 } },
    { "id": "done", "type": "end-event", "label": "Done",
      "bounds": { "x": 460, "y": 40, "width": 30, "height": 30 } },
    { "id": "flow1", "type": "edge", "source": "start", "target": "check",
      "bounds": { "x": 50, "y": 55, "width": 50, "height": 0 },
      "routingPoints": [ { "x": 50, "y": 55 }, { "x": 100, "y": 55 } ] },
    { "id": "flow2", "type": "edge", "source": "check", "target": "archive",
      "bounds": { "x": 220, "y": 20, "width": 60, "height": 35 },
      "routingPoints": [ { "x": 220, "y": 55 }, { "x": 250, "y": 20 }, { "x": 280, "y": 55 } ] }
  ]
}"#;

fn eid(value: &str) -> ElementId {
    ElementId::new(value).expect("element id")
}

fn select(editor: &mut Editor, added: &[&str], removed: &[&str]) {
    editor
        .dispatch(EditorEvent::SelectionChanged {
            added: added.iter().map(|id| eid(id)).collect(),
            removed: removed.iter().map(|id| eid(id)).collect(),
        })
        .expect("selection turn");
}

fn show_targets(editor: &Editor, kind: FeedbackKind) -> Vec<String> {
    match editor.feedback().instruction(kind) {
        Some(FeedbackInstruction::Show { element_ids, .. }) => {
            element_ids.iter().map(ToString::to_string).collect()
        }
        _ => panic!("expected Show for {kind}"),
    }
}

#[test]
fn full_selection_walkthrough_drives_feedback() {
    let diagram = diagram_from_json(SNAPSHOT).expect("snapshot");
    let mut editor = Editor::new(diagram);

    // Single node: quick menu targets it, no smart actions for an activity.
    select(&mut editor, &["check"], &[]);
    assert_eq!(show_targets(&editor, FeedbackKind::QuickActionMenu), vec!["check"]);
    assert!(matches!(
        editor.feedback().instruction(FeedbackKind::SmartActionHint),
        Some(FeedbackInstruction::Hide { .. })
    ));

    // Sub-activity replaces it: smart hint appears (jump into).
    select(&mut editor, &["archive"], &["check"]);
    assert_eq!(show_targets(&editor, FeedbackKind::QuickActionMenu), vec!["archive"]);
    assert_eq!(show_targets(&editor, FeedbackKind::SmartActionHint), vec!["archive"]);

    // Multi-select: highlight carries both in insertion order, menus follow
    // the last insertion.
    select(&mut editor, &["check"], &[]);
    assert_eq!(
        show_targets(&editor, FeedbackKind::SelectionHighlight),
        vec!["archive", "check"]
    );
    assert_eq!(show_targets(&editor, FeedbackKind::QuickActionMenu), vec!["check"]);

    // Bendy edge: both edge smart actions contribute.
    select(&mut editor, &["flow2"], &["archive", "check"]);
    match editor.feedback().instruction(FeedbackKind::SmartActionHint) {
        Some(FeedbackInstruction::Show { actions, .. }) => {
            let kinds: Vec<&str> = actions.iter().map(|a| a.operation().kind()).collect();
            assert_eq!(kinds, vec!["straightenEdge", "autoBendEdge"]);
        }
        other => panic!("expected smart hint Show, got {other:?}"),
    }

    // Straight two-point edge: nothing to straighten, but bend still offers.
    select(&mut editor, &["flow1"], &["flow2"]);
    match editor.feedback().instruction(FeedbackKind::SmartActionHint) {
        Some(FeedbackInstruction::Show { actions, .. }) => {
            let kinds: Vec<&str> = actions.iter().map(|a| a.operation().kind()).collect();
            assert_eq!(kinds, vec!["autoBendEdge"]);
        }
        other => panic!("expected smart hint Show, got {other:?}"),
    }

    // Deselect everything: every kind ends hidden.
    select(&mut editor, &[], &["flow1"]);
    for kind in FeedbackKind::ALL {
        assert_eq!(
            editor.feedback().instruction(kind),
            Some(&FeedbackInstruction::Hide { kind }),
            "kind {kind} must end hidden"
        );
    }
}

#[test]
fn end_event_menu_has_no_outgoing_flow_actions() {
    let diagram = diagram_from_json(SNAPSHOT).expect("snapshot");
    let mut editor = Editor::new(diagram);

    select(&mut editor, &["done"], &[]);
    match editor.feedback().instruction(FeedbackKind::QuickActionMenu) {
        Some(FeedbackInstruction::Show { actions, .. }) => {
            let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
            assert_eq!(labels, vec!["Delete", "Information", "Select color"]);
        }
        other => panic!("expected quick menu Show, got {other:?}"),
    }
}
