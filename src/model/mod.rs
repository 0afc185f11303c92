// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Diagrams are read-only element-tree snapshots owned by the host
//! framework; the only state this core mutates is the selection and the
//! transient hover flag.

pub mod diagram;
pub mod element;
pub(crate) mod fixtures;
pub mod geometry;
pub mod ids;
pub mod selection;
pub mod snapshot;

pub use diagram::{Diagram, DiagramError};
pub use element::{EdgeDetail, EdgeRouting, Element, ElementVariant};
pub use geometry::{Bounds, Point};
pub use ids::{DiagramId, ElementId, Id, IdError};
pub use selection::SelectionState;
pub use snapshot::{
    diagram_from_json, diagram_from_snapshot, BoundsSnapshot, DiagramSnapshot, ElementSnapshot,
    PointSnapshot, SnapshotError,
};
