// src/error.rs
use crate::hierarchy::types::{PolygonId, PolygonType};
use thiserror::Error;

/// Fehlerarten des Hierarchie-Kerns. Alle Varianten sind für den
/// Aufrufer behebbar; der Store bleibt bei jedem Fehler unverändert.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HierarchyError {
    #[error("{} cannot overlap with each other", kind.plural_label())]
    Overlap {
        kind: PolygonType,
        conflicting_id: PolygonId,
    },

    #[error("selected parent polygon does not exist or has the wrong type")]
    MissingParent { parent_id: Option<PolygonId> },

    #[error(
        "{} must be completely within the selected {}",
        kind.label(),
        kind.parent_type().map_or("parent", |parent| parent.label())
    )]
    Containment {
        kind: PolygonType,
        parent_id: PolygonId,
    },

    #[error("Cannot resize {}: \"{child_name}\" would be outside the boundary", kind.label())]
    ChildOutOfBounds {
        kind: PolygonType,
        child_id: PolygonId,
        child_name: String,
    },

    #[error("degenerate ring: {reason}")]
    DegenerateRing { reason: String },

    #[error("vertex index {index} out of bounds for a ring with {vertex_count} vertices")]
    InvalidVertexIndex { index: usize, vertex_count: usize },

    #[error("no polygon with id {id}")]
    NotFound { id: PolygonId },

    #[error("duplicate polygon id {id} in persisted data")]
    DuplicateId { id: PolygonId },
}

pub type HierarchyResult<T> = Result<T, HierarchyError>;
