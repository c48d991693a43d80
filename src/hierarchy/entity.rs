// src/hierarchy/entity.rs

use crate::geometry::measurements::RingMeasurements;
use crate::geometry::ring::Ring;
use crate::hierarchy::types::{PolygonId, PolygonType};
use serde::{Deserialize, Serialize};

/// Ein Polygon der Hierarchie. Name und Maße sind abgeleitet und werden
/// ausschließlich vom Store geschrieben.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonEntity {
    id: PolygonId,
    kind: PolygonType,
    parent_id: Option<PolygonId>,
    name: String,
    ring: Ring,
    measurements: RingMeasurements,
}

impl PolygonEntity {
    pub(crate) fn new(
        id: PolygonId,
        kind: PolygonType,
        parent_id: Option<PolygonId>,
        name: String,
        ring: Ring,
        measurements: RingMeasurements,
    ) -> Self {
        Self {
            id,
            kind,
            parent_id,
            name,
            ring,
            measurements,
        }
    }

    pub fn id(&self) -> PolygonId {
        self.id
    }

    pub fn kind(&self) -> PolygonType {
        self.kind
    }

    pub fn parent_id(&self) -> Option<PolygonId> {
        self.parent_id
    }

    /// Aktueller hierarchischer Code, z.B. "PA1_MZ2". Keine stabile
    /// Identität: kann sich beim Löschen von Geschwistern ändern.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn measurements(&self) -> &RingMeasurements {
        &self.measurements
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_geometry(&mut self, ring: Ring, measurements: RingMeasurements) {
        self.ring = ring;
        self.measurements = measurements;
    }

    /// Persistierbare Projektion: nur Identität, Typ, Elternbezug und
    /// Geometrie. Name und Maße werden beim Laden neu berechnet.
    pub fn to_persisted(&self) -> PersistedPolygon {
        PersistedPolygon {
            id: self.id,
            kind: self.kind,
            parent_id: self.parent_id,
            ring: self.ring.clone(),
        }
    }
}

/// Serialisierbare Form eines Polygons für umgebende Persistenz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedPolygon {
    pub id: PolygonId,
    pub kind: PolygonType,
    pub parent_id: Option<PolygonId>,
    pub ring: Ring,
}
