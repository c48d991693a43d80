// src/geometry/ring.rs

use crate::error::{HierarchyError, HierarchyResult};
use geo::{Coord, LineString, Polygon};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geschlossener Vertex-Ring eines einfachen Polygons in Lng/Lat-Reihenfolge.
/// Invarianten: erster Punkt == letzter Punkt, mindestens 3 verschiedene
/// Vertices (also mindestens 4 gespeicherte Punkte).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coord<f64>>", into = "Vec<Coord<f64>>")]
pub struct Ring {
    coords: Vec<Coord<f64>>,
}

impl Ring {
    /// Erstellt einen Ring aus einer bereits geschlossenen Punktfolge.
    pub fn new(coords: Vec<Coord<f64>>) -> HierarchyResult<Self> {
        Self::from_coords(coords, false)
    }

    /// Erstellt einen Ring und schließt die Punktfolge bei Bedarf selbst.
    pub fn closed(coords: Vec<Coord<f64>>) -> HierarchyResult<Self> {
        Self::from_coords(coords, true)
    }

    fn from_coords(mut coords: Vec<Coord<f64>>, force_closed: bool) -> HierarchyResult<Self> {
        if force_closed && !coords.is_empty() && coords.first() != coords.last() {
            coords.push(coords[0]);
        }

        if coords.first() != coords.last() || coords.is_empty() {
            return Err(HierarchyError::DegenerateRing {
                reason: "ring is not closed".to_string(),
            });
        }

        if distinct_vertices(&coords[..coords.len() - 1]) < 3 {
            return Err(HierarchyError::DegenerateRing {
                reason: "a ring needs at least 3 distinct vertices".to_string(),
            });
        }

        Ok(Self { coords })
    }

    /// Alle gespeicherten Punkte inklusive Schlusspunkt.
    pub fn coords(&self) -> &[Coord<f64>] {
        &self.coords
    }

    /// Anzahl der echten Vertices (Schlusspunkt ausgenommen).
    pub fn vertex_count(&self) -> usize {
        self.coords.len() - 1
    }

    /// Anzahl der gespeicherten Punkte inklusive Schlusspunkt.
    pub fn point_count(&self) -> usize {
        self.coords.len()
    }

    pub fn to_line_string(&self) -> LineString<f64> {
        LineString::from(self.coords.clone())
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        Polygon::new(self.to_line_string(), vec![])
    }

    /// Fügt einen Vertex an Position `index` ein; `index == vertex_count()`
    /// hängt vor dem Schlusspunkt an. Beim Einfügen an Position 0 wird der
    /// Schlusspunkt auf den neuen ersten Vertex umgeschrieben.
    pub fn insert_vertex(&mut self, index: usize, coord: Coord<f64>) -> HierarchyResult<()> {
        if index > self.vertex_count() {
            return Err(HierarchyError::InvalidVertexIndex {
                index,
                vertex_count: self.vertex_count(),
            });
        }

        self.coords.insert(index, coord);
        if index == 0 {
            let first = self.coords[0];
            if let Some(last) = self.coords.last_mut() {
                *last = first;
            }
        }
        Ok(())
    }

    /// Entfernt den Vertex an `index` und liefert ihn zurück.
    ///
    /// Wird der erste Vertex entfernt, folgt der Schlusspunkt dem neuen
    /// ersten Vertex. Das Entfernen des Vertex direkt vor dem Schlusspunkt
    /// lässt den Ring von selbst geschlossen; beide Sonderfälle zugleich
    /// sind nur auf Ringen möglich, die die Mindestgrößen-Prüfung ohnehin
    /// ablehnt. Schlägt die Prüfung fehl, bleibt der Ring unverändert.
    pub fn remove_vertex(&mut self, index: usize) -> HierarchyResult<Coord<f64>> {
        if index >= self.vertex_count() {
            return Err(HierarchyError::InvalidVertexIndex {
                index,
                vertex_count: self.vertex_count(),
            });
        }

        if self.coords.len() <= 4 {
            return Err(HierarchyError::DegenerateRing {
                reason: "a ring must keep at least 3 vertices".to_string(),
            });
        }

        let mut next = self.coords.clone();
        let removed = next.remove(index);
        if index == 0 {
            let first = next[0];
            if let Some(last) = next.last_mut() {
                *last = first;
            }
        }

        if distinct_vertices(&next[..next.len() - 1]) < 3 {
            return Err(HierarchyError::DegenerateRing {
                reason: "a ring needs at least 3 distinct vertices".to_string(),
            });
        }

        self.coords = next;
        Ok(removed)
    }
}

/// Zählt verschiedene Punkte; f64-Koordinaten sind nicht hashbar,
/// daher linear über eine kleine Liste.
fn distinct_vertices(coords: &[Coord<f64>]) -> usize {
    let mut seen: Vec<Coord<f64>> = Vec::with_capacity(coords.len());
    for coord in coords {
        if !seen.contains(coord) {
            seen.push(*coord);
        }
    }
    seen.len()
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ring({} vertices)", self.vertex_count())
    }
}

impl TryFrom<Vec<Coord<f64>>> for Ring {
    type Error = HierarchyError;

    fn try_from(coords: Vec<Coord<f64>>) -> Result<Self, Self::Error> {
        Self::new(coords)
    }
}

impl From<Ring> for Vec<Coord<f64>> {
    fn from(ring: Ring) -> Self {
        ring.coords
    }
}
