// src/geometry/measurements.rs

use crate::geometry::oracle::GeometryOracle;
use crate::geometry::ring::Ring;
use geo::coord;

/// Abgeleitete Maße eines Rings; werden bei jeder Geometrieänderung
/// neu berechnet und nie persistiert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingMeasurements {
    /// Fläche in m².
    pub area: f64,
    /// Umfang in m.
    pub perimeter: f64,
    /// Ost-West-Ausdehnung der Bounding Box in m, gemessen auf mittlerer Breite.
    pub bounding_width: f64,
    /// Nord-Süd-Ausdehnung der Bounding Box in m, gemessen auf mittlerer Länge.
    pub bounding_height: f64,
    /// Anzahl echter Vertices (Schlusspunkt ausgenommen).
    pub vertex_count: usize,
}

/// Berechnet alle Maße eines Rings über das Orakel.
pub fn compute<O: GeometryOracle>(oracle: &O, ring: &Ring) -> RingMeasurements {
    let bbox = oracle.bounding_box(ring);
    let (min, max) = (bbox.min(), bbox.max());
    let mid_y = (min.y + max.y) / 2.0;
    let mid_x = (min.x + max.x) / 2.0;

    let bounding_width = oracle.distance(
        coord! { x: min.x, y: mid_y },
        coord! { x: max.x, y: mid_y },
    );
    let bounding_height = oracle.distance(
        coord! { x: mid_x, y: min.y },
        coord! { x: mid_x, y: max.y },
    );

    RingMeasurements {
        area: oracle.area(ring),
        perimeter: oracle.length(ring),
        bounding_width,
        bounding_height,
        vertex_count: ring.vertex_count(),
    }
}

/// Formatiert eine Fläche in m² als "m²", "ha" oder "km²".
pub fn format_area(square_meters: f64) -> String {
    if square_meters >= 1_000_000.0 {
        format!("{:.2} km²", square_meters / 1_000_000.0)
    } else if square_meters >= 10_000.0 {
        format!("{:.2} ha", square_meters / 10_000.0)
    } else {
        format!("{square_meters:.2} m²")
    }
}

/// Formatiert eine Länge in Metern als "m" oder "km".
pub fn format_length(meters: f64) -> String {
    if meters >= 1_000.0 {
        format!("{:.2} km", meters / 1_000.0)
    } else {
        format!("{meters:.2} m")
    }
}
