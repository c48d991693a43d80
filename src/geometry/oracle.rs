// src/geometry/oracle.rs

use crate::geometry::ring::Ring;
use geo::{
    BoundingRect, Coord, Distance, GeodesicArea, Haversine, Intersects, Length, Point, Rect,
    Relate,
};

/// Externe Quelle aller räumlichen Prädikate und Maße. Der Kern rechnet
/// selbst keine planare oder geodätische Geometrie; er vertraut dem Orakel.
pub trait GeometryOracle {
    /// Fläche des Rings in Quadratmetern.
    fn area(&self, ring: &Ring) -> f64;

    /// Kantenlänge des Rings als Pfad, in Metern.
    fn length(&self, ring: &Ring) -> f64;

    /// Achsenparallele Hülle in Lng/Lat.
    fn bounding_box(&self, ring: &Ring) -> Rect<f64>;

    /// Distanz zwischen zwei Punkten in Metern.
    fn distance(&self, from: Coord<f64>, to: Coord<f64>) -> f64;

    /// Teilen sich beide Ringe Fläche oder Rand?
    fn intersects(&self, a: &Ring, b: &Ring) -> bool;

    /// Liegt `inner` vollständig in `outer` (Rand eingeschlossen)?
    fn contains(&self, outer: &Ring, inner: &Ring) -> bool;
}

/// Standard-Orakel auf Basis des `geo`-Crates.
///
/// Semantik, auf die sich die Validierung verlässt:
/// - `intersects` meldet auch reine Randberührung (gemeinsame Kante oder
///   gemeinsamer Eckpunkt) als `true`; randberührende Ringe gleichen Typs
///   gelten damit als überlappend.
/// - `contains` ist DE-9IM `covers`, also randinklusiv: ein innen
///   anliegender Ring zählt als enthalten.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoOracle;

impl GeometryOracle for GeoOracle {
    fn area(&self, ring: &Ring) -> f64 {
        ring.to_polygon().geodesic_area_unsigned()
    }

    fn length(&self, ring: &Ring) -> f64 {
        Haversine.length(&ring.to_line_string())
    }

    fn bounding_box(&self, ring: &Ring) -> Rect<f64> {
        ring.to_polygon()
            .bounding_rect()
            .unwrap_or_else(|| Rect::new(ring.coords()[0], ring.coords()[0]))
    }

    fn distance(&self, from: Coord<f64>, to: Coord<f64>) -> f64 {
        Haversine.distance(Point::from(from), Point::from(to))
    }

    fn intersects(&self, a: &Ring, b: &Ring) -> bool {
        a.to_polygon().intersects(&b.to_polygon())
    }

    fn contains(&self, outer: &Ring, inner: &Ring) -> bool {
        outer.to_polygon().relate(&inner.to_polygon()).is_covers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geo::coord;

    fn square(x: f64, y: f64, size: f64) -> Ring {
        Ring::closed(vec![
            coord! { x: x, y: y },
            coord! { x: x + size, y: y },
            coord! { x: x + size, y: y + size },
            coord! { x: x, y: y + size },
        ])
        .unwrap()
    }

    #[test]
    fn test_distance_one_degree_at_equator() {
        let oracle = GeoOracle;
        let d = oracle.distance(coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 0.0 });
        assert_relative_eq!(d, 111_195.0, max_relative = 0.01);
    }

    #[test]
    fn test_area_of_small_square() {
        let oracle = GeoOracle;
        let area = oracle.area(&square(0.0, 0.0, 0.01));
        // ca. 1.11 km Kantenlänge
        assert!(area > 1.1e6 && area < 1.3e6, "area = {area}");
    }

    #[test]
    fn test_disjoint_squares_do_not_intersect() {
        let oracle = GeoOracle;
        assert!(!oracle.intersects(&square(0.0, 0.0, 1.0), &square(2.0, 0.0, 1.0)));
    }

    #[test]
    fn test_edge_sharing_squares_intersect() {
        // Reine Randberührung zählt als Überlappung.
        let oracle = GeoOracle;
        assert!(oracle.intersects(&square(0.0, 0.0, 1.0), &square(1.0, 0.0, 1.0)));
    }

    #[test]
    fn test_corner_touching_squares_intersect() {
        let oracle = GeoOracle;
        assert!(oracle.intersects(&square(0.0, 0.0, 1.0), &square(1.0, 1.0, 1.0)));
    }

    #[test]
    fn test_contains_is_boundary_inclusive() {
        let oracle = GeoOracle;
        let outer = square(0.0, 0.0, 1.0);
        // Innenliegender Ring, der den Rand des äußeren berührt.
        let tangent = square(0.0, 0.0, 0.5);
        assert!(oracle.contains(&outer, &tangent));

        let escaping = square(0.6, 0.6, 0.8);
        assert!(!oracle.contains(&outer, &escaping));
    }

    #[test]
    fn test_bounding_box_spans_ring() {
        let oracle = GeoOracle;
        let bbox = oracle.bounding_box(&square(1.0, 2.0, 0.5));
        assert_eq!(bbox.min(), coord! { x: 1.0, y: 2.0 });
        assert_eq!(bbox.max(), coord! { x: 1.5, y: 2.5 });
    }
}
