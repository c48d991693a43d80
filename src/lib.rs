// ./src/lib.rs

// Hierarchie-Kern für dreistufige Vermessungs-Polygone:
// Area → Monitoring Zone → Sample Plot. Die kartenseitige Darstellung
// und das Vertex-Editing liegen außerhalb; dieser Kern entscheidet über
// Annahme, Löschkaskade und Code-Vergabe.
pub mod error;
pub mod geometry;
pub mod hierarchy;

// Re-Exporte für einfache Verwendung
pub use error::{HierarchyError, HierarchyResult};
pub use geometry::{GeoOracle, GeometryOracle, Ring, RingMeasurements};
pub use hierarchy::{HierarchyStore, PersistedPolygon, PolygonEntity, PolygonId, PolygonType};

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{HierarchyError, HierarchyResult},
        geometry::{
            GeoOracle, GeometryOracle, Ring, RingMeasurements,
            measurements::{format_area, format_length},
        },
        hierarchy::{
            HierarchyStore, HierarchyValidator, PersistedPolygon, PolygonEntity, PolygonId,
            PolygonType,
            naming::{area_number, plot_number, zone_number},
        },
    };
}
