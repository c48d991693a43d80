// src/geometry/mod.rs

// Geometrische Bausteine: der Ring-Typ, das Orakel als externe
// Rechenquelle und die daraus abgeleiteten Maße.
pub mod measurements;
pub mod oracle;
pub mod ring;

// Re-Exporte für den einfachen Zugriff auf die Kerntypen.
pub use self::measurements::RingMeasurements;
pub use self::oracle::{GeoOracle, GeometryOracle};
pub use self::ring::Ring;
