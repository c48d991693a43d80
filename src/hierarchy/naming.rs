// src/hierarchy/naming.rs

use crate::geometry::oracle::GeometryOracle;
use crate::hierarchy::store::HierarchyStore;
use crate::hierarchy::types::{PolygonId, PolygonType};
use tracing::warn;

/// Liest die Area-Nummer aus einem Code ("PA2" → 2, "PA1_MZ3" → 1).
pub fn area_number(name: &str) -> Option<u32> {
    name.strip_prefix("PA").and_then(leading_number)
}

/// Liest die Zonen-Nummer aus einem Code ("PA1_MZ3" → 3).
pub fn zone_number(name: &str) -> Option<u32> {
    number_after(name, "_MZ")
}

/// Liest die Plot-Nummer aus einem Code ("PA1_MZ2_SP4" → 4).
pub fn plot_number(name: &str) -> Option<u32> {
    number_after(name, "_SP")
}

fn number_after(name: &str, marker: &str) -> Option<u32> {
    name.find(marker)
        .and_then(|at| leading_number(&name[at + marker.len()..]))
}

fn leading_number(text: &str) -> Option<u32> {
    let digits: &str = text
        .split_once(|c: char| !c.is_ascii_digit())
        .map_or(text, |(head, _)| head);
    digits.parse().ok()
}

/// Erzeugt den nächsten fortlaufenden Code für ein neues Polygon.
///
/// Wird nur bei der Erzeugung ausgewertet; nach einer Validierung ist der
/// Elternbezug immer auflösbar. Lücken entstehen hier nie, weil jeder
/// Löschvorgang eine Neunummerierung nach sich zieht.
pub fn generate_name<O: GeometryOracle>(
    store: &HierarchyStore<O>,
    kind: PolygonType,
    parent_id: Option<PolygonId>,
) -> String {
    match kind {
        PolygonType::Area => format!("PA{}", store.by_type(PolygonType::Area).count() + 1),
        PolygonType::MonitoringZone => {
            let Some(parent) = parent_id.and_then(|id| store.get(id)) else {
                return fallback_name(store, kind);
            };
            let area_no = area_number(parent.name()).unwrap_or(0);
            let siblings = store.children_of(parent.id()).len();
            format!("PA{}_MZ{}", area_no, siblings + 1)
        }
        PolygonType::SamplePlot => {
            let Some(parent) = parent_id.and_then(|id| store.get(id)) else {
                return fallback_name(store, kind);
            };
            let area_no = area_number(parent.name()).unwrap_or(0);
            let zone_no = zone_number(parent.name()).unwrap_or(0);
            let siblings = store.children_of(parent.id()).len();
            format!("PA{}_MZ{}_SP{}", area_no, zone_no, siblings + 1)
        }
    }
}

fn fallback_name<O: GeometryOracle>(store: &HierarchyStore<O>, kind: PolygonType) -> String {
    warn!("naming fallback for {} without resolvable parent", kind.label());
    format!(
        "{}{}",
        kind.code_prefix(),
        store.by_type(kind).count() + 1
    )
}
