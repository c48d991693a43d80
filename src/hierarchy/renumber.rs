// src/hierarchy/renumber.rs

use crate::geometry::oracle::GeometryOracle;
use crate::hierarchy::store::HierarchyStore;
use crate::hierarchy::types::PolygonId;
use tracing::debug;

/// Rechnet alle Codes nach einer Strukturänderung neu, streng von oben
/// nach unten, weil Kind-Codes die Nummern ihrer Vorfahren einbetten.
///
/// Der Rang ergibt sich allein aus der bestehenden Einfüge-Reihenfolge;
/// die Reihenfolge der Geschwister ändert sich hier nie. Der Durchlauf
/// ist idempotent: ein zweiter Aufruf schreibt nichts mehr um.
///
/// Liefert die Anzahl tatsächlich umgeschriebener Namen.
pub(crate) fn renumber<O: GeometryOracle>(store: &mut HierarchyStore<O>) -> usize {
    let mut rewritten = 0;

    let areas: Vec<PolygonId> = store.roots.to_vec();
    for (area_rank, area_id) in areas.iter().enumerate() {
        let area_no = area_rank + 1;
        if store.rename(*area_id, format!("PA{area_no}")) {
            rewritten += 1;
        }

        let zones: Vec<PolygonId> = store.children_of(*area_id).to_vec();
        for (zone_rank, zone_id) in zones.iter().enumerate() {
            let zone_no = zone_rank + 1;
            if store.rename(*zone_id, format!("PA{area_no}_MZ{zone_no}")) {
                rewritten += 1;
            }

            // Plot-Namen werden immer aus den frisch berechneten Nummern
            // zusammengesetzt, unabhängig davon, ob sich oben etwas
            // geändert hat.
            let plots: Vec<PolygonId> = store.children_of(*zone_id).to_vec();
            for (plot_rank, plot_id) in plots.iter().enumerate() {
                let name = format!("PA{area_no}_MZ{zone_no}_SP{}", plot_rank + 1);
                if store.rename(*plot_id, name) {
                    rewritten += 1;
                }
            }
        }
    }

    if rewritten > 0 {
        debug!("renumbering rewrote {rewritten} name(s)");
    }
    rewritten
}

#[cfg(test)]
mod tests {
    use crate::geometry::oracle::GeoOracle;
    use crate::geometry::ring::Ring;
    use crate::hierarchy::store::HierarchyStore;
    use crate::hierarchy::types::PolygonType;
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

    fn names(store: &HierarchyStore<GeoOracle>) -> Vec<String> {
        store.iter().map(|e| e.name().to_string()).collect()
    }

    #[test]
    fn test_deleting_first_area_closes_the_gap() {
        let mut store = HierarchyStore::new();
        let a1 = store
            .add_polygon(PolygonType::Area, None, square(0.0, 0.0, 1.0))
            .unwrap()
            .id();
        store
            .add_polygon(PolygonType::Area, None, square(2.0, 0.0, 1.0))
            .unwrap();
        store
            .add_polygon(PolygonType::Area, None, square(4.0, 0.0, 1.0))
            .unwrap();
        assert_eq!(names(&store), vec!["PA1", "PA2", "PA3"]);

        store.remove_polygon(a1).unwrap();
        // Überlebende rücken in ihrer bisherigen Reihenfolge nach.
        assert_eq!(names(&store), vec!["PA1", "PA2"]);
    }

    #[test]
    fn test_descendant_codes_follow_ancestor_numbers() {
        let mut store = HierarchyStore::new();
        let a1 = store
            .add_polygon(PolygonType::Area, None, square(0.0, 0.0, 1.0))
            .unwrap()
            .id();
        let a2 = store
            .add_polygon(PolygonType::Area, None, square(2.0, 0.0, 1.0))
            .unwrap()
            .id();
        let z = store
            .add_polygon(PolygonType::MonitoringZone, Some(a2), square(2.2, 0.2, 0.5))
            .unwrap()
            .id();
        store
            .add_polygon(PolygonType::SamplePlot, Some(z), square(2.3, 0.3, 0.2))
            .unwrap();
        assert_eq!(names(&store), vec!["PA1", "PA2", "PA2_MZ1", "PA2_MZ1_SP1"]);

        store.remove_polygon(a1).unwrap();
        assert_eq!(names(&store), vec!["PA1", "PA1_MZ1", "PA1_MZ1_SP1"]);
    }

    #[test]
    fn test_renumber_is_idempotent() {
        let mut store = HierarchyStore::new();
        let a1 = store
            .add_polygon(PolygonType::Area, None, square(0.0, 0.0, 1.0))
            .unwrap()
            .id();
        let a2 = store
            .add_polygon(PolygonType::Area, None, square(2.0, 0.0, 1.0))
            .unwrap()
            .id();
        let z = store
            .add_polygon(PolygonType::MonitoringZone, Some(a2), square(2.2, 0.2, 0.5))
            .unwrap()
            .id();
        store
            .add_polygon(PolygonType::SamplePlot, Some(z), square(2.3, 0.3, 0.2))
            .unwrap();
        store.remove_polygon(a1).unwrap();

        let after_removal = names(&store);
        assert_eq!(store.renumber(), 0);
        assert_eq!(names(&store), after_removal);
        assert_eq!(store.renumber(), 0);
    }

    #[test]
    fn test_middle_zone_removal_renumbers_plots() {
        let mut store = HierarchyStore::new();
        let area = store
            .add_polygon(PolygonType::Area, None, square(0.0, 0.0, 2.0))
            .unwrap()
            .id();
        let z1 = store
            .add_polygon(PolygonType::MonitoringZone, Some(area), square(0.1, 0.1, 0.5))
            .unwrap()
            .id();
        store
            .add_polygon(PolygonType::MonitoringZone, Some(area), square(0.8, 0.1, 0.5))
            .unwrap();
        let z3 = store
            .add_polygon(PolygonType::MonitoringZone, Some(area), square(0.1, 0.8, 0.5))
            .unwrap()
            .id();
        store
            .add_polygon(PolygonType::SamplePlot, Some(z3), square(0.2, 0.9, 0.1))
            .unwrap();
        assert_eq!(
            names(&store),
            vec!["PA1", "PA1_MZ1", "PA1_MZ2", "PA1_MZ3", "PA1_MZ3_SP1"]
        );

        store.remove_polygon(z1).unwrap();
        assert_eq!(
            names(&store),
            vec!["PA1", "PA1_MZ1", "PA1_MZ2", "PA1_MZ2_SP1"]
        );
    }
}
