// src/hierarchy/types.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Die drei Hierarchie-Ebenen, streng geordnet von außen nach innen:
/// Area → Monitoring Zone → Sample Plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolygonType {
    Area,
    MonitoringZone,
    SamplePlot,
}

impl PolygonType {
    /// Erforderlicher Elterntyp; `None` für die Wurzel-Ebene.
    pub fn parent_type(&self) -> Option<PolygonType> {
        match self {
            PolygonType::Area => None,
            PolygonType::MonitoringZone => Some(PolygonType::Area),
            PolygonType::SamplePlot => Some(PolygonType::MonitoringZone),
        }
    }

    /// Direkt untergeordneter Typ; `None` für die Blatt-Ebene.
    pub fn child_type(&self) -> Option<PolygonType> {
        match self {
            PolygonType::Area => Some(PolygonType::MonitoringZone),
            PolygonType::MonitoringZone => Some(PolygonType::SamplePlot),
            PolygonType::SamplePlot => None,
        }
    }

    /// Anzeigename für Meldungen und UI-Listen.
    pub fn label(&self) -> &'static str {
        match self {
            PolygonType::Area => "Area",
            PolygonType::MonitoringZone => "Monitoring Zone",
            PolygonType::SamplePlot => "Sample Plot",
        }
    }

    pub fn plural_label(&self) -> &'static str {
        match self {
            PolygonType::Area => "Areas",
            PolygonType::MonitoringZone => "Monitoring Zones",
            PolygonType::SamplePlot => "Sample Plots",
        }
    }

    /// Präfix der hierarchischen Codes ("PA1_MZ2_SP3").
    pub fn code_prefix(&self) -> &'static str {
        match self {
            PolygonType::Area => "PA",
            PolygonType::MonitoringZone => "MZ",
            PolygonType::SamplePlot => "SP",
        }
    }
}

impl fmt::Display for PolygonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Opake, stabile Identität eines Polygons. Wird vom Store vergeben
/// und nie wiederverwendet; der angezeigte Code ist davon unabhängig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PolygonId(pub(crate) u64);

impl fmt::Display for PolygonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ordering_follows_depth() {
        assert!(PolygonType::Area < PolygonType::MonitoringZone);
        assert!(PolygonType::MonitoringZone < PolygonType::SamplePlot);
    }

    #[test]
    fn test_parent_child_chain() {
        assert_eq!(PolygonType::Area.parent_type(), None);
        assert_eq!(
            PolygonType::SamplePlot.parent_type(),
            Some(PolygonType::MonitoringZone)
        );
        assert_eq!(
            PolygonType::Area.child_type(),
            Some(PolygonType::MonitoringZone)
        );
        assert_eq!(PolygonType::SamplePlot.child_type(), None);
    }

    #[test]
    fn test_labels_and_prefixes() {
        assert_eq!(PolygonType::MonitoringZone.label(), "Monitoring Zone");
        assert_eq!(PolygonType::MonitoringZone.plural_label(), "Monitoring Zones");
        assert_eq!(PolygonType::SamplePlot.code_prefix(), "SP");
        assert_eq!(PolygonType::Area.to_string(), "Area");
    }
}
