// src/hierarchy/validation.rs

use crate::error::{HierarchyError, HierarchyResult};
use crate::geometry::oracle::GeometryOracle;
use crate::geometry::ring::Ring;
use crate::hierarchy::store::HierarchyStore;
use crate::hierarchy::types::{PolygonId, PolygonType};

/// Reine Prüfsicht auf einen Store: entscheidet, ob ein gezeichneter oder
/// editierter Ring angenommen werden darf, ohne den Store zu verändern.
///
/// Die Regeln laufen in fester Reihenfolge, der erste Verstoß gewinnt:
/// 1. keine Überlappung mit Ringen gleichen Typs,
/// 2. vollständige Lage im Eltern-Ring,
/// 3. beim Editieren: alle direkten Kinder bleiben enthalten.
///
/// Degenerierte Ringe tauchen hier nicht auf; die `Ring`-Konstruktoren
/// lassen sie gar nicht erst entstehen.
pub struct HierarchyValidator<'a, O: GeometryOracle> {
    store: &'a HierarchyStore<O>,
}

impl<'a, O: GeometryOracle> HierarchyValidator<'a, O> {
    pub(crate) fn new(store: &'a HierarchyStore<O>) -> Self {
        Self { store }
    }

    /// Prüft einen Ring für Neuanlage (`exclude == None`) oder Bearbeitung
    /// (`exclude` trägt die eigene Id).
    pub fn validate(
        &self,
        ring: &Ring,
        kind: PolygonType,
        parent_id: Option<PolygonId>,
        exclude: Option<PolygonId>,
    ) -> HierarchyResult<()> {
        self.check_overlap(ring, kind, exclude)?;
        self.check_parent_containment(ring, kind, parent_id)?;
        if let Some(own_id) = exclude {
            if kind.child_type().is_some() {
                self.check_children_contained(ring, kind, own_id)?;
            }
        }
        Ok(())
    }

    fn check_overlap(
        &self,
        ring: &Ring,
        kind: PolygonType,
        exclude: Option<PolygonId>,
    ) -> HierarchyResult<()> {
        // Kanonische Reihenfolge, damit der gemeldete Konflikt
        // reproduzierbar ist.
        for other in self.store.by_type(kind) {
            if Some(other.id()) == exclude {
                continue;
            }
            if self.store.oracle().intersects(ring, other.ring()) {
                return Err(HierarchyError::Overlap {
                    kind,
                    conflicting_id: other.id(),
                });
            }
        }
        Ok(())
    }

    fn check_parent_containment(
        &self,
        ring: &Ring,
        kind: PolygonType,
        parent_id: Option<PolygonId>,
    ) -> HierarchyResult<()> {
        let Some(required) = kind.parent_type() else {
            // Areas führen keinen Elternbezug.
            return match parent_id {
                None => Ok(()),
                Some(_) => Err(HierarchyError::MissingParent { parent_id }),
            };
        };

        let parent = parent_id
            .and_then(|id| self.store.get(id))
            .filter(|p| p.kind() == required)
            .ok_or(HierarchyError::MissingParent { parent_id })?;

        if !self.store.oracle().contains(parent.ring(), ring) {
            return Err(HierarchyError::Containment {
                kind,
                parent_id: parent.id(),
            });
        }
        Ok(())
    }

    fn check_children_contained(
        &self,
        ring: &Ring,
        kind: PolygonType,
        own_id: PolygonId,
    ) -> HierarchyResult<()> {
        // Kinder in Einfüge-Reihenfolge; das erste verletzende Kind wird
        // im Fehler benannt.
        for child_id in self.store.children_of(own_id) {
            let Some(child) = self.store.get(*child_id) else {
                continue;
            };
            if !self.store.oracle().contains(ring, child.ring()) {
                return Err(HierarchyError::ChildOutOfBounds {
                    kind,
                    child_id: child.id(),
                    child_name: child.name().to_string(),
                });
            }
        }
        Ok(())
    }
}
