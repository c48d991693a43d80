// src/hierarchy/store.rs

use crate::error::{HierarchyError, HierarchyResult};
use crate::geometry::measurements;
use crate::geometry::oracle::{GeoOracle, GeometryOracle};
use crate::geometry::ring::Ring;
use crate::hierarchy::entity::{PersistedPolygon, PolygonEntity};
use crate::hierarchy::naming;
use crate::hierarchy::renumber;
use crate::hierarchy::types::{PolygonId, PolygonType};
use crate::hierarchy::validation::HierarchyValidator;
use std::collections::HashMap;
use tracing::info;

/// Besitzt die Polygonmenge samt Eltern-Kind-Beziehungen; jede Mutation
/// läuft über genau diese drei Einstiege: `add_polygon`,
/// `update_polygon_geometry`, `remove_polygon`.
///
/// Geschwister-Ränge müssen reproduzierbar sein, deshalb führt der Store
/// neben der Id-Map explizite, einfüge-geordnete Listen: `roots` für die
/// Areas und `children` je Elternteil. Map-Iterationsreihenfolge fließt
/// nirgends in Ergebnisse ein.
///
/// Jede Mutation ist transaktional: erst vollständig validieren, dann
/// schreiben; Löschen und Neunummerieren bilden eine Einheit.
#[derive(Debug)]
pub struct HierarchyStore<O: GeometryOracle = GeoOracle> {
    pub(crate) oracle: O,
    pub(crate) entities: HashMap<PolygonId, PolygonEntity>,
    pub(crate) roots: Vec<PolygonId>,
    pub(crate) children: HashMap<PolygonId, Vec<PolygonId>>,
    next_id: u64,
}

impl HierarchyStore<GeoOracle> {
    pub fn new() -> Self {
        Self::with_oracle(GeoOracle)
    }
}

impl Default for HierarchyStore<GeoOracle> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: GeometryOracle> HierarchyStore<O> {
    /// Erstellt einen leeren Store über einem eigenen Orakel.
    pub fn with_oracle(oracle: O) -> Self {
        Self {
            oracle,
            entities: HashMap::new(),
            roots: Vec::new(),
            children: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Reine Prüfsicht, z.B. für Vorab-Checks während des Zeichnens.
    pub fn validator(&self) -> HierarchyValidator<'_, O> {
        HierarchyValidator::new(self)
    }

    pub fn get(&self, id: PolygonId) -> Option<&PolygonEntity> {
        self.entities.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Areas in Einfüge-Reihenfolge.
    pub fn roots(&self) -> &[PolygonId] {
        &self.roots
    }

    /// Direkte Kinder in Einfüge-Reihenfolge.
    pub fn children_of(&self, id: PolygonId) -> &[PolygonId] {
        self.children.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Alle Polygone in kanonischer Reihenfolge: Areas nach Einfügung,
    /// darunter jeweils der Teilbaum in Pre-Order.
    pub fn iter(&self) -> impl Iterator<Item = &PolygonEntity> + '_ {
        self.ordered_ids()
            .into_iter()
            .filter_map(move |id| self.entities.get(&id))
    }

    /// Alle Polygone eines Typs, in kanonischer Reihenfolge.
    pub fn by_type(&self, kind: PolygonType) -> impl Iterator<Item = &PolygonEntity> + '_ {
        self.iter().filter(move |entity| entity.kind() == kind)
    }

    /// Alle transitiven Nachfahren, Pre-Order, ohne das Polygon selbst.
    /// Iterativ mit explizitem Stack statt Rekursion.
    pub fn find_descendants(&self, id: PolygonId) -> Vec<PolygonId> {
        let mut descendants = Vec::new();
        let mut stack: Vec<PolygonId> = self.children_of(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            descendants.push(next);
            for child in self.children_of(next).iter().rev() {
                stack.push(*child);
            }
        }
        descendants
    }

    /// Namen aller Nachfahren, z.B. für einen Lösch-Bestätigungsdialog.
    pub fn descendant_names(&self, id: PolygonId) -> Vec<String> {
        self.find_descendants(id)
            .into_iter()
            .filter_map(|descendant| self.get(descendant))
            .map(|entity| entity.name().to_string())
            .collect()
    }

    /// Legt ein neues Polygon an. Validierung, Maße und Namensvergabe
    /// laufen vor dem ersten Schreibzugriff; bei einem Fehler bleibt der
    /// Store unverändert.
    pub fn add_polygon(
        &mut self,
        kind: PolygonType,
        parent_id: Option<PolygonId>,
        ring: Ring,
    ) -> HierarchyResult<&PolygonEntity> {
        self.validator().validate(&ring, kind, parent_id, None)?;

        let measurements = measurements::compute(&self.oracle, &ring);
        let name = naming::generate_name(self, kind, parent_id);
        let id = PolygonId(self.next_id);
        self.next_id += 1;

        match parent_id {
            Some(parent) => self.children.entry(parent).or_default().push(id),
            None => self.roots.push(id),
        }

        let entity = PolygonEntity::new(id, kind, parent_id, name, ring, measurements);
        let entity = self.entities.entry(id).or_insert(entity);
        info!("created {} ({})", entity.name(), kind.label());
        Ok(entity)
    }

    /// Ersetzt die Geometrie eines bestehenden Polygons nach erneuter
    /// Validierung; Name und Elternbezug bleiben unberührt.
    pub fn update_polygon_geometry(
        &mut self,
        id: PolygonId,
        ring: Ring,
    ) -> HierarchyResult<&PolygonEntity> {
        let (kind, parent_id) = {
            let entity = self.entities.get(&id).ok_or(HierarchyError::NotFound { id })?;
            (entity.kind(), entity.parent_id())
        };

        self.validator().validate(&ring, kind, parent_id, Some(id))?;

        let new_measurements = measurements::compute(&self.oracle, &ring);
        let entity = self.entities.get_mut(&id).ok_or(HierarchyError::NotFound { id })?;
        entity.set_geometry(ring, new_measurements);
        Ok(&*entity)
    }

    /// Entfernt ein Polygon mitsamt allen Nachfahren und nummeriert die
    /// Überlebenden neu. Liefert die entfernten Ids, das Ziel zuerst,
    /// Nachfahren in Pre-Order.
    pub fn remove_polygon(&mut self, id: PolygonId) -> HierarchyResult<Vec<PolygonId>> {
        let parent_id = self
            .entities
            .get(&id)
            .ok_or(HierarchyError::NotFound { id })?
            .parent_id();

        let mut removed = vec![id];
        removed.extend(self.find_descendants(id));
        for gone in &removed {
            self.entities.remove(gone);
            self.children.remove(gone);
        }

        // Nur das Ziel selbst hängt noch in einer Geschwisterliste;
        // die Listen der Nachfahren sind mit ihren Eltern verschwunden.
        match parent_id {
            Some(parent) => {
                if let Some(siblings) = self.children.get_mut(&parent) {
                    siblings.retain(|sibling| *sibling != id);
                }
            }
            None => self.roots.retain(|root| *root != id),
        }

        let rewritten = renumber::renumber(self);
        info!(
            "removed {} polygon(s), renumbered {} name(s)",
            removed.len(),
            rewritten
        );
        Ok(removed)
    }

    /// Nummeriert alle Codes neu; idempotent. Läuft nach jedem Löschen
    /// automatisch, steht aber auch Einbettern offen.
    pub fn renumber(&mut self) -> usize {
        renumber::renumber(self)
    }

    /// Persistierbare Projektion des gesamten Bestands in kanonischer
    /// Reihenfolge.
    pub fn snapshot(&self) -> Vec<PersistedPolygon> {
        self.iter().map(PolygonEntity::to_persisted).collect()
    }

    /// Baut einen Store aus persistierten Polygonen wieder auf. Namen und
    /// Maße werden neu berechnet, die Struktur wird vollständig erneut
    /// validiert; Id-Vergabe setzt oberhalb der größten geladenen Id fort.
    pub fn restore(oracle: O, mut polygons: Vec<PersistedPolygon>) -> HierarchyResult<Self> {
        // Eltern müssen vor ihren Kindern eingefügt werden; die stabile
        // Sortierung erhält die Geschwister-Reihenfolge der Eingabe.
        polygons.sort_by_key(|polygon| polygon.kind);

        let mut store = Self::with_oracle(oracle);
        for polygon in polygons {
            if store.entities.contains_key(&polygon.id) {
                return Err(HierarchyError::DuplicateId { id: polygon.id });
            }
            store
                .validator()
                .validate(&polygon.ring, polygon.kind, polygon.parent_id, None)?;

            let ring_measurements = measurements::compute(&store.oracle, &polygon.ring);
            let name = naming::generate_name(&store, polygon.kind, polygon.parent_id);
            match polygon.parent_id {
                Some(parent) => store.children.entry(parent).or_default().push(polygon.id),
                None => store.roots.push(polygon.id),
            }
            store.next_id = store.next_id.max(polygon.id.0 + 1);
            store.entities.insert(
                polygon.id,
                PolygonEntity::new(
                    polygon.id,
                    polygon.kind,
                    polygon.parent_id,
                    name,
                    polygon.ring,
                    ring_measurements,
                ),
            );
        }

        // Sicherheitsnetz gegen ungewöhnlich geordnete Eingaben.
        store.renumber();
        Ok(store)
    }

    /// Schreibt einen Namen, falls er sich ändert. Nur für den
    /// Neunummerierungs-Durchlauf.
    pub(crate) fn rename(&mut self, id: PolygonId, name: String) -> bool {
        match self.entities.get_mut(&id) {
            Some(entity) if entity.name() != name => {
                entity.set_name(name);
                true
            }
            _ => false,
        }
    }

    fn ordered_ids(&self) -> Vec<PolygonId> {
        let mut ordered = Vec::with_capacity(self.entities.len());
        let mut stack: Vec<PolygonId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            ordered.push(id);
            for child in self.children_of(id).iter().rev() {
                stack.push(*child);
            }
        }
        ordered
    }
}
