//! Editier-Logik fuer die aktive Route, frei von UI-Abhaengigkeiten.
//!
//! Alle Mutationen laufen ueber [`RouteEditingEngine`]: sie halten die
//! `order`-Nummerierung, die Selektion und das Aenderungsprotokoll konsistent.

mod form;

pub use form::{AddPointForm, FormField, PointEdit, ValidatedPoint};

use crate::core::{
    EditError, GeoFeatureStore, InsertPositionResolver, InsertResolution, LatLng,
    ModificationKind, ModificationLog, PointFeature, PointIdGenerator, RouteCollection,
    RouteVersion, SelectionSet,
};
use crate::export::{ExportBundle, TableRow};

/// Platzhalter in der Loesch-Vorschau fuer Punkte ohne Namen.
pub const UNNAMED_POINT: &str = "無名稱";

/// Ergebnis eines erfolgreichen `add_point`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedPoint {
    /// Index in der Punktfolge nach dem Einfuegen
    pub index: usize,
    /// Frisch vergebene ID
    pub id: String,
}

/// Orchestriert Store, Selektion, Protokoll und Einfuege-Heuristik.
#[derive(Debug, Clone, Default)]
pub struct RouteEditingEngine {
    store: GeoFeatureStore,
    selection: SelectionSet,
    modifications: ModificationLog,
    ids: PointIdGenerator,
}

impl RouteEditingEngine {
    /// Erstellt eine Engine ohne Route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ersetzt die aktive Route; Selektion und Protokoll beginnen neu.
    pub fn load(&mut self, collection: RouteCollection) {
        self.store.load(collection);
        self.selection.clear();
        self.modifications.reset();
        log::info!("Route geladen: {} Punkte", self.store.len());
    }

    /// Setzt oder entfernt die Hintergrund-Route.
    pub fn set_background(&mut self, background: Option<RouteCollection>) {
        self.store.set_background(background);
    }

    /// Store (read-only).
    pub fn store(&self) -> &GeoFeatureStore {
        &self.store
    }

    /// Aktuelle Punktfolge.
    pub fn points(&self) -> &[PointFeature] {
        self.store.points()
    }

    /// Aktuelle Selektion.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Aenderungsprotokoll seit dem letzten Laden.
    pub fn modifications(&self) -> &ModificationLog {
        &self.modifications
    }

    /// Einfuegeposition fuer eine Kandidaten-Koordinate.
    pub fn resolve_insert_position(&self, candidate: LatLng) -> InsertResolution {
        InsertPositionResolver::resolve(candidate, self.store.points())
    }

    /// Mittelpunkt der Bounding-Box der aktiven Route (Vorbelegung fuer das Formular).
    pub fn view_center(&self) -> Option<LatLng> {
        let points = self.store.points();
        let first = points.first()?.coordinates;
        let (min, max) = points
            .iter()
            .fold((first, first), |(min, max), p| {
                (min.min(p.coordinates), max.max(p.coordinates))
            });
        Some(LatLng::from_lon_lat((min + max) * 0.5))
    }

    /// Validiert das Formular und fuegt einen neuen Punkt ein.
    ///
    /// Bei ungueltiger Eingabe bleibt der Zustand unveraendert. Selektierte
    /// Indizes hinter der Einfuegestelle ruecken um eins auf.
    pub fn add_point(&mut self, form: &AddPointForm) -> Result<AddedPoint, EditError> {
        let validated = form.validate()?;
        let resolution = InsertPositionResolver::resolve_with_mode(
            form.position,
            validated.position,
            self.store.points(),
        );

        let store = &self.store;
        let id = self.ids.next_id(|candidate| store.contains_id(candidate));
        let feature = PointFeature::new(validated.position)
            .with_kind(form.kind.clone())
            .with_name(form.name.trim())
            .with_elevation(validated.elevation)
            .with_id(id.clone());

        let index = self.store.insert_at(resolution.insert_index, feature);
        self.selection.shift_for_insert(index);
        if let Some(inserted) = self.store.points().get(index) {
            self.modifications
                .record(ModificationKind::Added, id.clone(), inserted.clone());
        }

        log::info!(
            "Punkt {} an Index {} eingefuegt ({}), {} Punkte",
            id,
            index,
            resolution.position.label(),
            self.store.len()
        );
        Ok(AddedPoint { index, id })
    }

    /// Loeschen ist nur mit nicht-leerer Selektion moeglich.
    pub fn can_delete(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Loescht alle selektierten Punkte (hoechster Index zuerst) und leert die Selektion.
    ///
    /// Gibt die entfernten Punkte in Loesch-Reihenfolge zurueck.
    pub fn delete_selected(&mut self) -> Vec<PointFeature> {
        if !self.can_delete() {
            log::debug!("Nichts zum Loeschen selektiert");
            return Vec::new();
        }

        let mut removed = Vec::with_capacity(self.selection.len());
        for index in self.selection.descending() {
            let Some(point) = self.store.points().get(index).cloned() else {
                log::warn!("Selektierter Index {} existiert nicht mehr", index);
                continue;
            };
            let point_id = point
                .id
                .clone()
                .unwrap_or_else(|| format!("point_{}", index));
            self.modifications
                .record(ModificationKind::Deleted, point_id, point);
            if let Some(point) = self.store.remove_at(index) {
                removed.push(point);
            }
        }
        self.selection.clear();

        log::info!(
            "{} Punkte geloescht, {} verbleiben",
            removed.len(),
            self.store.len()
        );
        removed
    }

    /// Schaltet die Selektion eines Index um; ausserhalb der Grenzen ein No-op.
    pub fn toggle_selection(&mut self, index: usize) -> bool {
        self.selection.toggle(index, self.store.len())
    }

    /// Leert die Selektion.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Aendert Name, Typ oder Hoehe eines Punkts.
    pub fn edit_point(&mut self, index: usize, edit: PointEdit) -> Result<(), EditError> {
        let Some(current) = self.store.points().get(index) else {
            return Err(EditError::validation(format!(
                "Punkt-Index {} ausserhalb der Route ({} Punkte)",
                index,
                self.store.len()
            )));
        };
        if edit.is_empty() {
            return Ok(());
        }
        if let Some(Some(elevation)) = edit.elevation {
            if !elevation.is_finite() {
                return Err(EditError::validation("Bitte gueltige Hoehe eingeben"));
            }
        }

        let mut updated = current.clone();
        if let Some(name) = edit.name {
            updated = updated.with_name(name.trim());
        }
        if let Some(kind) = edit.kind {
            updated.kind = kind;
        }
        if let Some(elevation) = edit.elevation {
            updated = updated.with_elevation(elevation);
        }

        let point_id = updated
            .id
            .clone()
            .unwrap_or_else(|| format!("point_{}", index));
        self.store.replace(index, updated.clone());
        self.modifications
            .record(ModificationKind::Modified, point_id, updated);
        log::info!("Punkt an Index {} geaendert", index);
        Ok(())
    }

    /// Eine Tabellenzeile pro Punkt, inklusive Selektionsstatus.
    pub fn table_rows(&self) -> Vec<TableRow> {
        self.store
            .points()
            .iter()
            .enumerate()
            .map(|(index, point)| TableRow::from_point(point, self.selection.contains(index)))
            .collect()
    }

    /// Zeilen fuer die Loesch-Bestaetigung: `順序 {order}: {name}`, aufsteigend.
    pub fn delete_preview(&self) -> Vec<String> {
        self.selection
            .sorted()
            .into_iter()
            .filter_map(|index| self.store.points().get(index))
            .map(|point| {
                format!(
                    "順序 {}: {}",
                    point.order,
                    point.name.as_deref().unwrap_or(UNNAMED_POINT)
                )
            })
            .collect()
    }

    /// Erzeugt TSV- und GeoJSON-Export aus dem aktuellen Stand (ohne Seiteneffekte).
    pub fn export_document(
        &self,
        route_name: &str,
        version: RouteVersion,
    ) -> Result<ExportBundle, EditError> {
        ExportBundle::build(self.store.points(), route_name, version)
    }
}
