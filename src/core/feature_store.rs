//! Datenhaltung fuer die aktive Route und die Hintergrund-Vergleichsroute.

use super::{EditError, PointFeature, RouteCollection};

/// Besitzt die aktive Punktfolge und den (read-only) Hintergrund-Slot.
///
/// Jede Mutation der aktiven Folge nummeriert vor dem Return komplett neu.
#[derive(Debug, Clone, Default)]
pub struct GeoFeatureStore {
    active: RouteCollection,
    background: Option<RouteCollection>,
}

impl GeoFeatureStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ersetzt die aktive Collection vollstaendig.
    pub fn load(&mut self, collection: RouteCollection) {
        self.active = collection;
        self.active.renumber();
    }

    /// Parst ein GeoJSON-Dokument und ersetzt die aktive Collection.
    ///
    /// Bei Parse-Fehlern bleibt der bisherige Inhalt unveraendert.
    pub fn load_document(&mut self, document: &str) -> Result<(), EditError> {
        let collection = crate::geojson::parse_route_document(document)?;
        self.load(collection);
        Ok(())
    }

    /// Setzt oder entfernt die Hintergrund-Route (unabhaengig vom aktiven Slot).
    pub fn set_background(&mut self, background: Option<RouteCollection>) {
        self.background = background;
    }

    /// Aktive Collection.
    pub fn active(&self) -> &RouteCollection {
        &self.active
    }

    /// Hintergrund-Route, falls vorhanden.
    pub fn background(&self) -> Option<&RouteCollection> {
        self.background.as_ref()
    }

    /// Live-Sicht auf die geordnete Punktfolge.
    pub fn points(&self) -> &[PointFeature] {
        self.active.points()
    }

    /// Anzahl aktiver Punkte.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Gibt `true` zurueck, wenn keine aktiven Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Ersetzt den Punkt an `index`, gibt den alten Punkt zurueck.
    pub fn replace(&mut self, index: usize, feature: PointFeature) -> Option<PointFeature> {
        let slot = self.active.points.get_mut(index)?;
        let previous = std::mem::replace(slot, feature);
        self.active.renumber();
        Some(previous)
    }

    /// Fuegt einen Punkt an `index` ein (`index` > Laenge wird ans Ende gesetzt).
    ///
    /// Gibt den tatsaechlichen Einfuege-Index zurueck.
    pub fn insert_at(&mut self, index: usize, feature: PointFeature) -> usize {
        let len = self.active.points.len();
        let index = if index > len {
            log::warn!("Einfuege-Index {} > Laenge {}, haenge ans Ende", index, len);
            len
        } else {
            index
        };
        self.active.points.insert(index, feature);
        self.active.mark_structurally_edited();
        self.active.renumber();
        index
    }

    /// Entfernt den Punkt an `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<PointFeature> {
        if index >= self.active.points.len() {
            return None;
        }
        let removed = self.active.points.remove(index);
        self.active.mark_structurally_edited();
        self.active.renumber();
        Some(removed)
    }

    /// Prueft ob eine Punkt-ID bereits vergeben ist.
    pub fn contains_id(&self, id: &str) -> bool {
        self.active
            .points()
            .iter()
            .any(|p| p.id.as_deref() == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LatLng;

    fn store_with(n: usize) -> GeoFeatureStore {
        let points = (0..n)
            .map(|i| PointFeature::new(LatLng::new(i as f64, 0.0)).with_id(format!("p{i}")))
            .collect();
        let mut store = GeoFeatureStore::new();
        store.load(RouteCollection::from_points(points));
        store
    }

    fn orders(store: &GeoFeatureStore) -> Vec<String> {
        store.points().iter().map(|p| p.order.clone()).collect()
    }

    #[test]
    fn insert_and_remove_keep_orders_contiguous() {
        let mut store = store_with(3);
        store.insert_at(1, PointFeature::new(LatLng::new(9.0, 9.0)));
        assert_eq!(orders(&store), vec!["1", "2", "3", "4"]);
        assert_eq!(store.points()[1].lat(), 9.0);

        store.remove_at(0).expect("Index 0 vorhanden");
        assert_eq!(orders(&store), vec!["1", "2", "3"]);
        assert!(store.active().is_structurally_edited());
    }

    #[test]
    fn insert_past_end_appends() {
        let mut store = store_with(2);
        let index = store.insert_at(10, PointFeature::new(LatLng::new(5.0, 5.0)));
        assert_eq!(index, 2);
        assert_eq!(orders(&store), vec!["1", "2", "3"]);
    }

    #[test]
    fn out_of_range_mutations_are_none() {
        let mut store = store_with(1);
        assert!(store.remove_at(1).is_none());
        assert!(store
            .replace(3, PointFeature::new(LatLng::new(0.0, 0.0)))
            .is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn replace_keeps_order_of_slot() {
        let mut store = store_with(2);
        let old = store
            .replace(1, PointFeature::new(LatLng::new(7.0, 7.0)).with_name("neu"))
            .expect("Index 1 vorhanden");
        assert_eq!(old.id.as_deref(), Some("p1"));
        assert_eq!(store.points()[1].order, "2");
        assert_eq!(store.points()[1].name.as_deref(), Some("neu"));
        assert!(!store.active().is_structurally_edited());
    }

    #[test]
    fn background_is_independent_slot() {
        let mut store = store_with(2);
        store.set_background(Some(RouteCollection::from_points(vec![PointFeature::new(
            LatLng::new(1.0, 1.0),
        )])));
        store.remove_at(0);
        assert_eq!(store.background().map(|b| b.len()), Some(1));
        assert!(store.contains_id("p1"));
        assert!(!store.contains_id("p0"));
    }
}
