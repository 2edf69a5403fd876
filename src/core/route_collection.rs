//! Geordnete Punktfolge einer Route inklusive optionaler Liniengeometrie.

use super::PointFeature;
use glam::DVec2;

/// Geordnete Wegpunkte plus die aus dem Dokument uebernommene Liniengeometrie.
///
/// Invariante: Reihenfolge im Vektor = Render-/Export-Reihenfolge = `order`-Werte.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteCollection {
    pub(crate) points: Vec<PointFeature>,
    /// LineString-Geometrien aus der Quelle (in Dokument-Reihenfolge)
    lines: Vec<Vec<DVec2>>,
    /// Seit dem Laden strukturell veraendert (Einfuegen/Loeschen)?
    structurally_edited: bool,
}

impl RouteCollection {
    /// Erstellt eine Collection und nummeriert die Punkte durch.
    pub fn new(points: Vec<PointFeature>, lines: Vec<Vec<DVec2>>) -> Self {
        let mut collection = Self {
            points,
            lines,
            structurally_edited: false,
        };
        collection.renumber();
        collection
    }

    /// Collection nur aus Punkten (ohne Quell-Linien).
    pub fn from_points(points: Vec<PointFeature>) -> Self {
        Self::new(points, Vec::new())
    }

    /// Read-only Sicht auf die Punktfolge.
    pub fn points(&self) -> &[PointFeature] {
        &self.points
    }

    /// LineString-Geometrien aus der Quelldatei.
    pub fn source_lines(&self) -> &[Vec<DVec2>] {
        &self.lines
    }

    /// Aktuelle Liniengeometrie fuer das Pfad-Rendering.
    ///
    /// Bis zur ersten strukturellen Aenderung die erste Quell-Linie, danach
    /// (oder ohne Quell-Linie) die geordnete Punktfolge.
    pub fn current_line(&self) -> Vec<DVec2> {
        match self.lines.first() {
            Some(line) if !self.structurally_edited => line.clone(),
            _ => self.points.iter().map(|p| p.coordinates).collect(),
        }
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurueck, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Wurde seit dem Laden eingefuegt oder geloescht?
    pub fn is_structurally_edited(&self) -> bool {
        self.structurally_edited
    }

    pub(crate) fn mark_structurally_edited(&mut self) {
        self.structurally_edited = true;
    }

    /// Schreibt `order` fuer jeden Punkt auf Index + 1 (immer komplett, nie partiell).
    pub(crate) fn renumber(&mut self) {
        for (index, point) in self.points.iter_mut().enumerate() {
            point.order = (index + 1).to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LatLng;

    #[test]
    fn new_renumbers_contiguously() {
        let mut a = PointFeature::new(LatLng::new(0.0, 0.0));
        a.order = "7".into();
        let mut b = PointFeature::new(LatLng::new(1.0, 0.0));
        b.order = "x".into();
        let collection = RouteCollection::from_points(vec![a, b]);
        let orders: Vec<&str> = collection.points().iter().map(|p| p.order.as_str()).collect();
        assert_eq!(orders, vec!["1", "2"]);
    }

    #[test]
    fn current_line_prefers_source_until_edited() {
        let source = vec![DVec2::new(5.0, 5.0), DVec2::new(6.0, 6.0)];
        let points = vec![
            PointFeature::new(LatLng::new(0.0, 0.0)),
            PointFeature::new(LatLng::new(1.0, 1.0)),
        ];
        let mut collection = RouteCollection::new(points, vec![source.clone()]);
        assert_eq!(collection.current_line(), source);

        collection.mark_structurally_edited();
        assert_eq!(
            collection.current_line(),
            vec![DVec2::new(0.0, 0.0), DVec2::new(1.0, 1.0)]
        );
    }
}
