//! Tabellarische Sicht auf die Punktfolge (Tabelle + TSV-Export).

use crate::core::PointFeature;

/// Kopfzeile des TSV-Exports (Reihenfolge, Breite, Laenge, Hoehe ca., Typ, Name).
pub const TSV_HEADER: [&str; 6] = ["順序", "緯度", "經度", "海拔（約）", "類型", "名稱"];

/// Platzhalter fuer fehlende Werte.
pub const MISSING: &str = "N/A";

/// Eine Tabellenzeile, bereits fuer die Anzeige formatiert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Checkbox-Zustand
    pub selected: bool,
    pub order: String,
    /// Breitengrad, 6 Nachkommastellen
    pub latitude: String,
    /// Laengengrad, 6 Nachkommastellen
    pub longitude: String,
    pub elevation: String,
    pub kind: String,
    pub name: String,
}

impl TableRow {
    /// Formatiert einen Punkt als Tabellenzeile.
    pub fn from_point(point: &PointFeature, selected: bool) -> Self {
        Self {
            selected,
            order: point.order.clone(),
            latitude: format!("{:.6}", point.lat()),
            longitude: format!("{:.6}", point.lng()),
            elevation: point
                .elevation
                .map(|e| e.to_string())
                .unwrap_or_else(|| MISSING.to_string()),
            kind: point.kind.label().unwrap_or(MISSING).to_string(),
            name: point.name.clone().unwrap_or_else(|| MISSING.to_string()),
        }
    }

    fn tsv_fields(&self) -> [&str; 6] {
        [
            &self.order,
            &self.latitude,
            &self.longitude,
            &self.elevation,
            &self.kind,
            &self.name,
        ]
    }
}

/// Baut das TSV-Dokument: Kopfzeile plus eine Zeile pro Punkt, jede mit `\n` abgeschlossen.
pub fn write_table(rows: &[TableRow]) -> String {
    let mut output = String::new();
    output.push_str(&TSV_HEADER.join("\t"));
    output.push('\n');
    for row in rows {
        // Tabs/Zeilenumbrueche im Namen wuerden die Spalten verschieben
        let fields: Vec<String> = row
            .tsv_fields()
            .iter()
            .map(|f| f.replace(['\t', '\n', '\r'], " "))
            .collect();
        output.push_str(&fields.join("\t"));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LatLng, PointKind, RouteCollection};

    #[test]
    fn rows_format_coordinates_and_missing_values() {
        let collection = RouteCollection::from_points(vec![
            PointFeature::new(LatLng::new(23.4567891, 120.9))
                .with_kind(PointKind::Communication)
                .with_name("排雲山莊")
                .with_elevation(Some(3402.0)),
            PointFeature::new(LatLng::new(23.5, 121.0)),
        ]);
        let rows: Vec<TableRow> = collection
            .points()
            .iter()
            .map(|p| TableRow::from_point(p, false))
            .collect();

        assert_eq!(rows[0].latitude, "23.456789");
        assert_eq!(rows[0].longitude, "120.900000");
        assert_eq!(rows[0].elevation, "3402");
        assert_eq!(rows[0].kind, "comm");
        assert_eq!(rows[1].elevation, "N/A");
        assert_eq!(rows[1].kind, "N/A");
        assert_eq!(rows[1].name, "N/A");
    }

    #[test]
    fn tsv_has_header_and_one_line_per_row() {
        let collection = RouteCollection::from_points(vec![
            PointFeature::new(LatLng::new(1.0, 2.0)).with_name("a\tb"),
        ]);
        let rows = vec![TableRow::from_point(&collection.points()[0], true)];
        let text = write_table(&rows);
        assert_eq!(
            text,
            "順序\t緯度\t經度\t海拔（約）\t類型\t名稱\n1\t1.000000\t2.000000\tN/A\tN/A\ta b\n"
        );
    }
}
