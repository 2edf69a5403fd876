//! Export der editierten Route als TSV-Tabelle und GeoJSON-Dokument.

pub mod table;

pub use table::{write_table, TableRow, MISSING, TSV_HEADER};

use crate::core::{EditError, PointFeature, RouteVersion};
use crate::repository::validate_route_name;
use std::path::{Path, PathBuf};

/// Dateiname des TSV-Exports: `{route}_route_{a|b}_edited.txt`.
pub fn table_filename(route_name: &str, version: RouteVersion) -> String {
    format!("{}_route_{}_edited.txt", route_name, version.suffix())
}

/// Dateiname des GeoJSON-Exports: `{route}_route_{a|b}_edited.geojson`.
pub fn geojson_filename(route_name: &str, version: RouteVersion) -> String {
    format!("{}_route_{}_edited.geojson", route_name, version.suffix())
}

/// Dateiname des GPX-Exports: `{route}_route_{a|b}.gpx`.
pub fn gpx_filename(route_name: &str, version: RouteVersion) -> String {
    format!("{}_route_{}.gpx", route_name, version.suffix())
}

/// Beide Export-Artefakte samt Dateinamen.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportBundle {
    pub table_text: String,
    pub geojson_text: String,
    pub txt_filename: String,
    pub geojson_filename: String,
}

impl ExportBundle {
    /// Erzeugt beide Artefakte aus der aktuellen Punktfolge.
    pub fn build(
        points: &[PointFeature],
        route_name: &str,
        version: RouteVersion,
    ) -> Result<Self, EditError> {
        validate_route_name(route_name)?;
        let rows: Vec<TableRow> = points
            .iter()
            .map(|p| TableRow::from_point(p, false))
            .collect();
        Ok(Self {
            table_text: write_table(&rows),
            geojson_text: crate::geojson::write_route_document(points, route_name, version)?,
            txt_filename: table_filename(route_name, version),
            geojson_filename: geojson_filename(route_name, version),
        })
    }

    /// Schreibt beide Dateien in `dir` und gibt die Pfade zurueck.
    pub fn write_to_dir(&self, dir: &Path) -> Result<Vec<PathBuf>, EditError> {
        std::fs::create_dir_all(dir)?;
        let mut written = Vec::with_capacity(2);
        for (filename, content) in [
            (&self.txt_filename, &self.table_text),
            (&self.geojson_filename, &self.geojson_text),
        ] {
            let path = dir.join(filename);
            std::fs::write(&path, content)?;
            written.push(path);
        }
        Ok(written)
    }
}
