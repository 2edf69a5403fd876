//! Use-Case: TSV- und GeoJSON-Export in den Export-Ordner.

use super::editing::require_route;
use crate::app::EditingSession;
use std::path::PathBuf;

/// Schreibt beide Export-Dateien und gibt ihre Pfade zurueck.
pub fn export_route(session: &mut EditingSession) -> anyhow::Result<Vec<PathBuf>> {
    let route_name = require_route(session)?;
    let bundle = session
        .engine
        .export_document(route_name, session.version)?;
    let written = bundle.write_to_dir(&session.options.export_dir)?;

    for path in &written {
        log::info!("Export geschrieben: {}", path.display());
    }
    session.status_message = Some(format!(
        "Exportiert: {}, {}",
        bundle.txt_filename, bundle.geojson_filename
    ));
    Ok(written)
}
