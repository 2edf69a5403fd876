//! Use-Cases fuer GPX-Import und -Export.

use super::editing::require_route;
use crate::app::{EditingSession, EditorMode};
use crate::export::gpx_filename;
use crate::repository::validate_route_name;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Importiert eine GPX-Datei als aktive Route (ersetzt sie wie ein Laden).
///
/// Die Hintergrund-Route bleibt erhalten; ohne geladene Route wird der
/// Dateiname zum Routennamen.
pub fn import_gpx(session: &mut EditingSession, path: &Path) -> anyhow::Result<()> {
    let xml = std::fs::read_to_string(path)
        .with_context(|| format!("GPX-Datei {} nicht lesbar", path.display()))?;
    let document = crate::gpx::parse_gpx(&xml)?;
    let collection = document.to_route_collection();

    session.invalidate_pending_loads();
    if session.route_name.is_none() {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("gpx_import");
        session.route_name = Some(stem.to_string());
    }
    session.engine.load(collection);
    session.mode = EditorMode::Viewing;

    let message = format!(
        "GPX importiert: {} Trackpunkte, {} Wegpunkte",
        document.track_points().count(),
        document.waypoints.len()
    );
    log::info!("{}", message);
    session.status_message = Some(message);
    Ok(())
}

/// Schreibt die aktive Route als `{route}_route_{a|b}.gpx` in den Export-Ordner.
pub fn export_gpx(session: &mut EditingSession) -> anyhow::Result<PathBuf> {
    let route_name = require_route(session)?;
    validate_route_name(route_name)?;
    let filename = gpx_filename(route_name, session.version);
    let track_name = filename.trim_end_matches(".gpx").to_string();
    let xml = crate::gpx::write_gpx(session.engine.points(), &track_name);

    std::fs::create_dir_all(&session.options.export_dir)?;
    let path = session.options.export_dir.join(&filename);
    std::fs::write(&path, xml)
        .with_context(|| format!("GPX-Datei {} nicht schreibbar", path.display()))?;

    log::info!("GPX geschrieben: {}", path.display());
    session.status_message = Some(format!("Exportiert: {}", filename));
    Ok(path)
}
