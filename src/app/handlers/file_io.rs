//! Handler fuer Export und GPX-Import/-Export.

use crate::app::use_cases;
use crate::app::EditingSession;
use std::path::Path;

/// Schreibt TSV und GeoJSON.
pub fn export(session: &mut EditingSession) -> anyhow::Result<()> {
    use_cases::export::export_route(session)?;
    Ok(())
}

/// Importiert eine GPX-Datei als aktive Route.
pub fn import_gpx(session: &mut EditingSession, path: &Path) -> anyhow::Result<()> {
    use_cases::gpx::import_gpx(session, path)
}

/// Schreibt die aktive Route als GPX.
pub fn export_gpx(session: &mut EditingSession) -> anyhow::Result<()> {
    use_cases::gpx::export_gpx(session)?;
    Ok(())
}
