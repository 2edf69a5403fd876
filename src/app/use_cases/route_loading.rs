//! Use-Case: Routen auflisten und laden (inkl. Hintergrund-Variante).

use crate::app::state::LoadOutcome;
use crate::app::EditingSession;
use crate::core::RouteVersion;
use crate::repository::RouteRepository;

/// Liest die Routennamen aus dem Repository.
pub fn refresh_route_list(
    session: &mut EditingSession,
    repository: &dyn RouteRepository,
) -> anyhow::Result<()> {
    session.available_routes = repository.list_routes()?;
    log::info!("{} Routen gefunden", session.available_routes.len());
    Ok(())
}

/// Laedt `name` in der Variante `version`, die andere Variante als Hintergrund.
///
/// Beide Dokumente werden geholt, bevor irgendetwas uebernommen wird.
/// Schlaegt das Hauptdokument fehl, bleibt die bisherige Route aktiv.
pub fn load_route(
    session: &mut EditingSession,
    repository: &dyn RouteRepository,
    name: &str,
    version: RouteVersion,
) -> anyhow::Result<()> {
    let ticket = session.begin_route_load(name, version);
    let primary = repository.fetch(name, version);
    let background = repository.fetch(name, version.other());

    match session.complete_route_load(ticket, primary, background) {
        Ok(LoadOutcome::Loaded {
            points,
            has_background,
        }) => {
            let message = format!(
                "{} ({}) geladen: {} Punkte{}",
                name,
                version,
                points,
                if has_background {
                    ", mit Hintergrund-Route"
                } else {
                    ""
                }
            );
            log::info!("{}", message);
            session.status_message = Some(message);
            Ok(())
        }
        Ok(LoadOutcome::Stale) => Ok(()),
        Err(e) => {
            log::error!("Route {} ({}) nicht geladen: {}", name, version, e);
            session.status_message = Some(e.to_string());
            Err(e.into())
        }
    }
}

/// Setzt die Variante, solange keine Route geladen ist.
pub fn set_version(session: &mut EditingSession, version: RouteVersion) {
    session.version = version;
    log::info!("Variante: {}", version);
}
