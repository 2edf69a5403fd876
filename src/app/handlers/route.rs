//! Handler fuer Routenauswahl und Variantenwechsel.

use crate::app::use_cases;
use crate::app::EditingSession;
use crate::core::RouteVersion;
use crate::repository::RouteRepository;

/// Liest die Routenliste neu ein.
pub fn refresh_list(
    session: &mut EditingSession,
    repository: &dyn RouteRepository,
) -> anyhow::Result<()> {
    use_cases::route_loading::refresh_route_list(session, repository)
}

/// Laedt eine Route samt Hintergrund-Variante.
pub fn load(
    session: &mut EditingSession,
    repository: &dyn RouteRepository,
    name: &str,
    version: RouteVersion,
) -> anyhow::Result<()> {
    use_cases::route_loading::load_route(session, repository, name, version)
}

/// Setzt die Variante ohne geladene Route.
pub fn set_version(session: &mut EditingSession, version: RouteVersion) {
    use_cases::route_loading::set_version(session, version);
}
