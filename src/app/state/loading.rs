//! Lade-Generationen: veraltete Ladeergebnisse werden verworfen.

use crate::core::RouteVersion;

/// Ausweis eines begonnenen Ladevorgangs.
///
/// Nur das Ergebnis zur zuletzt ausgegebenen Generation wird uebernommen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub route_name: String,
    pub version: RouteVersion,
}

/// Ergebnis von `EditingSession::complete_route_load`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Route uebernommen
    Loaded {
        points: usize,
        has_background: bool,
    },
    /// Inzwischen wurde ein neuerer Ladevorgang begonnen; nichts geaendert
    Stale,
}
