use super::{EditorMode, LoadOutcome, LoadTicket};
use crate::app::engine::RouteEditingEngine;
use crate::app::CommandLog;
use crate::core::{EditError, RouteCollection, RouteVersion};
use crate::shared::EditorOptions;

/// Hauptzustand einer Editier-Session.
///
/// Wird vom Controller per `&mut` an Handler und Use-Cases gereicht.
pub struct EditingSession {
    /// Name der geladenen Route (None = noch nichts geladen)
    pub route_name: Option<String>,
    /// Aktive Variante; die jeweils andere ist die Hintergrund-Route
    pub version: RouteVersion,
    /// Editier-Logik (Store, Selektion, Protokoll)
    pub engine: RouteEditingEngine,
    /// Viewing oder Adding
    pub mode: EditorMode,
    /// Zuletzt ausgegebene Lade-Generation
    load_generation: u64,
    /// Bekannte Routennamen aus dem Repository
    pub available_routes: Vec<String>,
    /// Verlauf ausgefuehrter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Pfade, Farben, Groessen)
    pub options: EditorOptions,
    /// Letzte Rueckmeldung fuer die Statuszeile
    pub status_message: Option<String>,
    /// Signalisiert dem Frontend, die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl EditingSession {
    /// Erstellt eine leere Session mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt eine leere Session mit den uebergebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            route_name: None,
            version: options.default_version,
            engine: RouteEditingEngine::new(),
            mode: EditorMode::Viewing,
            load_generation: 0,
            available_routes: Vec::new(),
            command_log: CommandLog::new(),
            options,
            status_message: None,
            should_exit: false,
        }
    }

    /// Gibt `true` zurueck, wenn eine Route geladen ist.
    pub fn has_route(&self) -> bool {
        self.route_name.is_some()
    }

    /// Aktuelle Lade-Generation.
    pub fn load_generation(&self) -> u64 {
        self.load_generation
    }

    /// Beginnt einen Ladevorgang; alle aelteren Tickets werden damit ungueltig.
    pub fn begin_route_load(&mut self, route_name: &str, version: RouteVersion) -> LoadTicket {
        self.load_generation += 1;
        LoadTicket {
            generation: self.load_generation,
            route_name: route_name.to_string(),
            version,
        }
    }

    /// Invalidiert laufende Ladevorgaenge (z.B. vor einem GPX-Import).
    pub fn invalidate_pending_loads(&mut self) {
        self.load_generation += 1;
    }

    /// Uebernimmt das Ergebnis eines Ladevorgangs.
    ///
    /// Haupt- und Hintergrund-Dokument kommen gemeinsam an, damit die
    /// Hintergrund-Ebene schon beim ersten Zeichnen feststeht. Fehler im
    /// Hauptdokument lassen den bisherigen Zustand unveraendert; ein fehlendes
    /// oder defektes Hintergrund-Dokument bedeutet nur "kein Vergleich".
    pub fn complete_route_load(
        &mut self,
        ticket: LoadTicket,
        primary: Result<String, EditError>,
        background: Result<String, EditError>,
    ) -> Result<LoadOutcome, EditError> {
        if ticket.generation != self.load_generation {
            log::warn!(
                "Veraltetes Ladeergebnis verworfen: {} ({}), Generation {} statt {}",
                ticket.route_name,
                ticket.version,
                ticket.generation,
                self.load_generation
            );
            return Ok(LoadOutcome::Stale);
        }

        let collection = crate::geojson::parse_route_document(&primary?)?;
        let background = parse_background(&ticket, background);
        let outcome = LoadOutcome::Loaded {
            points: collection.len(),
            has_background: background.is_some(),
        };

        self.engine.load(collection);
        self.engine.set_background(background);
        self.route_name = Some(ticket.route_name);
        self.version = ticket.version;
        self.mode = EditorMode::Viewing;
        Ok(outcome)
    }

    /// Statuszeile: Aenderungszaehler, sonst letzte Meldung.
    pub fn status_line(&self) -> String {
        let changes = self.engine.modifications().status_line();
        if changes.is_empty() {
            self.status_message.clone().unwrap_or_default()
        } else {
            changes
        }
    }
}

fn parse_background(
    ticket: &LoadTicket,
    background: Result<String, EditError>,
) -> Option<RouteCollection> {
    let other = ticket.version.other();
    match background.and_then(|text| crate::geojson::parse_route_document(&text)) {
        Ok(collection) => Some(collection),
        Err(EditError::NotFound(_)) => {
            log::info!(
                "Keine Hintergrund-Route {} ({}) vorhanden",
                ticket.route_name,
                other
            );
            None
        }
        Err(e) => {
            log::warn!(
                "Hintergrund-Route {} ({}) nicht nutzbar: {}",
                ticket.route_name,
                other,
                e
            );
            None
        }
    }
}

impl Default for EditingSession {
    fn default() -> Self {
        Self::new()
    }
}
