use crate::app::engine::{AddPointForm, FormField, PointEdit};
use crate::core::{LatLng, RouteVersion};
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgefuehrt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Routen laden ===
    /// Routennamen aus dem Repository lesen
    RefreshRouteList,
    /// Route samt Hintergrund-Variante laden
    LoadRoute { name: String, version: RouteVersion },
    /// Variante setzen, solange keine Route geladen ist
    SetVersion { version: RouteVersion },

    // === Formular ===
    /// Formular oeffnen (Wechsel nach Adding)
    OpenAddForm { form: AddPointForm },
    /// Koordinaten des offenen Formulars setzen
    SetFormCoordinates { position: LatLng },
    /// Einzelnes Feld des offenen Formulars setzen
    SetFormField { field: FormField, value: String },
    /// Formular validieren und Punkt einfuegen
    SubmitAddForm,
    /// Formular schliessen (Wechsel nach Viewing)
    CloseAddForm,

    // === Selektion & Editing ===
    /// Selektion eines Punkts umschalten
    ToggleSelection { index: usize },
    /// Selektion leeren
    ClearSelection,
    /// Selektierte Punkte loeschen
    DeleteSelected,
    /// Properties eines Punkts aendern
    EditPoint { index: usize, edit: PointEdit },

    // === Export / Import ===
    /// TSV + GeoJSON in den Export-Ordner schreiben
    ExportRoute,
    /// GPX-Datei importieren
    ImportGpx { path: PathBuf },
    /// GPX-Datei in den Export-Ordner schreiben
    ExportGpx,

    // === Anwendungssteuerung ===
    RequestExit,
}
