use crate::app::engine::{FormField, PointEdit};
use crate::core::{LatLng, RouteVersion};
use std::path::PathBuf;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Routenliste aus dem Repository neu einlesen
    RouteListRequested,
    /// Route im Auswahlfeld gewaehlt
    RouteSelected { name: String },
    /// Variante A/B gewaehlt
    VersionSelected { version: RouteVersion },
    /// Klick auf die Karte
    MapClicked { position: LatLng },
    /// "Punkt hinzufuegen"-Button
    AddPointRequested,
    /// Formularfeld geaendert
    AddFormFieldChanged { field: FormField, value: String },
    /// Formular abgeschickt
    AddPointSubmitted,
    /// Formular abgebrochen
    AddPointCancelled,
    /// Checkbox einer Tabellenzeile bzw. Marker angeklickt
    PointSelectionToggled { index: usize },
    /// Selektion aufheben
    SelectionCleared,
    /// "Loeschen"-Button (nach Bestaetigung)
    DeleteSelectedRequested,
    /// Properties eines Punkts aendern
    PointEditRequested { index: usize, edit: PointEdit },
    /// TSV + GeoJSON exportieren
    ExportRequested,
    /// GPX-Datei als aktive Route importieren
    GpxImportRequested { path: PathBuf },
    /// Aktive Route als GPX exportieren
    GpxExportRequested,
    /// Anwendung beenden
    ExitRequested,
}
