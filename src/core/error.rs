//! Fehlertypen der Editier-Logik.

use thiserror::Error;

/// Fehler beim Laden, Editieren und Exportieren einer Route.
#[derive(Debug, Error)]
pub enum EditError {
    /// Ungueltige Formulareingabe; Operation abgebrochen, Zustand unveraendert
    #[error("Ungueltige Eingabe: {0}")]
    Validation(String),

    /// Route oder Hintergrund-Dokument nicht vorhanden
    #[error("Nicht gefunden: {0}")]
    NotFound(String),

    /// Quelldokument fehlerhaft; Laden abgebrochen
    #[error("Dokument fehlerhaft: {0}")]
    Parse(String),

    /// Operation braucht eine geladene Route
    #[error("Keine Route geladen")]
    NotLoaded,

    /// Dateisystem-Fehler beim Lesen oder Schreiben
    #[error("Datei-Fehler: {0}")]
    Io(#[from] std::io::Error),
}

impl EditError {
    /// Kurzform fuer Validierungsfehler.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Kurzform fuer Parse-Fehler.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

impl From<serde_json::Error> for EditError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
