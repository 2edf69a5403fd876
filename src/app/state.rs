//! Application State: Editier-Session, Modus und Lade-Generationen.

mod loading;
mod session;

pub use loading::{LoadOutcome, LoadTicket};
pub use session::EditingSession;

use super::engine::AddPointForm;

/// Extern sichtbarer Modus der Session.
///
/// Es gibt genau ein offenes Formular oder keines, nie verschachtelt.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditorMode {
    /// Kein Formular offen; ein Kartenklick oeffnet das Formular
    #[default]
    Viewing,
    /// Formular offen; Kartenklicks setzen dessen Koordinaten
    Adding(AddPointForm),
}

impl EditorMode {
    /// Gibt `true` zurueck, wenn ein Formular offen ist.
    pub fn is_adding(&self) -> bool {
        matches!(self, Self::Adding(_))
    }

    /// Offenes Formular, falls vorhanden.
    pub fn form(&self) -> Option<&AddPointForm> {
        match self {
            Self::Adding(form) => Some(form),
            Self::Viewing => None,
        }
    }

    /// Mutable Sicht auf das offene Formular.
    pub fn form_mut(&mut self) -> Option<&mut AddPointForm> {
        match self {
            Self::Adding(form) => Some(form),
            Self::Viewing => None,
        }
    }
}
