//! Handler fuer Anwendungssteuerung.

use crate::app::EditingSession;

/// Markiert die Anwendung zum Beenden.
pub fn request_exit(session: &mut EditingSession) {
    session.should_exit = true;
}
