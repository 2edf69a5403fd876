//! Handler fuer Selektions-Operationen.

use crate::app::use_cases;
use crate::app::EditingSession;

/// Schaltet die Selektion eines Punkts um.
pub fn toggle(session: &mut EditingSession, index: usize) {
    use_cases::selection::toggle_point(session, index);
}

/// Hebt die Selektion auf.
pub fn clear(session: &mut EditingSession) {
    use_cases::selection::clear(session);
}
