//! Use-Cases fuer die Punkt-Selektion.

use crate::app::EditingSession;

/// Schaltet die Selektion eines Punkts um (veraltete Indizes werden ignoriert).
pub fn toggle_point(session: &mut EditingSession, index: usize) {
    let selected = session.engine.toggle_selection(index);
    log::debug!(
        "Selektion {} → {}, {} selektiert",
        index,
        selected,
        session.engine.selection().len()
    );
}

/// Hebt die Selektion auf.
pub fn clear(session: &mut EditingSession) {
    session.engine.clear_selection();
}
