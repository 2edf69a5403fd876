//! Handler fuer Formular, Einfuegen, Loeschen und Punkt-Aenderungen.

use crate::app::engine::{AddPointForm, FormField, PointEdit};
use crate::app::use_cases;
use crate::app::EditingSession;
use crate::core::LatLng;

/// Oeffnet das Formular.
pub fn open_form(session: &mut EditingSession, form: AddPointForm) {
    use_cases::editing::open_add_form(session, form);
}

/// Setzt die Koordinaten des offenen Formulars.
pub fn set_form_coordinates(session: &mut EditingSession, position: LatLng) {
    use_cases::editing::set_form_coordinates(session, position);
}

/// Setzt ein Formularfeld.
pub fn set_form_field(
    session: &mut EditingSession,
    field: FormField,
    value: &str,
) -> anyhow::Result<()> {
    use_cases::editing::set_form_field(session, field, value)
}

/// Schickt das Formular ab.
pub fn submit_form(session: &mut EditingSession) -> anyhow::Result<()> {
    use_cases::editing::submit_add_form(session)
}

/// Schliesst das Formular.
pub fn close_form(session: &mut EditingSession) {
    use_cases::editing::close_add_form(session);
}

/// Loescht alle selektierten Punkte.
pub fn delete_selected(session: &mut EditingSession) {
    use_cases::editing::delete_selected_points(session);
}

/// Aendert Properties eines Punkts.
pub fn edit_point(
    session: &mut EditingSession,
    index: usize,
    edit: PointEdit,
) -> anyhow::Result<()> {
    use_cases::editing::edit_point(session, index, edit)
}
