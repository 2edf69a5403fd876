//! Use-Cases fuer das Punkt-Formular, Einfuegen, Loeschen und Aendern.

use crate::app::engine::{AddPointForm, FormField, PointEdit};
use crate::app::{EditingSession, EditorMode};
use crate::core::{EditError, LatLng};

/// Oeffnet das Formular (Viewing → Adding).
pub fn open_add_form(session: &mut EditingSession, form: AddPointForm) {
    if session.mode.is_adding() {
        log::debug!("Formular bereits offen");
        return;
    }
    log::debug!(
        "Formular geoeffnet bei {}, {} ({})",
        form.latitude,
        form.longitude,
        form.position.label()
    );
    session.mode = EditorMode::Adding(form);
}

/// Uebernimmt Klick-Koordinaten ins offene Formular.
pub fn set_form_coordinates(session: &mut EditingSession, position: LatLng) {
    match session.mode.form_mut() {
        Some(form) => form.set_coordinates(position),
        None => log::debug!("Kein Formular offen, Koordinaten ignoriert"),
    }
}

/// Setzt ein Formularfeld.
pub fn set_form_field(
    session: &mut EditingSession,
    field: FormField,
    value: &str,
) -> anyhow::Result<()> {
    let Some(form) = session.mode.form_mut() else {
        log::debug!("Kein Formular offen, Feld {:?} ignoriert", field);
        return Ok(());
    };
    form.set_field(field, value)?;
    Ok(())
}

/// Schickt das Formular ab.
///
/// Bei Validierungsfehlern bleibt das Formular offen und die Route unveraendert.
pub fn submit_add_form(session: &mut EditingSession) -> anyhow::Result<()> {
    let Some(form) = session.mode.form() else {
        log::debug!("Kein Formular offen");
        return Ok(());
    };

    match session.engine.add_point(form) {
        Ok(added) => {
            session.mode = EditorMode::Viewing;
            session.status_message = Some(format!("Punkt {} hinzugefuegt", added.id));
            Ok(())
        }
        Err(e) => {
            log::warn!("Punkt nicht hinzugefuegt: {}", e);
            session.status_message = Some(e.to_string());
            Err(e.into())
        }
    }
}

/// Schliesst das Formular ohne Aenderung (Adding → Viewing).
pub fn close_add_form(session: &mut EditingSession) {
    session.mode = EditorMode::Viewing;
}

/// Loescht alle selektierten Punkte.
pub fn delete_selected_points(session: &mut EditingSession) {
    let removed = session.engine.delete_selected();
    if !removed.is_empty() {
        session.status_message = Some(format!("{} Punkte geloescht", removed.len()));
    }
}

/// Aendert Properties eines Punkts.
pub fn edit_point(
    session: &mut EditingSession,
    index: usize,
    edit: PointEdit,
) -> anyhow::Result<()> {
    if let Err(e) = session.engine.edit_point(index, edit) {
        session.status_message = Some(e.to_string());
        return Err(e.into());
    }
    Ok(())
}

/// Fehler fuer Operationen, die eine geladene Route brauchen.
pub(crate) fn require_route(session: &EditingSession) -> Result<&str, EditError> {
    session.route_name.as_deref().ok_or(EditError::NotLoaded)
}
