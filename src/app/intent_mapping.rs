//! Mapping von UI-Intents auf mutierende App-Commands.

use super::engine::AddPointForm;
use super::{AppCommand, AppIntent, EditingSession};
use crate::core::{InsertPosition, LatLng};

/// Uebersetzt einen `AppIntent` in eine Sequenz ausfuehrbarer `AppCommand`s.
pub fn map_intent_to_commands(session: &EditingSession, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::RouteListRequested => vec![AppCommand::RefreshRouteList],
        AppIntent::RouteSelected { name } => vec![AppCommand::LoadRoute {
            name,
            version: session.version,
        }],
        AppIntent::VersionSelected { version } => match session.route_name.as_ref() {
            _ if version == session.version => vec![],
            // Variantenwechsel laedt dieselbe Route neu, die alte Variante wird Hintergrund
            Some(name) => vec![AppCommand::LoadRoute {
                name: name.clone(),
                version,
            }],
            None => vec![AppCommand::SetVersion { version }],
        },
        AppIntent::MapClicked { position } => {
            if session.mode.is_adding() {
                vec![AppCommand::SetFormCoordinates { position }]
            } else {
                let resolution = session.engine.resolve_insert_position(position);
                vec![AppCommand::OpenAddForm {
                    form: AddPointForm::at(position, resolution.position),
                }]
            }
        }
        AppIntent::AddPointRequested => {
            if session.mode.is_adding() {
                vec![]
            } else {
                let center = session
                    .engine
                    .view_center()
                    .unwrap_or(LatLng::new(0.0, 0.0));
                vec![AppCommand::OpenAddForm {
                    form: AddPointForm::at(center, InsertPosition::default()),
                }]
            }
        }
        AppIntent::AddFormFieldChanged { field, value } => {
            vec![AppCommand::SetFormField { field, value }]
        }
        AppIntent::AddPointSubmitted => vec![AppCommand::SubmitAddForm],
        AppIntent::AddPointCancelled => vec![AppCommand::CloseAddForm],
        AppIntent::PointSelectionToggled { index } => vec![AppCommand::ToggleSelection { index }],
        AppIntent::SelectionCleared => vec![AppCommand::ClearSelection],
        AppIntent::DeleteSelectedRequested => {
            // Button ist ohne Selektion deaktiviert
            if session.engine.can_delete() {
                vec![AppCommand::DeleteSelected]
            } else {
                vec![]
            }
        }
        AppIntent::PointEditRequested { index, edit } => {
            vec![AppCommand::EditPoint { index, edit }]
        }
        AppIntent::ExportRequested => vec![AppCommand::ExportRoute],
        AppIntent::GpxImportRequested { path } => vec![AppCommand::ImportGpx { path }],
        AppIntent::GpxExportRequested => vec![AppCommand::ExportGpx],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
