//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, EditingSession};
use crate::repository::RouteRepository;
use crate::shared::RenderScene;

/// Orchestriert Frontend-Events und Use-Cases auf die EditingSession.
pub struct AppController {
    repository: Box<dyn RouteRepository>,
}

impl AppController {
    /// Erstellt einen Controller ueber dem uebergebenen Repository.
    pub fn new(repository: impl RouteRepository + 'static) -> Self {
        Self {
            repository: Box::new(repository),
        }
    }

    /// Zugriff auf das Routen-Repository.
    pub fn repository(&self) -> &dyn RouteRepository {
        self.repository.as_ref()
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        session: &mut EditingSession,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(session, intent);
        for command in commands {
            self.handle_command(session, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, session: &EditingSession, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(session, intent)
    }

    /// Führt mutierende Commands auf der Session aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        session: &mut EditingSession,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        session
            .command_log
            .record(&command, session.route_name.as_deref(), session.version);
        use super::handlers;

        match command {
            // === Routen ===
            AppCommand::RefreshRouteList => {
                handlers::route::refresh_list(session, self.repository.as_ref())?
            }
            AppCommand::LoadRoute { name, version } => {
                handlers::route::load(session, self.repository.as_ref(), &name, version)?
            }
            AppCommand::SetVersion { version } => handlers::route::set_version(session, version),

            // === Formular ===
            AppCommand::OpenAddForm { form } => handlers::editing::open_form(session, form),
            AppCommand::SetFormCoordinates { position } => {
                handlers::editing::set_form_coordinates(session, position)
            }
            AppCommand::SetFormField { field, value } => {
                handlers::editing::set_form_field(session, field, &value)?
            }
            AppCommand::SubmitAddForm => handlers::editing::submit_form(session)?,
            AppCommand::CloseAddForm => handlers::editing::close_form(session),

            // === Selektion ===
            AppCommand::ToggleSelection { index } => handlers::selection::toggle(session, index),
            AppCommand::ClearSelection => handlers::selection::clear(session),

            // === Editing ===
            AppCommand::DeleteSelected => handlers::editing::delete_selected(session),
            AppCommand::EditPoint { index, edit } => {
                handlers::editing::edit_point(session, index, edit)?
            }

            // === Datei-I/O ===
            AppCommand::ExportRoute => handlers::file_io::export(session)?,
            AppCommand::ImportGpx { path } => handlers::file_io::import_gpx(session, &path)?,
            AppCommand::ExportGpx => handlers::file_io::export_gpx(session)?,

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(session),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus der aktuellen Session.
    pub fn build_render_scene(&self, session: &EditingSession) -> RenderScene {
        render_scene::build(session)
    }
}
