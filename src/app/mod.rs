//! Application-Layer: Controller, Session, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod engine;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Session-Zustand einer Editier-Sitzung
///
/// Dieses Modul verwaltet geladene Route, Variante, Modus und Lade-Generationen.
pub mod state;
pub mod use_cases;

pub use command_log::{CommandLog, LoggedCommand};
pub use controller::AppController;
pub use engine::{AddPointForm, AddedPoint, FormField, PointEdit, RouteEditingEngine};
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{EditingSession, EditorMode, LoadOutcome, LoadTicket};
