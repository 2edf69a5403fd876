//! Route Waypoint Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod export;
pub mod geojson;
pub mod gpx;
pub mod repository;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, EditingSession, EditorMode};
pub use core::{
    EditError, GeoFeatureStore, InsertPosition, InsertPositionResolver, LatLng, ModificationLog,
    PointFeature, PointKind, RouteCollection, RouteVersion, SelectionSet,
};
pub use export::ExportBundle;
pub use geojson::{parse_route_document, write_route_document};
pub use gpx::{parse_gpx, write_gpx};
pub use repository::{FsRouteRepository, InMemoryRouteRepository, RouteRepository};
pub use shared::{EditorOptions, RenderScene};
