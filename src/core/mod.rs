//! Core-Domänentypen: Wegpunkte, Routen-Collection, Store, Selektion, Protokoll.

pub mod error;
pub mod feature_store;
pub mod geo;
pub mod insert_position;
pub mod modification_log;
/// Core-Datenmodelle fuer Wegpunkt-Routen
///
/// - PointFeature: Einzelner Wegpunkt mit Position und Properties
/// - RouteCollection: Geordnete Punktfolge plus Liniengeometrie
/// - GeoFeatureStore: Aktive Route und Hintergrund-Slot
pub mod point;
pub mod point_id;
pub mod route_collection;
pub mod route_version;
pub mod selection;

pub use error::EditError;
pub use feature_store::GeoFeatureStore;
pub use insert_position::{InsertPosition, InsertPositionResolver, InsertResolution};
pub use modification_log::{
    ModificationKind, ModificationLog, ModificationRecord, ModificationSummary,
};
pub use point::{LatLng, PointFeature, PointKind};
pub use point_id::PointIdGenerator;
pub use route_collection::RouteCollection;
pub use route_version::RouteVersion;
pub use selection::SelectionSet;
