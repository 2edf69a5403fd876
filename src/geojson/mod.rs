//! GeoJSON Import/Export fuer Wegpunkt-Routen.
//!
//! Eingabe: FeatureCollection mit beliebig vielen LineStrings und Points.
//! Ausgabe: eine LineString-Feature ueber alle Punkte plus je Punkt eine Point-Feature.

pub mod properties;
pub mod reader;
pub mod writer;

pub use reader::{parse_route_document, sanitize_non_finite_literals};
pub use writer::{build_route_document, write_route_document};
