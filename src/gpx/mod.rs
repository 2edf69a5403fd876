//! GPX-Import und -Export.
//!
//! Import: Trackpunkte werden zu GPS-Trackpunkten, Wegpunkte zu Kommunikationspunkten.
//! Export: ein Track mit allen Punkten plus Wegpunkte fuer markierte Punkte.

pub mod parser;
pub mod writer;

pub use parser::{parse_gpx, GpxDocument, GpxPoint, GpxTrack};
pub use writer::write_gpx;
