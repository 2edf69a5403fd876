//! Writer fuer das editierte Routendokument (GeoJSON FeatureCollection).

use super::properties::write_known;
use crate::core::{EditError, PointFeature, PointKind, RouteVersion};
use serde_json::{json, Map, Value};

/// `route_type` der Linien-Feature im Export.
pub const MAIN_ROUTE_TYPE: &str = "main_route";

/// Baut die FeatureCollection fuer den Export.
///
/// Bei mehr als einem Punkt steht zuerst eine LineString-Feature ueber alle
/// Punkte (mit Zaehlern je Kategorie), danach je Punkt eine Point-Feature.
pub fn build_route_document(
    points: &[PointFeature],
    route_name: &str,
    version: RouteVersion,
) -> Value {
    let mut features = Vec::with_capacity(points.len() + 1);

    if points.len() > 1 {
        let coordinates: Vec<[f64; 2]> = points.iter().map(|p| [p.lng(), p.lat()]).collect();
        let comm_points = points
            .iter()
            .filter(|p| p.kind == PointKind::Communication)
            .count();
        let gpx_points = points
            .iter()
            .filter(|p| p.kind == PointKind::GpsTrack)
            .count();

        features.push(json!({
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": coordinates,
            },
            "properties": {
                "name": format!("{}_{}", route_name, version.dir_name()),
                "route_type": MAIN_ROUTE_TYPE,
                "total_points": points.len(),
                "comm_points": comm_points,
                "gpx_points": gpx_points,
            },
        }));
    }

    features.extend(points.iter().map(point_feature));

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

/// Serialisiert das Export-Dokument (2 Leerzeichen Einrueckung).
pub fn write_route_document(
    points: &[PointFeature],
    route_name: &str,
    version: RouteVersion,
) -> Result<String, EditError> {
    let document = build_route_document(points, route_name, version);
    Ok(serde_json::to_string_pretty(&document)?)
}

fn point_feature(point: &PointFeature) -> Value {
    let mut coordinates = vec![json!(point.lng()), json!(point.lat())];
    coordinates.extend(point.extra_dimensions.iter().cloned());
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": coordinates,
        },
        "properties": point_properties(point),
    })
}

/// Properties eines Punkts: Zusatz-Properties, `order` und die bekannten Felder.
fn point_properties(point: &PointFeature) -> Map<String, Value> {
    let mut properties = point.extra.clone();
    properties.insert("order".into(), Value::String(point.order.clone()));
    write_known(point, &mut properties);
    properties
}
