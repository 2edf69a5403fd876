//! Reader fuer GeoJSON-Routendokumente (FeatureCollection mit Points/LineStrings).

use super::properties::{self, KNOWN_KEYS};
use crate::core::{EditError, LatLng, PointFeature, RouteCollection};
use glam::DVec2;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Parsed ein Routendokument in eine `RouteCollection`.
///
/// Points werden in Dokument-Reihenfolge uebernommen und durchnummeriert,
/// LineStrings (auch MultiLineString-Teile) als Quell-Liniengeometrie gemerkt.
/// Nicht-endliche Zahlen werden zu `null` bzw. fehlenden Werten.
pub fn parse_route_document(text: &str) -> Result<RouteCollection, EditError> {
    let sanitized = sanitize_non_finite_literals(text);
    let root: Value = serde_json::from_str(&sanitized)?;

    let Some(root) = root.as_object() else {
        return Err(EditError::parse("Wurzel ist kein JSON-Objekt"));
    };

    let features = match root.get("features") {
        None | Some(Value::Null) => {
            log::warn!("Dokument ohne 'features', lade leere Route");
            return Ok(RouteCollection::default());
        }
        Some(Value::Array(features)) => features,
        Some(_) => return Err(EditError::parse("'features' ist kein Array")),
    };

    let mut points = Vec::new();
    let mut lines = Vec::new();

    for (feature_index, feature) in features.iter().enumerate() {
        let Some(geometry) = feature.get("geometry").filter(|g| !g.is_null()) else {
            continue;
        };
        let geometry_type = geometry.get("type").and_then(Value::as_str).unwrap_or("");
        let coordinates = geometry.get("coordinates").unwrap_or(&Value::Null);

        match geometry_type {
            "Point" => {
                let position = parse_position(coordinates).ok_or_else(|| {
                    EditError::parse(format!(
                        "Feature {}: Point ohne gueltiges Koordinatenpaar",
                        feature_index
                    ))
                })?;
                let properties = feature
                    .get("properties")
                    .and_then(Value::as_object)
                    .cloned()
                    .unwrap_or_default();
                let mut point = point_from_properties(position, properties);
                point.extra_dimensions = extra_dimensions(coordinates);
                points.push(point);
            }
            "LineString" => lines.push(parse_line(coordinates, feature_index)?),
            "MultiLineString" => {
                let parts = coordinates.as_array().ok_or_else(|| {
                    EditError::parse(format!(
                        "Feature {}: MultiLineString ohne Koordinaten",
                        feature_index
                    ))
                })?;
                for part in parts {
                    lines.push(parse_line(part, feature_index)?);
                }
            }
            other => log::debug!("Feature {}: Geometrie '{}' ignoriert", feature_index, other),
        }
    }

    log::debug!(
        "Routendokument gelesen: {} Punkte, {} Linien",
        points.len(),
        lines.len()
    );

    Ok(RouteCollection::new(points, lines))
}

/// Ersetzt nackte `NaN`/`Infinity`/`-Infinity`-Token ausserhalb von Strings durch `null`.
///
/// Python-`json.dump` schreibt solche Token, strikte JSON-Parser lehnen sie ab.
pub fn sanitize_non_finite_literals(text: &str) -> Cow<'_, str> {
    const TOKENS: [&str; 4] = ["-Infinity", "Infinity", "-NaN", "NaN"];

    let bytes = text.as_bytes();
    let mut output: Option<String> = None;
    let mut copied_until = 0;
    let mut in_string = false;
    let mut escaped = false;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        if b == b'"' {
            in_string = true;
            i += 1;
            continue;
        }

        if matches!(b, b'N' | b'I' | b'-') {
            if let Some(token) = TOKENS.iter().find(|t| text[i..].starts_with(**t)) {
                let out = output.get_or_insert_with(|| String::with_capacity(text.len()));
                out.push_str(&text[copied_until..i]);
                out.push_str("null");
                i += token.len();
                copied_until = i;
                continue;
            }
        }
        i += 1;
    }

    match output {
        Some(mut out) => {
            out.push_str(&text[copied_until..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(text),
    }
}

fn parse_position(value: &Value) -> Option<DVec2> {
    let coords = value.as_array()?;
    let lng = coords.first()?.as_f64()?;
    let lat = coords.get(1)?.as_f64()?;
    (lng.is_finite() && lat.is_finite()).then(|| DVec2::new(lng, lat))
}

/// Alles nach lon/lat (Hoehe, Messwert) bleibt als Rohwert erhalten.
fn extra_dimensions(value: &Value) -> Vec<Value> {
    value
        .as_array()
        .map(|coords| coords.iter().skip(2).cloned().collect())
        .unwrap_or_default()
}

fn parse_line(value: &Value, feature_index: usize) -> Result<Vec<DVec2>, EditError> {
    let coords = value.as_array().ok_or_else(|| {
        EditError::parse(format!("Feature {}: LineString ohne Koordinaten", feature_index))
    })?;
    coords
        .iter()
        .map(|c| {
            parse_position(c).ok_or_else(|| {
                EditError::parse(format!(
                    "Feature {}: ungueltige Linien-Koordinate",
                    feature_index
                ))
            })
        })
        .collect()
}

fn point_from_properties(position: DVec2, mut properties: Map<String, Value>) -> PointFeature {
    // order wird beim Laden neu vergeben
    properties.remove("order");

    let mut source_properties = Map::new();
    for key in KNOWN_KEYS {
        if let Some(value) = properties.remove(key) {
            source_properties.insert(key.to_string(), value);
        }
    }

    let mut point = PointFeature::new(LatLng::from_lon_lat(position));
    point.kind = source_properties
        .get(properties::TYPE_KEY)
        .map(properties::decode_kind)
        .unwrap_or_default();
    point.name = source_properties
        .get(properties::NAME_KEY)
        .and_then(properties::decode_name);
    point.elevation = source_properties
        .get(properties::ELEVATION_KEY)
        .and_then(properties::decode_elevation);
    point.id = source_properties
        .get(properties::ID_KEY)
        .and_then(properties::decode_id);
    point.extra = properties;
    point.source_properties = source_properties;
    point
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PointKind;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature",
             "geometry": {"type": "LineString", "coordinates": [[120.9, 23.4], [121.0, 23.5]]},
             "properties": {"name": "line"}},
            {"type": "Feature",
             "geometry": {"type": "Point", "coordinates": [120.9, 23.4]},
             "properties": {"order": "5", "type": "comm", "name": "登山口", "elevation": NaN, "id": "p1", "note": null}},
            {"type": "Feature",
             "geometry": {"type": "Point", "coordinates": [121.0, 23.5, 3000.0]},
             "properties": {"order": 9, "type": "gpx", "elevation": "3092.5", "speed": Infinity}}
        ]
    }"#;

    #[test]
    fn parses_points_in_document_order_and_renumbers() {
        let collection = parse_route_document(SAMPLE).expect("Dokument gueltig");
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.source_lines().len(), 1);

        let first = &collection.points()[0];
        assert_eq!(first.order, "1");
        assert_eq!(first.kind, PointKind::Communication);
        assert_eq!(first.name.as_deref(), Some("登山口"));
        assert_eq!(first.id.as_deref(), Some("p1"));
        assert_eq!(first.extra.get("note"), Some(&Value::Null));

        let second = &collection.points()[1];
        assert_eq!(second.order, "2");
        assert_eq!(second.kind, PointKind::GpsTrack);
        assert_eq!(second.lng(), 121.0);
        assert_eq!(second.lat(), 23.5);
        assert_eq!(second.extra_dimensions, vec![serde_json::json!(3000.0)]);
        assert_eq!(
            second.source_properties.get("elevation"),
            Some(&Value::String("3092.5".into()))
        );
        assert!(!second.extra.contains_key("elevation"));
    }

    #[test]
    fn nan_numeric_properties_become_absent() {
        let collection = parse_route_document(SAMPLE).expect("Dokument gueltig");
        assert_eq!(collection.points()[0].elevation, None);
        assert_eq!(collection.points()[1].elevation, Some(3092.5));
        // Infinity → null, Property bleibt erhalten
        assert_eq!(collection.points()[1].extra.get("speed"), Some(&Value::Null));
    }

    #[test]
    fn sanitizer_leaves_strings_untouched() {
        let text = r#"{"a": "NaN \" Infinity", "b": -Infinity, "c": NaN}"#;
        let sanitized = sanitize_non_finite_literals(text);
        assert_eq!(
            sanitized,
            r#"{"a": "NaN \" Infinity", "b": null, "c": null}"#
        );
        assert!(matches!(
            sanitize_non_finite_literals(r#"{"a": 1}"#),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn point_without_coordinates_is_parse_error() {
        let text = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [121.0]}, "properties": {}}
        ]}"#;
        assert!(matches!(
            parse_route_document(text),
            Err(EditError::Parse(_))
        ));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(
            parse_route_document("{\"features\": ["),
            Err(EditError::Parse(_))
        ));
        assert!(matches!(
            parse_route_document("[1, 2]"),
            Err(EditError::Parse(_))
        ));
    }

    #[test]
    fn missing_features_yields_empty_route() {
        let collection = parse_route_document(r#"{"type": "FeatureCollection"}"#)
            .expect("leeres Dokument ist gueltig");
        assert!(collection.is_empty());
    }
}
