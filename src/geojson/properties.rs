//! Bekannte Point-Properties: Lesen aus Rohwerten und verlustfreies Zurueckschreiben.

use crate::core::point::normalize_number;
use crate::core::{PointFeature, PointKind};
use serde_json::{Map, Number, Value};

pub const TYPE_KEY: &str = "type";
pub const NAME_KEY: &str = "name";
pub const ELEVATION_KEY: &str = "elevation";
pub const ID_KEY: &str = "id";

/// Reihenfolge ist egal, die Properties werden als Map geschrieben.
pub const KNOWN_KEYS: [&str; 4] = [TYPE_KEY, NAME_KEY, ELEVATION_KEY, ID_KEY];

pub fn decode_kind(value: &Value) -> PointKind {
    match value {
        Value::String(label) => PointKind::from_label(label),
        Value::Null => PointKind::Unspecified,
        other => PointKind::from_label(&other.to_string()),
    }
}

/// Leere Namen zaehlen als nicht gesetzt.
pub fn decode_name(value: &Value) -> Option<String> {
    match value {
        Value::String(name) if !name.is_empty() => Some(name.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Numerische Strings werden geparst, alles andere ist keine Hoehe.
pub fn decode_elevation(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => normalize_number(n.as_f64()),
        Value::String(s) => normalize_number(s.trim().parse().ok()),
        _ => None,
    }
}

pub fn decode_id(value: &Value) -> Option<String> {
    match value {
        Value::String(id) => Some(id.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Schreibt `type`, `name`, `elevation` und `id` in `properties`.
///
/// Ein Rohwert aus der Quelldatei gewinnt, solange er noch denselben Feldwert
/// ergibt. Sonst wird der aktuelle Wert geschrieben; ein geleertes Feld, das
/// in der Quelle vorkam, wird `null`, ein nie vorhandenes bleibt weg.
pub fn write_known(point: &PointFeature, properties: &mut Map<String, Value>) {
    let source = &point.source_properties;

    let kind = point.kind.label().map(|label| Value::String(label.to_string()));
    let kind_unchanged = source
        .get(TYPE_KEY)
        .is_some_and(|raw| decode_kind(raw) == point.kind);
    put(properties, source, TYPE_KEY, kind_unchanged, kind);

    let name = point.name.clone().map(Value::String);
    let name_unchanged = source
        .get(NAME_KEY)
        .is_some_and(|raw| decode_name(raw) == point.name);
    put(properties, source, NAME_KEY, name_unchanged, name);

    let elevation = point
        .elevation
        .and_then(Number::from_f64)
        .map(Value::Number);
    let elevation_unchanged = source
        .get(ELEVATION_KEY)
        .is_some_and(|raw| decode_elevation(raw) == point.elevation);
    put(properties, source, ELEVATION_KEY, elevation_unchanged, elevation);

    let id = point.id.clone().map(Value::String);
    let id_unchanged = source
        .get(ID_KEY)
        .is_some_and(|raw| decode_id(raw) == point.id);
    put(properties, source, ID_KEY, id_unchanged, id);
}

fn put(
    properties: &mut Map<String, Value>,
    source: &Map<String, Value>,
    key: &str,
    unchanged: bool,
    current: Option<Value>,
) {
    let value = match (unchanged, current) {
        (true, _) => source.get(key).cloned(),
        (false, Some(value)) => Some(value),
        (false, None) => source.contains_key(key).then_some(Value::Null),
    };
    if let Some(value) = value {
        properties.insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LatLng;
    use serde_json::json;

    fn loaded(source: Value) -> PointFeature {
        let mut point = PointFeature::new(LatLng::new(23.0, 121.0));
        let Value::Object(source) = source else {
            panic!("Objekt erwartet");
        };
        point.kind = source.get(TYPE_KEY).map(decode_kind).unwrap_or_default();
        point.name = source.get(NAME_KEY).and_then(decode_name);
        point.elevation = source.get(ELEVATION_KEY).and_then(decode_elevation);
        point.id = source.get(ID_KEY).and_then(decode_id);
        point.source_properties = source;
        point
    }

    fn written(point: &PointFeature) -> Map<String, Value> {
        let mut properties = Map::new();
        write_known(point, &mut properties);
        properties
    }

    #[test]
    fn untouched_fields_keep_raw_json_type() {
        let source = json!({"type": null, "name": "", "elevation": "3092.5", "id": 42});
        let point = loaded(source.clone());
        assert_eq!(Value::Object(written(&point)), source);
    }

    #[test]
    fn edited_fields_are_written_canonically() {
        let mut point = loaded(json!({"type": "gpx", "name": "鞍部", "elevation": "3092.5"}));
        point.elevation = Some(3100.0);
        point.name = None;

        let props = written(&point);
        assert_eq!(props["type"], "gpx");
        assert_eq!(props["name"], Value::Null);
        assert_eq!(props["elevation"], json!(3100.0));
        assert!(!props.contains_key("id"));
    }

    #[test]
    fn absent_fields_without_source_stay_absent() {
        let point = PointFeature::new(LatLng::new(23.0, 121.0)).with_id("new_1");
        let props = written(&point);
        assert_eq!(props.len(), 1);
        assert_eq!(props["id"], "new_1");
    }
}
