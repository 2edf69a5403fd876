//! Parser fuer GPX-Dateien (Tracks, Segmente, Trackpunkte, Wegpunkte).

use crate::core::point::normalize_number;
use crate::core::{
    EditError, InsertPositionResolver, LatLng, PointFeature, PointKind, RouteCollection,
};
use anyhow::{anyhow, Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::Value;

/// Ein Trackpunkt oder Wegpunkt.
#[derive(Debug, Clone, PartialEq)]
pub struct GpxPoint {
    pub position: LatLng,
    pub elevation: Option<f64>,
    pub time: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// 1-basierte Position im Segment (Wegpunkte: in der Datei)
    pub order: usize,
}

/// Ein `<trk>` mit seinen Segmenten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GpxTrack {
    pub name: Option<String>,
    pub segments: Vec<Vec<GpxPoint>>,
}

/// Inhalt einer GPX-Datei.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GpxDocument {
    pub tracks: Vec<GpxTrack>,
    pub waypoints: Vec<GpxPoint>,
}

impl GpxDocument {
    /// Alle Trackpunkte ueber alle Tracks und Segmente, in Dateireihenfolge.
    pub fn track_points(&self) -> impl Iterator<Item = &GpxPoint> {
        self.tracks
            .iter()
            .flat_map(|t| t.segments.iter())
            .flat_map(|s| s.iter())
    }

    /// Wandelt das Dokument in eine Route.
    ///
    /// Trackpunkte werden zu GPS-Trackpunkten (Reihenfolge wie in der Datei),
    /// Wegpunkte zu Kommunikationspunkten, einsortiert per Nearest-Neighbour.
    pub fn to_route_collection(&self) -> RouteCollection {
        let mut points: Vec<PointFeature> = self
            .track_points()
            .map(|p| feature_from(p, PointKind::GpsTrack))
            .collect();

        for waypoint in &self.waypoints {
            let resolution = InsertPositionResolver::resolve(waypoint.position, &points);
            points.insert(
                resolution.insert_index,
                feature_from(waypoint, PointKind::Communication),
            );
        }

        RouteCollection::from_points(points)
    }
}

fn feature_from(point: &GpxPoint, kind: PointKind) -> PointFeature {
    let mut feature = PointFeature::new(point.position)
        .with_kind(kind)
        .with_elevation(point.elevation);
    if let Some(name) = &point.name {
        feature = feature.with_name(name.clone());
    }
    if let Some(time) = &point.time {
        feature
            .extra
            .insert("time".into(), Value::String(time.clone()));
    }
    if let Some(description) = &point.description {
        feature
            .extra
            .insert("desc".into(), Value::String(description.clone()));
    }
    feature
}

/// Parsed eine GPX-Datei aus einem XML-String.
pub fn parse_gpx(xml_content: &str) -> Result<GpxDocument, EditError> {
    parse_document(xml_content).map_err(|e| EditError::parse(format!("GPX: {:#}", e)))
}

/// Punkt im Aufbau zwischen Start- und End-Tag.
struct PendingPoint {
    is_waypoint: bool,
    point: GpxPoint,
}

fn parse_document(xml_content: &str) -> Result<GpxDocument> {
    // Kein trim_text: Entities teilen Text in mehrere Events, Leerzeichen daneben muessen bleiben
    let mut reader = Reader::from_str(xml_content);

    let mut buffer = Vec::new();
    let mut document = GpxDocument::default();

    let mut current_track: Option<GpxTrack> = None;
    let mut current_segment: Option<Vec<GpxPoint>> = None;
    let mut current_point: Option<PendingPoint> = None;
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buffer) {
            Ok(Event::Start(ref e)) => {
                let name = e.local_name();
                let tag = reader.decoder().decode(name.as_ref())?;
                match tag.as_ref() {
                    "trk" => current_track = Some(GpxTrack::default()),
                    "trkseg" => current_segment = Some(Vec::new()),
                    "trkpt" | "wpt" => {
                        current_point = Some(PendingPoint {
                            is_waypoint: tag == "wpt",
                            point: point_from_attributes(e, &reader)?,
                        });
                    }
                    _ => {}
                }
                text.clear();
            }
            Ok(Event::Empty(ref e)) => {
                // <trkpt lat=".." lon=".."/> ohne Kindelemente
                let name = e.local_name();
                let tag = reader.decoder().decode(name.as_ref())?;
                if tag == "trkpt" || tag == "wpt" {
                    let point = point_from_attributes(e, &reader)?;
                    finish_point(
                        PendingPoint {
                            is_waypoint: tag == "wpt",
                            point,
                        },
                        &mut current_segment,
                        &mut document,
                    );
                }
            }
            Ok(Event::Text(e)) => text.push_str(&e.xml_content()?),
            Ok(Event::CData(e)) => text.push_str(&String::from_utf8_lossy(&e)),
            Ok(Event::GeneralRef(e)) => {
                let entity = e.decode()?;
                if let Some(resolved) = quick_xml::escape::resolve_predefined_entity(&entity) {
                    text.push_str(resolved);
                } else if let Some(ch) = e.resolve_char_ref()? {
                    text.push(ch);
                }
            }
            Ok(Event::End(ref e)) => {
                let name = e.local_name();
                let tag = reader.decoder().decode(name.as_ref())?;
                match tag.as_ref() {
                    "trkpt" | "wpt" => {
                        if let Some(pending) = current_point.take() {
                            finish_point(pending, &mut current_segment, &mut document);
                        }
                    }
                    "trkseg" => {
                        if let Some(segment) = current_segment.take() {
                            match current_track.as_mut() {
                                Some(track) => track.segments.push(segment),
                                None => log::warn!("<trkseg> ausserhalb von <trk> ignoriert"),
                            }
                        }
                    }
                    "trk" => {
                        if let Some(track) = current_track.take() {
                            document.tracks.push(track);
                        }
                    }
                    other => {
                        let value = std::mem::take(&mut text);
                        apply_text(other, value, current_point.as_mut(), current_track.as_mut());
                    }
                }
            }
            Ok(Event::Eof) => {
                if current_point.is_some() || current_segment.is_some() || current_track.is_some()
                {
                    return Err(anyhow!("Unerwartetes Dateiende in offenem Element"));
                }
                break;
            }
            Err(err) => return Err(err).context("Fehler beim Parsen des XML"),
            _ => {}
        }

        buffer.clear();
    }

    log::debug!(
        "GPX gelesen: {} Tracks, {} Trackpunkte, {} Wegpunkte",
        document.tracks.len(),
        document.track_points().count(),
        document.waypoints.len()
    );

    Ok(document)
}

/// Liest `lat`/`lon` eines `trkpt`/`wpt`.
fn point_from_attributes(e: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<GpxPoint> {
    let mut lat = None;
    let mut lon = None;
    for attr in e.attributes().with_checks(false) {
        let attr = attr?;
        let key = reader.decoder().decode(attr.key.as_ref())?;
        let value = attr.unescape_value()?;
        match key.as_ref() {
            "lat" => lat = Some(parse_coordinate(&value, "lat")?),
            "lon" => lon = Some(parse_coordinate(&value, "lon")?),
            _ => {}
        }
    }
    let (Some(lat), Some(lon)) = (lat, lon) else {
        return Err(anyhow!("Punkt ohne lat/lon-Attribut"));
    };
    Ok(GpxPoint {
        position: LatLng::new(lat, lon),
        elevation: None,
        time: None,
        name: None,
        description: None,
        order: 0,
    })
}

fn parse_coordinate(value: &str, key: &str) -> Result<f64> {
    let parsed: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("{} '{}' ist keine Zahl", key, value))?;
    if !parsed.is_finite() {
        return Err(anyhow!("{} '{}' ist nicht endlich", key, value));
    }
    Ok(parsed)
}

/// Ordnet den Text eines Kindelements dem offenen Punkt bzw. Track zu.
fn apply_text(
    tag: &str,
    value: String,
    point: Option<&mut PendingPoint>,
    track: Option<&mut GpxTrack>,
) {
    if let Some(pending) = point {
        let point = &mut pending.point;
        match tag {
            // Unlesbare Hoehe ist kein Fehler, nur "nicht vorhanden"
            "ele" => point.elevation = normalize_number(value.trim().parse().ok()),
            "time" => point.time = non_empty(value),
            "name" => point.name = non_empty(value),
            "desc" if pending.is_waypoint => point.description = non_empty(value),
            _ => {}
        }
        return;
    }
    if let (Some(track), "name") = (track, tag) {
        track.name = non_empty(value);
    }
}

fn finish_point(
    mut pending: PendingPoint,
    segment: &mut Option<Vec<GpxPoint>>,
    document: &mut GpxDocument,
) {
    if pending.is_waypoint {
        pending.point.order = document.waypoints.len() + 1;
        document.waypoints.push(pending.point);
        return;
    }
    match segment.as_mut() {
        Some(segment) => {
            pending.point.order = segment.len() + 1;
            segment.push(pending.point);
        }
        None => log::warn!("<trkpt> ausserhalb von <trkseg> ignoriert"),
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test" xmlns="http://www.topografix.com/GPX/1/1">
  <wpt lat="23.4700" lon="120.9570">
    <ele>3952</ele>
    <name>主峰&amp;三角點</name>
    <desc>Gipfel</desc>
  </wpt>
  <trk>
    <name>Jade Mountain</name>
    <trkseg>
      <trkpt lat="23.4600" lon="120.9400"><ele>2600.5</ele><time>2024-05-01T03:00:00Z</time></trkpt>
      <trkpt lat="23.4650" lon="120.9500"><ele>abc</ele></trkpt>
      <trkpt lat="23.4710" lon="120.9580"/>
    </trkseg>
  </trk>
</gpx>"#;

    #[test]
    fn parses_tracks_segments_and_waypoints() {
        let document = parse_gpx(SAMPLE).expect("GPX gueltig");
        assert_eq!(document.tracks.len(), 1);
        assert_eq!(document.tracks[0].name.as_deref(), Some("Jade Mountain"));

        let segment = &document.tracks[0].segments[0];
        assert_eq!(segment.len(), 3);
        assert_eq!(segment[0].elevation, Some(2600.5));
        assert_eq!(segment[0].time.as_deref(), Some("2024-05-01T03:00:00Z"));
        assert_eq!(segment[1].elevation, None);
        assert_eq!(segment[2].order, 3);

        let waypoint = &document.waypoints[0];
        assert_eq!(waypoint.name.as_deref(), Some("主峰&三角點"));
        assert_eq!(waypoint.description.as_deref(), Some("Gipfel"));
        assert_eq!(waypoint.elevation, Some(3952.0));
    }

    #[test]
    fn waypoints_are_inserted_next_to_nearest_track_point() {
        let collection = parse_gpx(SAMPLE)
            .expect("GPX gueltig")
            .to_route_collection();
        assert_eq!(collection.len(), 4);

        // Naechster Trackpunkt ist der letzte → Wegpunkt wird neues Ende
        let last = &collection.points()[3];
        assert_eq!(last.kind, PointKind::Communication);
        assert_eq!(last.order, "4");
        assert_eq!(
            collection.points()[0].extra.get("time"),
            Some(&Value::String("2024-05-01T03:00:00Z".into()))
        );
    }

    #[test]
    fn malformed_coordinates_are_parse_errors() {
        let bad = r#"<gpx><trk><trkseg><trkpt lat="north" lon="1"/></trkseg></trk></gpx>"#;
        assert!(matches!(parse_gpx(bad), Err(EditError::Parse(_))));

        let missing = r#"<gpx><wpt lon="1"></wpt></gpx>"#;
        assert!(matches!(parse_gpx(missing), Err(EditError::Parse(_))));
    }

    #[test]
    fn mismatched_tags_are_parse_errors() {
        assert!(matches!(
            parse_gpx("<gpx><trk></gpx>"),
            Err(EditError::Parse(_))
        ));
    }
}
