//! Writer fuer GPX 1.1 (ein Track plus Wegpunkte fuer markierte Punkte).

use crate::core::{PointFeature, PointKind};
use quick_xml::escape::escape;

/// Schreibt die Punktfolge als GPX 1.1.
///
/// Kommunikationspunkte und benannte Punkte erscheinen zusaetzlich als `<wpt>`;
/// der Track enthaelt alle Punkte in Routenreihenfolge.
pub fn write_gpx(points: &[PointFeature], track_name: &str) -> String {
    let mut output = String::new();
    output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    output.push_str(
        "<gpx version=\"1.1\" creator=\"route-waypoint-editor\" xmlns=\"http://www.topografix.com/GPX/1/1\">\n",
    );

    for point in points
        .iter()
        .filter(|p| p.kind == PointKind::Communication || p.name.is_some())
    {
        output.push_str(&format!(
            "  <wpt lat=\"{}\" lon=\"{}\">\n",
            point.lat(),
            point.lng()
        ));
        push_point_children(&mut output, point, "    ");
        if let Some(name) = &point.name {
            output.push_str(&format!("    <name>{}</name>\n", escape(name.as_str())));
        }
        if let Some(label) = point.kind.label() {
            output.push_str(&format!("    <type>{}</type>\n", escape(label)));
        }
        output.push_str("  </wpt>\n");
    }

    output.push_str("  <trk>\n");
    output.push_str(&format!("    <name>{}</name>\n", escape(track_name)));
    output.push_str("    <trkseg>\n");
    for point in points {
        output.push_str(&format!(
            "      <trkpt lat=\"{}\" lon=\"{}\">\n",
            point.lat(),
            point.lng()
        ));
        push_point_children(&mut output, point, "        ");
        output.push_str("      </trkpt>\n");
    }
    output.push_str("    </trkseg>\n");
    output.push_str("  </trk>\n");
    output.push_str("</gpx>\n");
    output
}

/// `<ele>` und `<time>` (aus der `time`-Property), falls vorhanden.
fn push_point_children(output: &mut String, point: &PointFeature, indent: &str) {
    if let Some(elevation) = point.elevation {
        output.push_str(&format!("{indent}<ele>{}</ele>\n", elevation));
    }
    if let Some(time) = point.extra.get("time").and_then(|v| v.as_str()) {
        let time = time.replace("+00:00", "Z");
        output.push_str(&format!("{indent}<time>{}</time>\n", escape(time.as_str())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LatLng, RouteCollection};
    use crate::gpx::parse_gpx;

    #[test]
    fn named_and_communication_points_become_waypoints() {
        let collection = RouteCollection::from_points(vec![
            PointFeature::new(LatLng::new(23.46, 120.94)).with_kind(PointKind::GpsTrack),
            PointFeature::new(LatLng::new(23.47, 120.957))
                .with_kind(PointKind::Communication)
                .with_elevation(Some(3952.0)),
            PointFeature::new(LatLng::new(23.48, 120.96)).with_name("A & B"),
        ]);
        let xml = write_gpx(collection.points(), "jade_route_a");

        assert_eq!(xml.matches("<wpt ").count(), 2);
        assert_eq!(xml.matches("<trkpt ").count(), 3);
        assert!(xml.contains("<name>A &amp; B</name>"));
        assert!(xml.contains("<ele>3952</ele>"));

        let reparsed = parse_gpx(&xml).expect("geschriebenes GPX ist gueltig");
        assert_eq!(reparsed.waypoints.len(), 2);
        assert_eq!(reparsed.waypoints[1].name.as_deref(), Some("A & B"));
        assert_eq!(reparsed.tracks[0].name.as_deref(), Some("jade_route_a"));
    }

    #[test]
    fn time_property_is_written_in_utc_form() {
        let mut point = PointFeature::new(LatLng::new(1.0, 2.0));
        point
            .extra
            .insert("time".into(), "2024-05-01T03:00:00+00:00".into());
        let xml = write_gpx(&[point], "t");
        assert!(xml.contains("<time>2024-05-01T03:00:00Z</time>"));
    }
}
