//! Einzelner Wegpunkt einer Route (GeoJSON-Point-Feature).

use glam::DVec2;
use serde_json::{Map, Value};

/// Geografische Position in WGS84-Grad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    /// Breitengrad
    pub lat: f64,
    /// Laengengrad
    pub lng: f64,
}

impl LatLng {
    /// Erstellt eine neue Position.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Erstellt eine Position aus einem GeoJSON-Koordinatenpaar (lon, lat).
    pub fn from_lon_lat(coordinates: DVec2) -> Self {
        Self {
            lat: coordinates.y,
            lng: coordinates.x,
        }
    }

    /// GeoJSON-Reihenfolge: x = Laenge, y = Breite.
    pub fn to_lon_lat(self) -> DVec2 {
        DVec2::new(self.lng, self.lat)
    }

    /// Beide Komponenten endlich?
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Kategorie eines Wegpunkts (`type`-Property).
///
/// Steuert nur die Darstellungsfarbe, fuer die Editier-Logik ist sie opak.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PointKind {
    /// Manuell gesetzter Kommunikationspunkt (`comm`)
    Communication,
    /// Aus einem GPS-Track importierter Punkt (`gpx`)
    GpsTrack,
    /// Unbekanntes Label aus der Quelldatei, wird unveraendert zurueckgeschrieben
    Other(String),
    /// Kein `type` gesetzt
    #[default]
    Unspecified,
}

impl PointKind {
    /// Wire-Wert fuer Kommunikationspunkte.
    pub const COMMUNICATION_LABEL: &'static str = "comm";
    /// Wire-Wert fuer GPS-Trackpunkte.
    pub const GPS_TRACK_LABEL: &'static str = "gpx";

    /// Interpretiert ein `type`-Label aus einem Dokument oder Formular.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "" => Self::Unspecified,
            Self::COMMUNICATION_LABEL => Self::Communication,
            Self::GPS_TRACK_LABEL => Self::GpsTrack,
            other => Self::Other(other.to_string()),
        }
    }

    /// Label fuer Export und Tabelle (`None` = nicht gesetzt).
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Communication => Some(Self::COMMUNICATION_LABEL),
            Self::GpsTrack => Some(Self::GPS_TRACK_LABEL),
            Self::Other(label) => Some(label.as_str()),
            Self::Unspecified => None,
        }
    }

    /// `Other` und `Unspecified` werden gleich dargestellt.
    pub fn is_unspecified(&self) -> bool {
        matches!(self, Self::Other(_) | Self::Unspecified)
    }
}

/// Ein Wegpunkt mit Position und Properties.
#[derive(Debug, Clone, PartialEq)]
pub struct PointFeature {
    /// Position (x = Laenge, y = Breite)
    pub coordinates: DVec2,
    /// 1-basierte Reihenfolge als Anzeige-String; entspricht immer Index + 1
    pub order: String,
    /// Kategorie
    pub kind: PointKind,
    /// Optionaler Anzeigename
    pub name: Option<String>,
    /// Hoehe in Metern, nie NaN
    pub elevation: Option<f64>,
    /// Stabile ID; neu hinzugefuegte Punkte bekommen eine frische ID
    pub id: Option<String>,
    /// Weitere Properties aus der Quelldatei (unveraendert, `null` erlaubt)
    pub extra: Map<String, Value>,
    /// Koordinaten-Komponenten nach lon/lat (z.B. Hoehe), so wie gelesen
    pub extra_dimensions: Vec<Value>,
    /// Rohwerte von `type`, `name`, `elevation`, `id` aus der Quelldatei.
    ///
    /// Solange das zugehoerige Feld nicht geaendert wurde, schreibt der Export
    /// den Rohwert zurueck (inklusive JSON-Typ und `null`).
    pub source_properties: Map<String, Value>,
}

impl PointFeature {
    /// Erstellt einen Punkt ohne Properties.
    pub fn new(position: LatLng) -> Self {
        Self {
            coordinates: position.to_lon_lat(),
            order: String::new(),
            kind: PointKind::Unspecified,
            name: None,
            elevation: None,
            id: None,
            extra: Map::new(),
            extra_dimensions: Vec::new(),
            source_properties: Map::new(),
        }
    }

    /// Builder: Kategorie setzen.
    pub fn with_kind(mut self, kind: PointKind) -> Self {
        self.kind = kind;
        self
    }

    /// Builder: Name setzen (leere Namen bleiben `None`).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = (!name.is_empty()).then_some(name);
        self
    }

    /// Builder: Hoehe setzen; nicht-endliche Werte werden verworfen.
    pub fn with_elevation(mut self, elevation: Option<f64>) -> Self {
        self.elevation = normalize_number(elevation);
        self
    }

    /// Builder: ID setzen.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Position als Breite/Laenge.
    pub fn position(&self) -> LatLng {
        LatLng::from_lon_lat(self.coordinates)
    }

    /// Breitengrad.
    pub fn lat(&self) -> f64 {
        self.coordinates.y
    }

    /// Laengengrad.
    pub fn lng(&self) -> f64 {
        self.coordinates.x
    }

    /// Reihenfolge als Zahl (falls parsebar).
    pub fn order_number(&self) -> Option<usize> {
        self.order.parse().ok()
    }
}

/// Verwirft NaN und ±Inf.
pub fn normalize_number(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_labels_roundtrip_known_and_keep_unknown() {
        assert_eq!(PointKind::from_label("comm"), PointKind::Communication);
        assert_eq!(PointKind::from_label("gpx"), PointKind::GpsTrack);
        assert_eq!(PointKind::from_label(""), PointKind::Unspecified);
        let other = PointKind::from_label("summit");
        assert_eq!(other.label(), Some("summit"));
        assert!(other.is_unspecified());
        assert_eq!(PointKind::Unspecified.label(), None);
    }

    #[test]
    fn builder_drops_nan_elevation_and_empty_name() {
        let point = PointFeature::new(LatLng::new(23.5, 121.0))
            .with_name("")
            .with_elevation(Some(f64::NAN));
        assert_eq!(point.name, None);
        assert_eq!(point.elevation, None);
        assert_eq!(point.lat(), 23.5);
        assert_eq!(point.lng(), 121.0);
    }
}
