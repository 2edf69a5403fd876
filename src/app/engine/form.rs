//! Formular fuer neue Punkte und Property-Aenderungen bestehender Punkte.

use crate::core::{EditError, InsertPosition, LatLng, PointKind};

/// Formularfeld, das ueber einen Text-Wert gesetzt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Latitude,
    Longitude,
    Elevation,
    Name,
    /// `comm`, `gpx` oder beliebiges Label
    Kind,
    /// `start`, `end` oder `custom`
    Position,
}

impl FormField {
    /// Parst einen Feldnamen (`lat`, `lng`, `ele`, `name`, `type`, `position`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "lat" | "latitude" => Some(Self::Latitude),
            "lng" | "lon" | "longitude" => Some(Self::Longitude),
            "ele" | "elevation" => Some(Self::Elevation),
            "name" => Some(Self::Name),
            "type" | "kind" => Some(Self::Kind),
            "position" | "order" => Some(Self::Position),
            _ => None,
        }
    }
}

/// Offenes "Punkt hinzufuegen"-Formular.
///
/// Koordinaten und Hoehe bleiben Text, bis das Formular abgeschickt wird.
#[derive(Debug, Clone, PartialEq)]
pub struct AddPointForm {
    pub latitude: String,
    pub longitude: String,
    /// Leer = keine Hoehe
    pub elevation: String,
    pub name: String,
    pub kind: PointKind,
    pub position: InsertPosition,
}

impl Default for AddPointForm {
    fn default() -> Self {
        Self {
            latitude: String::new(),
            longitude: String::new(),
            elevation: String::new(),
            name: String::new(),
            kind: PointKind::Communication,
            position: InsertPosition::default(),
        }
    }
}

/// Validierte Formularwerte.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPoint {
    pub position: LatLng,
    pub elevation: Option<f64>,
}

impl AddPointForm {
    /// Formular mit vorbelegten Koordinaten (6 Nachkommastellen).
    pub fn at(position: LatLng, insert_position: InsertPosition) -> Self {
        let mut form = Self {
            position: insert_position,
            ..Self::default()
        };
        form.set_coordinates(position);
        form
    }

    /// Uebernimmt Koordinaten eines Kartenklicks.
    pub fn set_coordinates(&mut self, position: LatLng) {
        self.latitude = format!("{:.6}", position.lat);
        self.longitude = format!("{:.6}", position.lng);
    }

    /// Setzt ein Feld aus einem Text-Wert.
    pub fn set_field(&mut self, field: FormField, value: &str) -> Result<(), EditError> {
        match field {
            FormField::Latitude => self.latitude = value.trim().to_string(),
            FormField::Longitude => self.longitude = value.trim().to_string(),
            FormField::Elevation => self.elevation = value.trim().to_string(),
            FormField::Name => self.name = value.to_string(),
            FormField::Kind => self.kind = PointKind::from_label(value),
            FormField::Position => {
                self.position = InsertPosition::from_label(value).ok_or_else(|| {
                    EditError::validation(format!("Unbekannte Position '{}'", value))
                })?;
            }
        }
        Ok(())
    }

    /// Prueft Breite/Laenge (endlich) und Hoehe (endlich oder leer).
    pub fn validate(&self) -> Result<ValidatedPoint, EditError> {
        let lat = parse_finite(&self.latitude)
            .ok_or_else(|| EditError::validation("Bitte gueltige Breite und Laenge eingeben"))?;
        let lng = parse_finite(&self.longitude)
            .ok_or_else(|| EditError::validation("Bitte gueltige Breite und Laenge eingeben"))?;

        let elevation = if self.elevation.trim().is_empty() {
            None
        } else {
            Some(
                parse_finite(&self.elevation)
                    .ok_or_else(|| EditError::validation("Bitte gueltige Hoehe eingeben"))?,
            )
        };

        Ok(ValidatedPoint {
            position: LatLng::new(lat, lng),
            elevation,
        })
    }
}

fn parse_finite(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Aenderung an einem bestehenden Punkt; `None` = Feld unveraendert.
///
/// `order` und `id` sind nicht editierbar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointEdit {
    /// Leerer Name entfernt den Namen
    pub name: Option<String>,
    pub kind: Option<PointKind>,
    /// `Some(None)` entfernt die Hoehe
    pub elevation: Option<Option<f64>>,
}

impl PointEdit {
    /// Gibt `true` zurueck, wenn kein Feld gesetzt ist.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.kind.is_none() && self.elevation.is_none()
    }
}
