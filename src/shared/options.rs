//! Zentrale Konfiguration fuer den Routen-Editor.
//!
//! `EditorOptions` enthaelt alle zur Laufzeit aenderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{PointKind, RouteVersion};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Pfade ───────────────────────────────────────────────────────────

/// Standard-Datenwurzel mit `route_a/` und `route_b/`.
pub const DATA_ROOT: &str = "data_work";
/// Standard-Zielordner fuer Exporte.
pub const EXPORT_DIR: &str = ".";
/// Dateiname der Optionen-Datei.
pub const OPTIONS_FILE_NAME: &str = "route_waypoint_editor.toml";

// ── Marker ──────────────────────────────────────────────────────────

/// Radius der Punkt-Marker in Pixeln.
pub const MARKER_RADIUS: f32 = 6.0;
/// Radius der Hintergrund-Punkte in Pixeln.
pub const BACKGROUND_POINT_RADIUS: f32 = 3.0;
/// Kommunikationspunkte (#ff6b6b).
pub const COMMUNICATION_POINT_COLOR: [f32; 4] = [1.0, 0.420, 0.420, 1.0];
/// GPS-Trackpunkte (#4ecdc4).
pub const GPS_TRACK_POINT_COLOR: [f32; 4] = [0.306, 0.804, 0.769, 1.0];
/// Punkte ohne bekannten Typ (#808080).
pub const DEFAULT_POINT_COLOR: [f32; 4] = [0.502, 0.502, 0.502, 1.0];
/// Hervorhebung selektierter Punkte (#ffc107).
pub const SELECTED_POINT_COLOR: [f32; 4] = [1.0, 0.757, 0.027, 1.0];

// ── Linien ──────────────────────────────────────────────────────────

/// Linienbreite der aktiven Route.
pub const ROUTE_LINE_WIDTH: f32 = 5.0;
/// Linienbreite der Hintergrund-Route.
pub const BACKGROUND_LINE_WIDTH: f32 = 3.0;
/// Route A (#dc3545).
pub const ROUTE_A_COLOR: [f32; 4] = [0.863, 0.208, 0.271, 1.0];
/// Route B (#007bff).
pub const ROUTE_B_COLOR: [f32; 4] = [0.0, 0.482, 1.0, 1.0];
/// Hintergrund-Linie (#888888, Deckkraft 0.7).
pub const BACKGROUND_LINE_COLOR: [f32; 4] = [0.533, 0.533, 0.533, 0.7];
/// Hintergrund-Punkte (#999999, Deckkraft 0.6).
pub const BACKGROUND_POINT_COLOR: [f32; 4] = [0.6, 0.6, 0.6, 0.6];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit aenderbaren Editor-Optionen.
/// Wird als `route_waypoint_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Pfade ───────────────────────────────────────────────────
    /// Wurzel der Routendaten
    #[serde(default = "default_data_root")]
    pub data_root: PathBuf,
    /// Zielordner fuer TSV/GeoJSON/GPX-Exporte
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
    /// Variante, die beim Start aktiv ist
    #[serde(default)]
    pub default_version: RouteVersion,

    // ── Marker ──────────────────────────────────────────────────
    pub marker_radius: f32,
    pub background_point_radius: f32,
    pub communication_point_color: [f32; 4],
    pub gps_track_point_color: [f32; 4],
    pub default_point_color: [f32; 4],
    /// Farbe fuer selektierte Punkte
    #[serde(default = "default_selected_point_color")]
    pub selected_point_color: [f32; 4],

    // ── Linien ──────────────────────────────────────────────────
    pub route_line_width: f32,
    pub background_line_width: f32,
    pub route_a_color: [f32; 4],
    pub route_b_color: [f32; 4],
    pub background_line_color: [f32; 4],
    pub background_point_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            export_dir: default_export_dir(),
            default_version: RouteVersion::default(),

            marker_radius: MARKER_RADIUS,
            background_point_radius: BACKGROUND_POINT_RADIUS,
            communication_point_color: COMMUNICATION_POINT_COLOR,
            gps_track_point_color: GPS_TRACK_POINT_COLOR,
            default_point_color: DEFAULT_POINT_COLOR,
            selected_point_color: SELECTED_POINT_COLOR,

            route_line_width: ROUTE_LINE_WIDTH,
            background_line_width: BACKGROUND_LINE_WIDTH,
            route_a_color: ROUTE_A_COLOR,
            route_b_color: ROUTE_B_COLOR,
            background_line_color: BACKGROUND_LINE_COLOR,
            background_point_color: BACKGROUND_POINT_COLOR,
        }
    }
}

fn default_data_root() -> PathBuf {
    PathBuf::from(DATA_ROOT)
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(EXPORT_DIR)
}

/// Serde-Default fuer `selected_point_color` (Abwaertskompatibilitaet).
fn default_selected_point_color() -> [f32; 4] {
    SELECTED_POINT_COLOR
}

impl EditorOptions {
    /// Laedt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("route-waypoint-editor"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(OPTIONS_FILE_NAME)
    }

    /// Linienfarbe der aktiven Route je Variante.
    pub fn route_color(&self, version: RouteVersion) -> [f32; 4] {
        match version {
            RouteVersion::A => self.route_a_color,
            RouteVersion::B => self.route_b_color,
        }
    }

    /// Markerfarbe je Punkt-Kategorie.
    pub fn point_color(&self, kind: &PointKind) -> [f32; 4] {
        match kind {
            PointKind::Communication => self.communication_point_color,
            PointKind::GpsTrack => self.gps_track_point_color,
            PointKind::Other(_) | PointKind::Unspecified => self.default_point_color,
        }
    }
}
