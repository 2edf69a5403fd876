//! Grosskreis-Distanz (Haversine) zwischen WGS84-Positionen.

use super::LatLng;

/// Mittlerer Erdradius in Metern.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Distanz in Metern zwischen zwei Positionen (Haversine).
pub fn haversine_distance(a: LatLng, b: LatLng) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}
