#![no_main]

use libfuzzer_sys::fuzz_target;
use route_waypoint_editor::parse_gpx;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(document) = parse_gpx(text) {
            let _ = document.to_route_collection();
        }
    }
});
