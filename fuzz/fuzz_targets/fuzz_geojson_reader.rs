#![no_main]

use libfuzzer_sys::fuzz_target;
use route_waypoint_editor::parse_route_document;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(collection) = parse_route_document(text) {
            // geladene Punkte sind immer durchnummeriert
            for (index, point) in collection.points().iter().enumerate() {
                assert_eq!(point.order, (index + 1).to_string());
            }
        }
    }
});
