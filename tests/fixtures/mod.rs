//! Test fixtures for stravify.
//!
//! Provides named sample routes (encoded and decoded forms) and a
//! test-only polyline encoder for round-trip checks.

pub mod sample_routes;

pub use sample_routes::*;

/// Encodes points into the polyline wire format.
///
/// Inverse of `stravify::polyline::decode`, used only to exercise
/// round-trip properties in tests.
pub fn encode(points: &[(f64, f64)]) -> String {
    let mut out = String::new();
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for &(lat, lng) in points {
        let lat_scaled = (lat * 1e5).round() as i64;
        let lng_scaled = (lng * 1e5).round() as i64;
        encode_value(lat_scaled - prev_lat, &mut out);
        encode_value(lng_scaled - prev_lng, &mut out);
        prev_lat = lat_scaled;
        prev_lng = lng_scaled;
    }

    out
}

fn encode_value(value: i64, out: &mut String) {
    let mut value = if value < 0 {
        !(value << 1)
    } else {
        value << 1
    };
    while value >= 0x20 {
        out.push(((0x20 | (value & 0x1f)) as u8 + 63) as char);
        value >>= 5;
    }
    out.push((value as u8 + 63) as char);
}
