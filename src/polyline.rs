//! Polyline representation and decoding for route geometries.
//!
//! Routes arrive from the activity API as compact encoded polyline strings
//! (Google's variable-length signed-delta format). This module decodes them
//! into coordinate sequences; everything downstream works on decoded points.

use serde::{Deserialize, Serialize};

/// Scale factor of the encoding: deltas are stored as integers in 1e-5 degree units.
const COORD_SCALE: f64 = 1e-5;

/// A route geometry as a decoded sequence of coordinates.
///
/// Each point is a (latitude, longitude) tuple in degrees. The sequence is
/// ordered and may be empty (no route, or malformed input).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// An empty polyline, the "no route to draw" value.
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Decodes an encoded polyline string into a coordinate sequence.
///
/// Latitude and longitude deltas alternate through the string. Each delta is
/// zigzag-encoded and split into 5-bit groups, every group stored as one
/// character offset by 63 with bit 0x20 marking continuation.
///
/// Decoding fails soft: an invalid character (code below 63) or a string
/// that ends mid-point yields an empty polyline, which callers must treat
/// the same as "no map data". Resulting coordinates are not range-checked.
pub fn decode(encoded: &str) -> Polyline {
    let mut chars = encoded.chars();
    let mut points = Vec::new();
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    loop {
        let Some(first) = chars.next() else {
            // Clean end of input, between points.
            return Polyline::new(points);
        };
        let Some(lat_delta) = decode_value(first, &mut chars) else {
            return Polyline::empty();
        };
        let Some(next) = chars.next() else {
            // Latitude without a longitude: truncated input.
            return Polyline::empty();
        };
        let Some(lng_delta) = decode_value(next, &mut chars) else {
            return Polyline::empty();
        };

        lat += lat_delta;
        lng += lng_delta;
        points.push((lat as f64 * COORD_SCALE, lng as f64 * COORD_SCALE));
    }
}

/// Reads one zigzag-encoded value starting at `first`, consuming
/// continuation characters from `chars`. `None` on malformed or truncated
/// input.
fn decode_value(first: char, chars: &mut std::str::Chars<'_>) -> Option<i64> {
    let mut value: i64 = 0;
    let mut shift: u32 = 0;
    let mut ch = first;

    loop {
        let byte = ch as i64 - 63;
        if byte < 0 || shift > 63 {
            return None;
        }
        value |= (byte & 0x1f) << shift;
        if byte & 0x20 == 0 {
            break;
        }
        shift += 5;
        ch = chars.next()?;
    }

    // Zigzag: low bit carries the sign.
    if value & 1 != 0 {
        Some(!(value >> 1))
    } else {
        Some(value >> 1)
    }
}
