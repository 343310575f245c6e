//! Sample route data.
//!
//! `GOOGLE_EXAMPLE` is the encoding example from Google's polyline format
//! documentation, a fixed external reference vector. `CITY_LOOP` is a short
//! loop through central Trondheim at realistic single-activity scale.

/// Encoded form of [`GOOGLE_EXAMPLE_POINTS`].
pub const GOOGLE_EXAMPLE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

pub const GOOGLE_EXAMPLE_POINTS: &[(f64, f64)] = &[
    (38.5, -120.2),
    (40.7, -120.95),
    (43.252, -126.453),
];

/// Encoded form of [`CITY_LOOP_POINTS`].
pub const CITY_LOOP: &str = "swcbKkhm~@sIwVgJ_S{ErX~Cja@rIjMrIgOnAkM";

pub const CITY_LOOP_POINTS: &[(f64, f64)] = &[
    (63.4305, 10.3951),
    (63.4322, 10.3989),
    (63.4340, 10.4021),
    (63.4351, 10.3980),
    (63.4343, 10.3925),
    (63.4326, 10.3902),
    (63.4309, 10.3928),
    (63.4305, 10.3951),
];

/// A two-point track straddling the antimeridian.
pub const ANTIMERIDIAN_POINTS: &[(f64, f64)] = &[(52.1, 179.95), (52.2, -179.95)];
