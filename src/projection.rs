//! Geographic centroid and local flat-plane projection.
//!
//! An activity covers a few kilometers at most, so an equirectangular
//! approximation centered on the route's mean position is accurate enough:
//! longitude deltas are scaled by the cosine of the center latitude to
//! offset meridian convergence, latitude deltas pass through unchanged.
//! Units stay in degree-equivalents; the fitter only needs proportions.

use crate::polyline::Polyline;
use crate::{Error, Result};

/// Pooled mean position over every point of every sequence.
///
/// All points are weighted equally regardless of which sequence they belong
/// to. Fails with [`Error::EmptyRoute`] when there are no points at all;
/// callers normally never hit that because the renderer hides the surface
/// for empty input before the pipeline reaches this stage.
pub fn centroid(sequences: &[Polyline]) -> Result<(f64, f64)> {
    let mut lat_sum = 0.0;
    let mut lng_sum = 0.0;
    let mut count: usize = 0;

    for sequence in sequences {
        for &(lat, lng) in sequence.points() {
            lat_sum += lat;
            lng_sum += lng;
            count += 1;
        }
    }

    if count == 0 {
        return Err(Error::EmptyRoute);
    }

    Ok((lat_sum / count as f64, lng_sum / count as f64))
}

/// Projects (latitude, longitude) points onto a flat plane centered on
/// `center`, returning (x, y) pairs.
///
/// The longitude delta is normalized once into (-180, 180] so a route
/// straddling the antimeridian projects along the short way around.
pub fn project(points: &[(f64, f64)], center: (f64, f64)) -> Vec<(f64, f64)> {
    let (center_lat, center_lng) = center;
    let lat_correction = center_lat.to_radians().cos();

    points
        .iter()
        .map(|&(lat, lng)| {
            let mut delta_lng = lng - center_lng;
            if delta_lng > 180.0 {
                delta_lng -= 360.0;
            } else if delta_lng <= -180.0 {
                delta_lng += 360.0;
            }
            (delta_lng * lat_correction, lat - center_lat)
        })
        .collect()
}
