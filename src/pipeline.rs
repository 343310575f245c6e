//! Route rendering pipeline.
//!
//! The one-way flow the whole crate exists for:
//! encoded string -> geo points -> centroid -> projected points -> pixel
//! points -> stroked lines. Every stage is a pure function of its input;
//! this module just sequences them for the common single-route case.

use tracing::{debug, warn};

use crate::traits::Surface;
use crate::{fit, polyline, projection, render};

/// Decodes, projects, fits, and draws a single route onto `surface`.
///
/// Failures never propagate: an absent, empty, or malformed polyline (and
/// the empty decode that falls out of it) ends with the surface hidden,
/// exactly like an activity with no map. The surface is the caller's;
/// invoke this from whatever thread owns it.
pub fn render_route<S: Surface + ?Sized>(
    surface: Option<&mut S>,
    encoded: Option<&str>,
    size: f64,
) {
    let Some(encoded) = encoded else {
        debug!("activity has no route polyline");
        render::draw(surface, &[], size);
        return;
    };

    let decoded = polyline::decode(encoded);
    if decoded.is_empty() {
        if !encoded.is_empty() {
            warn!(len = encoded.len(), "route polyline failed to decode");
        }
        render::draw(surface, &[], size);
        return;
    }

    let routes = [decoded];
    let Ok(center) = projection::centroid(&routes) else {
        // Unreachable with a non-empty decode; kept as a guard.
        render::draw(surface, &[], size);
        return;
    };

    let projected = vec![projection::project(routes[0].points(), center)];
    let fitted = fit::fit(&projected, size);
    render::draw(surface, &fitted, size);
}
