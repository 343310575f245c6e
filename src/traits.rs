//! Seams to the surrounding application.
//!
//! The pipeline touches the outside world in exactly two places: where
//! activities come from and where the route gets drawn. Both are traits so
//! concrete apps (and tests) can plug in their own implementations.

use crate::Result;
use crate::strava::Activity;

/// A 2D drawing surface with a square pixel area.
///
/// Modeled on what an HTML canvas offers: visibility, clearing, subpath
/// construction with move/line primitives, a stroke pass, and a lookup of
/// the active theme's stroke color. Rendering must stay on whatever thread
/// owns the surface; the pipeline itself never blocks or suspends.
pub trait Surface {
    /// Makes the surface visible.
    fn show(&mut self);

    /// Hides the surface entirely (the "nothing to draw" state).
    fn hide(&mut self);

    /// Resizes the drawing area and erases any previous strokes.
    fn clear(&mut self, width: f64, height: f64);

    /// Starts a fresh path; later `move_to` calls open new subpaths.
    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    /// Strokes the current path.
    fn stroke(&mut self, color: &str, line_width: f64);

    /// Stroke color of the active visual theme, if one is set.
    fn theme_stroke_color(&self) -> Option<String> {
        None
    }
}

/// Source of activity records.
pub trait ActivityProvider {
    /// Fetches the most recent activities.
    fn activities(&self) -> Result<Vec<Activity>>;

    /// Whether an authenticated connection is available.
    fn is_connected(&self) -> bool;
}
