//! Draws fitted route points onto a drawing surface.

use tracing::debug;

use crate::traits::Surface;

/// Consecutive points farther apart than this fraction of the canvas size
/// start a new subpath instead of a connecting segment. Gaps like this come
/// from decoding artifacts or degenerate geometry, and a straight connector
/// across the canvas looks worse than a break. Tunable.
pub const BREAK_FACTOR: f64 = 0.45;

/// Stroke width in pixels at canvas scale.
pub const LINE_WIDTH: f64 = 2.0;

/// Stroke color used when the surface reports no theme color.
/// The Strava brand orange the original overlay shipped with.
pub const FALLBACK_STROKE: &str = "#fc4c02";

/// Traces pixel-space point sequences onto `surface`.
///
/// An absent surface is a no-op. An empty sequence set (or one whose
/// sequences are all empty) hides the surface and draws nothing. Otherwise
/// the surface is shown, cleared to `size` x `size`, and each sequence is
/// stroked as a connected path, broken wherever two consecutive points are
/// implausibly far apart. Clearing first makes repeated draws idempotent.
pub fn draw<S: Surface + ?Sized>(surface: Option<&mut S>, sequences: &[Vec<(f64, f64)>], size: f64) {
    let Some(surface) = surface else {
        return;
    };

    if sequences.iter().all(|sequence| sequence.is_empty()) {
        debug!("no route points, hiding surface");
        surface.hide();
        return;
    }

    surface.show();
    surface.clear(size, size);

    let color = surface
        .theme_stroke_color()
        .unwrap_or_else(|| FALLBACK_STROKE.to_string());
    let break_distance = BREAK_FACTOR * size;

    for sequence in sequences {
        let Some(&(first_x, first_y)) = sequence.first() else {
            continue;
        };

        surface.begin_path();
        surface.move_to(first_x, first_y);
        for pair in sequence.windows(2) {
            let (prev_x, prev_y) = pair[0];
            let (x, y) = pair[1];
            if (x - prev_x).hypot(y - prev_y) > break_distance {
                surface.move_to(x, y);
            } else {
                surface.line_to(x, y);
            }
        }
        surface.stroke(&color, LINE_WIDTH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records surface calls so tests can assert on the drawn output.
    #[derive(Debug, Default, Clone, PartialEq)]
    pub(crate) struct RecordingSurface {
        pub visible: bool,
        pub cleared_to: Option<(f64, f64)>,
        pub theme: Option<String>,
        pub paths: Vec<RecordedPath>,
        current: Vec<Subpath>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct RecordedPath {
        pub subpaths: Vec<Subpath>,
        pub color: String,
        pub line_width: f64,
    }

    type Subpath = Vec<(f64, f64)>;

    impl Surface for RecordingSurface {
        fn show(&mut self) {
            self.visible = true;
        }

        fn hide(&mut self) {
            self.visible = false;
        }

        fn clear(&mut self, width: f64, height: f64) {
            self.cleared_to = Some((width, height));
            self.paths.clear();
            self.current.clear();
        }

        fn begin_path(&mut self) {
            self.current.clear();
        }

        fn move_to(&mut self, x: f64, y: f64) {
            self.current.push(vec![(x, y)]);
        }

        fn line_to(&mut self, x: f64, y: f64) {
            if let Some(subpath) = self.current.last_mut() {
                subpath.push((x, y));
            }
        }

        fn stroke(&mut self, color: &str, line_width: f64) {
            self.paths.push(RecordedPath {
                subpaths: std::mem::take(&mut self.current),
                color: color.to_string(),
                line_width,
            });
        }

        fn theme_stroke_color(&self) -> Option<String> {
            self.theme.clone()
        }
    }

    #[test]
    fn test_draw_absent_surface_is_noop() {
        draw::<RecordingSurface>(None, &[vec![(0.0, 0.0)]], 200.0);
    }

    #[test]
    fn test_draw_empty_set_hides_surface() {
        let mut surface = RecordingSurface::default();
        surface.visible = true;

        draw(Some(&mut surface), &[], 200.0);
        assert!(!surface.visible);
        assert!(surface.paths.is_empty());

        surface.visible = true;
        draw(Some(&mut surface), &[Vec::new(), Vec::new()], 200.0);
        assert!(!surface.visible);
    }

    #[test]
    fn test_draw_connected_route() {
        let mut surface = RecordingSurface::default();
        let route = vec![(10.0, 10.0), (20.0, 20.0), (30.0, 10.0)];

        draw(Some(&mut surface), &[route.clone()], 200.0);

        assert!(surface.visible);
        assert_eq!(surface.cleared_to, Some((200.0, 200.0)));
        assert_eq!(surface.paths.len(), 1);
        assert_eq!(surface.paths[0].subpaths, vec![route]);
        assert_eq!(surface.paths[0].line_width, LINE_WIDTH);
        assert_eq!(surface.paths[0].color, FALLBACK_STROKE);
    }

    #[test]
    fn test_draw_breaks_on_large_gap() {
        let mut surface = RecordingSurface::default();
        // 0.45 * 200 = 90; the middle jump of 100 pixels must split the path.
        let route = vec![(10.0, 10.0), (20.0, 10.0), (120.0, 10.0), (130.0, 10.0)];

        draw(Some(&mut surface), &[route], 200.0);

        let subpaths = &surface.paths[0].subpaths;
        assert_eq!(subpaths.len(), 2);
        assert_eq!(subpaths[0], vec![(10.0, 10.0), (20.0, 10.0)]);
        assert_eq!(subpaths[1], vec![(120.0, 10.0), (130.0, 10.0)]);
    }

    #[test]
    fn test_draw_gap_at_threshold_still_connects() {
        let mut surface = RecordingSurface::default();
        let route = vec![(0.0, 0.0), (90.0, 0.0)];

        draw(Some(&mut surface), &[route.clone()], 200.0);
        assert_eq!(surface.paths[0].subpaths, vec![route]);
    }

    #[test]
    fn test_draw_uses_theme_color() {
        let mut surface = RecordingSurface {
            theme: Some("#112233".to_string()),
            ..Default::default()
        };

        draw(Some(&mut surface), &[vec![(0.0, 0.0), (1.0, 1.0)]], 200.0);
        assert_eq!(surface.paths[0].color, "#112233");
    }

    #[test]
    fn test_draw_is_idempotent() {
        let route = vec![(10.0, 10.0), (20.0, 20.0)];
        let mut surface = RecordingSurface::default();

        draw(Some(&mut surface), &[route.clone()], 200.0);
        let after_first = surface.clone();
        draw(Some(&mut surface), &[route], 200.0);

        assert_eq!(surface, after_first);
    }

    #[test]
    fn test_draw_skips_empty_sequences_in_mixed_set() {
        let mut surface = RecordingSurface::default();
        draw(
            Some(&mut surface),
            &[Vec::new(), vec![(0.0, 0.0), (1.0, 1.0)]],
            200.0,
        );
        assert!(surface.visible);
        assert_eq!(surface.paths.len(), 1);
    }
}
