//! Fits projected route points into a square pixel canvas.

/// Fraction of the canvas the route may occupy; the remaining 10% is
/// padding, split evenly on each side. Tunable, kept at the value the
/// overlay UI was designed around.
pub const PADDING_FACTOR: f64 = 0.9;

/// Span floor for degenerate geometry (single point, all points identical).
const MIN_SPAN: f64 = 1e-12;

/// Rescales and translates planar point sequences into pixel coordinates
/// that fit a `target_size` x `target_size` canvas.
///
/// One bounding box is computed across all sequences so they share a scale.
/// Scaling is uniform (the larger box dimension governs) to preserve the
/// route's aspect ratio, and the y axis flips sign because latitude grows
/// northward while pixel y grows downward. A degenerate box falls back to
/// a tiny span so a lone point lands at the canvas center.
pub fn fit(sequences: &[Vec<(f64, f64)>], target_size: f64) -> Vec<Vec<(f64, f64)>> {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for sequence in sequences {
        for &(x, y) in sequence {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    let span = (max_x - min_x).max(max_y - min_y).max(MIN_SPAN);
    let scale = target_size * PADDING_FACTOR / span;
    let center_x = (min_x + max_x) / 2.0;
    let center_y = (min_y + max_y) / 2.0;
    let half = target_size / 2.0;

    sequences
        .iter()
        .map(|sequence| {
            sequence
                .iter()
                .map(|&(x, y)| {
                    (
                        (x - center_x) * scale + half,
                        (y - center_y) * -scale + half,
                    )
                })
                .collect()
        })
        .collect()
}
