//! SVG drawing surface.
//!
//! An owned [`Surface`] implementation that records path commands and
//! serializes them as a standalone SVG document. Each stroked path becomes
//! one `<path>` element with `M` (move to) and `L` (line to) commands, so
//! subpath breaks survive into the output. Pure in-memory rendering, no I/O.

use std::fmt::Write;

use crate::traits::Surface;

#[derive(Debug, Clone, PartialEq)]
struct StrokedPath {
    d: String,
    color: String,
    line_width: f64,
}

/// In-memory SVG canvas.
///
/// Starts hidden with a zero-sized drawing area; [`Surface::clear`] sets the
/// dimensions. A hidden surface serializes to an empty zero-sized document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    hidden: bool,
    theme_color: Option<String>,
    current: String,
    paths: Vec<StrokedPath>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self {
            hidden: true,
            ..Self::default()
        }
    }

    /// A surface whose theme supplies a stroke color.
    pub fn with_theme_color(color: impl Into<String>) -> Self {
        Self {
            theme_color: Some(color.into()),
            ..Self::new()
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Serializes the surface into an SVG document string.
    ///
    /// Coordinates are formatted to 1 decimal place (0.1 px precision).
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);

        if self.hidden {
            let _ = writeln!(
                out,
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="0" height="0"/>"#
            );
            return out;
        }

        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}">"#,
            w = self.width,
            h = self.height,
        );
        for path in &self.paths {
            let _ = writeln!(
                out,
                r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                path.d, path.color, path.line_width,
            );
        }
        let _ = writeln!(out, "</svg>");
        out
    }
}

impl Surface for SvgSurface {
    fn show(&mut self) {
        self.hidden = false;
    }

    fn hide(&mut self) {
        self.hidden = true;
        self.width = 0.0;
        self.height = 0.0;
        self.paths.clear();
        self.current.clear();
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.paths.clear();
        self.current.clear();
    }

    fn begin_path(&mut self) {
        self.current.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        if !self.current.is_empty() {
            self.current.push(' ');
        }
        let _ = write!(self.current, "M {x:.1} {y:.1}");
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if !self.current.is_empty() {
            self.current.push(' ');
        }
        let _ = write!(self.current, "L {x:.1} {y:.1}");
    }

    fn stroke(&mut self, color: &str, line_width: f64) {
        if self.current.is_empty() {
            return;
        }
        self.paths.push(StrokedPath {
            d: std::mem::take(&mut self.current),
            color: color.to_string(),
            line_width,
        });
    }

    fn theme_stroke_color(&self) -> Option<String> {
        self.theme_color.clone()
    }
}
