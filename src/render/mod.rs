//! Renderers take normalized lines and put them somewhere visible. The only
//! one we ship writes plotter-ready SVG.
use std::path::Path as FilePath;

pub use csscolorparser::Color as CssColor;
use geo_types::MultiLineString;
use serde::{Deserialize, Serialize};
use svg::Document;
use tracing::debug;

use crate::errors::SketchError;
use crate::geo_types::svg::ToSvg;
use crate::sketch::canvas::CanvasSize;

/// Pixels per millimetre at 96 DPI.
pub const PX_PER_MM: f64 = 3.7795275591;

/// Pen used for a set of lines. Always an open, unfilled stroke.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Stroke {
    /// mm
    pub width: f64,
    pub color: CssColor,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 0.20,
            color: CssColor::from_rgba8(0, 0, 0, 255),
        }
    }
}

impl Stroke {
    pub fn with_width(width: f64) -> Stroke {
        Stroke {
            width,
            ..Stroke::default()
        }
    }

    pub fn width_px(&self) -> f64 {
        self.width * PX_PER_MM
    }

    /// A pen needs a finite, positive width.
    pub fn validate(&self) -> Result<(), SketchError> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(SketchError::SvgGenerationError(format!(
                "Invalid stroke width {}",
                self.width
            )));
        }
        Ok(())
    }
}

/// The drawing surface. It is cleared and rebuilt on every draw, never patched.
pub trait Renderer {
    fn clear(&mut self);

    fn render(&mut self, lines: &MultiLineString<f64>, stroke: &Stroke) -> Result<(), SketchError>;
}

/// Collects rendered lines into an SVG document sized to the canvas.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    width: f64,
    height: f64,
    layers: usize,
    document: Document,
}

impl SvgRenderer {
    pub fn new(canvas: &CanvasSize) -> SvgRenderer {
        SvgRenderer {
            width: canvas.width,
            height: canvas.height,
            layers: 0,
            document: SvgRenderer::blank(canvas.width, canvas.height),
        }
    }

    fn blank(width: f64, height: f64) -> Document {
        Document::new()
            .set("viewBox", (0.0, 0.0, width, height))
            .set("width", width)
            .set("height", height)
    }

    pub fn layers(&self) -> usize {
        self.layers
    }

    /// Standalone SVG file contents, preface included.
    pub fn to_svg_string(&self) -> String {
        format!(
            "<?xml version=\"1.0\" standalone=\"no\"?>\r\n{}",
            self.document
        )
    }

    pub fn save<P: AsRef<FilePath>>(&self, path: P) -> Result<(), SketchError> {
        std::fs::write(path, self.to_svg_string())?;
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn clear(&mut self) {
        self.layers = 0;
        self.document = SvgRenderer::blank(self.width, self.height);
    }

    fn render(&mut self, lines: &MultiLineString<f64>, stroke: &Stroke) -> Result<(), SketchError> {
        stroke.validate()?;
        if lines.0.is_empty() {
            debug!("nothing to render");
            return Ok(());
        }
        let path = lines
            .to_path()
            .set("id", format!("lines-{}", self.layers))
            .set("fill", "none")
            .set("stroke", stroke.color.to_hex_string())
            .set("stroke-width", stroke.width_px())
            .set("stroke-linejoin", "round")
            .set("stroke-linecap", "round");
        self.document = self.document.clone().add(path);
        self.layers += 1;
        debug!(layers = self.layers, polylines = lines.0.len(), "rendered lines");
        Ok(())
    }
}
