use serde::{Deserialize, Serialize};

use crate::errors::SketchError;
use crate::render::PX_PER_MM;
use crate::sketch::params;

/// Final drawing area, in pixels.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
    /// Gap between the drawing and the canvas edge.
    pub padding: f64,
}

impl CanvasSize {
    pub fn validate(&self) -> Result<(), SketchError> {
        let checks: Vec<(params::ParamRange, f64)> = params::CANVAS
            .iter()
            .copied()
            .zip([self.width, self.height, self.padding])
            .collect();
        params::check_all(&checks)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        CanvasLayout::default().canvas()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaperSize {
    A2,
    A3,
    #[default]
    A4,
    A5,
}

impl PaperSize {
    /// The N of "A-N".
    pub fn from_number(number: u32) -> Option<PaperSize> {
        match number {
            2 => Some(PaperSize::A2),
            3 => Some(PaperSize::A3),
            4 => Some(PaperSize::A4),
            5 => Some(PaperSize::A5),
            _ => None,
        }
    }

    /// Portrait (width, height) in mm.
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            PaperSize::A2 => (420.0, 594.0),
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
        }
    }
}

/// A sheet of paper cut into a `rows x cols` grid of equally sized canvases,
/// so several sketches can be plotted side by side.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CanvasLayout {
    pub paper: PaperSize,
    pub rows: u32,
    pub cols: u32,
    /// Left + right, mm.
    pub width_margin: f64,
    /// Top + bottom, mm.
    pub height_margin: f64,
    /// px
    pub padding: f64,
}

impl Default for CanvasLayout {
    fn default() -> Self {
        CanvasLayout {
            paper: PaperSize::A4,
            rows: 3,
            cols: 2,
            width_margin: 30.0,
            height_margin: 50.0,
            padding: 0.0,
        }
    }
}

impl CanvasLayout {
    pub fn canvas(&self) -> CanvasSize {
        let (paper_width, paper_height) = self.paper.dimensions();
        CanvasSize {
            width: (paper_width - self.width_margin) / self.cols as f64 * PX_PER_MM,
            height: (paper_height - self.height_margin) / self.rows as f64 * PX_PER_MM,
            padding: self.padding,
        }
    }
}
