//! A sketch is a generator config plus a seed. Drawing one builds a fresh
//! generator, fits its lines to the canvas and hands them to a
//! [`Renderer`]. Nothing survives between draws except the config itself.
//!
//! # Example
//!
//! ```rust
//! use plotty_sketches::sketch::{SketchConfig, canvas::CanvasSize};
//! use plotty_sketches::elements::{LineGridConfig, Orientation};
//! use plotty_sketches::render::SvgRenderer;
//!
//! let sketch = SketchConfig::LineGrid(LineGridConfig {
//!     line_count: 10,
//!     point_count: 40,
//!     orientation: Orientation::Both,
//!     ..LineGridConfig::default()
//! });
//! let canvas = CanvasSize { width: 400.0, height: 400.0, padding: 20.0 };
//! let mut renderer = SvgRenderer::new(&canvas);
//! let lines = sketch.draw(&canvas, &mut renderer).unwrap().unwrap();
//! assert_eq!(lines.0.len(), 22);
//! ```
use std::path::Path;

use geo_types::MultiLineString;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::elements::{
    LineGenerator, LineGridConfig, LineGridGenerator, RouletteConfig, RouletteCurveGenerator,
    TerrainConfig, TerrainLineGenerator,
};
use crate::errors::SketchError;
use crate::geo_types::normalize::Rescale;
use crate::geo_types::BoundingBox;
use crate::render::{CssColor, Renderer, Stroke};
use crate::util::random_seed;

pub mod canvas;
pub mod params;

use canvas::{CanvasLayout, CanvasSize};
use params::ParamRange;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum SketchConfig {
    LineGrid(LineGridConfig),
    Roulette(RouletteConfig),
    Terrain(TerrainConfig),
}

impl SketchConfig {
    pub fn name(&self) -> &'static str {
        match self {
            SketchConfig::LineGrid(_) => "line-grid",
            SketchConfig::Roulette(_) => "roulette",
            SketchConfig::Terrain(_) => "terrain",
        }
    }

    /// Default config for a sketch family, by [`SketchConfig::name`].
    pub fn default_for(name: &str) -> Option<SketchConfig> {
        match name {
            "line-grid" => Some(SketchConfig::LineGrid(LineGridConfig::default())),
            "roulette" => Some(SketchConfig::Roulette(RouletteConfig::default())),
            "terrain" => Some(SketchConfig::Terrain(TerrainConfig::default())),
            _ => None,
        }
    }

    pub fn seed(&self) -> i64 {
        match self {
            SketchConfig::LineGrid(c) => c.seed,
            SketchConfig::Roulette(c) => c.seed,
            SketchConfig::Terrain(c) => c.seed,
        }
    }

    pub fn line_width(&self) -> f64 {
        match self {
            SketchConfig::LineGrid(c) => c.line_width,
            SketchConfig::Roulette(c) => c.line_width,
            SketchConfig::Terrain(c) => c.line_width,
        }
    }

    pub fn with_seed(&self, seed: i64) -> SketchConfig {
        let mut config = self.clone();
        match &mut config {
            SketchConfig::LineGrid(c) => c.seed = seed,
            SketchConfig::Roulette(c) => c.seed = seed,
            SketchConfig::Terrain(c) => c.seed = seed,
        }
        config
    }

    /// Same parameters, new seed.
    pub fn randomized(&self) -> SketchConfig {
        self.with_seed(random_seed())
    }

    /// Declared ranges for this family's fields, in the order of
    /// [`SketchConfig::param_values`].
    pub fn param_ranges(&self) -> &'static [ParamRange] {
        match self {
            SketchConfig::LineGrid(_) => &params::LINE_GRID,
            SketchConfig::Roulette(_) => &params::ROULETTE,
            SketchConfig::Terrain(_) => &params::TERRAIN,
        }
    }

    pub fn param_values(&self) -> Vec<f64> {
        match self {
            SketchConfig::LineGrid(c) => vec![
                c.seed as f64,
                c.line_width,
                c.line_count as f64,
                c.point_count as f64,
                c.noise_scale,
            ],
            SketchConfig::Roulette(c) => vec![
                c.seed as f64,
                c.line_width,
                c.radius_one,
                c.radius_two,
                c.distance,
                c.point_count as f64,
                c.segment_multiplier as f64,
            ],
            SketchConfig::Terrain(c) => vec![
                c.seed as f64,
                c.line_width,
                c.terrain_size as f64,
                c.randomness,
                c.surface_divisor,
                c.angle,
            ],
        }
    }

    /// Checks every field against [`params`]. Generators trust their config,
    /// so call this first.
    pub fn validate(&self) -> Result<(), SketchError> {
        let checks: Vec<(ParamRange, f64)> = self
            .param_ranges()
            .iter()
            .copied()
            .zip(self.param_values())
            .collect();
        params::check_all(&checks)
    }

    /// A fresh generator with its own random stream. `None` if the config
    /// names a curve family we don't have.
    pub fn generator(&self) -> Result<Option<Box<dyn LineGenerator>>, SketchError> {
        let generator: Box<dyn LineGenerator> = match self {
            SketchConfig::LineGrid(c) => Box::new(LineGridGenerator::new(c.clone())?),
            SketchConfig::Roulette(c) => match RouletteCurveGenerator::new(c) {
                Some(generator) => Box::new(generator),
                None => {
                    warn!(shape_type = c.shape_type, "no curve of this type exists, skipping draw");
                    return Ok(None);
                }
            },
            SketchConfig::Terrain(c) => Box::new(TerrainLineGenerator::new(c.clone())?),
        };
        Ok(Some(generator))
    }

    /// Raw lines, before rescaling.
    pub fn generate(
        &self,
        canvas_width: f64,
        canvas_height: f64,
    ) -> Result<Option<MultiLineString<f64>>, SketchError> {
        let mut generator = match self.generator()? {
            Some(generator) => generator,
            None => return Ok(None),
        };
        let lines = generator.lines(canvas_width, canvas_height);
        debug!(
            sketch = self.name(),
            seed = self.seed(),
            polylines = lines.0.len(),
            "generated lines"
        );
        Ok(Some(lines))
    }

    /// One full draw cycle with a black pen of the configured width.
    pub fn draw<R: Renderer>(
        &self,
        canvas: &CanvasSize,
        renderer: &mut R,
    ) -> Result<Option<MultiLineString<f64>>, SketchError> {
        self.draw_stroked(canvas, &Stroke::with_width(self.line_width()), renderer)
    }

    /// Validate, generate, rescale, then replace whatever the renderer held.
    /// Nothing is cleared unless the whole draw can go through. Returns the
    /// lines as drawn, or `None` when the draw was skipped.
    pub fn draw_stroked<R: Renderer>(
        &self,
        canvas: &CanvasSize,
        stroke: &Stroke,
        renderer: &mut R,
    ) -> Result<Option<MultiLineString<f64>>, SketchError> {
        self.validate()?;
        canvas.validate()?;
        stroke.validate()?;
        let raw = match self.generate(canvas.width, canvas.height)? {
            Some(raw) => raw,
            None => return Ok(None),
        };
        if let Some(bounds) = BoundingBox::of(&raw) {
            debug!(
                x_min = bounds.x_min,
                x_max = bounds.x_max,
                y_min = bounds.y_min,
                y_max = bounds.y_max,
                width = bounds.width(),
                height = bounds.height(),
                "raw bounds"
            );
        }
        let lines = raw.rescale(canvas.width, canvas.height, canvas.padding);
        renderer.clear();
        renderer.render(&lines, stroke)?;
        info!(
            sketch = self.name(),
            seed = self.seed(),
            polylines = lines.0.len(),
            points = lines.0.iter().map(|l| l.0.len()).sum::<usize>(),
            "drew sketch"
        );
        Ok(Some(lines))
    }
}

/// Everything needed to redraw a piece: where it goes, what it is, and the pen colour.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SketchFile {
    #[serde(default)]
    pub canvas: CanvasLayout,
    pub sketch: SketchConfig,
    #[serde(default)]
    pub color: Option<CssColor>,
}

impl SketchFile {
    pub fn new(sketch: SketchConfig) -> SketchFile {
        SketchFile {
            canvas: CanvasLayout::default(),
            sketch,
            color: None,
        }
    }

    pub fn from_ron(text: &str) -> Result<SketchFile, SketchError> {
        Ok(ron::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<SketchFile, SketchError> {
        let text = std::fs::read_to_string(path)?;
        SketchFile::from_ron(&text)
    }

    pub fn to_ron(&self) -> Result<String, SketchError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    pub fn stroke(&self) -> Stroke {
        let mut stroke = Stroke::with_width(self.sketch.line_width());
        if let Some(color) = &self.color {
            stroke.color = color.clone();
        }
        stroke
    }

    pub fn draw<R: Renderer>(
        &self,
        renderer: &mut R,
    ) -> Result<Option<MultiLineString<f64>>, SketchError> {
        self.sketch
            .draw_stroked(&self.canvas.canvas(), &self.stroke(), renderer)
    }
}
