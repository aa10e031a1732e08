//! Seed-deterministic line art for pen plotters
//!
//! Each sketch family turns a handful of parameters and a seed into a set of
//! open polylines: noise-wobbled line grids, spirograph roulettes and fractal
//! mountain horizons. Lines are fitted to a canvas and written out as SVG that
//! a plotter can draw stroke for stroke. The same seed always draws the same
//! picture.
//!
//! ```rust
//! use plotty_sketches::prelude::*;
//!
//! let sketch = SketchConfig::Terrain(TerrainConfig {
//!     terrain_size: 64,
//!     ..TerrainConfig::default()
//! });
//! let canvas = CanvasSize::default();
//! let mut renderer = SvgRenderer::new(&canvas);
//! sketch.draw(&canvas, &mut renderer).unwrap();
//! assert!(renderer.to_svg_string().contains("<path"));
//! ```

/// Library error type.
pub mod errors;

/// The deterministic Lehmer random stream every sketch draws from.
pub mod util;

/// The sketch families themselves.
pub mod elements;

/// Extensions/Traits for geo_types geometry: bounds, canvas fitting and SVG
/// path conversion.
pub mod geo_types;

/// Renderers that turn fitted lines into something you can plot.
pub mod render;

/// Sketch configs, canvases and the draw cycle tying it all together.
pub mod sketch;

/// LaTeX poster sheets from a folder of exported sketches.
pub mod poster;

/// Make your life easy! Just import prelude::* and get drawing.
pub mod prelude {
    pub use crate::elements::{
        LineGenerator, LineGridConfig, LineGridGenerator, Orientation, RouletteConfig,
        RouletteCurve, RouletteCurveGenerator, ShapeType, TerrainConfig, TerrainLineGenerator,
    };
    pub use crate::errors::SketchError;
    pub use crate::geo_types::normalize::Rescale;
    pub use crate::geo_types::svg::ToSvg;
    pub use crate::geo_types::BoundingBox;
    pub use crate::poster::PosterLayout;
    pub use crate::render::{CssColor, Renderer, Stroke, SvgRenderer};
    pub use crate::sketch::canvas::{CanvasLayout, CanvasSize, PaperSize};
    pub use crate::sketch::{SketchConfig, SketchFile};
    pub use crate::util::{random_seed, RandomGenerator};
}
