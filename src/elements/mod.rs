//! Line generators. Each one owns its own [`crate::util::RandomGenerator`]
//! and spits out raw, unscaled lines in whatever units are natural to it;
//! [`crate::geo_types::normalize::Rescale`] fits them to the canvas afterwards.
use std::fmt::Debug;

use geo_types::MultiLineString;

/// Noise-wobbled horizontal/vertical line grids.
pub mod line_grid;

/// Hypotrochoids and epitrochoids, the spirograph family.
pub mod roulette;

/// Fractal heightmaps drawn as a mountain silhouette.
pub mod terrain;

pub use line_grid::{LineGridConfig, LineGridGenerator, Orientation};
pub use roulette::{RouletteConfig, RouletteCurve, RouletteCurveGenerator, ShapeType};
pub use terrain::{Heightmap, TerrainConfig, TerrainLineGenerator};

/// Anything that produces a set of open polylines for a canvas.
///
/// Generating consumes the generator's random stream, so calling `lines`
/// twice on one generator gives two different drawings. Build a fresh
/// generator per draw.
pub trait LineGenerator: Debug {
    fn lines(&mut self, canvas_width: f64, canvas_height: f64) -> MultiLineString<f64>;
}
