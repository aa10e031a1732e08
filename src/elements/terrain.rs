//! Mountain silhouettes: a midpoint-displacement heightmap, drawn row by row
//! from the back with everything below the running horizon hidden.
use geo_types::{coord, Coord, LineString, MultiLineString};
use serde::{Deserialize, Serialize};

use crate::elements::LineGenerator;
use crate::errors::SketchError;
use crate::util::RandomGenerator;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TerrainConfig {
    /// Grid side, power of two. 2..=1024
    pub terrain_size: usize,
    /// First pass perturbation, halved every pass. 0..=500
    pub randomness: f64,
    /// Flat (zero height) cells only show on rows divisible by this. 1..=100
    pub surface_divisor: f64,
    /// Skew of the projection. 0..=1000
    pub angle: f64,
    /// Pen width in mm.
    pub line_width: f64,
    pub seed: i64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        TerrainConfig {
            terrain_size: 128,
            randomness: 30.0,
            surface_divisor: 4.0,
            angle: 200.0,
            line_width: 0.20,
            seed: 1234,
        }
    }
}

/// Square grid of `(size + 1)^2` heights, stored single precision.
#[derive(Debug, Clone, PartialEq)]
pub struct Heightmap {
    size: usize,
    cells: Vec<f32>,
}

impl Heightmap {
    pub fn flat(size: usize) -> Heightmap {
        Heightmap {
            size,
            cells: vec![0.0; (size + 1) * (size + 1)],
        }
    }

    /// Rows are indexed `[a][b]`; every row must hold `size + 1` values.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Heightmap, SketchError> {
        let size = rows.len().saturating_sub(1);
        if rows.is_empty() {
            return Err(SketchError::InvalidTerrainSize(0));
        }
        if rows.iter().any(|row| row.len() != size + 1) {
            return Err(SketchError::ConfigError(format!(
                "Heightmap rows must all hold {} values",
                size + 1
            )));
        }
        Ok(Heightmap {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, a: usize, b: usize) -> f64 {
        self.cells[a * (self.size + 1) + b] as f64
    }

    pub fn set(&mut self, a: usize, b: usize, value: f64) {
        self.cells[a * (self.size + 1) + b] = value as f32;
    }

    pub fn clamp_negative(&mut self) {
        for cell in self.cells.iter_mut() {
            if *cell < 0.0 {
                *cell = 0.0;
            }
        }
    }
}

/// Pen that only keeps strokes long enough to draw.
#[derive(Debug, Default)]
struct Pen {
    lines: Vec<LineString<f64>>,
    current: Vec<Coord<f64>>,
}

impl Pen {
    fn down(&mut self, at: Coord<f64>) {
        self.current.push(at);
    }

    fn up(&mut self) {
        if self.current.len() >= 2 {
            self.lines.push(LineString::new(std::mem::take(&mut self.current)));
        } else {
            self.current.clear();
        }
    }

    fn finish(mut self) -> MultiLineString<f64> {
        self.up();
        MultiLineString::new(self.lines)
    }
}

/// Walks the heightmap from the back row forward. Column `z` of row `w` is
/// visible when it rises above everything already drawn in that column, and
/// it isn't a flat cell on a row between `surface_divisor` steps.
pub fn extract_horizon(heightmap: &Heightmap, angle: f64, surface_divisor: f64) -> MultiLineString<f64> {
    let size = heightmap.size();
    let r = angle / size as f64;
    let mut horizon = vec![0.0f32; size + 1];
    let mut pen = Pen::default();
    for w in 0..=size {
        for z in 0..=size {
            let height = heightmap.get(z, w);
            let xe = r * z as f64;
            let ye = r * 0.66 * w as f64 + height;
            let ratio = w as f64 / surface_divisor;
            let gap = height == 0.0 && ratio != ratio.trunc();
            if ye <= horizon[z] as f64 || gap {
                pen.up();
            } else {
                pen.down(coord! {x: -100.0 + xe, y: 100.0 - ye});
                horizon[z] = ye as f32;
            }
        }
        pen.up();
    }
    pen.finish()
}

#[derive(Debug)]
pub struct TerrainLineGenerator {
    config: TerrainConfig,
    rng: RandomGenerator,
}

impl TerrainLineGenerator {
    pub fn new(config: TerrainConfig) -> Result<TerrainLineGenerator, SketchError> {
        if config.terrain_size < 2 || !config.terrain_size.is_power_of_two() {
            return Err(SketchError::InvalidTerrainSize(config.terrain_size));
        }
        let rng = RandomGenerator::new(config.seed)?;
        Ok(TerrainLineGenerator { config, rng })
    }

    /// Midpoint displacement: every pass fills the edge midpoints between known
    /// points, then the centres, with step and randomness halving each pass.
    pub fn heightmap(&mut self) -> Heightmap {
        let size = self.config.terrain_size;
        let mut terrain = Heightmap::flat(size);
        let mut randomness = self.config.randomness;
        let mut t = 1;
        let mut x = size / 2;
        for _pass in 0..size.ilog2() {
            let mut v = 0;
            while v <= size {
                for n in (1..=t).step_by(2) {
                    let edge = (terrain.get((n - 1) * x, v) + terrain.get((n + 1) * x, v)) / 2.0
                        + self.perturbation(randomness);
                    terrain.set(n * x, v, edge);
                    let edge = (terrain.get(v, (n - 1) * x) + terrain.get(v, (n + 1) * x)) / 2.0
                        + self.perturbation(randomness);
                    terrain.set(v, n * x, edge);
                }
                v += 2 * x;
            }
            for n in (1..=t).step_by(2) {
                for m in (1..=t).step_by(2) {
                    let centre = 0.25
                        * (terrain.get(n * x + x, m * x)
                            + terrain.get(n * x - x, m * x)
                            + terrain.get(n * x, m * x + x)
                            + terrain.get(n * x, m * x - x))
                        + self.perturbation(randomness);
                    terrain.set(n * x, m * x, centre);
                }
            }
            t = 2 * t + 1;
            x /= 2;
            randomness /= 2.0;
        }
        terrain.clamp_negative();
        terrain
    }

    /// Plus or minus `randomness`.
    fn perturbation(&mut self, randomness: f64) -> f64 {
        randomness * (-1.0 + 2.0 * self.rng.next_int(0.0, 1.0))
    }
}

impl LineGenerator for TerrainLineGenerator {
    fn lines(&mut self, _canvas_width: f64, _canvas_height: f64) -> MultiLineString<f64> {
        let terrain = self.heightmap();
        extract_horizon(&terrain, self.config.angle, self.config.surface_divisor)
    }
}

#[cfg(test)]
pub mod test {
    use super::*;

    fn config(terrain_size: usize) -> TerrainConfig {
        TerrainConfig {
            terrain_size,
            ..TerrainConfig::default()
        }
    }

    #[test]
    fn test_bad_sizes() {
        for size in [0usize, 1, 3, 100] {
            assert!(matches!(
                TerrainLineGenerator::new(config(size)),
                Err(SketchError::InvalidTerrainSize(s)) if s == size
            ));
        }
        assert!(TerrainLineGenerator::new(config(64)).is_ok());
    }

    #[test]
    fn test_heightmap_nonnegative_and_deterministic() {
        let mut a = TerrainLineGenerator::new(config(32)).unwrap();
        let mut b = TerrainLineGenerator::new(config(32)).unwrap();
        let ha = a.heightmap();
        assert_eq!(ha, b.heightmap());
        assert_eq!(ha.size(), 32);
        for i in 0..=32 {
            for j in 0..=32 {
                assert!(ha.get(i, j) >= 0.0);
            }
        }
    }

    #[test]
    fn test_heightmap_draw_count() {
        // size 2: one pass, 2 edge columns * 2 edges + 1 centre = 5 draws
        let mut generator = TerrainLineGenerator::new(config(2)).unwrap();
        generator.heightmap();
        let mut rng = RandomGenerator::new(1234).unwrap();
        for _ in 0..5 {
            rng.next_double();
        }
        assert_eq!(generator.rng.seed(), rng.seed());
    }

    #[test]
    fn test_heightmap_first_pass() {
        let mut generator = TerrainLineGenerator::new(TerrainConfig {
            terrain_size: 2,
            randomness: 10.0,
            ..TerrainConfig::default()
        })
        .unwrap();
        let mut rng = RandomGenerator::new(1234).unwrap();
        let first = 10.0 * (-1.0 + 2.0 * rng.next_int(0.0, 1.0));
        let terrain = generator.heightmap();
        // corners stay flat, the first edge point only averages zeros
        assert_eq!(terrain.get(0, 0), 0.0);
        assert_eq!(terrain.get(1, 0), first.max(0.0));
    }

    #[test]
    fn test_single_ridge_one_stroke() {
        // front row rises steadily, everything behind it is lower
        let mut rows = vec![];
        for z in 0..=4 {
            let mut row = vec![0.5f32; 5];
            row[0] = 1.0 + z as f32;
            rows.push(row);
        }
        let terrain = Heightmap::from_rows(rows).unwrap();
        let lines = extract_horizon(&terrain, 0.0, 1.0);
        assert_eq!(lines.0.len(), 1);
        assert_eq!(lines.0[0].0.len(), 5);
        assert_eq!(lines.0[0].0[0], coord! {x: -100.0, y: 99.0});
        assert_eq!(lines.0[0].0[4], coord! {x: -100.0, y: 95.0});
    }

    #[test]
    fn test_occlusion_breaks_stroke() {
        // row 1 is taller except in column 2, which splits it in two
        let rows = (0..=4)
            .map(|z| {
                let mut column = vec![1.0f32, 5.0, 0.5, 0.5, 0.5];
                if z == 2 {
                    column[1] = 0.5;
                }
                column
            })
            .collect();
        let terrain = Heightmap::from_rows(rows).unwrap();
        let lines = extract_horizon(&terrain, 0.0, 1.0);
        assert_eq!(lines.0.len(), 3);
        assert_eq!(lines.0[0].0.len(), 5);
        assert_eq!(lines.0[1].0.len(), 2);
        assert_eq!(lines.0[2].0.len(), 2);
    }

    #[test]
    fn test_flat_gap_rows() {
        // all flat: only rows divisible by the divisor may draw at all
        let terrain = Heightmap::flat(4);
        let lines = extract_horizon(&terrain, 4.0, 2.0);
        // r = 1, row w sits at 0.66 * w; row 0 is at the horizon and stays hidden
        assert_eq!(lines.0.len(), 2);
        assert!(lines.0.iter().all(|l| l.0.len() == 5));
        assert!((lines.0[0].0[0].y - (100.0 - 0.66 * 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_generated_lines_have_two_points() {
        let mut generator = TerrainLineGenerator::new(config(64)).unwrap();
        let lines = generator.lines(100.0, 100.0);
        assert!(!lines.0.is_empty());
        assert!(lines.0.iter().all(|l| l.0.len() >= 2));
    }
}
