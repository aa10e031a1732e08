use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use geo_types::{coord, Coord, LineString, MultiLineString};
use serde::{Deserialize, Serialize};

use crate::elements::LineGenerator;
use crate::errors::SketchError;
use crate::util::RandomGenerator;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
    Both,
}

impl FromStr for Orientation {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            "both" => Ok(Orientation::Both),
            other => Err(SketchError::UnknownOrientation(other.to_string())),
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
            Orientation::Both => write!(f, "both"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineGridConfig {
    /// Grid divisions; `line_count + 1` lines are drawn. 1..=500
    pub line_count: u32,
    /// Every line gets `2 * point_count + 2` points. 1..=500
    pub point_count: u32,
    /// Pen width in mm. 0.005..=1.0
    pub line_width: f64,
    /// Amplitude of the perpendicular wobble, in unscaled units. 0..=100
    pub noise_scale: f64,
    pub seed: i64,
    pub orientation: Orientation,
}

impl Default for LineGridConfig {
    fn default() -> Self {
        LineGridConfig {
            line_count: 20,
            point_count: 50,
            line_width: 0.20,
            noise_scale: 2.0,
            seed: 1234,
            orientation: Orientation::Horizontal,
        }
    }
}

/// Horizontal and/or vertical lines, with every odd point pushed sideways by
/// a sine of a normal sample.
#[derive(Debug)]
pub struct LineGridGenerator {
    config: LineGridConfig,
    rng: RandomGenerator,
}

impl LineGridGenerator {
    pub fn new(config: LineGridConfig) -> Result<LineGridGenerator, SketchError> {
        let rng = RandomGenerator::new(config.seed)?;
        Ok(LineGridGenerator { config, rng })
    }

    /// Build straight from the orientation name, failing on names we don't know.
    pub fn with_orientation_name(
        config: LineGridConfig,
        orientation: &str,
    ) -> Result<LineGridGenerator, SketchError> {
        let orientation = orientation.parse::<Orientation>()?;
        LineGridGenerator::new(LineGridConfig {
            orientation,
            ..config
        })
    }

    fn points_per_line(&self) -> usize {
        2 * self.config.point_count as usize + 2
    }

    fn noise(&mut self, point_index: usize, increment: f64) -> f64 {
        self.config.noise_scale * (point_index as f64 * increment + self.rng.random_normal()).sin()
    }

    fn horizontal_lines(&mut self, increment: f64, dx: f64, dy: f64) -> Vec<LineString<f64>> {
        let mut lines = Vec::with_capacity(self.config.line_count as usize + 1);
        for line_index in 0..=self.config.line_count as usize {
            let base = line_index as f64 * dy;
            let mut points: Vec<Coord<f64>> = Vec::with_capacity(self.points_per_line());
            for point_index in 0..self.points_per_line() {
                let x = point_index as f64 * dx;
                if point_index % 2 == 0 {
                    points.push(coord! {x: x, y: base});
                } else {
                    points.push(coord! {x: x, y: base + self.noise(point_index, increment)});
                }
            }
            lines.push(LineString::new(points));
        }
        lines
    }

    fn vertical_lines(&mut self, increment: f64, dx: f64, dy: f64) -> Vec<LineString<f64>> {
        let mut lines = Vec::with_capacity(self.config.line_count as usize + 1);
        for line_index in 0..=self.config.line_count as usize {
            let base = line_index as f64 * dx;
            let mut points: Vec<Coord<f64>> = Vec::with_capacity(self.points_per_line());
            for point_index in 0..self.points_per_line() {
                let y = point_index as f64 * dy;
                if point_index % 2 == 0 {
                    points.push(coord! {x: base, y: y});
                } else {
                    points.push(coord! {x: base + self.noise(point_index, increment), y: y});
                }
            }
            lines.push(LineString::new(points));
        }
        lines
    }
}

impl LineGenerator for LineGridGenerator {
    fn lines(&mut self, canvas_width: f64, canvas_height: f64) -> MultiLineString<f64> {
        let line_count = self.config.line_count as f64;
        let point_count = self.config.point_count as f64;
        let increment = 2.0 * point_count / 360.0;
        match self.config.orientation {
            Orientation::Horizontal => MultiLineString::new(self.horizontal_lines(
                increment,
                canvas_width / (2.0 * point_count),
                canvas_height / line_count,
            )),
            Orientation::Vertical => MultiLineString::new(self.vertical_lines(
                increment,
                canvas_width / line_count,
                canvas_height / (2.0 * point_count),
            )),
            Orientation::Both => {
                // Vertical first: the noise sequence depends on it.
                let mut lines = self.vertical_lines(
                    increment,
                    canvas_width / line_count,
                    canvas_height / (2.0 * point_count + 1.0),
                );
                lines.extend(self.horizontal_lines(
                    increment,
                    canvas_width / (2.0 * point_count + 1.0),
                    canvas_height / line_count,
                ));
                MultiLineString::new(lines)
            }
        }
    }
}
