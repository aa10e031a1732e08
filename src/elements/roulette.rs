use std::f64::consts::PI;

use geo_types::{coord, Coord, LineString, MultiLineString};
use serde::{Deserialize, Serialize};

use crate::elements::LineGenerator;

/// The roulette families we know how to trace. The numeric selector is what
/// parameter panels and old sketch files hand us.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeType {
    Hypotrochoid,
    Epitrochoid,
}

impl ShapeType {
    const LOOKUP: [(u32, ShapeType); 2] = [
        (0, ShapeType::Hypotrochoid),
        (1, ShapeType::Epitrochoid),
    ];

    pub fn from_selector(selector: u32) -> Option<ShapeType> {
        Self::LOOKUP
            .iter()
            .find(|(key, _)| *key == selector)
            .map(|(_, shape)| *shape)
    }

    pub fn selector(&self) -> u32 {
        match self {
            ShapeType::Hypotrochoid => 0,
            ShapeType::Epitrochoid => 1,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouletteConfig {
    /// Fixed circle. 0.001..=10
    pub radius_one: f64,
    /// Rolling circle. 0.001..=10
    pub radius_two: f64,
    /// Pen distance from the rolling circle's centre. 0.001..=100
    pub distance: f64,
    /// Samples per unit of t. 2..=500
    pub point_count: u32,
    /// How many units of t to trace. 1..=1000
    pub segment_multiplier: u32,
    /// Pen width in mm.
    pub line_width: f64,
    /// Only kept so every sketch can be redrawn from (params, seed); roulettes
    /// draw nothing random.
    pub seed: i64,
    /// See [`ShapeType::from_selector`]. Unknown values draw nothing.
    pub shape_type: u32,
}

impl Default for RouletteConfig {
    fn default() -> Self {
        RouletteConfig {
            radius_one: 0.001,
            radius_two: 0.1,
            distance: 0.001,
            point_count: 6,
            segment_multiplier: 100,
            line_width: 0.20,
            seed: 1234,
            shape_type: 0,
        }
    }
}

/// A point on a circle rolling inside (hypo) or outside (epi) a fixed one.
#[derive(Debug, Clone, PartialEq)]
pub enum RouletteCurve {
    Hypotrochoid {
        radius_two: f64,
        distance: f64,
        radius_difference: f64,
    },
    Epitrochoid {
        radius_two: f64,
        distance: f64,
        radius_sum: f64,
    },
}

impl RouletteCurve {
    pub fn new(shape: ShapeType, radius_one: f64, radius_two: f64, distance: f64) -> RouletteCurve {
        match shape {
            ShapeType::Hypotrochoid => RouletteCurve::Hypotrochoid {
                radius_two,
                distance,
                radius_difference: (radius_one - radius_two).abs(),
            },
            ShapeType::Epitrochoid => RouletteCurve::Epitrochoid {
                radius_two,
                distance,
                radius_sum: radius_one + radius_two,
            },
        }
    }

    /// One full turn of the fixed circle per unit of t.
    pub fn point_at(&self, t: f64) -> Coord<f64> {
        let angle = (PI / 180.0) * t * 360.0;
        match self {
            RouletteCurve::Hypotrochoid {
                radius_two,
                distance,
                radius_difference: d,
            } => coord! {
                x: d * angle.cos() + distance * (d * angle / radius_two).cos(),
                y: d * angle.sin() - distance * (d * angle / radius_two).sin(),
            },
            RouletteCurve::Epitrochoid {
                radius_two,
                distance,
                radius_sum: s,
            } => coord! {
                x: s * angle.cos() - distance * (s * angle / radius_two).cos(),
                y: s * angle.sin() - distance * (s * angle / radius_two).sin(),
            },
        }
    }

    /// `multiplier * n + 1` samples at `t = i / n`.
    pub fn points(&self, n: u32, multiplier: u32) -> Vec<Coord<f64>> {
        let count = multiplier as usize * n as usize;
        (0..=count)
            .map(|i| self.point_at(i as f64 / n as f64))
            .collect()
    }
}

/// Traces one continuous roulette path.
#[derive(Debug, Clone)]
pub struct RouletteCurveGenerator {
    curve: RouletteCurve,
    point_count: u32,
    segment_multiplier: u32,
}

impl RouletteCurveGenerator {
    /// `None` when the selector names no curve family: the draw is skipped.
    pub fn new(config: &RouletteConfig) -> Option<RouletteCurveGenerator> {
        let shape = ShapeType::from_selector(config.shape_type)?;
        Some(RouletteCurveGenerator {
            curve: RouletteCurve::new(
                shape,
                config.radius_one,
                config.radius_two,
                config.distance,
            ),
            point_count: config.point_count,
            segment_multiplier: config.segment_multiplier,
        })
    }
}

impl LineGenerator for RouletteCurveGenerator {
    fn lines(&mut self, _canvas_width: f64, _canvas_height: f64) -> MultiLineString<f64> {
        MultiLineString::new(vec![LineString::new(
            self.curve.points(self.point_count, self.segment_multiplier),
        )])
    }
}

#[cfg(test)]
pub mod test {
    use super::*;

    #[test]
    fn test_selector_lookup() {
        assert_eq!(ShapeType::from_selector(0), Some(ShapeType::Hypotrochoid));
        assert_eq!(ShapeType::from_selector(1), Some(ShapeType::Epitrochoid));
        assert_eq!(ShapeType::from_selector(7), None);
        assert_eq!(ShapeType::Epitrochoid.selector(), 1);
    }

    #[test]
    fn test_hypotrochoid_origin() {
        let curve = RouletteCurve::new(ShapeType::Hypotrochoid, 5.0, 3.0, 5.0);
        let p = curve.point_at(0.0);
        assert_eq!(p.x, 2.0 + 5.0);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn test_epitrochoid_origin() {
        let curve = RouletteCurve::new(ShapeType::Epitrochoid, 3.0, 1.0, 0.5);
        let p = curve.point_at(0.0);
        assert_eq!(p.x, 4.0 - 0.5);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn test_quarter_turn() {
        // d = 2, distance = 0 collapses to a plain circle
        let curve = RouletteCurve::new(ShapeType::Hypotrochoid, 5.0, 3.0, 0.0);
        let p = curve.point_at(0.25);
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_count() {
        let curve = RouletteCurve::new(ShapeType::Epitrochoid, 3.0, 1.0, 0.5);
        assert_eq!(curve.points(6, 100).len(), 601);
        assert_eq!(curve.points(1, 1).len(), 2);
    }

    #[test]
    fn test_single_polyline() {
        let config = RouletteConfig {
            radius_one: 5.0,
            radius_two: 3.0,
            distance: 5.0,
            point_count: 10,
            segment_multiplier: 3,
            shape_type: 0,
            ..RouletteConfig::default()
        };
        let mut generator = RouletteCurveGenerator::new(&config).unwrap();
        let lines = generator.lines(100.0, 100.0);
        assert_eq!(lines.0.len(), 1);
        assert_eq!(lines.0[0].0.len(), 31);
        // closes after three turns of t for these radii
        let first = lines.0[0].0[0];
        let last = lines.0[0].0[30];
        assert!((first.x - last.x).abs() < 1e-9);
        assert!((first.y - last.y).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_selector_skips() {
        let config = RouletteConfig {
            shape_type: 5,
            ..RouletteConfig::default()
        };
        assert!(RouletteCurveGenerator::new(&config).is_none());
    }
}
