//! Declared ranges for every adjustable sketch parameter. Parameter panels use
//! them for sliders; [`crate::sketch::SketchConfig::validate`] uses them to
//! refuse a config before anything is generated.
use crate::errors::SketchError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParamRange {
    pub const fn new(name: &'static str, min: f64, max: f64, step: f64) -> ParamRange {
        ParamRange {
            name,
            min,
            max,
            step,
        }
    }

    /// NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn check(&self, value: f64) -> Result<(), SketchError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(SketchError::ParameterOutOfRange {
                name: self.name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

pub const SEED: ParamRange = ParamRange::new("randomSeed", 1.0, 2147483646.0, 1.0);
pub const LINE_WIDTH: ParamRange = ParamRange::new("lineWidth", 0.005, 1.0, 0.001);

pub const LINE_COUNT: ParamRange = ParamRange::new("lineCount", 1.0, 500.0, 1.0);
pub const GRID_POINT_COUNT: ParamRange = ParamRange::new("pointCount", 1.0, 500.0, 1.0);
pub const NOISE_SCALE: ParamRange = ParamRange::new("noiseScale", 0.0, 100.0, 0.01);

pub const RADIUS_ONE: ParamRange = ParamRange::new("radiusOne", 0.001, 10.0, 0.001);
pub const RADIUS_TWO: ParamRange = ParamRange::new("radiusTwo", 0.001, 10.0, 0.001);
pub const DISTANCE: ParamRange = ParamRange::new("distance", 0.001, 100.0, 0.001);
pub const CURVE_POINT_COUNT: ParamRange = ParamRange::new("pointCount", 2.0, 500.0, 1.0);
pub const SEGMENT_MULTIPLIER: ParamRange = ParamRange::new("segmentMultiplier", 1.0, 1000.0, 1.0);

pub const TERRAIN_SIZE: ParamRange = ParamRange::new("terrainSize", 2.0, 1024.0, 1.0);
pub const RANDOMNESS: ParamRange = ParamRange::new("randomness", 0.0, 500.0, 0.1);
pub const SURFACE_DIVISOR: ParamRange = ParamRange::new("surfaceDivisor", 1.0, 100.0, 1.0);
pub const ANGLE: ParamRange = ParamRange::new("angle", 0.0, 1000.0, 1.0);

pub const CANVAS_WIDTH: ParamRange = ParamRange::new("width", 100.0, 10000.0, 1.0);
pub const CANVAS_HEIGHT: ParamRange = ParamRange::new("height", 100.0, 10000.0, 1.0);
pub const CANVAS_PADDING: ParamRange = ParamRange::new("padding", 0.0, 1000.0, 1.0);

pub static LINE_GRID: [ParamRange; 5] = [SEED, LINE_WIDTH, LINE_COUNT, GRID_POINT_COUNT, NOISE_SCALE];
pub static ROULETTE: [ParamRange; 7] = [
    SEED,
    LINE_WIDTH,
    RADIUS_ONE,
    RADIUS_TWO,
    DISTANCE,
    CURVE_POINT_COUNT,
    SEGMENT_MULTIPLIER,
];
pub static TERRAIN: [ParamRange; 6] = [SEED, LINE_WIDTH, TERRAIN_SIZE, RANDOMNESS, SURFACE_DIVISOR, ANGLE];
pub static CANVAS: [ParamRange; 3] = [CANVAS_WIDTH, CANVAS_HEIGHT, CANVAS_PADDING];

/// First failing check wins.
pub fn check_all(checks: &[(ParamRange, f64)]) -> Result<(), SketchError> {
    checks.iter().try_for_each(|(range, value)| range.check(*value))
}
