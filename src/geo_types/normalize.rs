use geo::MapCoords;
use geo_types::{coord, MultiLineString};

use crate::geo_types::BoundingBox;

/// Min-max rescale of a single coordinate into `[a, b]`.
///
/// A degenerate source range collapses to 0, NOT to the middle of `[a, b]`.
/// Existing sketches were exported that way.
pub fn rescale_coord(value: f64, min: f64, max: f64, a: f64, b: f64) -> f64 {
    if max - min == 0.0 {
        0.0
    } else {
        a + (value - min) * (b - a) / (max - min)
    }
}

/// Fit generated geometry into a padded canvas, each axis stretched on its own.
pub trait Rescale {
    /// Returns a copy with the same lines and point counts, coordinates moved
    /// into `[padding, width - padding] x [padding, height - padding]`.
    fn rescale(&self, width: f64, height: f64, padding: f64) -> Self;
}

impl Rescale for MultiLineString<f64> {
    fn rescale(&self, width: f64, height: f64, padding: f64) -> Self {
        let bounds = match BoundingBox::of(self) {
            Some(bounds) => bounds,
            None => return MultiLineString::new(vec![]),
        };
        self.map_coords(|c| {
            coord! {
                x: rescale_coord(c.x, bounds.x_min, bounds.x_max, padding, width - padding),
                y: rescale_coord(c.y, bounds.y_min, bounds.y_max, padding, height - padding),
            }
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo_types::LineString;
    use proptest::prelude::*;

    fn mls(lines: Vec<Vec<(f64, f64)>>) -> MultiLineString<f64> {
        MultiLineString::new(lines.into_iter().map(LineString::from).collect())
    }

    #[test]
    fn test_exact_interpolation() {
        let lines = mls(vec![vec![(0.0, 0.0), (10.0, 5.0), (5.0, 2.5)]]);
        let out = lines.rescale(100.0, 50.0, 0.0);
        assert_eq!(out.0[0].0[0], coord! {x: 0.0, y: 0.0});
        assert_eq!(out.0[0].0[1], coord! {x: 100.0, y: 50.0});
        assert_eq!(out.0[0].0[2], coord! {x: 50.0, y: 25.0});
    }

    #[test]
    fn test_padding() {
        let lines = mls(vec![vec![(-1.0, -1.0), (1.0, 1.0)]]);
        let out = lines.rescale(100.0, 100.0, 10.0);
        assert_eq!(out.0[0].0[0], coord! {x: 10.0, y: 10.0});
        assert_eq!(out.0[0].0[1], coord! {x: 90.0, y: 90.0});
    }

    #[test]
    fn test_degenerate_axis_goes_to_zero() {
        let lines = mls(vec![
            vec![(7.0, 0.0), (7.0, 3.0)],
            vec![(7.0, 1.0), (7.0, 9.0)],
        ]);
        for width in [10.0, 500.0, 1234.5] {
            let out = lines.rescale(width, 90.0, 5.0);
            assert!(out.0.iter().flat_map(|l| l.0.iter()).all(|c| c.x == 0.0));
            assert_eq!(out.0[1].0[1].y, 85.0);
        }
    }

    #[test]
    fn test_empty() {
        let out = MultiLineString::<f64>::new(vec![]).rescale(100.0, 100.0, 0.0);
        assert!(out.0.is_empty());
    }

    #[test]
    fn test_structure_kept() {
        let lines = mls(vec![
            vec![(0.0, 0.0), (1.0, 2.0), (3.0, 1.0)],
            vec![(4.0, 4.0), (2.0, 2.0)],
        ]);
        let out = lines.rescale(10.0, 10.0, 1.0);
        assert_eq!(out.0.len(), 2);
        assert_eq!(out.0[0].0.len(), 3);
        assert_eq!(out.0[1].0.len(), 2);
    }

    proptest! {
        #[test]
        fn stays_inside_padded_canvas(
            points in prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 2..50),
            padding in 0f64..40.0,
        ) {
            let out = mls(vec![points]).rescale(200.0, 100.0, padding);
            for c in out.0[0].0.iter() {
                prop_assert!(c.x == 0.0 || (c.x >= padding - 1e-9 && c.x <= 200.0 - padding + 1e-9));
                prop_assert!(c.y == 0.0 || (c.y >= padding - 1e-9 && c.y <= 100.0 - padding + 1e-9));
            }
        }
    }
}
