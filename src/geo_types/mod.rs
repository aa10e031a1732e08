use geo::BoundingRect;
use geo_types::MultiLineString;

/// Min/max fitting of generated lines into the canvas.
pub mod normalize;

/// Trait to convert line sets into SVG path data.
pub mod svg;

/// Axis-aligned extents of a line set. Always recomputed from the lines,
/// never stored alongside them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl BoundingBox {
    /// `None` when there is nothing to measure.
    pub fn of(lines: &MultiLineString<f64>) -> Option<BoundingBox> {
        let rect = lines.bounding_rect()?;
        Some(BoundingBox {
            x_min: rect.min().x,
            x_max: rect.max().x,
            y_min: rect.min().y,
            y_max: rect.max().y,
        })
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

#[cfg(test)]
mod tests {
    use super::BoundingBox;
    use geo_types::{LineString, MultiLineString};

    #[test]
    fn test_bbox() {
        let lines = MultiLineString::new(vec![
            LineString::from(vec![(1.0, -2.0), (3.0, 4.0)]),
            LineString::from(vec![(-5.0, 0.0), (0.0, 0.5)]),
        ]);
        let bbox = BoundingBox::of(&lines).unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                x_min: -5.0,
                x_max: 3.0,
                y_min: -2.0,
                y_max: 4.0
            }
        );
        assert_eq!(bbox.width(), 8.0);
        assert_eq!(bbox.height(), 6.0);
    }

    #[test]
    fn test_empty_bbox() {
        assert!(BoundingBox::of(&MultiLineString::<f64>::new(vec![])).is_none());
    }
}
