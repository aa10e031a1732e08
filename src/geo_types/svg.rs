use geo_types::MultiLineString;
use svg::node::element::path::Data;
use svg::node::element::Path;

pub trait ToSvg {
    /// Convert the lines into SVG path data. Every line starts with a move, so
    /// nothing is ever implicitly closed.
    fn to_path_data(&self) -> Data;

    /// Unstyled path wrapping [`ToSvg::to_path_data`].
    fn to_path(&self) -> Path;
}

impl ToSvg for MultiLineString<f64> {
    fn to_path_data(&self) -> Data {
        let mut svg_data = Data::new();
        for tline in self {
            for point in tline.points().take(1) {
                svg_data = svg_data.move_to((point.x(), point.y()));
            }
            for point in tline.points().skip(1) {
                svg_data = svg_data.line_to((point.x(), point.y()));
            }
        }
        svg_data
    }

    fn to_path(&self) -> Path {
        Path::new().set("d", self.to_path_data())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo_types::LineString;
    use svg::node::element::path::Command;

    fn two_lines() -> MultiLineString<f64> {
        MultiLineString::new(vec![
            LineString::from(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]),
            LineString::from(vec![(0.0, 5.0), (5.0, 5.0)]),
        ])
    }

    #[test]
    fn test_path_data_moves_per_line() {
        let data = two_lines().to_path_data();
        let moves = data
            .iter()
            .filter(|cmd| matches!(cmd, Command::Move(..)))
            .count();
        let lines = data
            .iter()
            .filter(|cmd| matches!(cmd, Command::Line(..)))
            .count();
        assert_eq!(moves, 2);
        assert_eq!(lines, 3);
        assert!(!data.iter().any(|cmd| matches!(cmd, Command::Close)));
    }
}
