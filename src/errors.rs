use std::{
    error::Error,
    fmt::{self, Display},
};

/// Everything that can go wrong between a sketch config and an exported drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum SketchError {
    /// Seed outside of `0 < seed < 2^31 - 1`.
    InvalidSeed(i64),
    UnknownOrientation(String),
    /// Terrain grids must be a power of two, at least 2.
    InvalidTerrainSize(usize),
    ParameterOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    SvgGenerationError(String),
    ConfigError(String),
    TemplateError(String),
    Io(String),
}

impl Display for SketchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SketchError::InvalidSeed(seed) => write!(f, "Seed out of range: {}", seed),
            SketchError::UnknownOrientation(name) => {
                write!(f, "Orientation {} does not exist", name)
            }
            SketchError::InvalidTerrainSize(size) => write!(
                f,
                "Terrain size {} is not a power of two greater than one",
                size
            ),
            SketchError::ParameterOutOfRange {
                name,
                value,
                min,
                max,
            } => write!(
                f,
                "Parameter {} = {} is outside of [{}, {}]",
                name, value, min, max
            ),
            SketchError::SvgGenerationError(msg) => write!(f, "Svg generation error: {}", msg),
            SketchError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            SketchError::TemplateError(msg) => write!(f, "Template error: {}", msg),
            SketchError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl Error for SketchError {}

impl From<std::io::Error> for SketchError {
    fn from(error: std::io::Error) -> Self {
        SketchError::Io(error.to_string())
    }
}

/// Serde only knows the variant names, so a bad orientation in a sketch file
/// surfaces as a generic enum error. Give it back its own kind.
fn unknown_orientation(error: &ron::Error) -> Option<SketchError> {
    match error {
        ron::Error::NoSuchEnumVariant {
            found,
            outer: Some(outer),
            ..
        } if outer == "Orientation" => Some(SketchError::UnknownOrientation(found.clone())),
        _ => None,
    }
}

impl From<ron::error::SpannedError> for SketchError {
    fn from(error: ron::error::SpannedError) -> Self {
        unknown_orientation(&error.code)
            .unwrap_or_else(|| SketchError::ConfigError(error.to_string()))
    }
}

impl From<ron::Error> for SketchError {
    fn from(error: ron::Error) -> Self {
        unknown_orientation(&error).unwrap_or_else(|| SketchError::ConfigError(error.to_string()))
    }
}

impl From<tera::Error> for SketchError {
    fn from(error: tera::Error) -> Self {
        // tera hides the useful part of the message in the source chain
        let mut msg = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            msg = format!("{}: {}", msg, cause);
            source = cause.source();
        }
        SketchError::TemplateError(msg)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display_orientation() {
        let err = SketchError::UnknownOrientation("diagonal".to_string());
        assert_eq!(err.to_string(), "Orientation diagonal does not exist");
    }

    #[test]
    fn test_display_range() {
        let err = SketchError::ParameterOutOfRange {
            name: "lineCount",
            value: 0.0,
            min: 1.0,
            max: 500.0,
        };
        assert!(err.to_string().contains("lineCount"));
    }

    #[test]
    fn test_from_ron_orientation() {
        let err: SketchError = ron::from_str::<crate::elements::Orientation>("diagonal")
            .unwrap_err()
            .into();
        assert_eq!(err, SketchError::UnknownOrientation("diagonal".to_string()));
    }

    #[test]
    fn test_from_ron_other() {
        let err: SketchError = ron::from_str::<crate::elements::Orientation>("(")
            .unwrap_err()
            .into();
        assert!(matches!(err, SketchError::ConfigError(_)));
    }

    #[test]
    fn test_from_io() {
        let err: SketchError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, SketchError::Io(msg) if msg.contains("gone")));
    }
}
