//! Crate-level error types.

use std::fmt;

/// Errors produced by the arcball crate.
///
/// Only construction and preset I/O can fail. Per-event input (drags, zoom,
/// resize) is normalized or ignored instead of surfacing an error.
#[derive(Debug)]
pub enum ArcballError {
    /// Viewport dimensions must be finite and strictly positive.
    InvalidViewport {
        /// Requested width in pixels.
        width: f32,
        /// Requested height in pixels.
        height: f32,
    },
    /// Camera options that cannot produce a valid orbit.
    InvalidOptions(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for ArcballError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewport { width, height } => {
                write!(f, "invalid viewport size {width}x{height}")
            }
            Self::InvalidOptions(msg) => {
                write!(f, "invalid camera options: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for ArcballError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ArcballError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_viewport_size() {
        let err = ArcballError::InvalidViewport {
            width: 0.0,
            height: 600.0,
        };
        assert_eq!(err.to_string(), "invalid viewport size 0x600");
    }

    #[test]
    fn io_error_is_exposed_as_source() {
        use std::error::Error;

        let err = ArcballError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing preset",
        ));
        assert!(err.source().is_some());
        assert!(ArcballError::OptionsParse("bad".into()).source().is_none());
    }
}
