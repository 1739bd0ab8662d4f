use thiserror::Error;

/// Errors raised by the library layer.
///
/// Only `UnknownBiomarker` can come out of [`crate::compute::compute`]; the
/// other variants belong to table and file parsing.
#[derive(Debug, Error)]
pub enum OncoError {
    #[error("unknown biomarker '{0}'")]
    UnknownBiomarker(String),

    #[error("{origin}:{line} {message}")]
    Parse {
        origin: String,
        line: usize,
        message: String,
    },

    #[error("registry invalid: {0}")]
    Registry(String),

    #[error("heuristic profile invalid: {0}")]
    Heuristics(String),
}

impl OncoError {
    pub fn parse(origin: &str, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            origin: origin.to_string(),
            line,
            message: message.into(),
        }
    }
}
