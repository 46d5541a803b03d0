use std::{error::Error, fmt::Display};

#[derive(Debug)]
pub enum EmbedError {
    InvalidPattern { pattern: String, source: regex::Error },
}

impl Display for EmbedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPattern { pattern, .. } => {
                write!(f, "Error: invalid player url pattern `{}`", pattern)
            }
        }
    }
}

impl Error for EmbedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source),
        }
    }
}
