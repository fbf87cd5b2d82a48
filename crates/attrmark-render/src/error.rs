//! Render errors.

/// Error returned when runs cannot be written in the requested mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Serializing runs for [`OutputMode::Json`](crate::OutputMode::Json) failed.
    Serialize { message: String },
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Serialize { message } => {
                write!(f, "failed to serialize runs: {}", message)
            }
        }
    }
}

impl std::error::Error for RenderError {}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Serialize {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_error_display() {
        let err = RenderError::Serialize {
            message: "key must be a string".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("serialize"));
        assert!(msg.contains("key must be a string"));
    }
}
