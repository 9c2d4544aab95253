pub type PoseGuideResult<T> = Result<T, PoseGuideError>;

#[derive(thiserror::Error, Debug)]
pub enum PoseGuideError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("surface error: {0}")]
    Surface(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PoseGuideError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            PoseGuideError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            PoseGuideError::surface("x")
                .to_string()
                .contains("surface error:")
        );
        assert!(
            PoseGuideError::encode("x")
                .to_string()
                .contains("encode error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = PoseGuideError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
