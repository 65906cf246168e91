pub type FramedeckResult<T> = Result<T, FramedeckError>;

#[derive(thiserror::Error, Debug)]
pub enum FramedeckError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("renderer unavailable: {0}")]
    UnavailableRenderer(String),

    #[error("artifact not found: {0}")]
    ArtifactNotFound(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramedeckError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unavailable_renderer(msg: impl Into<String>) -> Self {
        Self::UnavailableRenderer(msg.into())
    }

    pub fn artifact_not_found(msg: impl Into<String>) -> Self {
        Self::ArtifactNotFound(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
