pub type RoundRectResult<T> = Result<T, RoundRectError>;

#[derive(thiserror::Error, Debug)]
pub enum RoundRectError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("surface error: {0}")]
    Surface(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RoundRectError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for RoundRectError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}
