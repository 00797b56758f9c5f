use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("Grid container is not available")]
    ContainerMissing,

    #[error("tui.Grid constructor failed: {0}")]
    Construction(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        GridError::Serialization(err.to_string())
    }
}
