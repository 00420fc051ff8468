use univ3_position_core::{CoreError, DIVISION_BY_ZERO, INVALID_TICK_INDEX, INVALID_TICK_RANGE};

/// Errors that can occur while fetching and pricing a position
#[derive(Debug, thiserror::Error)]
pub enum PositionError {
    #[error("Data Fetch Error: {0}")]
    DataFetch(String),

    #[error("HTTP Error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not Found: no position with id {0}")]
    NotFound(String),

    #[error("Invalid Token Id: {0:?}")]
    InvalidTokenId(String),

    #[error("Malformed Snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("Invalid Tick: {0}")]
    InvalidTick(CoreError),

    #[error("Division By Zero: {0}")]
    DivisionByZero(CoreError),

    #[error("Core Error: {0}")]
    Core(CoreError),

    #[error("Invalid Configuration: {0}")]
    ConfigError(String),
}

impl PositionError {
    /// Whether the error came from talking to the indexer rather than from the data
    /// it returned.
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, Self::DataFetch(_) | Self::Http(_) | Self::Json(_))
    }
}

impl From<CoreError> for PositionError {
    fn from(error: CoreError) -> Self {
        match error {
            INVALID_TICK_INDEX => Self::InvalidTick(error),
            DIVISION_BY_ZERO => Self::DivisionByZero(error),
            INVALID_TICK_RANGE => Self::MalformedSnapshot(error.to_string()),
            _ => Self::Core(error),
        }
    }
}

/// Result type for position operations
pub type Result<T> = std::result::Result<T, PositionError>;
