use game_types::GameError;
use warp::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("Storage error: {0:#}")]
    Storage(anyhow::Error),
    #[error("Timed out while trying to {operation}")]
    Timeout { operation: &'static str },
}

impl From<anyhow::Error> for ServiceError {
    fn from(err: anyhow::Error) -> Self {
        ServiceError::Storage(err)
    }
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Game(GameError::InvalidBlock { .. }) => StatusCode::BAD_REQUEST,
            ServiceError::Game(GameError::GameNotFound { .. }) => StatusCode::NOT_FOUND,
            ServiceError::Game(GameError::NotGameOwner) => StatusCode::FORBIDDEN,
            ServiceError::Game(GameError::GameNotActive | GameError::NoAttemptsRemaining) => {
                StatusCode::CONFLICT
            }
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    /// Message safe to show to the player. Storage details stay in the logs.
    pub fn client_message(&self) -> String {
        match self {
            ServiceError::Storage(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}
