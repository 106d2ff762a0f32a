use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use videoteca_core::error::CoreError;
use videoteca_db::store::StoreError;

/// Body sent for every 500 response. The client contract exposes only a
/// message string; store internals are logged, never returned.
const UNEXPECTED_ERROR: &str = "Erro inesperado";

/// Duplicate-id conflict message, shared by create and id-renaming update.
const DUPLICATE_ID: &str = "'id' já existe";

/// Application-level error type for HTTP handlers.
///
/// Each variant carries its own status code, so no handler ever inspects
/// or rewrites response state after the fact. Every error is logged.
///
/// The contract predates this service: validation, not-found, and
/// conflict all answer 400 (not 404/409), and the body is the bare
/// message text with no structured code. Clients pattern-match on it.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A domain-level error from `videoteca-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store failure that is not a domain condition.
    #[error("store error: {0}")]
    Store(StoreError),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            // A unique violation is the canonical conflict signal.
            StoreError::DuplicateId => ApiError::Core(CoreError::Conflict(DUPLICATE_ID.into())),
            other => ApiError::Store(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Core(err) => {
                tracing::warn!(error = %err, "Request rejected");
                (StatusCode::BAD_REQUEST, err.message().to_string()).into_response()
            }
            ApiError::Store(err) => {
                tracing::error!(error = %err, "Store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR).into_response()
            }
        }
    }
}
