use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use shared::aviationstack::ProviderError;
use shared::flights::FlightSummary;
use thiserror::Error;
use tracing::{error, warn};

const CONFIGURATION_ERROR_MESSAGE: &str = "Server configuration error";
const LOOKUP_FAILED_MESSAGE: &str = "Failed to fetch flight data";

#[derive(Serialize)]
pub struct ErrorMessage {
    #[serde(skip)]
    pub status_code: StatusCode,
    pub error: String,
}

/// Everything that can stop a flight lookup.
///
/// Callers only ever see three outcomes: a generic configuration error, the provider's
/// own status with an empty list, or a generic lookup failure. The variants stay
/// distinct so logs can tell transport and decode problems apart.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("provider access key is not configured")]
    MissingCredential,
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        match self {
            LookupError::MissingCredential => {
                error!("provider access key is not configured");
                ErrorMessage::from((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    CONFIGURATION_ERROR_MESSAGE,
                ))
                .into_response()
            }
            LookupError::Provider(e) => match e {
                ProviderError::Status(status) => {
                    warn!(status = status.as_u16(), "provider returned non-success status");
                    (status, Json(Vec::<FlightSummary>::new())).into_response()
                }
                ProviderError::Transport(e) => {
                    error!(error = ?e, "flight lookup request failed");
                    ErrorMessage::from((StatusCode::INTERNAL_SERVER_ERROR, LOOKUP_FAILED_MESSAGE))
                        .into_response()
                }
                ProviderError::Decode(e) => {
                    error!(error = ?e, "failed to decode provider payload");
                    ErrorMessage::from((StatusCode::INTERNAL_SERVER_ERROR, LOOKUP_FAILED_MESSAGE))
                        .into_response()
                }
            },
        }
    }
}

impl From<(StatusCode, &str)> for ErrorMessage {
    fn from((status_code, message): (StatusCode, &str)) -> Self {
        Self {
            status_code,
            error: message.into(),
        }
    }
}

impl IntoResponse for ErrorMessage {
    fn into_response(self) -> Response {
        (self.status_code, Json(self)).into_response()
    }
}
