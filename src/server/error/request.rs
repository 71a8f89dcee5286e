use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::sea_orm_active_enums::RequestStatus;
use sea_orm::ActiveEnum;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq)]
pub enum RequestError {
    /// The requested status change is not allowed from the current status.
    ///
    /// Terminal requests (fulfilled, cancelled) accept no transitions, and no request
    /// may move back to pending. Results in 409 Conflict.
    #[error(
        "Cannot change request status from '{}' to '{}'",
        .from.to_value(),
        .to.to_value()
    )]
    InvalidTransition {
        from: RequestStatus,
        to: RequestStatus,
    },

    /// Another writer changed the request between read and write.
    ///
    /// Results in 409 Conflict; the caller may reload and retry.
    #[error("Blood request {0} was modified concurrently, reload and try again")]
    ConcurrentModification(i32),

    /// A status string did not name a known request status. Results in 400.
    #[error("Invalid request status '{0}'")]
    InvalidStatus(String),

    /// Requested volume must be a positive number of millilitres. Results in 400.
    #[error("Requested quantity must be positive, got {0}")]
    InvalidQuantity(i32),
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidTransition { .. } | Self::ConcurrentModification(_) => {
                StatusCode::CONFLICT
            }
            Self::InvalidStatus(_) | Self::InvalidQuantity(_) => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
