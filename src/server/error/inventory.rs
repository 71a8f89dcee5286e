use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::sea_orm_active_enums::BloodType;
use sea_orm::ActiveEnum;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq)]
pub enum InventoryError {
    /// Removal would drive the stock below zero. Nothing is removed. Results in 409.
    #[error("Insufficient stock: {available} ml available, {requested} ml requested")]
    InsufficientStock { available: i32, requested: i32 },

    /// No record exists for the hospital and blood type. Results in 404.
    #[error(
        "No inventory record for blood type '{}' at hospital {hospital_id}",
        .blood_type.to_value()
    )]
    RecordNotFound {
        hospital_id: i32,
        blood_type: BloodType,
    },

    /// Quantity or amount outside the accepted range. Results in 400.
    #[error("Invalid quantity {0}")]
    InvalidQuantity(i32),

    /// Stock cannot be recorded with an expiry date that has already passed. Results in 400.
    #[error("Expiry date must not be in the past")]
    ExpiryInPast,
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InsufficientStock { .. } => StatusCode::CONFLICT,
            Self::RecordNotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidQuantity(_) | Self::ExpiryInPast => StatusCode::BAD_REQUEST,
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
