use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Number of rows affected by a bulk operation.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CountDto {
    pub count: u64,
}
