use sea_orm::ActiveEnum;

use crate::server::error::AppError;

/// Parses a string into one of the database-backed enums.
///
/// # Arguments
/// - `value` - The string value as it appears in the API (e.g. `"O-"`, `"critical"`)
/// - `field` - Field name used in the error message
///
/// # Returns
/// - `Ok(E)` - The matching enum variant
/// - `Err(AppError::BadRequest)` - The value does not name any variant
pub fn parse_active_enum<E>(value: &str, field: &str) -> Result<E, AppError>
where
    E: ActiveEnum<Value = String>,
{
    E::try_from_value(&value.to_string())
        .map_err(|_| AppError::BadRequest(format!("Invalid {}: '{}'", field, value)))
}
