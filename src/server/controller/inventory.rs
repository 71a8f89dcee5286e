use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        inventory::{
            AddUnitsDto, ExpireStockResultDto, InventoryRecordDto, RemoveUnitsDto,
            SetInventoryDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::inventory::{AddUnitsParams, RemoveUnitsParams, SetQuantityParams},
        service::inventory::InventoryService,
        state::AppState,
    },
};

/// Tag for grouping inventory endpoints in OpenAPI documentation
pub static INVENTORY_TAG: &str = "inventory";

const DEFAULT_EXPIRING_WINDOW_DAYS: i64 = 7;

fn default_expiring_window() -> i64 {
    DEFAULT_EXPIRING_WINDOW_DAYS
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExpiringQuery {
    /// Look-ahead window in days
    #[serde(default = "default_expiring_window")]
    pub days: i64,
}

fn inventory_service(state: &AppState) -> InventoryService<'_> {
    InventoryService::new(
        &state.db,
        state.notifications.as_ref(),
        state.low_stock_threshold,
    )
}

/// Get all inventory records of a hospital.
///
/// # Access Control
/// - `ManageInventory` - Admins of the hospital and system admins
///
/// # Arguments
/// - `hospital_id` - Hospital whose stock to list
///
/// # Returns
/// - `200 OK` - Inventory records ordered by blood type
/// - `401 Unauthorized` - No user in session
/// - `403 Forbidden` - User does not manage this hospital
/// - `404 Not Found` - Hospital does not exist
#[utoipa::path(
    get,
    path = "/api/inventory/{hospital_id}",
    tag = INVENTORY_TAG,
    params(
        ("hospital_id" = i32, Path, description = "Hospital ID")
    ),
    responses(
        (status = 200, description = "Inventory records", body = Vec<InventoryRecordDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage this hospital", body = ErrorDto),
        (status = 404, description = "Hospital not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    session: Session,
    Path(hospital_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageInventory(hospital_id)])
        .await?;

    let records = inventory_service(&state).get_inventory(hospital_id).await?;

    let dtos: Vec<InventoryRecordDto> = records.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Set the stock of one blood type at a hospital.
///
/// Overwrites quantity and expiry date, creating the record when absent.
/// Sends a low stock alert to the hospital's admin when the new quantity is
/// positive but below the configured threshold.
///
/// # Access Control
/// - `ManageInventory` - Admins of the hospital and system admins
///
/// # Returns
/// - `200 OK` - The record after the write
/// - `400 Bad Request` - Unknown blood type, negative quantity or expiry in the past
/// - `401 Unauthorized` - No user in session
/// - `403 Forbidden` - User does not manage this hospital
/// - `404 Not Found` - Hospital does not exist
#[utoipa::path(
    put,
    path = "/api/inventory/{hospital_id}",
    tag = INVENTORY_TAG,
    params(
        ("hospital_id" = i32, Path, description = "Hospital ID")
    ),
    request_body = SetInventoryDto,
    responses(
        (status = 200, description = "Stock set", body = InventoryRecordDto),
        (status = 400, description = "Invalid inventory data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage this hospital", body = ErrorDto),
        (status = 404, description = "Hospital not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_inventory(
    State(state): State<AppState>,
    session: Session,
    Path(hospital_id): Path<i32>,
    Json(payload): Json<SetInventoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageInventory(hospital_id)])
        .await?;

    let params = SetQuantityParams::from_dto(hospital_id, payload)?;
    let record = inventory_service(&state)
        .set_quantity(params, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(record.into_dto())))
}

/// Add units of one blood type to a hospital's stock.
///
/// The stored expiry date becomes the later of the current and supplied dates.
#[utoipa::path(
    post,
    path = "/api/inventory/{hospital_id}/add",
    tag = INVENTORY_TAG,
    params(
        ("hospital_id" = i32, Path, description = "Hospital ID")
    ),
    request_body = AddUnitsDto,
    responses(
        (status = 200, description = "Units added", body = InventoryRecordDto),
        (status = 400, description = "Invalid inventory data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage this hospital", body = ErrorDto),
        (status = 404, description = "Hospital not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_units(
    State(state): State<AppState>,
    session: Session,
    Path(hospital_id): Path<i32>,
    Json(payload): Json<AddUnitsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageInventory(hospital_id)])
        .await?;

    let params = AddUnitsParams::from_dto(hospital_id, payload)?;
    let record = inventory_service(&state).add_units(params, Utc::now()).await?;

    Ok((StatusCode::OK, Json(record.into_dto())))
}

/// Remove units of one blood type from a hospital's stock.
///
/// # Returns
/// - `200 OK` - The record after the removal
/// - `400 Bad Request` - Non-positive amount
/// - `404 Not Found` - No stock record for this blood type
/// - `409 Conflict` - Fewer units on hand than requested
#[utoipa::path(
    post,
    path = "/api/inventory/{hospital_id}/remove",
    tag = INVENTORY_TAG,
    params(
        ("hospital_id" = i32, Path, description = "Hospital ID")
    ),
    request_body = RemoveUnitsDto,
    responses(
        (status = 200, description = "Units removed", body = InventoryRecordDto),
        (status = 400, description = "Invalid inventory data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage this hospital", body = ErrorDto),
        (status = 404, description = "Hospital or stock record not found", body = ErrorDto),
        (status = 409, description = "Insufficient stock", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_units(
    State(state): State<AppState>,
    session: Session,
    Path(hospital_id): Path<i32>,
    Json(payload): Json<RemoveUnitsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageInventory(hospital_id)])
        .await?;

    let params = RemoveUnitsParams::from_dto(hospital_id, payload)?;
    let record = inventory_service(&state)
        .remove_units(params, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(record.into_dto())))
}

/// Delete a hospital's expired stock records.
#[utoipa::path(
    post,
    path = "/api/inventory/{hospital_id}/expire",
    tag = INVENTORY_TAG,
    params(
        ("hospital_id" = i32, Path, description = "Hospital ID")
    ),
    responses(
        (status = 200, description = "Expired stock removed", body = ExpireStockResultDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage this hospital", body = ErrorDto),
        (status = 404, description = "Hospital not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn expire_stock(
    State(state): State<AppState>,
    session: Session,
    Path(hospital_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageInventory(hospital_id)])
        .await?;

    let removed = inventory_service(&state)
        .expire_stock(hospital_id, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(ExpireStockResultDto { removed })))
}

/// List stock expiring within the next `days` days, soonest first.
#[utoipa::path(
    get,
    path = "/api/inventory/{hospital_id}/expiring",
    tag = INVENTORY_TAG,
    params(
        ("hospital_id" = i32, Path, description = "Hospital ID"),
        ExpiringQuery
    ),
    responses(
        (status = 200, description = "Expiring records", body = Vec<InventoryRecordDto>),
        (status = 400, description = "Negative window", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not manage this hospital", body = ErrorDto),
        (status = 404, description = "Hospital not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_expiring(
    State(state): State<AppState>,
    session: Session,
    Path(hospital_id): Path<i32>,
    Query(query): Query<ExpiringQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageInventory(hospital_id)])
        .await?;

    let records = inventory_service(&state)
        .get_expiring(hospital_id, query.days, Utc::now())
        .await?;

    let dtos: Vec<InventoryRecordDto> = records.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
