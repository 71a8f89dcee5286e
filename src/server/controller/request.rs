use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        request::{BloodRequestDto, CreateBloodRequestDto, MatchResultDto, UpdateRequestStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::request::CreateBloodRequestParams,
        service::{matching::MatchingService, request::RequestService},
        state::AppState,
    },
};

/// Tag for grouping blood request endpoints in OpenAPI documentation
pub static REQUEST_TAG: &str = "request";

/// Create a blood request.
///
/// Opens a pending request on behalf of the logged-in user, who becomes its
/// recipient. The hospital's first admin is notified.
///
/// # Access Control
/// - `CreateRequest` - Recipients, hospital admins and system admins
///
/// # Returns
/// - `201 Created` - The new request
/// - `400 Bad Request` - Unknown blood type or urgency, or non-positive quantity
/// - `401 Unauthorized` - No user in session
/// - `403 Forbidden` - Donors may not create requests
/// - `404 Not Found` - Hospital does not exist
#[utoipa::path(
    post,
    path = "/api/requests",
    tag = REQUEST_TAG,
    request_body = CreateBloodRequestDto,
    responses(
        (status = 201, description = "Request created", body = BloodRequestDto),
        (status = 400, description = "Invalid request data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not create requests", body = ErrorDto),
        (status = 404, description = "Hospital not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_request(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBloodRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CreateRequest])
        .await?;

    let params = CreateBloodRequestParams::from_dto(user.id, payload)?;

    let service = RequestService::new(&state.db, state.notifications.as_ref());
    let request = service.create(params, Utc::now()).await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

/// List the blood requests visible to the logged-in user.
///
/// Recipients see their own requests, hospital admins those at their hospitals,
/// donors those they are matched to and system admins all of them.
#[utoipa::path(
    get,
    path = "/api/requests",
    tag = REQUEST_TAG,
    responses(
        (status = 200, description = "Visible requests, newest first", body = Vec<BloodRequestDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_requests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = RequestService::new(&state.db, state.notifications.as_ref());
    let requests = service.list_for(&user).await?;

    let dtos: Vec<BloodRequestDto> = requests.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a blood request with its matched donors.
///
/// # Access Control
/// - Admins of the request's hospital, system admins, the request's recipient and
///   donors currently matched to it
#[utoipa::path(
    get,
    path = "/api/requests/{id}",
    tag = REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Blood request ID")
    ),
    responses(
        (status = 200, description = "The request", body = BloodRequestDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not view this request", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_request(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = RequestService::new(&state.db, state.notifications.as_ref());
    let request = service.get_details(id, &user).await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Match donors to a blood request.
///
/// Selects up to five eligible donors of the requested blood type near the
/// hospital, closest first, and notifies them. Finding nobody is a successful
/// result with `matched_donors_count` of zero.
///
/// # Access Control
/// - Admins of the request's hospital and system admins
/// - The request's recipient, when recipient matching is enabled
///
/// # Returns
/// - `200 OK` - The request after matching and the number of donors matched
/// - `401 Unauthorized` - No user in session
/// - `403 Forbidden` - User may not match this request
/// - `404 Not Found` - Request or hospital does not exist
/// - `409 Conflict` - Request is closed or was modified concurrently
#[utoipa::path(
    post,
    path = "/api/requests/match/{id}",
    tag = REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Blood request ID")
    ),
    responses(
        (status = 200, description = "Matching completed", body = MatchResultDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not match this request", body = ErrorDto),
        (status = 404, description = "Request or hospital not found", body = ErrorDto),
        (status = 409, description = "Request closed or modified concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn match_donors(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = MatchingService::new(
        &state.db,
        state.notifications.as_ref(),
        state.access_policy,
    );
    let outcome = service.match_donors(id, &user, Utc::now()).await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}

/// Fulfil or cancel a blood request.
///
/// # Access Control
/// - Admins of the request's hospital, system admins and the request's recipient
///
/// # Returns
/// - `200 OK` - The request after the transition
/// - `400 Bad Request` - Unknown status label
/// - `401 Unauthorized` - No user in session
/// - `403 Forbidden` - User may not update this request
/// - `404 Not Found` - Request does not exist
/// - `409 Conflict` - Transition not allowed, or request modified concurrently
#[utoipa::path(
    put,
    path = "/api/requests/{id}/status",
    tag = REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Blood request ID")
    ),
    request_body = UpdateRequestStatusDto,
    responses(
        (status = 200, description = "Status updated", body = BloodRequestDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User may not update this request", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_request_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRequestStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = RequestService::new(&state.db, state.notifications.as_ref());
    let request = service
        .update_status(id, &payload.status, &user, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}
