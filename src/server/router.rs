use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{inventory, notification, request},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bloodline",
        description = "Blood request coordination between recipients, hospitals and donors"
    ),
    tags(
        (name = "request", description = "Blood requests and donor matching"),
        (name = "inventory", description = "Hospital blood stock"),
        (name = "notification", description = "In-app notifications")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(request::create_request, request::list_requests))
        .routes(routes!(request::get_request))
        .routes(routes!(request::match_donors))
        .routes(routes!(request::update_request_status))
        .routes(routes!(inventory::get_inventory, inventory::set_inventory))
        .routes(routes!(inventory::add_units))
        .routes(routes!(inventory::remove_units))
        .routes(routes!(inventory::expire_stock))
        .routes(routes!(inventory::get_expiring))
        .routes(routes!(
            notification::get_notifications,
            notification::delete_notifications
        ))
        .routes(routes!(notification::delete_notification))
        .routes(routes!(notification::mark_notification_read))
        .routes(routes!(notification::mark_notifications_read))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
