use crate::api::metrics;
use crate::services::user_service;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AddUserRequest {
    pub name: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/add",
    tag = "Users",
    request_body = AddUserRequest,
    responses(
        (status = 200, description = "User added"),
        (status = 400, description = "Missing name"),
        (status = 500, description = "Store error")
    )
)]
pub async fn add_user(
    state: web::Data<AppState>,
    body: web::Json<AddUserRequest>,
) -> HttpResponse {
    metrics::increment_request_count();

    let name = match body.name.as_deref().filter(|n| !n.is_empty()) {
        Some(name) => name,
        None => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": "name is required"
            }))
        }
    };

    log::info!("👤 POST /api/add - name: {}", name);

    match user_service::add_user(state.firestore.as_ref(), name).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "User added",
            "name": name,
        })),
        Err(e) => {
            metrics::increment_error_count();
            log::error!("❌ Failed to add user: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All user documents"),
        (status = 500, description = "Store error")
    )
)]
pub async fn get_users(state: web::Data<AppState>) -> HttpResponse {
    metrics::increment_request_count();
    log::info!("👥 GET /api/users - Listing users");

    match user_service::list_users(state.firestore.as_ref()).await {
        Ok(users) => {
            log::info!("✅ Users retrieved: {}", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            metrics::increment_error_count();
            log::error!("❌ Failed to list users: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            }))
        }
    }
}
