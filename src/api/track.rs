use crate::api::metrics;
use crate::services::tracker_service;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct TrackRequest {
    pub date: Option<String>,
    pub count: Option<i64>,
}

#[utoipa::path(
    post,
    path = "/track",
    tag = "Tracker",
    request_body = TrackRequest,
    responses(
        (status = 200, description = "Page views recorded"),
        (status = 400, description = "Missing date or count"),
        (status = 500, description = "Store error")
    )
)]
pub async fn track_page_views(
    state: web::Data<AppState>,
    body: web::Json<TrackRequest>,
) -> HttpResponse {
    metrics::increment_request_count();

    let (date, count) = match (body.date.as_deref().filter(|d| !d.is_empty()), body.count) {
        (Some(date), Some(count)) => (date, count),
        _ => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "message": "date and count are required"
            }))
        }
    };

    log::info!("📈 POST /track - date: {}, count: {}", date, count);

    match tracker_service::record_page_views(&state.mongo, date, count).await {
        Ok(result) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Page views recorded",
            "result": result,
        })),
        Err(e) => {
            metrics::increment_error_count();
            log::error!("❌ Failed to record page views: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::state_with;
    use crate::firestore::memory::MemoryStore;
    use actix_web::{test, App};
    use std::sync::Arc;

    #[actix_rt::test]
    async fn missing_date_is_rejected() {
        let state = state_with(Arc::new(MemoryStore::new())).await;
        let app = test::init_service(
            App::new()
                .app_data(state)
                .route("/track", web::post().to(track_page_views)),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/track")
            .set_json(serde_json::json!({"count": 3}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_rt::test]
    async fn missing_count_is_rejected() {
        let state = state_with(Arc::new(MemoryStore::new())).await;
        let app = test::init_service(
            App::new()
                .app_data(state)
                .route("/track", web::post().to(track_page_views)),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/track")
            .set_json(serde_json::json!({"date": "2024-01-10"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }
}
