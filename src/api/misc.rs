use actix_web::{web, HttpResponse, Responder};

/// Plain-text liveness route kept for compatibility with existing uptime
/// checks pointed at `/`.
pub async fn index() -> impl Responder {
    HttpResponse::Ok().body("🚀 Attendance backend is running!")
}

/// Echoes whatever JSON body the caller sends.
pub async fn echo(body: web::Json<serde_json::Value>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Data received!",
        "data": body.into_inner(),
    }))
}
