mod api;
mod database;
mod firestore;
mod models;
mod services;
mod state;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use state::AppState;
use std::env;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let mongo_uri = env::var("MONGO_URI").expect("MONGO_URI must be set");

    log::info!("🚀 Starting Attendance Service...");

    // Initialize MongoDB connection; unreachable analytics store is fatal
    let db = database::MongoDB::connect(&mongo_uri)
        .await
        .expect("Failed to configure MongoDB client");
    db.ping().await.expect("Failed to connect to MongoDB");
    db.ensure_indexes()
        .await
        .expect("Failed to create MongoDB indexes");

    log::info!("✅ MongoDB connected successfully");

    // Firestore credential: env blob on Railway, local key file otherwise
    let account = firestore::ServiceAccount::load()
        .expect("Failed to load Firebase service account");
    log::info!("🔥 Firestore project: {}", account.project_id);
    let firestore = firestore::FirestoreClient::new(account);

    let state = web::Data::new(AppState {
        mongo: db,
        firestore: Arc::new(firestore),
    });

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!(
        "📚 Swagger UI available at: http://{}:{}/swagger-ui/",
        host,
        port
    );

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::permissive();

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Liveness & monitoring
            .route("/", web::get().to(api::misc::index))
            .route("/health", web::get().to(api::health::health_check))
            .route("/metrics", web::get().to(api::metrics::get_metrics))
            // Firestore user demo routes
            .route("/api/add", web::post().to(api::users::add_user))
            .route("/api/users", web::get().to(api::users::get_users))
            // Echo route kept for the legacy frontend
            .route("/adexbackend", web::post().to(api::misc::echo))
            // Page-view tracker (MongoDB)
            .route("/track", web::post().to(api::track::track_page_views))
            // Attendance (Firestore)
            .route("/serverCourse", web::post().to(api::attendance::course_dates))
            .route("/server", web::post().to(api::attendance::attendance_report))
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
