use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Service API",
        version = "1.0.0",
        description = "HTTP backend proxying Firestore and MongoDB Atlas for attendance tracking.\n\n**Features:**\n- Course date listing and per-student attendance reports\n- Page-view counter backed by MongoDB upsert-increment\n- Firestore-backed user demo routes\n- Health monitoring and metrics",
        contact(
            name = "Attendance Service Team",
            email = "support@attendance-service.com"
        )
    ),
    paths(
        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,

        // Users
        crate::api::users::add_user,
        crate::api::users::get_users,

        // Tracker
        crate::api::track::track_page_views,

        // Attendance
        crate::api::attendance::course_dates,
        crate::api::attendance::attendance_report,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
            crate::api::users::AddUserRequest,
            crate::api::track::TrackRequest,
            crate::api::attendance::CourseDatesRequest,
            crate::api::attendance::AttendanceReportRequest,
            crate::models::AttendanceReport,
        )
    ),
    tags(
        (name = "Health", description = "Health check and system metrics endpoints for monitoring service status."),
        (name = "Users", description = "Firestore-backed user demo endpoints."),
        (name = "Tracker", description = "Page-view counter. Upsert-increments a per-date sum in MongoDB."),
        (name = "Attendance", description = "Course date listing and per-student attendance reports from Firestore."),
    )
)]
pub struct ApiDoc;
