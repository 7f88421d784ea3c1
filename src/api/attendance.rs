use crate::api::metrics;
use crate::services::{attendance_service, course_service};
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CourseDatesRequest {
    pub course: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct AttendanceReportRequest {
    pub course: Option<String>,
    pub reg: Option<String>,
    pub dept: Option<String>,
}

fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

#[utoipa::path(
    post,
    path = "/serverCourse",
    tag = "Attendance",
    request_body = CourseDatesRequest,
    responses(
        (status = 200, description = "Date ids recorded under the course"),
        (status = 400, description = "Missing course"),
        (status = 404, description = "Course has no dates"),
        (status = 500, description = "Store error")
    )
)]
pub async fn course_dates(
    state: web::Data<AppState>,
    body: web::Json<CourseDatesRequest>,
) -> HttpResponse {
    metrics::increment_request_count();

    let course = match required(&body.course) {
        Some(course) => course,
        None => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": "course is required"
            }))
        }
    };

    log::info!("📅 POST /serverCourse - course: {}", course);

    match course_service::list_course_dates(state.firestore.as_ref(), course).await {
        Ok(dates) => {
            log::info!("✅ {} dates found for {}", dates.len(), course);
            HttpResponse::Ok().json(serde_json::json!({ "dateArr": dates }))
        }
        Err(e) => {
            metrics::increment_error_count();
            log::error!("❌ Failed to list dates for {}: {}", course, e);
            HttpResponse::build(e.status_code()).json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}

#[utoipa::path(
    post,
    path = "/server",
    tag = "Attendance",
    request_body = AttendanceReportRequest,
    responses(
        (status = 200, description = "Attendance report", body = crate::models::AttendanceReport),
        (status = 400, description = "Missing course, reg or dept"),
        (status = 404, description = "Course has no dates"),
        (status = 500, description = "Store error")
    )
)]
pub async fn attendance_report(
    state: web::Data<AppState>,
    body: web::Json<AttendanceReportRequest>,
) -> HttpResponse {
    metrics::increment_request_count();

    let (course, reg, dept) = match (
        required(&body.course),
        required(&body.reg),
        required(&body.dept),
    ) {
        (Some(course), Some(reg), Some(dept)) => (course, reg, dept),
        _ => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": "course, reg and dept are required"
            }))
        }
    };

    log::info!(
        "📊 POST /server - course: {}, reg: {}, dept: {}",
        course,
        reg,
        dept
    );

    match attendance_service::generate_report(state.firestore.as_ref(), course, reg, dept).await
    {
        Ok(report) => {
            log::info!(
                "✅ Report for {}: {}/{} dates present",
                reg,
                report.number_times_present,
                report.dates.len()
            );
            HttpResponse::Ok().json(serde_json::json!({ "reportdata": report }))
        }
        Err(e) => {
            metrics::increment_error_count();
            log::error!("❌ Failed to build report for {}: {}", reg, e);
            HttpResponse::build(e.status_code()).json(serde_json::json!({
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
    use crate::firestore::types::Value;
    use actix_web::{test, App};
    use std::collections::HashMap;
    use std::sync::Arc;

    fn named(name: &str) -> HashMap<String, Value> {
        HashMap::from([("name".to_string(), Value::string(name))])
    }

    macro_rules! attendance_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state)
                    .route("/serverCourse", web::post().to(course_dates))
                    .route("/server", web::post().to(attendance_report)),
            )
            .await
        };
    }

    #[actix_rt::test]
    async fn missing_fields_skip_the_store() {
        let store = Arc::new(MemoryStore::new());
        let state = state_with(store.clone()).await;
        let app = attendance_app!(state);

        for body in [
            serde_json::json!({}),
            serde_json::json!({"course": "CS101"}),
            serde_json::json!({"course": "CS101", "reg": "REG1"}),
            serde_json::json!({"reg": "REG1", "dept": "CS"}),
            serde_json::json!({"course": "", "reg": "REG1", "dept": "CS"}),
        ] {
            let req = test::TestRequest::post()
                .uri("/server")
                .set_json(body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 400);
        }

        assert_eq!(store.reads(), 0);
    }

    #[actix_rt::test]
    async fn missing_course_rejected_on_date_listing() {
        let store = Arc::new(MemoryStore::new());
        let state = state_with(store.clone()).await;
        let app = attendance_app!(state);

        let req = test::TestRequest::post()
            .uri("/serverCourse")
            .set_json(serde_json::json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        assert_eq!(store.reads(), 0);
    }

    #[actix_rt::test]
    async fn course_dates_returns_every_id() {
        let store = Arc::new(MemoryStore::new());
        store.insert(&["CS101", "2024-01-10"], HashMap::new());
        store.insert(&["CS101", "2024-01-17"], HashMap::new());
        let state = state_with(store).await;
        let app = attendance_app!(state);

        let req = test::TestRequest::post()
            .uri("/serverCourse")
            .set_json(serde_json::json!({"course": "CS101"}))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body["dateArr"],
            serde_json::json!(["2024-01-10", "2024-01-17"])
        );
    }

    #[actix_rt::test]
    async fn course_without_dates_is_not_found() {
        let store = Arc::new(MemoryStore::new());
        let state = state_with(store).await;
        let app = attendance_app!(state);

        let req = test::TestRequest::post()
            .uri("/serverCourse")
            .set_json(serde_json::json!({"course": "CS101"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_rt::test]
    async fn report_matches_reference_example() {
        // CS101 has two dates; REG1 attended only the first
        let store = Arc::new(MemoryStore::new());
        store.insert(&["CS101", "2024-01-10"], HashMap::new());
        store.insert(&["CS101", "2024-01-17"], HashMap::new());
        store.insert(&["CS101", "2024-01-10", "CS", "REG1"], named("John Doe"));
        let state = state_with(store).await;
        let app = attendance_app!(state);

        let req = test::TestRequest::post()
            .uri("/server")
            .set_json(serde_json::json!({"course": "CS101", "reg": "REG1", "dept": "CS"}))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let report = &body["reportdata"];
        assert_eq!(report["numberTimesPresent"], 1);
        assert_eq!(report["pertComing"], 50.0);
        assert_eq!(report["name"], "John Doe");
        assert_eq!(report["dates"].as_array().unwrap().len(), 2);
    }

    #[actix_rt::test]
    async fn report_for_empty_course_has_no_reportdata() {
        let store = Arc::new(MemoryStore::new());
        let state = state_with(store).await;
        let app = attendance_app!(state);

        let req = test::TestRequest::post()
            .uri("/server")
            .set_json(serde_json::json!({"course": "CS101", "reg": "REG1", "dept": "CS"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body.get("reportdata").is_none());
    }
}
