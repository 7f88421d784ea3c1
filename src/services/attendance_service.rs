use crate::firestore::DocumentStore;
use crate::models::AttendanceReport;
use crate::services::course_service;
use crate::utils::error::AppError;

/// Roster root collection; documents are academic levels, each holding a
/// sub-collection per department keyed by registration number.
const ROSTER_ROOT: &str = "UNIUYO";
const ROSTER_LEVELS: [&str; 5] = ["100", "200", "300", "400", "500"];

const UNKNOWN_NAME: &str = "Unknown";

/// Generates the attendance report for one student.
///
/// Date-records are checked one at a time in store order; the last record
/// found is kept as the name candidate. When the student appears on no date
/// at all, the name falls back to a roster scan over every level.
pub async fn generate_report(
    store: &dyn DocumentStore,
    course: &str,
    reg: &str,
    dept: &str,
) -> Result<AttendanceReport, AppError> {
    let dates = course_service::list_course_dates(store, course).await?;

    let mut present: u32 = 0;
    let mut last_record = None;

    for date in &dates {
        if let Some(record) = store.get_document(&[course, date, dept, reg]).await? {
            present += 1;
            last_record = Some(record);
        }
    }

    let name = match &last_record {
        Some(record) => record.string_field("name").unwrap_or(UNKNOWN_NAME).to_string(),
        None => resolve_roster_name(store, dept, reg)
            .await?
            .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
    };

    // dates is never empty past list_course_dates
    let pert_coming = (present as f64 / dates.len() as f64) * 100.0;

    Ok(AttendanceReport {
        dates,
        number_times_present: present,
        pert_coming,
        name,
    })
}

/// Scans roster levels 100..500 in order and returns the first name found.
async fn resolve_roster_name(
    store: &dyn DocumentStore,
    dept: &str,
    reg: &str,
) -> Result<Option<String>, AppError> {
    for level in ROSTER_LEVELS {
        if let Some(entry) = store.get_document(&[ROSTER_ROOT, level, dept, reg]).await? {
            if let Some(name) = entry.string_field("name") {
                return Ok(Some(name.to_string()));
            }
        }
    }
    Ok(None)
}
