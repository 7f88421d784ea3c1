use serde::{Deserialize, Serialize};

/// Attendance report for one student across every recorded date of a course.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
pub struct AttendanceReport {
    /// Every date-document id recorded under the course, in store order.
    pub dates: Vec<String>,
    #[serde(rename = "numberTimesPresent")]
    pub number_times_present: u32,
    /// `100 * numberTimesPresent / dates.len()`, unrounded.
    #[serde(rename = "pertComing")]
    pub pert_coming: f64,
    pub name: String,
}
