use crate::firestore::DocumentStore;
use crate::utils::error::AppError;

/// Lists the date-document ids recorded under a course collection, in the
/// order the store returns them. A course with no dates is a not-found
/// condition, which also guards the report divisor.
pub async fn list_course_dates(
    store: &dyn DocumentStore,
    course: &str,
) -> Result<Vec<String>, AppError> {
    let documents = store.list_documents(&[course]).await?;

    if documents.is_empty() {
        return Err(AppError::NotFound(format!(
            "No dates found for course {}",
            course
        )));
    }

    Ok(documents.iter().map(|d| d.id().to_string()).collect())
}
