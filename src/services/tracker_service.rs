use crate::database::{MongoDB, PAGE_VIEWS_COLLECTION};
use crate::models::PageView;
use crate::utils::error::AppError;
use mongodb::bson::doc;
use mongodb::options::UpdateOptions;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TrackResult {
    #[serde(rename = "matchedCount")]
    pub matched_count: u64,
    #[serde(rename = "modifiedCount")]
    pub modified_count: u64,
    #[serde(rename = "upsertedId", skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<String>,
}

/// Adds `count` to the stored sum for `date`, creating the record on first
/// sight. The increment is atomic on the MongoDB side; repeated calls
/// accumulate by design.
pub async fn record_page_views(
    db: &MongoDB,
    date: &str,
    count: i64,
) -> Result<TrackResult, AppError> {
    let collection = db.collection::<PageView>(PAGE_VIEWS_COLLECTION);

    let result = collection
        .update_one(doc! { "date": date }, doc! { "$inc": { "sum": count } })
        .with_options(UpdateOptions::builder().upsert(true).build())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to record page views: {}", e)))?;

    Ok(TrackResult {
        matched_count: result.matched_count,
        modified_count: result.modified_count,
        upserted_id: result.upserted_id.map(|id| id.to_string()),
    })
}
