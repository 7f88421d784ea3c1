use serde::{Deserialize, Serialize};

/// MongoDB `pageViews` document: one cumulative counter per date string.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PageView {
    pub date: String,
    pub sum: i64,
}
