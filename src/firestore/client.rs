use crate::firestore::auth::{ServiceAccount, TokenProvider};
use crate::firestore::store::DocumentStore;
use crate::firestore::types::{Document, ListDocumentsResponse, Value};
use crate::utils::error::AppError;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::HashMap;

const FIRESTORE_API_BASE: &str = "https://firestore.googleapis.com/v1";
const PAGE_SIZE: u32 = 300;

/// Firestore REST client. One instance is created at startup and shared
/// across all requests.
pub struct FirestoreClient {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenProvider,
}

impl FirestoreClient {
    pub fn new(account: ServiceAccount) -> Self {
        let base_url = format!(
            "{}/projects/{}/databases/(default)/documents",
            FIRESTORE_API_BASE, account.project_id
        );
        Self {
            http: reqwest::Client::new(),
            base_url,
            tokens: TokenProvider::new(account),
        }
    }

    fn url_for(&self, path: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in path {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    async fn authorized_get(&self, url: &str, page_token: Option<&str>) -> Result<reqwest::Response, AppError> {
        let token = self.tokens.access_token().await?;
        let mut request = self
            .http
            .get(url)
            .bearer_auth(token)
            .header("Accept", "application/json")
            .query(&[("pageSize", PAGE_SIZE.to_string())]);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }
        request
            .send()
            .await
            .map_err(|e| AppError::FirestoreError(format!("Request failed: {}", e)))
    }
}

#[async_trait]
impl DocumentStore for FirestoreClient {
    async fn list_documents(&self, collection: &[&str]) -> Result<Vec<Document>, AppError> {
        let url = self.url_for(collection);
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let response = self.authorized_get(&url, page_token.as_deref()).await?;
            if !response.status().is_success() {
                return Err(AppError::FirestoreError(format!(
                    "List documents returned {}",
                    response.status()
                )));
            }

            let page: ListDocumentsResponse = response
                .json()
                .await
                .map_err(|e| AppError::FirestoreError(format!("Invalid list response: {}", e)))?;

            documents.extend(page.documents);
            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(documents)
    }

    async fn get_document(&self, path: &[&str]) -> Result<Option<Document>, AppError> {
        let url = self.url_for(path);
        let token = self.tokens.access_token().await?;
        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| AppError::FirestoreError(format!("Request failed: {}", e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(AppError::FirestoreError(format!(
                "Get document returned {}",
                response.status()
            )));
        }

        let document = response
            .json::<Document>()
            .await
            .map_err(|e| AppError::FirestoreError(format!("Invalid document response: {}", e)))?;

        Ok(Some(document))
    }

    async fn add_document(
        &self,
        collection: &[&str],
        fields: HashMap<String, Value>,
    ) -> Result<Document, AppError> {
        let url = self.url_for(collection);
        let token = self.tokens.access_token().await?;
        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&serde_json::json!({ "fields": fields }))
            .send()
            .await
            .map_err(|e| AppError::FirestoreError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::FirestoreError(format!(
                "Create document returned {}",
                response.status()
            )));
        }

        response
            .json::<Document>()
            .await
            .map_err(|e| AppError::FirestoreError(format!("Invalid document response: {}", e)))
    }
}
