//! Google Drive API client for listing a shared folder.

use std::num::NonZeroUsize;

use futures::stream::{self, StreamExt};
use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument, warn};

use crate::classifier::{classify, RetrievalUrls};
use crate::config::{ApiKey, ClientConfig};
use crate::curator::curate;
use crate::error::{DriveError, Result};
use crate::models::{ApiErrorResponse, DriveItem, FileListResponse, FileType, RawListingEntry};
use crate::url_parser::{extract_folder_id, is_placeholder};

/// Fields requested for each child of the folder.
const LIST_FIELDS: &str = "files(id,name,mimeType,size)";

/// Client that lists the immediate children of a link-shared Drive folder.
pub struct DriveFolderClient {
    config: ClientConfig,
    http: Client,
}

impl DriveFolderClient {
    /// Create a new DriveFolderClient.
    ///
    /// A missing API key is not an error here: the demo placeholder can be
    /// listed without one.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            config,
            http: builder.build()?,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// List a folder given any folder reference (ID, share link, `demo`).
    ///
    /// Returns an empty list without touching the network for an empty
    /// reference or the `demo` placeholder. Otherwise issues one listing
    /// request, classifies every child, fetches the body of text items
    /// concurrently and returns the curated result.
    ///
    /// # Errors
    /// * [`DriveError::MissingApiKey`] before any request when no key is configured
    /// * [`DriveError::AccessDenied`] on 403, [`DriveError::FolderNotFound`] on 404
    /// * [`DriveError::ApiError`] for any other non-success status
    /// * [`DriveError::HttpError`] when the listing request itself fails
    ///
    /// Failed text fetches never fail the listing; the item just has no content.
    #[instrument(skip(self))]
    pub async fn list_folder(&self, folder: &str) -> Result<Vec<DriveItem>> {
        let folder_id = extract_folder_id(folder);
        if is_placeholder(&folder_id) {
            debug!("No folder configured, returning empty listing");
            return Ok(Vec::new());
        }

        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or(DriveError::MissingApiKey)?;

        info!(folder_id = %folder_id, "Listing folder");
        let entries = self.fetch_entries(&folder_id, api_key).await?;
        debug!(count = entries.len(), "Received listing entries");

        let urls = RetrievalUrls::new(&self.config.api_base, api_key.as_str());
        let items = curate(self.resolve_items(entries, urls).await);

        info!(folder_id = %folder_id, count = items.len(), "Listed folder");
        Ok(items)
    }

    /// Single files.list call for the non-trashed children of `folder_id`.
    async fn fetch_entries(&self, folder_id: &str, api_key: &ApiKey) -> Result<Vec<RawListingEntry>> {
        let query = parent_query(folder_id);

        let response = self
            .http
            .get(format!("{}/files", self.config.api_base))
            .query(&[
                ("q", query.as_str()),
                ("fields", LIST_FIELDS),
                ("key", api_key.as_str()),
            ])
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            warn!(folder_id = %folder_id, status = status.as_u16(), "Listing request failed");
            return Err(match status {
                StatusCode::FORBIDDEN => DriveError::AccessDenied {
                    folder_id: folder_id.to_string(),
                },
                StatusCode::NOT_FOUND => DriveError::FolderNotFound {
                    folder_id: folder_id.to_string(),
                },
                _ => {
                    let error_body = response.text().await.unwrap_or_default();
                    let message = serde_json::from_str::<ApiErrorResponse>(&error_body)
                        .map(|api_error| api_error.error.message)
                        .unwrap_or(error_body);
                    DriveError::ApiError {
                        status: status.as_u16(),
                        message,
                    }
                }
            });
        }

        let list_response: FileListResponse =
            response.json().await.map_err(reqwest::Error::without_url)?;
        Ok(list_response.files)
    }

    /// Classify and prefetch every entry, at most `concurrency_limit` at a time.
    ///
    /// Completion order is arbitrary; callers sort afterwards.
    async fn resolve_items(
        &self,
        entries: Vec<RawListingEntry>,
        urls: RetrievalUrls<'_>,
    ) -> Vec<DriveItem> {
        let limit = self
            .config
            .concurrency_limit
            .map_or(entries.len(), NonZeroUsize::get)
            .max(1);

        stream::iter(entries)
            .map(move |entry| self.resolve_item(entry, urls))
            .buffer_unordered(limit)
            .collect::<Vec<_>>()
            .await
    }

    async fn resolve_item(&self, entry: RawListingEntry, urls: RetrievalUrls<'_>) -> DriveItem {
        match classify(entry, &urls) {
            DriveItem::File(mut file) if file.file_type == FileType::Text => {
                file.content = match self.fetch_text(&file.url).await {
                    Ok(text) => Some(text),
                    Err(e) => {
                        warn!(file_id = %file.id, error = %e, "Failed to fetch text content");
                        None
                    }
                };
                DriveItem::File(file)
            }
            item => item,
        }
    }

    /// Fetch a retrieval URL as text. Errors are left to the caller to swallow.
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DriveError::ApiError {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(response.text().await.map_err(reqwest::Error::without_url)?)
    }
}

/// Drive search query selecting the non-trashed children of `folder_id`.
fn parent_query(folder_id: &str) -> String {
    format!(
        "'{}' in parents and trashed=false",
        folder_id.replace('\'', "\\'")
    )
}

#[cfg(test)]
mod tests {
    // End-to-end tests against a mock server are in tests/client_test.rs
    use super::*;

    #[test]
    fn test_parent_query() {
        assert_eq!(
            parent_query("1abcdefghijklmnop"),
            "'1abcdefghijklmnop' in parents and trashed=false"
        );
    }

    #[test]
    fn test_parent_query_escapes_quotes() {
        assert_eq!(parent_query("it's"), "'it\\'s' in parents and trashed=false");
    }

    #[tokio::test]
    async fn test_placeholder_needs_no_key() {
        let client = DriveFolderClient::new(ClientConfig::default()).unwrap();
        assert!(client.list_folder("demo").await.unwrap().is_empty());
        assert!(client.list_folder("  ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_request() {
        // Unroutable base: a request would fail with HttpError, not MissingApiKey.
        let config = ClientConfig::default().with_api_base("http://127.0.0.1:9");
        let client = DriveFolderClient::new(config).unwrap();
        let result = client.list_folder("1abcdefghijklmnop").await;
        assert!(matches!(result, Err(DriveError::MissingApiKey)));
    }
}
