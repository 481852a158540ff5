//! drive_folder - List a link-shared Google Drive folder as typed items.
//!
//! This library provides functionality to:
//! - Normalize a folder reference (bare ID, share link or `demo` placeholder)
//! - List the folder's immediate children with a single API call
//! - Classify each child as a folder or a DOC/TEXT/PDF/IMAGE/VIDEO file
//! - Prefetch the text of TEXT items so callers can render them inline
//! - Hide `_`-prefixed items and sort folders first, in natural name order
//!
//! # Example
//!
//! ```no_run
//! use drive_folder::{ClientConfig, DriveFolderClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = DriveFolderClient::new(ClientConfig::from_env())?;
//!
//!     let items = client
//!         .list_folder("https://drive.google.com/drive/folders/1AbCdEfGhIjKlMnOp")
//!         .await?;
//!     for item in items {
//!         println!("{}", item);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod classifier;
pub mod client;
pub mod config;
pub mod curator;
pub mod error;
pub mod models;
pub mod url_parser;

// Re-exports for convenience
pub use client::DriveFolderClient;
pub use config::{ApiKey, ClientConfig};
pub use error::{DriveError, Result};
pub use models::{DriveFile, DriveFolder, DriveItem, FileType};
pub use url_parser::{extract_folder_id, DEMO_FOLDER};
