//! Data models for Drive API responses and the typed folder listing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// MIME type Drive uses for folders.
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// MIME type of a native Google Docs document.
pub const GOOGLE_DOC_MIME_TYPE: &str = "application/vnd.google-apps.document";

/// One child entry as returned by the files.list endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListingEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default, deserialize_with = "deserialize_size")]
    pub size: Option<u64>,
}

/// Drive encodes sizes as decimal strings. Garbage is treated as unknown.
fn deserialize_size<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| s.parse::<u64>().ok()))
}

/// Response from the files.list API endpoint.
#[derive(Debug, Deserialize)]
pub struct FileListResponse {
    #[serde(default)]
    pub files: Vec<RawListingEntry>,
}

/// Google API error response.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}

/// Media kind of a listed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    Doc,
    Text,
    Pdf,
    Image,
    Video,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Doc => "DOC",
            FileType::Text => "TEXT",
            FileType::Pdf => "PDF",
            FileType::Image => "IMAGE",
            FileType::Video => "VIDEO",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A subfolder. Its children are never resolved, so `items` stays empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriveFolder {
    pub id: String,
    pub name: String,
    pub items: Vec<DriveItem>,
}

impl DriveFolder {
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            items: Vec::new(),
        }
    }
}

/// A typed file with the URL its bytes (or text export) can be fetched from.
///
/// `content` is only ever set on [`FileType::Text`] items whose body was
/// fetched successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Entry of a folder listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DriveItem {
    Folder(DriveFolder),
    File(DriveFile),
}

impl DriveItem {
    pub fn id(&self) -> &str {
        match self {
            DriveItem::Folder(folder) => &folder.id,
            DriveItem::File(file) => &file.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            DriveItem::Folder(folder) => &folder.name,
            DriveItem::File(file) => &file.name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, DriveItem::Folder(_))
    }

    /// `None` for folders.
    pub fn file_type(&self) -> Option<FileType> {
        match self {
            DriveItem::Folder(_) => None,
            DriveItem::File(file) => Some(file.file_type),
        }
    }

    /// Hidden items have a name starting with `_` once surrounding whitespace is ignored.
    pub fn is_hidden(&self) -> bool {
        self.name().trim().starts_with('_')
    }
}

impl fmt::Display for DriveItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriveItem::Folder(folder) => write!(f, "folder\t-\t-\t{}", folder.name),
            DriveItem::File(file) => {
                let size_str = file
                    .size
                    .map(format_size)
                    .unwrap_or_else(|| "-".to_string());
                write!(
                    f,
                    "file\t{}\t{}\t{}",
                    file.file_type, size_str, file.name
                )
            }
        }
    }
}

/// Format bytes into human-readable size.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_file(content: Option<&str>) -> DriveFile {
        DriveFile {
            id: "t1".to_string(),
            name: "notes.txt".to_string(),
            file_type: FileType::Text,
            url: "https://example.com/t1".to_string(),
            size: Some(2048),
            content: content.map(str::to_string),
        }
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(500), "500 B");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(1048576), "1.00 MB");
        assert_eq!(format_size(1073741824), "1.00 GB");
    }

    #[test]
    fn test_raw_entry_deserialize() {
        let json = r#"{
            "id": "abc123",
            "name": "test.txt",
            "mimeType": "text/plain",
            "size": "1024"
        }"#;

        let entry: RawListingEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "abc123");
        assert_eq!(entry.name, "test.txt");
        assert_eq!(entry.mime_type, "text/plain");
        assert_eq!(entry.size, Some(1024));
    }

    #[test]
    fn test_raw_entry_bad_size_is_unknown() {
        let json = r#"{"id": "a", "name": "b", "mimeType": "image/png", "size": "lots"}"#;
        let entry: RawListingEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.size, None);
    }

    #[test]
    fn test_file_list_without_files_key() {
        let response: FileListResponse = serde_json::from_str("{}").unwrap();
        assert!(response.files.is_empty());
    }

    #[test]
    fn test_item_serializes_with_kind_tag() {
        let folder = DriveItem::Folder(DriveFolder::new("f1".to_string(), "Music".to_string()));
        let value = serde_json::to_value(&folder).unwrap();
        assert_eq!(value["kind"], "folder");
        assert_eq!(value["items"], serde_json::json!([]));

        let file = DriveItem::File(text_file(None));
        let value = serde_json::to_value(&file).unwrap();
        assert_eq!(value["kind"], "file");
        assert_eq!(value["type"], "TEXT");
        assert!(value.get("content").is_none());
    }

    #[test]
    fn test_item_display() {
        let file = DriveItem::File(text_file(Some("hello")));
        assert_eq!(file.to_string(), "file\tTEXT\t2.00 KB\tnotes.txt");

        let folder = DriveItem::Folder(DriveFolder::new("f1".to_string(), "Music".to_string()));
        assert_eq!(folder.to_string(), "folder\t-\t-\tMusic");
    }

    #[test]
    fn test_item_accessors() {
        let file = DriveItem::File(text_file(None));
        assert_eq!(file.id(), "t1");
        assert_eq!(file.name(), "notes.txt");
        assert_eq!(file.file_type(), Some(FileType::Text));

        let folder = DriveItem::Folder(DriveFolder::new("f1".to_string(), "Music".to_string()));
        assert_eq!(folder.id(), "f1");
        assert_eq!(folder.file_type(), None);
    }

    #[test]
    fn test_api_error_envelope() {
        let json = r#"{"error": {"code": 403, "message": "The caller does not have permission", "errors": []}}"#;
        let response: ApiErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.error.message, "The caller does not have permission");
    }

    #[test]
    fn test_hidden_ignores_leading_whitespace() {
        let folder = DriveItem::Folder(DriveFolder::new("f1".to_string(), "  _drafts".to_string()));
        assert!(folder.is_hidden());
        assert!(!DriveItem::File(text_file(None)).is_hidden());
    }
}
