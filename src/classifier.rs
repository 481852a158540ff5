//! Mapping of raw listing entries onto typed drive items.

use tracing::debug;

use crate::models::{
    DriveFile, DriveFolder, DriveItem, FileType, RawListingEntry, FOLDER_MIME_TYPE,
    GOOGLE_DOC_MIME_TYPE,
};

/// Builds the URLs a caller fetches item bodies from.
///
/// The API key travels as a `key` query parameter, which is what the Drive
/// API accepts for link-shared content.
#[derive(Debug, Clone, Copy)]
pub struct RetrievalUrls<'a> {
    api_base: &'a str,
    api_key: &'a str,
}

impl<'a> RetrievalUrls<'a> {
    pub fn new(api_base: &'a str, api_key: &'a str) -> Self {
        Self { api_base, api_key }
    }

    /// Raw bytes of a stored file.
    pub fn media(&self, file_id: &str) -> String {
        format!(
            "{}/files/{}?alt=media&key={}",
            self.api_base, file_id, self.api_key
        )
    }

    /// Plain-text export of a native Google document.
    pub fn text_export(&self, file_id: &str) -> String {
        format!(
            "{}/files/{}/export?mimeType=text/plain&key={}",
            self.api_base, file_id, self.api_key
        )
    }
}

/// Classify a listing entry. First matching rule wins:
///
/// 1. folder MIME type: a [`DriveFolder`] with no children
/// 2. native Google document: `TEXT`, fetched through the text export
/// 3. `pdf` / `image` / `video` substrings: `PDF` / `IMAGE` / `VIDEO`
/// 4. `text` substring: `TEXT`
/// 5. anything else: `DOC`
pub fn classify(entry: RawListingEntry, urls: &RetrievalUrls<'_>) -> DriveItem {
    let RawListingEntry {
        id,
        name,
        mime_type,
        size,
    } = entry;

    if mime_type == FOLDER_MIME_TYPE {
        return DriveItem::Folder(DriveFolder::new(id, name));
    }

    let (file_type, url) = if mime_type == GOOGLE_DOC_MIME_TYPE {
        (FileType::Text, urls.text_export(&id))
    } else {
        (file_type_for(&mime_type), urls.media(&id))
    };

    debug!(file_id = %id, mime_type = %mime_type, file_type = %file_type, "Classified file");

    DriveItem::File(DriveFile {
        id,
        name,
        file_type,
        url,
        size,
        content: None,
    })
}

/// Substring rules for MIME types that are not native Google documents.
fn file_type_for(mime_type: &str) -> FileType {
    if mime_type.contains("pdf") {
        FileType::Pdf
    } else if mime_type.contains("image") {
        FileType::Image
    } else if mime_type.contains("video") {
        FileType::Video
    } else if mime_type.contains("text") {
        FileType::Text
    } else {
        FileType::Doc
    }
}
