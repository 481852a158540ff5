//! Folder reference normalization.
//!
//! Users paste all sorts of things into the folder field: a bare ID, a
//! "share" link, an `open?id=` link, or the `demo` placeholder. This module
//! reduces them to the bare folder ID the Drive API expects.

use regex::Regex;
use std::sync::LazyLock;

/// Placeholder reference meaning "no real folder configured".
pub const DEMO_FOLDER: &str = "demo";

/// `.../folders/<ID>` in share links, with or without a `/u/<n>/` segment.
static FOLDER_PATH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/folders/([a-zA-Z0-9_-]{15,})").expect("Invalid folder path regex")
});

/// `?id=<ID>` or `&id=<ID>` query parameter.
static ID_PARAM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[?&]id=([a-zA-Z0-9_-]{15,})").expect("Invalid id parameter regex")
});

/// Returns true when `folder_id` short-circuits listing: empty or the demo placeholder.
pub fn is_placeholder(folder_id: &str) -> bool {
    folder_id.is_empty() || folder_id == DEMO_FOLDER
}

/// Extract a bare folder ID from free-form input.
///
/// The input is trimmed first. Empty input and the `demo` placeholder are
/// returned as-is. Otherwise the `/folders/<ID>` pattern is tried, then the
/// `id=<ID>` query parameter; IDs must be at least 15 characters of
/// `[a-zA-Z0-9_-]`. Anything that matches neither is assumed to already be a
/// bare ID and returned trimmed; a bad reference surfaces later as a
/// not-found or access-denied error from the API.
///
/// # Examples
///
/// ```
/// use drive_folder::url_parser::extract_folder_id;
///
/// let id = extract_folder_id("https://drive.google.com/drive/folders/1AbCdEfGhIjKlMnOp?usp=sharing");
/// assert_eq!(id, "1AbCdEfGhIjKlMnOp");
///
/// assert_eq!(extract_folder_id("  demo "), "demo");
/// ```
pub fn extract_folder_id(input: &str) -> String {
    let trimmed = input.trim();

    if is_placeholder(trimmed) {
        return trimmed.to_string();
    }

    for regex in [&*FOLDER_PATH_REGEX, &*ID_PARAM_REGEX] {
        if let Some(id) = regex.captures(trimmed).and_then(|c| c.get(1)) {
            return id.as_str().to_string();
        }
    }

    trimmed.to_string()
}
