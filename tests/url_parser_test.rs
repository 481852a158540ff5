//! Tests for folder reference normalization.

use drive_folder::url_parser::{extract_folder_id, is_placeholder, DEMO_FOLDER};

mod extract_folder_link {
    use super::*;

    #[test]
    fn basic_folder_link() {
        let url = "https://drive.google.com/drive/folders/ABCDEFGHIJKLMNOPQ";
        assert_eq!(extract_folder_id(url), "ABCDEFGHIJKLMNOPQ");
    }

    #[test]
    fn folder_link_with_user() {
        let url = "https://drive.google.com/drive/u/0/folders/1abc123XYZ-_def456";
        assert_eq!(extract_folder_id(url), "1abc123XYZ-_def456");
    }

    #[test]
    fn folder_link_with_query_params() {
        let url = "https://drive.google.com/drive/folders/1abc123XYZ-_def456?usp=sharing";
        assert_eq!(extract_folder_id(url), "1abc123XYZ-_def456");
    }

    #[test]
    fn folder_link_with_surrounding_whitespace() {
        let url = "  https://drive.google.com/drive/folders/1abc123XYZ-_def456\n";
        assert_eq!(extract_folder_id(url), "1abc123XYZ-_def456");
    }
}

mod extract_id_param {
    use super::*;

    #[test]
    fn open_link() {
        let url = "https://drive.google.com/open?id=1abc123XYZ-_def456";
        assert_eq!(extract_folder_id(url), "1abc123XYZ-_def456");
    }

    #[test]
    fn id_after_other_params() {
        let url = "https://drive.google.com/open?usp=sharing&id=1abc123XYZ-_def456";
        assert_eq!(extract_folder_id(url), "1abc123XYZ-_def456");
    }

    #[test]
    fn id_param_too_short_is_returned_verbatim() {
        let url = "https://drive.google.com/open?id=short";
        assert_eq!(extract_folder_id(url), url);
    }
}

mod bare_ids {
    use super::*;

    #[test]
    fn bare_id_unchanged() {
        assert_eq!(extract_folder_id("1abc123XYZ-_def456"), "1abc123XYZ-_def456");
    }

    #[test]
    fn extraction_is_idempotent() {
        let once = extract_folder_id("https://drive.google.com/drive/folders/1abc123XYZ-_def456");
        assert_eq!(extract_folder_id(&once), once);
    }

    #[test]
    fn bare_id_is_trimmed() {
        assert_eq!(extract_folder_id("\t1abc123XYZ\n"), "1abc123XYZ");
    }

    #[test]
    fn unparseable_input_is_returned_trimmed() {
        assert_eq!(
            extract_folder_id(" https://example.com/folder/123 "),
            "https://example.com/folder/123"
        );
        assert_eq!(extract_folder_id("abc 123"), "abc 123");
    }
}

mod placeholders {
    use super::*;

    #[test]
    fn demo_is_returned_unchanged() {
        assert_eq!(extract_folder_id(DEMO_FOLDER), DEMO_FOLDER);
        assert!(is_placeholder(DEMO_FOLDER));
    }

    #[test]
    fn empty_and_whitespace() {
        assert_eq!(extract_folder_id(""), "");
        assert_eq!(extract_folder_id("   "), "");
        assert!(is_placeholder(""));
    }

    #[test]
    fn real_ids_are_not_placeholders() {
        assert!(!is_placeholder("1abc123XYZ-_def456"));
        assert!(!is_placeholder("Demo"));
    }
}
