//! Common utilities for the upload handler: filename validation and
//! storage-key generation.

use htmldrop_core::constants::HTML_EXTENSION;
use uuid::Uuid;

/// A name passes validation iff its lowercased form ends with `.html`.
/// `page.HTML` passes; `page.htm` and `archive.html.zip` do not.
pub fn is_html_filename(filename: &str) -> bool {
    filename.to_lowercase().ends_with(HTML_EXTENSION)
}

/// Reduce a client-supplied filename to a single safe path segment.
///
/// Keeps only the final path component and maps characters outside
/// `[A-Za-z0-9._-]` to `_`. Ordinary names come through unchanged, including
/// ones with consecutive dots; the storage layer additionally rejects keys
/// with `..` path components.
pub fn sanitize_filename(filename: &str) -> String {
    const MAX_FILENAME_LENGTH: usize = 255;

    let path = std::path::Path::new(filename);
    let filename_only = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);

    filename_only
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Build the storage key: random token first, then a hyphen, then the
/// original file name. Uniqueness is probabilistic (UUIDv4, 122 random bits);
/// concurrent uploads of the same original name get distinct keys.
pub fn generate_storage_key(filename: &str) -> String {
    format!("{}-{}", Uuid::new_v4(), filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_suffix_is_case_insensitive() {
        assert!(is_html_filename("notes.html"));
        assert!(is_html_filename("page.HTML"));
        assert!(is_html_filename("page.Html"));
    }

    #[test]
    fn non_html_suffixes_are_rejected() {
        assert!(!is_html_filename("page.htm"));
        assert!(!is_html_filename("archive.html.zip"));
        assert!(!is_html_filename("notes.txt"));
        assert!(!is_html_filename("html"));
        assert!(!is_html_filename(""));
    }

    #[test]
    fn sanitize_filename_keeps_ordinary_names() {
        assert_eq!(sanitize_filename("notes.html"), "notes.html");
        assert_eq!(sanitize_filename("my-page_1.HTML"), "my-page_1.HTML");
        assert_eq!(sanitize_filename("notes..html"), "notes..html");
    }

    #[test]
    fn sanitize_filename_strips_path_components() {
        assert_eq!(sanitize_filename("../../etc/evil.html"), "evil.html");
        assert_eq!(sanitize_filename("/tmp/page.html"), "page.html");
    }

    #[test]
    fn sanitize_filename_replaces_unsafe_characters() {
        assert_eq!(sanitize_filename("my page!.html"), "my_page_.html");
    }

    #[test]
    fn storage_keys_are_token_first_and_distinct() {
        let a = generate_storage_key("report.html");
        let b = generate_storage_key("report.html");

        assert!(a.ends_with("-report.html"));
        assert!(b.ends_with("-report.html"));
        assert_ne!(a, b);
    }
}
