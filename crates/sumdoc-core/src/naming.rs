//! File naming for generated documents.

use chrono::{DateTime, Local};
use uuid::Uuid;

/// Extension of generated documents (without the dot).
pub const DOCUMENT_EXTENSION: &str = "docx";

/// Characters rejected by common filesystem naming rules.
pub const FORBIDDEN_FILENAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// `strftime` layout of the timestamp embedded in file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Length of the random suffix appended after the timestamp.
pub const SUFFIX_LEN: usize = 12;

/// Remove every forbidden character from `title`.
///
/// Everything else is kept as is: whitespace, non-ASCII text and reserved
/// device names pass through, and a title made only of forbidden
/// characters becomes an empty string.
pub fn sanitize_filename(title: &str) -> String {
    title
        .chars()
        .filter(|c| !FORBIDDEN_FILENAME_CHARS.contains(c))
        .collect()
}

/// Random lowercase hex suffix of [`SUFFIX_LEN`] characters.
pub fn random_suffix() -> String {
    let mut simple = Uuid::new_v4().simple().to_string();
    simple.truncate(SUFFIX_LEN);
    simple
}

/// Build `<sanitized-title>_<YYYYMMDD_HHMMSS>_<suffix>.docx`.
///
/// `title` is sanitized here, so callers may pass the raw generated title.
pub fn document_file_name(title: &str, created_at: &DateTime<Local>, suffix: &str) -> String {
    format!(
        "{}_{}_{}.{}",
        sanitize_filename(title),
        created_at.format(TIMESTAMP_FORMAT),
        suffix,
        DOCUMENT_EXTENSION
    )
}

/// True when `name` can only refer to an entry directly inside a directory.
///
/// Rejects empty names, the `.`/`..` entries and anything containing a path
/// separator or a NUL byte.
pub fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn sanitize_removes_every_forbidden_character() {
        assert_eq!(sanitize_filename("A/B:C"), "ABC");
        assert_eq!(sanitize_filename(r#"<a>:"b"/\c|?*d"#), "abcd");
    }

    #[test]
    fn sanitize_keeps_everything_else() {
        assert_eq!(sanitize_filename("Hello World"), "Hello World");
        assert_eq!(sanitize_filename("Ação & Reação. CON"), "Ação & Reação. CON");
        assert_eq!(sanitize_filename("  tabs\tand\nnewlines "), "  tabs\tand\nnewlines ");
    }

    #[test]
    fn sanitize_may_produce_empty_string() {
        assert_eq!(sanitize_filename(""), "");
        assert_eq!(sanitize_filename("???"), "");
    }

    #[test]
    fn file_name_layout() {
        let at = Local.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
        assert_eq!(
            document_file_name("Notas: reunião", &at, "0123456789ab"),
            "Notas reunião_20240305_070809_0123456789ab.docx"
        );
    }

    #[test]
    fn random_suffix_is_hex_of_fixed_length() {
        let suffix = random_suffix();
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(suffix, random_suffix());
    }

    #[test]
    fn plain_file_names() {
        assert!(is_plain_file_name("Resumo_20240101_000000_abc.docx"));
        assert!(is_plain_file_name("..hidden"));
        assert!(!is_plain_file_name(""));
        assert!(!is_plain_file_name(".."));
        assert!(!is_plain_file_name("../secret"));
        assert!(!is_plain_file_name("a\\b"));
    }
}
