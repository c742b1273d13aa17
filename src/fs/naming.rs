//! Filename sanitization and manipulation.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Any run of whitespace collapses into a single underscore.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// Combining diaeresis as found in NFD-normalized names (e.g. from macOS).
const COMBINING_DIAERESIS: char = '\u{0308}';

/// Sanitize a filename for archival and sharing.
///
/// Whitespace runs become `_`, German umlauts and `ß` are transliterated
/// (`ä` -> `ae`, `ß` -> `ss`, ...) and the reserved symbols `: ? / \` become
/// `-`. The function is pure and idempotent; clean names come back unchanged.
pub fn sanitize_filename(name: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(name, "_");

    let mut sanitized = String::with_capacity(collapsed.len() + 4);
    let mut chars = collapsed.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            'ä' => sanitized.push_str("ae"),
            'ö' => sanitized.push_str("oe"),
            'ü' => sanitized.push_str("ue"),
            'Ä' => sanitized.push_str("Ae"),
            'Ö' => sanitized.push_str("Oe"),
            'Ü' => sanitized.push_str("Ue"),
            'ß' => sanitized.push_str("ss"),
            ':' | '?' | '/' | '\\' => sanitized.push('-'),
            'a' | 'o' | 'u' | 'A' | 'O' | 'U' if chars.peek() == Some(&COMBINING_DIAERESIS) => {
                chars.next();
                sanitized.push(c);
                sanitized.push('e');
            }
            c => sanitized.push(c),
        }
    }

    sanitized
}

/// Check whether sanitizing would change the name (i.e. a rename is due).
pub fn needs_sanitizing(name: &str) -> bool {
    sanitize_filename(name) != name
}

/// Lowercased extension of a filename, without the dot.
pub fn extension_lowercase(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
}

/// Numbered variant of `name`, with the counter appended to the stem.
///
/// `report.pdf` becomes `report_1.pdf`, `README` becomes `README_1`.
pub fn numbered_filename(name: &str, counter: u32) -> String {
    let path = Path::new(name);
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or(name);

    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}_{}.{}", stem, counter, ext),
        None => format!("{}_{}", stem, counter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_clean(name: &str) {
        assert!(!name.chars().any(char::is_whitespace), "whitespace in {name:?}");
        assert!(
            !name.contains(['ä', 'ö', 'ü', 'Ä', 'Ö', 'Ü', 'ß', COMBINING_DIAERESIS]),
            "umlaut in {name:?}"
        );
        assert!(!name.contains([':', '?', '/', '\\']), "reserved symbol in {name:?}");
    }

    #[test]
    fn test_sanitize_whitespace() {
        assert_eq!(sanitize_filename("Report Q1.pptx"), "Report_Q1.pptx");
        assert_eq!(sanitize_filename("a  \t b.pdf"), "a_b.pdf");
        assert_eq!(sanitize_filename("line\nbreak.txt"), "line_break.txt");
    }

    #[test]
    fn test_sanitize_umlauts() {
        assert_eq!(sanitize_filename("Grüße.pdf"), "Gruesse.pdf");
        assert_eq!(sanitize_filename("Änderung Öl Übung.pdf"), "Aenderung_Oel_Uebung.pdf");
        assert_eq!(sanitize_filename("Ma\u{0308}rz.pdf"), "Maerz.pdf");
    }

    #[test]
    fn test_sanitize_reserved_symbols() {
        assert_eq!(sanitize_filename("a:b?c/d\\e.pdf"), "a-b-c-d-e.pdf");
        assert_eq!(sanitize_filename("Meeting 10:30?.pdf"), "Meeting_10-30-.pdf");
    }

    #[test]
    fn test_sanitize_clean_name_unchanged() {
        for name in ["notes.pdf", "Report_Q1.pdf", "archive", "ümlaut-free_ok.txt"] {
            let name = sanitize_filename(name);
            assert_eq!(sanitize_filename(&name), name);
        }
        assert_eq!(sanitize_filename("notes.pdf"), "notes.pdf");
        assert!(!needs_sanitizing("already-clean_name.PDF"));
        assert!(needs_sanitizing("not clean.pdf"));
    }

    #[test]
    fn test_sanitize_properties() {
        let samples = [
            "Report Q1.pptx",
            "  leading and trailing  ",
            "Größe: über? 1/2\\3.pdf",
            "U\u{0308}bersicht a\u{0308}.pdf",
            "tab\there\u{00A0}nbsp.pdf",
            "ßßß ÄÖÜ äöü",
            "_",
        ];

        for sample in samples {
            let once = sanitize_filename(sample);
            assert_clean(&once);
            assert_eq!(sanitize_filename(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_extension_lowercase() {
        assert_eq!(extension_lowercase("Deck.PPTX").as_deref(), Some("pptx"));
        assert_eq!(extension_lowercase("archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(extension_lowercase("Makefile"), None);
        assert_eq!(extension_lowercase(".hidden"), None);
    }

    #[test]
    fn test_numbered_filename() {
        assert_eq!(numbered_filename("a.pdf", 1), "a_1.pdf");
        assert_eq!(numbered_filename("a_b.pdf", 12), "a_b_12.pdf");
        assert_eq!(numbered_filename("archive.tar.gz", 2), "archive.tar_2.gz");
        assert_eq!(numbered_filename("README", 1), "README_1");
    }
}
