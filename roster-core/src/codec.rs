//! Line codec for the durable file format.
//!
//! Each record occupies one line: `### <name> <expiration> <ip>`. Lines
//! without the marker prefix are not part of the collection and pass
//! through parsing untouched (they are dropped on the next full rewrite).

use crate::constants::{ENTRY_MARKER, FIELD_SEPARATOR};
use crate::types::Entry;

/// Parses one line of the durable file.
///
/// Returns `None` for lines that do not start with the marker and for
/// marked lines with fewer than four space-separated tokens. Tokens past
/// the fourth are ignored.
pub fn parse_line(line: &str) -> Option<Entry> {
    if !line.starts_with(ENTRY_MARKER) {
        return None;
    }
    let mut tokens = line.split(FIELD_SEPARATOR);
    let _marker = tokens.next()?;
    let name = tokens.next()?;
    let expiration = tokens.next()?;
    let ip = tokens.next()?;
    if name.is_empty() || expiration.is_empty() || ip.is_empty() {
        return None;
    }
    Some(Entry::new(name, expiration, ip))
}

/// Formats an entry as a durable-file line. Inverse of [`parse_line`] for
/// entries whose fields contain no spaces or newlines.
pub fn format_line(entry: &Entry) -> String {
    format!(
        "{ENTRY_MARKER}{sep}{}{sep}{}{sep}{}",
        entry.name,
        entry.expiration,
        entry.ip,
        sep = FIELD_SEPARATOR,
    )
}

/// Parses a full document into the ordered record collection, dropping
/// non-record lines.
pub fn parse_document(text: &str) -> Vec<Entry> {
    text.lines().filter_map(parse_line).collect()
}

/// Renders the record collection as a document: newline-joined lines, no
/// trailing newline. Stable inverse of [`parse_document`].
pub fn render_document(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(format_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn entry(name: &str, expiration: &str, ip: &str) -> Entry {
        Entry::new(name, expiration, ip)
    }

    #[test]
    fn test_parse_line_well_formed() {
        let parsed = parse_line("### alpha 2025-06-01 10.0.0.1").unwrap();
        assert_eq!(parsed, entry("alpha", "2025-06-01", "10.0.0.1"));
    }

    #[test_case("" ; "empty line")]
    #[test_case("# comment" ; "unmarked line")]
    #[test_case("alpha 2025-06-01 10.0.0.1" ; "missing marker")]
    #[test_case("###" ; "marker only")]
    #[test_case("### alpha" ; "one field")]
    #[test_case("### alpha 2025-06-01" ; "two fields")]
    fn test_parse_line_rejects(line: &str) {
        assert_eq!(parse_line(line), None);
    }

    #[test]
    fn test_parse_line_ignores_extra_tokens() {
        let parsed = parse_line("### alpha 2025-06-01 10.0.0.1 trailing junk").unwrap();
        assert_eq!(parsed, entry("alpha", "2025-06-01", "10.0.0.1"));
    }

    #[test]
    fn test_round_trip_law() {
        let original = entry("alpha", "2025-06-01", "10.0.0.1");
        assert_eq!(parse_line(&format_line(&original)), Some(original));
    }

    #[test]
    fn test_parse_document_preserves_order_and_drops_noise() {
        let text = "### alpha 2025-06-01 10.0.0.1\n\
                    this line is ignored\n\
                    ### beta 2025-07-01 10.0.0.2\n\
                    \n\
                    ### gamma 2025-08-01 10.0.0.3";
        let entries = parse_document(text);
        assert_eq!(
            entries,
            vec![
                entry("alpha", "2025-06-01", "10.0.0.1"),
                entry("beta", "2025-07-01", "10.0.0.2"),
                entry("gamma", "2025-08-01", "10.0.0.3"),
            ]
        );
    }

    #[test]
    fn test_document_round_trip() {
        let entries = vec![
            entry("alpha", "2025-06-01", "10.0.0.1"),
            entry("beta", "2025-07-01", "10.0.0.2"),
        ];
        let rendered = render_document(&entries);
        assert_eq!(
            rendered,
            "### alpha 2025-06-01 10.0.0.1\n### beta 2025-07-01 10.0.0.2"
        );
        assert!(!rendered.ends_with('\n'));
        assert_eq!(parse_document(&rendered), entries);
    }

    #[test]
    fn test_render_empty_document() {
        assert_eq!(render_document(&[]), "");
        assert!(parse_document("").is_empty());
    }
}
