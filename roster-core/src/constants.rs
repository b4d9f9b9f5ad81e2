//! Protocol constants for the roster service.
//!
//! The durable file format and the notification texts are fixed by the
//! deployed front-end and the existing repository contents; changing any
//! of these breaks compatibility with files already in the remote store.

// ═══════════════════════════════════════════════════════════════════════════════
// DURABLE FILE FORMAT
// ═══════════════════════════════════════════════════════════════════════════════

/// Line prefix identifying a record line in the durable file.
/// Lines without this marker are not part of the collection.
pub const ENTRY_MARKER: &str = "###";

/// Field separator within a record line.
pub const FIELD_SEPARATOR: char = ' ';

/// Number of space-separated tokens in a well-formed record line
/// (marker, name, expiration, ip).
pub const LINE_TOKEN_COUNT: usize = 4;

// ═══════════════════════════════════════════════════════════════════════════════
// DATES
// ═══════════════════════════════════════════════════════════════════════════════

/// Expiration dates are fixed-width ISO dates, so lexicographic and
/// chronological order coincide.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_has_no_separator() {
        assert!(!ENTRY_MARKER.contains(FIELD_SEPARATOR));
    }
}
