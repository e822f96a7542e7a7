//! Input validation helpers
//!
//! Text length limits and normalization shared by the catalog validator.
//! SQLite TEXT has no built-in length enforcement, so limits live here.

// ── Text length limits ──────────────────────────────────────────────

/// Product codes (SKU-like identifiers)
pub const MAX_CODE_LEN: usize = 64;

/// Entity names
pub const MAX_NAME_LEN: usize = 200;

/// Free-form descriptions
pub const MAX_DESCRIPTION_LEN: usize = 2000;

// ── Helpers ─────────────────────────────────────────────────────────

/// Trimmed value of a required text field; `None` when missing or blank.
pub fn required_text(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Trimmed value of an optional text field; blank collapses to `None`.
pub fn optional_text(value: Option<&str>) -> Option<&str> {
    required_text(value)
}

/// Length check in characters, not bytes.
pub fn exceeds(value: &str, max_len: usize) -> bool {
    value.chars().count() > max_len
}

/// Identifier that is present and not the `0` placeholder.
pub fn nonzero_id(id: Option<i64>) -> Option<i64> {
    id.filter(|id| *id != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert_eq!(required_text(Some("  SKU1 ")), Some("SKU1"));
        assert_eq!(required_text(Some("   ")), None);
        assert_eq!(required_text(None), None);
    }

    #[test]
    fn test_exceeds_counts_chars() {
        // 3 chars, 6 bytes
        assert!(!exceeds("äöü", 3));
        assert!(exceeds("abcd", 3));
    }

    #[test]
    fn test_nonzero_id() {
        assert_eq!(nonzero_id(Some(0)), None);
        assert_eq!(nonzero_id(Some(7)), Some(7));
        assert_eq!(nonzero_id(None), None);
    }
}
