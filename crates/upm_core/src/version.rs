//! Version string normalization.
//!
//! Users type versions free-form. Before a version reaches `package.json` it
//! is forced into exactly three dot-separated segments:
//!
//! - segment 0 is the first element, or `1` when empty
//! - segment 1 is the second element, or `0` when missing or empty
//! - segment 2 is every remaining element rejoined with `.`, or `0` when
//!   there are fewer than three elements
//!
//! Suffixes such as `1.0.0-preview-3.1` therefore survive untouched.

/// Default for the major segment.
pub const DEFAULT_MAJOR: &str = "1";
/// Default for the minor and patch segments.
pub const DEFAULT_MINOR: &str = "0";
pub const DEFAULT_PATCH: &str = "0";

/// Split a raw version into its three canonical segments.
///
/// Splitting always yields at least one element (an empty string splits
/// into one empty element), so the major segment always has an input.
pub fn normalize_segments(raw: &str) -> [String; 3] {
    let parts: Vec<&str> = raw.split('.').collect();

    let major = parts
        .first()
        .filter(|s| !s.is_empty())
        .copied()
        .unwrap_or(DEFAULT_MAJOR);
    let minor = parts
        .get(1)
        .filter(|s| !s.is_empty())
        .copied()
        .unwrap_or(DEFAULT_MINOR);
    let patch = if parts.len() > 2 {
        parts[2..].join(".")
    } else {
        DEFAULT_PATCH.to_string()
    };

    [major.to_string(), minor.to_string(), patch]
}

/// Normalize a raw version into its display and storage form.
///
/// Spaces are replaced with hyphens after the segments are joined.
pub fn normalize(raw: &str) -> String {
    normalize_segments(raw).join(".").replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_defaults_everything() {
        assert_eq!(normalize(""), "1.0.0");
    }

    #[test]
    fn test_missing_segments_are_filled() {
        assert_eq!(normalize("2"), "2.0.0");
        assert_eq!(normalize("2."), "2.0.0");
        assert_eq!(normalize("2.5"), "2.5.0");
        assert_eq!(normalize(".5"), "1.5.0");
    }

    #[test]
    fn test_overflow_segments_are_kept_in_patch() {
        assert_eq!(normalize("1.2.3.4"), "1.2.3.4");
        assert_eq!(normalize("1.0.0-preview-3.1"), "1.0.0-preview-3.1");

        let segments = normalize_segments("1.0.0-preview-3.1");
        assert_eq!(segments[2], "0-preview-3.1");
    }

    #[test]
    fn test_empty_patch_is_not_defaulted() {
        // Three elements were produced, so the patch is taken verbatim.
        assert_eq!(normalize("1.2."), "1.2.");
    }

    #[test]
    fn test_spaces_become_hyphens() {
        assert_eq!(normalize("1.0.0 preview"), "1.0.0-preview");
        assert_eq!(normalize("1 .2"), "1-.2.0");
    }

    #[test]
    fn test_short_inputs_always_yield_three_segments() {
        for raw in ["", "7", "7.", ".", "7.8", ".8", "a.b"] {
            let normalized = normalize(raw);
            assert_eq!(normalized.split('.').count(), 3, "{:?} -> {:?}", raw, normalized);

            let segments = normalize_segments(raw);
            assert!(!segments[0].is_empty());
            assert!(!segments[1].is_empty());
            assert!(!segments[2].is_empty());
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "",
            "2",
            "2.",
            "1.2.3",
            "1.2.3.4",
            "..",
            "1.2.",
            "1.0.0-preview-3.1",
            "3 beta",
            "x.y.z.w.v",
        ];

        for raw in inputs {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", raw);
        }
    }
}
