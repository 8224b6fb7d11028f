//! Strip Markdown code-fence decoration from model output

use regex::Regex;
use std::sync::OnceLock;

fn fence_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)```(?:json)?").unwrap())
}

/// Remove every code-fence marker (with or without a `json` language tag,
/// any case) and trim surrounding whitespace.
///
/// Models frequently wrap their JSON answer in a fenced block despite being
/// told not to. This is a pure transformation with no failure mode of its
/// own; content that still is not JSON surfaces later at parse time.
pub fn strip_code_fences(raw: &str) -> String {
    fence_pattern().replace_all(raw, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_fence_with_json_tag() {
        let raw = "```json\n[{\"nom\": \"Agnès\"}]\n```";
        assert_eq!(strip_code_fences(raw), "[{\"nom\": \"Agnès\"}]");
    }

    #[test]
    fn test_strips_fence_without_tag() {
        let raw = "```\n[]\n```";
        assert_eq!(strip_code_fences(raw), "[]");
    }

    #[test]
    fn test_tag_case_is_ignored() {
        let raw = "```JSON\n[]\n```";
        assert_eq!(strip_code_fences(raw), "[]");
        let raw = "```Json\n[]\n```";
        assert_eq!(strip_code_fences(raw), "[]");
    }

    #[test]
    fn test_clean_input_passes_through() {
        assert_eq!(strip_code_fences("[1, 2, 3]"), "[1, 2, 3]");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(strip_code_fences("  \n[]\n  "), "[]");
    }

    #[test]
    fn test_idempotent() {
        let inputs = ["```json\n[]\n```", "[]", "  []  ", "```\ntext\n```"];
        for raw in inputs {
            let once = strip_code_fences(raw);
            assert_eq!(strip_code_fences(&once), once);
        }
    }
}
