use std::sync::OnceLock;

use regex::Regex;

fn disallowed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\p{L}\p{N}\s-]").expect("Invalid slug character regex"))
}

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("Invalid whitespace regex"))
}

fn hyphen_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"-+").expect("Invalid hyphen regex"))
}

/// Converts heading text into a slug suitable for file names.
///
/// 1. Trim and lowercase
/// 2. Drop everything except Unicode letters (`\p{L}`), numbers (`\p{N}`),
///    whitespace, and `-`
/// 3. Collapse whitespace runs into a single hyphen
/// 4. Collapse hyphen runs into a single hyphen
///
/// Non-Latin scripts are kept as letters, so `特殊文字 Test` becomes `特殊文字-test`.
/// Combining marks and symbols are not letters and are dropped.
///
/// # Examples
///
/// ```
/// use airules_core::slug::heading_to_slug;
///
/// assert_eq!(heading_to_slug("Hello  World!"), "hello-world");
/// assert_eq!(heading_to_slug("Multiple--Hyphens"), "multiple-hyphens");
/// ```
pub fn heading_to_slug(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let kept = disallowed().replace_all(&lowered, "");
    let hyphenated = whitespace_runs().replace_all(&kept, "-");
    hyphen_runs().replace_all(&hyphenated, "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_basic() {
        assert_eq!(heading_to_slug("Hello World"), "hello-world");
    }

    #[test]
    fn punctuation_removed_and_spaces_collapsed() {
        assert_eq!(heading_to_slug("Hello  World!"), "hello-world");
    }

    #[test]
    fn unicode_preserved() {
        assert_eq!(heading_to_slug("特殊文字 Test"), "特殊文字-test");
        assert_eq!(heading_to_slug("Héllo Wörld"), "héllo-wörld");
    }

    #[test]
    fn trims_surrounding_space() {
        assert_eq!(heading_to_slug(" Trim Space "), "trim-space");
        assert_eq!(heading_to_slug("   trim spaces   "), "trim-spaces");
    }

    #[test]
    fn hyphen_runs_collapse() {
        assert_eq!(heading_to_slug("Multiple--Hyphens"), "multiple-hyphens");
        assert_eq!(heading_to_slug("Multi--Hyphen"), "multi-hyphen");
        assert_eq!(heading_to_slug("a - b"), "a-b");
    }

    #[test]
    fn removed_punctuation_does_not_leave_gaps() {
        // Removal happens before whitespace collapsing.
        assert_eq!(heading_to_slug("TypeScript & JSX"), "typescript-jsx");
        assert_eq!(heading_to_slug("import.meta.glob"), "importmetaglob");
    }

    #[test]
    fn tabs_and_newlines_are_whitespace() {
        assert_eq!(heading_to_slug("Hello\tWorld\nAgain"), "hello-world-again");
    }

    #[test]
    fn digits_kept() {
        assert_eq!(heading_to_slug("Step 2: Configure v1.2"), "step-2-configure-v12");
    }

    #[test]
    fn is_idempotent() {
        let cases = [
            "Hello  World!",
            "特殊文字 Test",
            " Trim Space ",
            "Multiple--Hyphens",
            "🚀 Getting Started",
            "--lead and trail--",
        ];

        for input in cases {
            let once = heading_to_slug(input);
            assert_eq!(heading_to_slug(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn symbols_are_not_letters() {
        assert_eq!(heading_to_slug("Ⓐ Test"), "-test");
        assert_eq!(heading_to_slug("C++ © 2024"), "c-2024");
    }

    #[test]
    fn combining_marks_are_dropped() {
        assert_eq!(heading_to_slug("हिन्दी"), "हनद");
        assert_eq!(heading_to_slug("e\u{301}te\u{301}"), "ete");
    }
}
