//! Note summary generation.
//!
//! When a note is created or replaced without an explicit summary, a preview
//! string is derived from the full content: short content passes through
//! unchanged, longer content is cut at the last sentence boundary when one
//! falls late enough in the prefix, otherwise hard-truncated with an
//! ellipsis marker.

/// Default maximum summary length, in characters.
pub const DEFAULT_SUMMARY_LENGTH: usize = 200;

/// Marker appended when content is truncated mid-sentence.
pub const ELLIPSIS: &str = "...";

/// Fraction of `max_length` a sentence boundary must pass for the summary
/// to be cut there instead of at the raw prefix.
const SENTENCE_CUTOFF_RATIO: f64 = 0.7;

/// Derive a summary from note content, capped at `max_length` characters.
///
/// - Content at or under the limit is returned unchanged.
/// - Otherwise the `max_length`-character prefix is scanned for the last
///   `.`, `!` or `?`. If that mark sits past 70% of `max_length`, the
///   summary is the prefix truncated through (and including) the mark,
///   preserving a complete sentence.
/// - Failing that, the summary is the raw prefix with [`ELLIPSIS`] appended.
///
/// Positions are counted in characters, not bytes, so multi-byte content
/// never splits a codepoint.
pub fn generate_summary(content: &str, max_length: usize) -> String {
    if content.chars().count() <= max_length {
        return content.to_string();
    }

    // Walk the prefix once, tracking its byte length and the byte end of
    // the last sentence-ending mark along with that mark's char index.
    let mut prefix_end = 0;
    let mut sentence_end = None;
    for (char_idx, (byte_idx, c)) in content.char_indices().enumerate() {
        if char_idx == max_length {
            break;
        }
        prefix_end = byte_idx + c.len_utf8();
        if matches!(c, '.' | '!' | '?') {
            sentence_end = Some((char_idx, prefix_end));
        }
    }

    match sentence_end {
        Some((char_idx, byte_end))
            if char_idx as f64 > max_length as f64 * SENTENCE_CUTOFF_RATIO =>
        {
            content[..byte_end].to_string()
        }
        _ => format!("{}{ELLIPSIS}", &content[..prefix_end]),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_returned_unchanged() {
        let content = "Hello world. This is great!";
        assert_eq!(generate_summary(content, DEFAULT_SUMMARY_LENGTH), content);
    }

    #[test]
    fn content_exactly_at_limit_returned_unchanged() {
        let content = "x".repeat(200);
        assert_eq!(generate_summary(&content, 200), content);
    }

    #[test]
    fn cuts_at_late_sentence_boundary() {
        // Period at char index 180, past 70% of 200: keep through the period.
        let mut content = "y".repeat(180);
        content.push('.');
        content.push_str(&"z".repeat(69));
        assert_eq!(content.chars().count(), 250);

        let summary = generate_summary(&content, 200);
        assert_eq!(summary.chars().count(), 181);
        assert_eq!(summary, &content[..181]);
        assert!(summary.ends_with('.'));
    }

    #[test]
    fn no_punctuation_appends_ellipsis() {
        let content = "w".repeat(250);
        let summary = generate_summary(&content, 200);
        assert_eq!(summary, format!("{}{ELLIPSIS}", "w".repeat(200)));
    }

    #[test]
    fn early_punctuation_ignored() {
        // Period at char index 10 is well before 70% of 200: raw prefix wins.
        let mut content = "a".repeat(10);
        content.push('.');
        content.push_str(&"b".repeat(300));

        let summary = generate_summary(&content, 200);
        assert!(summary.ends_with(ELLIPSIS));
        assert_eq!(summary.chars().count(), 200 + ELLIPSIS.chars().count());
    }

    #[test]
    fn latest_of_three_marks_wins() {
        // '!' at 150, '?' at 185: the question mark is the cut point.
        let mut content = "c".repeat(150);
        content.push('!');
        content.push_str(&"d".repeat(34));
        content.push('?');
        content.push_str(&"e".repeat(100));

        let summary = generate_summary(&content, 200);
        assert!(summary.ends_with('?'));
        assert_eq!(summary.chars().count(), 186);
    }

    #[test]
    fn multibyte_content_never_splits_codepoints() {
        let content = "é".repeat(250);
        let summary = generate_summary(&content, 200);
        assert_eq!(summary.chars().count(), 200 + ELLIPSIS.chars().count());
        assert!(summary.starts_with('é'));
    }

    #[test]
    fn boundary_exactly_at_ratio_not_kept() {
        // Char index 140 == 70% of 200 exactly; the comparison is strict.
        let mut content = "f".repeat(140);
        content.push('.');
        content.push_str(&"g".repeat(200));

        let summary = generate_summary(&content, 200);
        assert!(summary.ends_with(ELLIPSIS));
    }
}
