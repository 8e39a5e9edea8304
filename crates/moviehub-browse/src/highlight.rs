use serde::Serialize;

/// One run of text in a highlighted rendering, flagged when it matched the
/// search term. Concatenating the spans of a highlight in order reproduces
/// the input exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSpan {
    pub text: String,
    pub matched: bool,
}

impl MatchSpan {
    fn plain(text: String) -> Self {
        Self {
            text,
            matched: false,
        }
    }

    fn hit(text: String) -> Self {
        Self {
            text,
            matched: true,
        }
    }
}

/// Case-insensitive needle match at `pos` of a char slice.
///
/// Comparison lowercases both sides char by char instead of lowercasing the
/// whole string, so byte offsets into the original text never shift.
fn matches_at(haystack: &[char], pos: usize, needle: &[char]) -> bool {
    haystack.len() - pos >= needle.len()
        && haystack[pos..pos + needle.len()]
            .iter()
            .zip(needle.iter())
            .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
}

/// Case-insensitive substring containment. An empty needle matches anything.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack: Vec<char> = haystack.chars().collect();
    let needle: Vec<char> = needle.chars().collect();
    if needle.len() > haystack.len() {
        return false;
    }
    (0..=haystack.len() - needle.len()).any(|pos| matches_at(&haystack, pos, &needle))
}

/// Split `text` on case-insensitive occurrences of `term` into ordered
/// spans, marking each occurrence. All original characters are preserved;
/// an empty term yields the whole text as a single unmatched span.
pub fn highlight(text: &str, term: &str) -> Vec<MatchSpan> {
    if term.is_empty() || text.is_empty() {
        return vec![MatchSpan::plain(text.to_string())];
    }

    let chars: Vec<char> = text.chars().collect();
    let needle: Vec<char> = term.chars().collect();

    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut pos = 0;

    while pos < chars.len() {
        if matches_at(&chars, pos, &needle) {
            if !plain.is_empty() {
                spans.push(MatchSpan::plain(std::mem::take(&mut plain)));
            }
            spans.push(MatchSpan::hit(chars[pos..pos + needle.len()].iter().collect()));
            pos += needle.len();
        } else {
            plain.push(chars[pos]);
            pos += 1;
        }
    }

    if !plain.is_empty() {
        spans.push(MatchSpan::plain(plain));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(spans: &[MatchSpan]) -> String {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_contains_ci_basics() {
        assert!(contains_ci("MovieHub notice", "hub"));
        assert!(contains_ci("MovieHub notice", "HUB"));
        assert!(contains_ci("anything", ""));
        assert!(!contains_ci("short", "longer than haystack"));
        assert!(!contains_ci("MovieHub", "cinema"));
    }

    #[test]
    fn test_highlight_marks_all_occurrences() {
        let spans = highlight("abcABCabc", "abc");
        assert_eq!(spans.len(), 3);
        assert!(spans.iter().all(|s| s.matched));
        assert_eq!(reconstruct(&spans), "abcABCabc");
    }

    #[test]
    fn test_highlight_preserves_original_case() {
        let spans = highlight("MovieHub notice", "moviehub");
        assert_eq!(
            spans,
            vec![
                MatchSpan::hit("MovieHub".to_string()),
                MatchSpan::plain(" notice".to_string()),
            ]
        );
    }

    #[test]
    fn test_highlight_empty_term_is_identity() {
        let spans = highlight("unchanged text", "");
        assert_eq!(spans, vec![MatchSpan::plain("unchanged text".to_string())]);
    }

    #[test]
    fn test_highlight_no_match() {
        let spans = highlight("no hits here", "zzz");
        assert_eq!(spans, vec![MatchSpan::plain("no hits here".to_string())]);
    }

    #[test]
    fn test_highlight_reconstruction_property() {
        let cases = [
            ("", ""),
            ("", "term"),
            ("plain", ""),
            ("MovieHub notice A", "notice"),
            ("ababab", "aba"),
            ("한글 제목 테스트", "제목"),
            ("Ünïcode CASE ünïcode", "ünïcode"),
        ];
        for (text, term) in cases {
            assert_eq!(reconstruct(&highlight(text, term)), text, "term={:?}", term);
        }
    }

    #[test]
    fn test_highlight_overlapping_candidates_scan_left_to_right() {
        // "aba" in "ababa" matches at 0; scanning resumes after it
        let spans = highlight("ababa", "aba");
        assert_eq!(
            spans,
            vec![
                MatchSpan::hit("aba".to_string()),
                MatchSpan::plain("ba".to_string()),
            ]
        );
    }
}
