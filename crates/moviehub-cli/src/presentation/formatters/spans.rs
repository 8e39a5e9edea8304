use moviehub_browse::MatchSpan;
use owo_colors::OwoColorize;

/// Render spans as one line, styling search hits when color is on.
pub fn styled(spans: &[MatchSpan], color: bool) -> String {
    spans
        .iter()
        .map(|span| {
            if span.matched && color {
                format!("{}", span.text.red().bold())
            } else {
                span.text.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans() -> Vec<MatchSpan> {
        moviehub_browse::highlight("MovieHub notice", "hub")
    }

    #[test]
    fn test_plain_rendering_reconstructs_text() {
        assert_eq!(styled(&spans(), false), "MovieHub notice");
    }

    #[test]
    fn test_colored_rendering_wraps_hits() {
        let out = styled(&spans(), true);
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("Hub"));
    }
}
