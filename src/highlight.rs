//! Query highlighting inside item labels
//!
//! Only the first case-insensitive occurrence of the trimmed query is
//! marked. Sources that match fuzzily may return labels with no contiguous
//! occurrence; those render plain.

use ratatui::style::Style;
use ratatui::text::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightedText<'a> {
    pub before: &'a str,
    pub matched: &'a str,
    pub after: &'a str,
}

/// Split `text` around the first occurrence of `query`, ignoring case
pub fn highlight_match<'a>(text: &'a str, query: &str) -> Option<HighlightedText<'a>> {
    let needle: Vec<char> = query.trim().chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return None;
    }

    text.char_indices().find_map(|(start, _)| {
        let len = match_len_at(&text[start..], &needle)?;
        Some(HighlightedText {
            before: &text[..start],
            matched: &text[start..start + len],
            after: &text[start + len..],
        })
    })
}

/// Byte length of the prefix of `haystack` that lowercases to `needle`
fn match_len_at(haystack: &str, needle: &[char]) -> Option<usize> {
    let mut lowered: Vec<char> = Vec::with_capacity(needle.len());
    let mut consumed = 0;

    for (idx, ch) in haystack.char_indices() {
        if lowered.len() >= needle.len() {
            break;
        }
        lowered.extend(ch.to_lowercase());
        consumed = idx + ch.len_utf8();
    }

    (lowered == needle).then_some(consumed)
}

/// Spans for `text` with the match drawn in `highlight` over `base`
pub fn highlight_spans<'a>(text: &'a str, query: &str, base: Style, highlight: Style) -> Vec<Span<'a>> {
    match highlight_match(text, query) {
        None => vec![Span::styled(text, base)],
        Some(parts) => {
            let mut spans = Vec::with_capacity(3);
            if !parts.before.is_empty() {
                spans.push(Span::styled(parts.before, base));
            }
            spans.push(Span::styled(parts.matched, highlight));
            if !parts.after.is_empty() {
                spans.push(Span::styled(parts.after, base));
            }
            spans
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Modifier;

    #[test]
    fn test_empty_query_has_no_highlight() {
        assert_eq!(highlight_match("Apple", ""), None);
        assert_eq!(highlight_match("Apple", "   "), None);
    }

    #[test]
    fn test_prefix_match() {
        let parts = highlight_match("Apple", "ap").unwrap();
        assert_eq!(parts.before, "");
        assert_eq!(parts.matched, "Ap");
        assert_eq!(parts.after, "ple");
    }

    #[test]
    fn test_middle_match_keeps_original_case() {
        let parts = highlight_match("Luke Skywalker", "SKY").unwrap();
        assert_eq!(parts.before, "Luke ");
        assert_eq!(parts.matched, "Sky");
        assert_eq!(parts.after, "walker");
    }

    #[test]
    fn test_query_is_trimmed() {
        let parts = highlight_match("Cherry", " err ").unwrap();
        assert_eq!(parts.matched, "err");
    }

    #[test]
    fn test_no_contiguous_match() {
        assert_eq!(highlight_match("Grape", "gp"), None);
    }

    #[test]
    fn test_multibyte_labels() {
        let parts = highlight_match("Crème brûlée", "BRÛ").unwrap();
        assert_eq!(parts.before, "Crème ");
        assert_eq!(parts.matched, "brû");
        assert_eq!(parts.after, "lée");
    }

    #[test]
    fn test_only_first_occurrence() {
        let parts = highlight_match("banana", "an").unwrap();
        assert_eq!(parts.before, "b");
        assert_eq!(parts.after, "ana");
    }

    #[test]
    fn test_spans_without_match() {
        let spans = highlight_spans("Apple", "zz", Style::default(), Style::default());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "Apple");
    }

    #[test]
    fn test_spans_with_match() {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let spans = highlight_spans("Apricot", "ric", Style::default(), bold);

        let contents: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(contents, vec!["Ap", "ric", "ot"]);
        assert_eq!(spans[1].style, bold);
    }
}
