use std::{
    borrow::Cow,
    fmt::{self, Write},
};

use super::split_lines;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch<'a> {
    /// 1-based
    pub line_number: usize,
    pub line: &'a [u8],
}

impl SearchMatch<'_> {
    pub fn line_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.line)
    }
}

impl fmt::Debug for SearchMatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchMatch")
            .field("line_number", &self.line_number)
            .field("line", &self.line_lossy())
            .finish()
    }
}

/// Every line containing `keyword`, in file order. An empty keyword matches every line.
pub fn search_lines<'a>(text: &'a [u8], keyword: &[u8]) -> Vec<SearchMatch<'a>> {
    let matches = split_lines(text)
        .enumerate()
        .filter(|(_, line)| contains(line, keyword))
        .map(|(i, line)| SearchMatch { line_number: i + 1, line })
        .collect::<Vec<_>>();

    if_tracing! {
        tracing::debug!(target = "search", input_len = text.len(), matches = matches.len(), "search finished");
    }
    matches
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}

pub fn render_matches(matches: &[SearchMatch<'_>]) -> String {
    if matches.is_empty() {
        return "No matches found.\n".to_string();
    }

    let mut out = String::from("Search results:\n");
    for found in matches {
        // writing into a String cannot fail
        let _ = writeln!(out, "{}: {}", found.line_number, found.line_lossy());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &[u8] = b"alpha beta\ngamma\nbeta delta\n\nepsilon beta";

    #[test]
    fn finds_numbered_lines() {
        let found = search_lines(TEXT, b"beta");
        let numbers = found.iter().map(|m| m.line_number).collect::<Vec<_>>();
        assert_eq!(numbers, vec![1, 3, 5]);
        assert_eq!(found[2].line, b"epsilon beta");
    }

    #[test]
    fn renders_results() {
        let found = search_lines(TEXT, b"gamma");
        assert_eq!(render_matches(&found), "Search results:\n2: gamma\n");
        assert_eq!(render_matches(&search_lines(TEXT, b"zeta")), "No matches found.\n");
    }

    #[test]
    fn empty_lines_still_count() {
        let found = search_lines(b"\n\nneedle", b"needle");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].line_number, 3);
    }

    #[test]
    fn non_utf8_lines_match_on_bytes() {
        let text = b"ok\n\xff\xfeneedle\xff";
        let found = search_lines(text, b"needle");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].line_number, 2);
        assert_eq!(render_matches(&found), "Search results:\n2: \u{FFFD}\u{FFFD}needle\u{FFFD}\n");
    }

    #[test]
    fn empty_text_has_no_matches() {
        assert!(search_lines(b"", b"x").is_empty());
    }
}
