//! Line-oriented text operations. Input is treated as raw bytes split on `\n`, so files that are
//! not valid UTF-8 still work; lines are only converted (lossily) when rendered.

pub mod search;
pub mod sort;

pub use search::{render_matches, search_lines};
pub use sort::sort_lines;

/// Splits on `\n`. A trailing segment after the last newline counts as a line only if it is not empty,
/// so `"a\nb\n"` and `"a\nb"` both have two lines.
pub fn split_lines(text: &[u8]) -> impl Iterator<Item = &[u8]> + '_ {
    let skip = usize::from(text.is_empty());
    text.strip_suffix(b"\n")
        .unwrap_or(text)
        .split(|&byte| byte == b'\n')
        .skip(skip)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &[u8]) -> Vec<&[u8]> {
        split_lines(text).collect()
    }

    #[test]
    fn trailing_newline_is_not_a_line() {
        assert_eq!(collect(b"a\nb\n"), vec![&b"a"[..], b"b"]);
        assert_eq!(collect(b"a\nb"), vec![&b"a"[..], b"b"]);
    }

    #[test]
    fn interior_empty_lines_are_kept() {
        assert_eq!(collect(b"a\n\nb"), vec![&b"a"[..], b"", b"b"]);
        assert_eq!(collect(b"\n"), vec![&b""[..]]);
        assert_eq!(collect(b"\n\n"), vec![&b""[..], b""]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(collect(b"").is_empty());
    }
}
