use super::split_lines;

/// Sorts lines byte-wise ascending. Equal lines keep their relative order, and every output line ends
/// with `\n`, including the last one.
pub fn sort_lines(text: &[u8], buf: &mut Vec<u8>) {
    buf.clear();

    let mut lines = split_lines(text).collect::<Vec<_>>();
    lines.sort();

    buf.reserve(text.len() + 1);
    for line in &lines {
        buf.extend_from_slice(line);
        buf.push(b'\n');
    }

    if_tracing! {
        tracing::debug!(target = "sort", lines = lines.len(), output_len = buf.len(), "sort finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(text: &[u8]) -> Vec<u8> {
        let mut buf = vec![0xAA];
        sort_lines(text, &mut buf);
        buf
    }

    #[test]
    fn sorts_and_terminates_every_line() {
        assert_eq!(sorted(b"pear\napple\nfig"), b"apple\nfig\npear\n");
        assert_eq!(sorted(b"pear\napple\nfig\n"), b"apple\nfig\npear\n");
    }

    #[test]
    fn byte_order_puts_uppercase_first() {
        assert_eq!(sorted(b"b\nB\na\nA"), b"A\nB\na\nb\n");
    }

    #[test]
    fn empty_lines_sort_first() {
        assert_eq!(sorted(b"b\n\na"), b"\na\nb\n");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(sorted(b"").is_empty());
    }
}
