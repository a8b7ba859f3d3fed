use log::trace;
use regex::Regex;
use std::sync::LazyLock;

/// Lines shorter than this (terminator included) cannot hold a name and a value
pub const MIN_LINE_LEN: usize = 4;

/// Section rule printed between statistics dumps
pub const SEPARATOR: &str = "---------";

// whitespace, then '#', then the rest of the line
static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+#[\s\S]*").unwrap());

/// A decoded line: statistic name plus its raw value tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry<'a> {
    pub name: &'a str,
    pub values: Vec<&'a str>,
}

/// Decode the line at `index` of a file with `total` lines.
/// Returns None for banners, separators, short lines and lines without a value.
pub fn decode_line(line: &str, index: usize, total: usize) -> Option<RawEntry<'_>> {
    if index == 0 || index + 1 >= total {
        trace!("Skip line {index}: banner");
        return None;
    }
    if line.contains(SEPARATOR) {
        trace!("Skip line {index}: separator");
        return None;
    }
    if line.len() < MIN_LINE_LEN {
        trace!("Skip line {index}: too short");
        return None;
    }

    // strip comment, keeping everything before the marker
    let content = match COMMENT.find(line) {
        Some(m) => &line[..m.start()],
        None => line,
    };

    let mut tokens = content.split_whitespace();
    let name = tokens.next()?;
    let values: Vec<&str> = tokens.collect();
    if values.is_empty() {
        trace!("Skip line {index}: no value for {name}");
        return None;
    }
    Some(RawEntry { name, values })
}

/// Decode every line of a report, in input order
pub fn decode_lines(text: &str) -> impl Iterator<Item = RawEntry<'_>> {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    let total = lines.len();
    lines
        .into_iter()
        .enumerate()
        .filter_map(move |(index, line)| decode_line(line, index, total))
}

#[cfg(test)]
mod tests {
    use crate::{RawEntry, decode_line, decode_lines};

    #[test]
    fn test_banner_lines() {
        let line = "system.cpu.ipc 1.5\n";
        assert_eq!(decode_line(line, 0, 3), None);
        assert_eq!(decode_line(line, 2, 3), None);
        assert!(decode_line(line, 1, 3).is_some());
        // a single line is both header and footer
        assert_eq!(decode_line(line, 0, 1), None);
    }

    #[test]
    fn test_separator() {
        let line = "---------- Begin Simulation Statistics ----------\n";
        assert_eq!(decode_line(line, 1, 3), None);
        assert_eq!(decode_line("a ----------------- 3\n", 1, 3), None);
    }

    #[test]
    fn test_short_lines() {
        assert_eq!(decode_line("\n", 1, 3), None);
        assert_eq!(decode_line("a 1", 1, 3), None);
        assert_eq!(
            decode_line("a 1\n", 1, 3),
            Some(RawEntry {
                name: "a",
                values: vec!["1"]
            })
        );
    }

    #[test]
    fn test_comment_stripping() {
        assert_eq!(
            decode_line("x 7 # trailing note\n", 1, 3),
            Some(RawEntry {
                name: "x",
                values: vec!["7"]
            })
        );
        assert_eq!(
            decode_line(
                "system.cpu.ipc                    1.2345                    # avg (Count)\n",
                1,
                3
            ),
            Some(RawEntry {
                name: "system.cpu.ipc",
                values: vec!["1.2345"]
            })
        );
        // '#' inside a token is not a comment
        assert_eq!(
            decode_line("x a#b 2\n", 1, 3),
            Some(RawEntry {
                name: "x",
                values: vec!["a#b", "2"]
            })
        );
    }

    #[test]
    fn test_name_only() {
        assert_eq!(decode_line("lonely\n", 1, 3), None);
        assert_eq!(decode_line("lonely # 1 2 3\n", 1, 3), None);
        assert_eq!(decode_line("       \n", 1, 3), None);
    }

    #[test]
    fn test_vector() {
        assert_eq!(
            decode_line("foo 1 2 3 # dist\n", 1, 3),
            Some(RawEntry {
                name: "foo",
                values: vec!["1", "2", "3"]
            })
        );
    }

    #[test]
    fn test_decode_lines() {
        let text = "header a 1\nb 2\n\n---------\nc 3 4\nfooter d 5\n";
        let entries: Vec<RawEntry> = decode_lines(text).collect();
        assert_eq!(
            entries,
            vec![
                RawEntry {
                    name: "b",
                    values: vec!["2"]
                },
                RawEntry {
                    name: "c",
                    values: vec!["3", "4"]
                },
            ]
        );
        assert_eq!(decode_lines("").count(), 0);
    }
}
