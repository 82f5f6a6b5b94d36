//! # Attribute Matching and Value Extraction
//!
//! A `Main-Class` line looks like this, where `|` marks column 0:
//!
//! ```text
//! |Main-Class: name.of.start.class\n
//! ```
//!
//! The attribute name must start the line exactly. The value is the first run
//! of non-whitespace bytes after the colon; anything after it on the line is
//! ignored. Continuation lines are not joined, so a class name split across
//! physical lines is cut at the first line break:
//!
//! ```text
//! |Main-Class: name.of.sta\n
//! | rt.class\n
//! ```

use std::ops::Range;

use crate::types::{MainClass, MalformedManifest};

/// Attribute name matched at the start of each line (case-sensitive)
pub const MAIN_CLASS_ATTRIBUTE: &[u8] = b"Main-Class:";

/// Whitespace as understood by C `isspace` in the default locale
///
/// Unlike [`u8::is_ascii_whitespace`], this includes vertical tab (`0x0B`).
pub fn is_space(byte: u8) -> bool
{
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// True if `line` starts with `Main-Class:` at column 0
pub fn matches_main_class(line: &[u8]) -> bool
{
    line.starts_with(MAIN_CLASS_ATTRIBUTE)
}

/// Locate the attribute value in `line`, starting the search at `offset`
///
/// Leading whitespace is skipped and the value ends at the next whitespace
/// byte or the end of the line. An empty range means the value is missing.
///
/// ## Example
///
/// ```rust
/// use jarlaunch_core::manifest::attribute::value_span;
///
/// let line = b"Main-Class:   com.acme.Main   \n";
/// let span = value_span(line, 11);
/// assert_eq!(&line[span], b"com.acme.Main");
///
/// assert!(value_span(b"Main-Class: \t\n", 11).is_empty());
/// ```
pub fn value_span(line: &[u8], offset: usize) -> Range<usize>
{
    let offset = offset.min(line.len());

    let start = line[offset..]
        .iter()
        .position(|&b| !is_space(b))
        .map_or(line.len(), |i| offset + i);

    let end = line[start..]
        .iter()
        .position(|&b| is_space(b))
        .map_or(line.len(), |i| start + i);

    start..end
}

/// Extract the class name from a line already known to match
///
/// `line_number` is only used to describe a malformed value.
///
/// ## Errors
///
/// - `MissingClassName` if nothing but whitespace follows the attribute name
/// - `InvalidEncoding` if the value is not UTF-8
pub fn extract_main_class(line: &[u8], line_number: usize) -> Result<MainClass, MalformedManifest>
{
    let span = value_span(line, MAIN_CLASS_ATTRIBUTE.len());
    if span.is_empty() {
        return Err(MalformedManifest::MissingClassName { line: line_number });
    }

    let value = std::str::from_utf8(&line[span]).map_err(|_| MalformedManifest::InvalidEncoding { line: line_number })?;
    Ok(MainClass::from(value))
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_matches_only_at_column_zero()
    {
        assert!(matches_main_class(b"Main-Class: a.B\n"));
        assert!(matches_main_class(b"Main-Class:"));
        assert!(!matches_main_class(b" Main-Class: a.B\n"));
        assert!(!matches_main_class(b"main-class: a.B\n"));
        assert!(!matches_main_class(b"Main-Class : a.B\n"));
        assert!(!matches_main_class(b"Main-Class"));
        assert!(!matches_main_class(b"X-Main-Class: a.B\n"));
    }

    #[test]
    fn test_is_space_matches_c_isspace()
    {
        for b in [b' ', b'\t', b'\n', 0x0B, 0x0C, b'\r'] {
            assert!(is_space(b), "0x{b:02x} should be whitespace");
        }
        assert!(!is_space(b'a'));
        assert!(!is_space(b'.'));
        assert!(!is_space(0));
    }

    #[test]
    fn test_value_without_separator_space()
    {
        assert_eq!(extract_main_class(b"Main-Class:a.B\n", 1).unwrap().as_str(), "a.B");
    }

    #[test]
    fn test_value_stops_at_first_whitespace()
    {
        let class = extract_main_class(b"Main-Class: a.B trailing words\n", 1).unwrap();
        assert_eq!(class.as_str(), "a.B");
    }

    #[test]
    fn test_value_without_terminator()
    {
        assert_eq!(extract_main_class(b"Main-Class: a.B", 1).unwrap().as_str(), "a.B");
    }

    #[test]
    fn test_crlf_is_excluded()
    {
        assert_eq!(extract_main_class(b"Main-Class: a.B\r\n", 1).unwrap().as_str(), "a.B");
    }

    #[test]
    fn test_missing_value_reports_line()
    {
        assert_eq!(
            extract_main_class(b"Main-Class:\n", 4),
            Err(MalformedManifest::MissingClassName { line: 4 })
        );
        assert_eq!(
            extract_main_class(b"Main-Class:", 1),
            Err(MalformedManifest::MissingClassName { line: 1 })
        );
    }

    #[test]
    fn test_invalid_utf8_value()
    {
        assert_eq!(
            extract_main_class(b"Main-Class: a\xffb\n", 2),
            Err(MalformedManifest::InvalidEncoding { line: 2 })
        );
    }

    #[test]
    fn test_offset_past_end_is_empty()
    {
        assert!(value_span(b"abc", 10).is_empty());
    }
}
