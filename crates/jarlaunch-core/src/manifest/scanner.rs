//! # Line Scanner
//!
//! Reads a manifest one physical line at a time into a bounded buffer.
//!
//! The buffer never grows past its limit. When a physical line is longer than
//! the limit, the head of the line is kept, the rest is consumed and dropped,
//! and the line is flagged as overlong so the caller can decide what to do
//! with it. Line boundaries therefore stay aligned with the file.

use std::io::{self, BufRead};

use super::attribute::MAIN_CLASS_ATTRIBUTE;

/// Room reserved past the content limit for a `\r\n` terminator
const TERMINATOR_ROOM: usize = 2;

/// A single physical line as held in the [`LineBuffer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a>
{
    /// 1-based physical line number
    pub number: usize,
    /// Line bytes up to the first NUL, including the terminator if one was read
    pub bytes: &'a [u8],
    /// The physical line had more content than the configured maximum
    pub overlong: bool,
}

/// Reusable bounded buffer holding one physical line
///
/// ## Example
///
/// ```rust
/// use std::io::Cursor;
///
/// use jarlaunch_core::manifest::scanner::LineBuffer;
///
/// let mut reader = Cursor::new(b"Manifest-Version: 1.0\r\nMain-Class: a.B\n".to_vec());
/// let mut buffer = LineBuffer::new(72);
///
/// let first = buffer.read_line(&mut reader)?.unwrap();
/// assert_eq!(first.number, 1);
/// assert_eq!(first.bytes, b"Manifest-Version: 1.0\r\n");
///
/// let second = buffer.read_line(&mut reader)?.unwrap();
/// assert_eq!(second.bytes, b"Main-Class: a.B\n");
///
/// assert!(buffer.read_line(&mut reader)?.is_none());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct LineBuffer
{
    bytes: Vec<u8>,
    storage_limit: usize,
    max_line_length: usize,
    line_number: usize,
}

impl LineBuffer
{
    /// Allocate a buffer for lines of at most `max_line_length` content bytes
    ///
    /// The buffer always keeps at least enough bytes to recognise the
    /// `Main-Class:` attribute name, even when the configured maximum is
    /// smaller than that.
    pub fn new(max_line_length: usize) -> Self
    {
        let storage = max_line_length.max(MAIN_CLASS_ATTRIBUTE.len()) + TERMINATOR_ROOM;
        Self {
            bytes: Vec::with_capacity(storage),
            storage_limit: storage,
            max_line_length,
            line_number: 0,
        }
    }

    /// Configured maximum content length in bytes
    pub fn max_line_length(&self) -> usize
    {
        self.max_line_length
    }

    /// Number of physical lines read so far
    pub fn lines_read(&self) -> usize
    {
        self.line_number
    }

    /// Read the next physical line, replacing the previous one
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// ## Errors
    ///
    /// Propagates any I/O error from the reader other than `Interrupted`.
    pub fn read_line<R: BufRead>(&mut self, reader: &mut R) -> io::Result<Option<Line<'_>>>
    {
        self.bytes.clear();
        let limit = self.storage_limit;
        let mut truncated = false;
        let mut read_any = false;

        loop {
            let available = match reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                break;
            }
            read_any = true;

            let (chunk_len, complete) = match available.iter().position(|&b| b == b'\n') {
                Some(newline) => (newline + 1, true),
                None => (available.len(), false),
            };

            let room = limit - self.bytes.len();
            if chunk_len > room {
                truncated = true;
            }
            self.bytes.extend_from_slice(&available[..chunk_len.min(room)]);
            reader.consume(chunk_len);

            if complete {
                break;
            }
        }

        if !read_any {
            return Ok(None);
        }

        self.line_number += 1;
        let overlong = truncated || content_length(&self.bytes) > self.max_line_length;
        let visible = self.bytes.iter().position(|&b| b == 0).unwrap_or(self.bytes.len());

        Ok(Some(Line {
            number: self.line_number,
            bytes: &self.bytes[..visible],
            overlong,
        }))
    }
}

/// Length of a line without its `\n` or `\r\n` terminator
fn content_length(line: &[u8]) -> usize
{
    let without_lf = line.strip_suffix(b"\n").unwrap_or(line);
    without_lf.strip_suffix(b"\r").unwrap_or(without_lf).len()
}
