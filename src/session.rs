//! CSV session: line cursor, header capture, and field lookup

use crate::csv::{read_logical_line, LineStatus, Row};
use crate::error::{CsvError, Result};
use std::io::BufRead;

/// Where the session is in its header/data lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SessionState {
    /// No line read yet; the next line becomes the keys
    #[default]
    AwaitingHeader,
    /// Header captured; every further line becomes the current fields
    ReadingRows,
}

/// Streaming CSV session over a caller-provided byte stream
///
/// Reads one logical line per call and splits it into fields. The first line
/// read becomes the header: its fields are captured as keys for named lookup
/// and every later line replaces the current row. All buffers are owned by
/// the session and grow on demand; field slices stay valid until the next
/// mutating call.
///
/// Each CSV source gets its own session. The session is single-threaded and
/// blocking; nothing is shared.
///
/// # Examples
///
/// ```
/// use csvstream::CsvSession;
/// use std::io::Cursor;
///
/// let mut stream = Cursor::new(&b"name,age\nAlice,30\n"[..]);
/// let mut session = CsvSession::new();
///
/// session.read_line(&mut stream).unwrap(); // header
/// session.read_line(&mut stream).unwrap(); // first data row
///
/// assert_eq!(session.field_by_key("age"), Some(&b"30"[..]));
/// assert_eq!(session.field_at(0), Some(&b"Alice"[..]));
/// session.close();
/// ```
///
/// # Iterating data rows
///
/// ```
/// use csvstream::CsvSession;
/// use std::io::Cursor;
///
/// let mut stream = Cursor::new(&b"id,name\n1,Alice\n2,Bob\n"[..]);
/// let mut session = CsvSession::new();
///
/// for row in session.rows(&mut stream) {
///     let row = row.unwrap();
///     assert_eq!(row.len(), 2);
/// }
/// assert_eq!(session.row_count(), 3);
/// ```
#[derive(Debug, Default)]
pub struct CsvSession {
    // Buffers
    raw_line: Vec<u8>,
    header: Row,
    row: Row,

    // Lifecycle
    state: SessionState,
    row_count: u64,
}

impl CsvSession {
    /// Create an empty session; buffers are sized lazily on first read
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the next logical line from `stream`
    ///
    /// Returns the raw, terminator-free line, or `Ok(None)` at end of
    /// stream. As a side effect the line is split: into keys if it is the
    /// first line of the session, into the current row's fields otherwise.
    /// The returned slice and all field slices are valid until the next call
    /// that mutates the session.
    ///
    /// Reading past end of stream keeps returning `Ok(None)`; the current
    /// row is cleared, so [`field_count`](Self::field_count) reads 0, while
    /// the captured keys survive.
    pub fn read_line<R: BufRead>(&mut self, stream: &mut R) -> Result<Option<&[u8]>> {
        let status = read_logical_line(stream, &mut self.raw_line)
            .map_err(|e| CsvError::ReadError(format!("Failed to read line: {}", e)))?;
        if status == LineStatus::Eof {
            self.row.clear();
            return Ok(None);
        }
        match self.state {
            SessionState::AwaitingHeader => {
                self.header.split_from(&self.raw_line);
                self.state = SessionState::ReadingRows;
            }
            SessionState::ReadingRows => self.row.split_from(&self.raw_line),
        }
        self.row_count += 1;
        Ok(Some(self.raw_line.as_slice()))
    }

    /// Number of fields in the most recently read data row
    pub fn field_count(&self) -> usize {
        self.row.len()
    }

    /// The n-th field of the current row (0-indexed), or `None` out of range
    pub fn field_at(&self, n: usize) -> Option<&[u8]> {
        self.row.get(n)
    }

    /// The current row's field under the header key `name`
    ///
    /// Exact byte-wise match, first hit wins. Only the first
    /// `min(key_count, field_count)` positions are compared: a row shorter
    /// than the header yields no match for the extra keys.
    pub fn field_by_key(&self, name: impl AsRef<[u8]>) -> Option<&[u8]> {
        let name = name.as_ref();
        let bound = self.header.len().min(self.row.len());
        (0..bound)
            .find(|&i| self.header.get(i) == Some(name))
            .and_then(|i| self.row.get(i))
    }

    /// The captured header keys, in original order
    pub fn keys(&self) -> impl Iterator<Item = &[u8]> {
        self.header.iter()
    }

    /// Number of captured header keys
    pub fn key_count(&self) -> usize {
        self.header.len()
    }

    /// Number of lines read so far, header included
    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    /// Release all owned buffers and reset to the pre-first-use state
    ///
    /// Safe to call on a session that never read anything, and safe to call
    /// repeatedly. The session is reusable afterwards, including against a
    /// different stream.
    pub fn close(&mut self) {
        self.raw_line = Vec::new();
        self.header.release();
        self.row.release();
        self.state = SessionState::AwaitingHeader;
        self.row_count = 0;
    }

    /// Iterate the data rows of `stream` as owned field vectors
    ///
    /// The header line is consumed into keys by the first iteration and is
    /// not yielded. Ends at end of stream.
    pub fn rows<'a, R: BufRead>(&'a mut self, stream: &'a mut R) -> Rows<'a, R> {
        Rows {
            session: self,
            stream,
        }
    }
}

/// Iterator over data rows, yielding owned copies of each row's fields
pub struct Rows<'a, R> {
    session: &'a mut CsvSession,
    stream: &'a mut R,
}

impl<'a, R: BufRead> Iterator for Rows<'a, R> {
    type Item = Result<Vec<Vec<u8>>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let read = self
                .session
                .read_line(self.stream)
                .map(|line| line.is_some());
            match read {
                Ok(true) => {
                    if self.session.row_count() == 1 {
                        // header line, captured as keys
                        continue;
                    }
                    let row = (0..self.session.field_count())
                        .filter_map(|i| self.session.field_at(i))
                        .map(<[u8]>::to_vec)
                        .collect();
                    return Some(Ok(row));
                }
                Ok(false) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
