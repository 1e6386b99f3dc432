//! Logical-line reading over any buffered byte stream
//!
//! A logical line ends at `\n`, `\r\n`, or a bare `\r`; the terminator is
//! consumed but never stored. End of stream with nothing accumulated is
//! reported separately from an empty line, so `"a\n\nb"` yields three lines,
//! the middle one empty.

use memchr::memchr2;
use std::io::{self, BufRead};

/// Outcome of a single [`read_logical_line`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineStatus {
    /// A line (possibly empty) was accumulated into the buffer
    Line,
    /// End of stream with zero bytes accumulated on this call
    Eof,
}

/// Read the next logical line from `stream` into `buf`
///
/// `buf` is cleared first and then grown by capacity doubling as bytes
/// arrive; capacity is never released here, so a long-lived buffer reaches a
/// steady state after the longest line. A final line without a terminator is
/// still returned as [`LineStatus::Line`].
pub(crate) fn read_logical_line<R: BufRead>(
    stream: &mut R,
    buf: &mut Vec<u8>,
) -> io::Result<LineStatus> {
    buf.clear();
    loop {
        let (used, terminator) = {
            let chunk = stream.fill_buf()?;
            if chunk.is_empty() {
                return Ok(if buf.is_empty() {
                    LineStatus::Eof
                } else {
                    LineStatus::Line
                });
            }
            match memchr2(b'\n', b'\r', chunk) {
                Some(pos) => {
                    push_bytes(buf, &chunk[..pos]);
                    (pos + 1, Some(chunk[pos]))
                }
                None => {
                    push_bytes(buf, chunk);
                    (chunk.len(), None)
                }
            }
        };
        stream.consume(used);
        match terminator {
            Some(b'\r') => {
                // \r\n is a single terminator; after a lone \r the next byte
                // stays in the stream (the BufRead rendition of ungetc)
                if stream.fill_buf()?.first() == Some(&b'\n') {
                    stream.consume(1);
                }
                return Ok(LineStatus::Line);
            }
            Some(_) => return Ok(LineStatus::Line),
            None => {}
        }
    }
}

/// Append bytes, doubling capacity whenever the next byte would not fit
///
/// Starts from capacity 1 on a fresh buffer, so the first growth steps are
/// 1, 2, 4, 8, ...
fn push_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    let needed = buf.len() + bytes.len();
    if needed > buf.capacity() {
        let mut cap = buf.capacity().max(1);
        while cap < needed {
            cap *= 2;
        }
        buf.reserve_exact(cap - buf.len());
    }
    buf.extend_from_slice(bytes);
}
