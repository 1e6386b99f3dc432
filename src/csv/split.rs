//! Field splitting with RFC 4180-like quoting
//!
//! A [`Row`] owns a private scratch copy of the line plus a span index into
//! it, so the caller's line buffer stays intact for re-inspection. Quoted
//! fields are compacted in place: the bytes of `""` escapes collapse inside
//! the scratch copy and each field is addressed by a `(start, len)` span.

use memchr::memchr;

/// Half-open byte range of one field inside the scratch buffer
#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    len: usize,
}

/// One split row: scratch copy of the line plus the field span index
///
/// Reused across rows; neither the scratch buffer nor the span index ever
/// shrinks until [`Row::release`].
#[derive(Debug, Default)]
pub(crate) struct Row {
    scratch: Vec<u8>,
    spans: Vec<Span>,
}

impl Row {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of fields in the most recently split line
    pub(crate) fn len(&self) -> usize {
        self.spans.len()
    }

    /// The n-th field, or `None` past the end of the row
    pub(crate) fn get(&self, n: usize) -> Option<&[u8]> {
        self.spans
            .get(n)
            .map(|s| &self.scratch[s.start..s.start + s.len])
    }

    /// Iterate the fields in order
    pub(crate) fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.spans
            .iter()
            .map(|s| &self.scratch[s.start..s.start + s.len])
    }

    /// Drop the fields but keep the allocated capacity
    pub(crate) fn clear(&mut self) {
        self.scratch.clear();
        self.spans.clear();
    }

    /// Release all owned memory, returning to the pre-first-use state
    pub(crate) fn release(&mut self) {
        self.scratch = Vec::new();
        self.spans = Vec::new();
    }

    /// Split `line` into fields on `,`
    ///
    /// An empty line yields zero fields, not one empty field. A trailing
    /// comma yields a final empty field and consecutive commas yield empty
    /// fields in between.
    pub(crate) fn split_from(&mut self, line: &[u8]) {
        self.clear();
        self.scratch.extend_from_slice(line);
        if self.scratch.is_empty() {
            return;
        }
        let mut pos = 0;
        loop {
            // sep is the index of the byte consumed as this field's
            // separator; scratch.len() stands for the line terminator
            let (span, sep) = if self.scratch.get(pos) == Some(&b'"') {
                advance_quoted(&mut self.scratch, pos + 1)
            } else {
                let end = match memchr(b',', &self.scratch[pos..]) {
                    Some(off) => pos + off,
                    None => self.scratch.len(),
                };
                (
                    Span {
                        start: pos,
                        len: end - pos,
                    },
                    end,
                )
            };
            push_span(&mut self.spans, span);
            if self.scratch.get(sep) != Some(&b',') {
                break;
            }
            pos = sep + 1;
        }
    }
}

/// Quoted-field grammar, entered just past the opening `"`
///
/// Compacts the field in place: `""` emits one literal quote, a `"` followed
/// by anything else closes the field, and any unquoted run after the closing
/// quote up to the next separator is kept verbatim. A field with no closing
/// quote silently extends to the end of the line. Returns the field span and
/// the index of the byte consumed as separator.
fn advance_quoted(scratch: &mut [u8], from: usize) -> (Span, usize) {
    let mut i = from; // write cursor (compacted)
    let mut j = from; // read cursor
    while j < scratch.len() {
        if scratch[j] == b'"' {
            j += 1;
            if scratch.get(j) != Some(&b'"') {
                let tail = match memchr(b',', &scratch[j..]) {
                    Some(off) => off,
                    None => scratch.len() - j,
                };
                scratch.copy_within(j..j + tail, i);
                i += tail;
                j += tail;
                break;
            }
        }
        scratch[i] = scratch[j];
        i += 1;
        j += 1;
    }
    (
        Span {
            start: from,
            len: i - from,
        },
        j,
    )
}

/// Append a span, doubling the index capacity on overflow like the line
/// buffers do
fn push_span(spans: &mut Vec<Span>, span: Span) {
    if spans.len() == spans.capacity() {
        spans.reserve_exact(spans.capacity().max(1));
    }
    spans.push(span);
}
