//! # csvstream
//!
//! Streaming CSV reading with header-keyed field lookup and ultra-low memory
//! usage.
//!
//! One logical line is read per call from any [`BufRead`](std::io::BufRead)
//! stream and split into byte-slice fields; the first line becomes the
//! header, whose fields serve as keys for named lookup on every later row.
//! Buffers grow on demand by capacity doubling and are reused across rows,
//! so memory usage settles at the longest line seen.
//!
//! The accepted format is one record per line, fields separated by `,`,
//! optionally wrapped in `"…"` with `""` as an escaped literal quote. Line
//! terminators `\n`, `\r`, and `\r\n` are all accepted and stripped. A
//! quoted field without a closing quote extends to the end of the line
//! rather than raising an error.
//!
//! # Examples
//!
//! ```
//! use csvstream::CsvSession;
//! use std::io::Cursor;
//!
//! let mut stream = Cursor::new(&b"name,age\nAlice,30\nBob,25\n"[..]);
//! let mut session = CsvSession::new();
//!
//! while let Some(line) = session.read_line(&mut stream).unwrap() {
//!     println!("line = `{}'", String::from_utf8_lossy(line));
//!     for i in 0..session.field_count() {
//!         let field = session.field_at(i).unwrap();
//!         println!("field[{}] = `{}'", i, String::from_utf8_lossy(field));
//!     }
//! }
//! session.close();
//! ```
//!
//! # Lookup by header key
//!
//! ```
//! use csvstream::CsvSession;
//! use std::io::Cursor;
//!
//! let mut stream = Cursor::new(&b"symbol,price\n\"LU\",86.25\n"[..]);
//! let mut session = CsvSession::new();
//!
//! session.read_line(&mut stream).unwrap();
//! session.read_line(&mut stream).unwrap();
//!
//! assert_eq!(session.field_by_key("price"), Some(&b"86.25"[..]));
//! ```

mod csv;
pub mod error;
pub mod session;

pub use error::{CsvError, Result};
pub use session::{CsvSession, Rows};
