//! CSV internals: logical-line reading and field splitting

mod line;
mod split;

pub(crate) use line::{read_logical_line, LineStatus};
pub(crate) use split::Row;
