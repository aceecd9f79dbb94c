//! Input parsing and the in-memory table model.

mod parser;
mod source;

pub use parser::{Parser, ParserConfig};
pub use source::{line_number, Cell, SourceMetadata, Table, LINE_OFFSET};
