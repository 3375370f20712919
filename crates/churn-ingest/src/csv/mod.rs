//! Delimited-text reading and writing.

mod reader;
mod writer;

pub use reader::{read_table, read_table_from_reader};
pub use writer::{render_table, write_table, write_table_to_writer};
