//! colstats: average/min/max over the second column of a whitespace-delimited
//! text file.
//!
//! The pipeline is deliberately small: read lines, extract and parse the
//! second token per line, aggregate. Lines that don't fit are skipped, not
//! fatal.

pub mod error;
pub mod reader;
pub mod stats;

pub use error::ColstatsError;
pub use reader::read_values;
pub use stats::{Summary, summarize};
