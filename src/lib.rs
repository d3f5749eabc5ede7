//! txt2csv: Text to CSV Transfer Library
//!
//! Reads space-delimited text records into a column table and writes the
//! table to a CSV file as a single record.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
