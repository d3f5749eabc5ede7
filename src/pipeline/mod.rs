//! Pipeline module - reading text sources and writing CSV targets

pub mod error;
pub mod loader;
pub mod reader;
pub mod table;
pub mod transfer;
pub mod writer;

pub use error::{ConvertError, ValidationError};
pub use loader::*;
pub use reader::*;
pub use table::*;
pub use transfer::*;
pub use writer::*;
