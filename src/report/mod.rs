//! Report module - summarizing transfers and showing CSV content

pub mod preview;
pub mod summary;

pub use preview::*;
pub use summary::*;
