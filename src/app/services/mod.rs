//! Services layer - operations that do not touch widgets.
//!
//! - File reading and writing
//! - Dialog filters
//! - Line-number gutter sizing
//! - Status bar message lifetime

pub mod file_filters;
pub mod file_io;
pub mod gutter;
pub mod status;
