//! Small helpers shared across layers.

pub mod format;
pub mod parse;
pub mod password;
