//! Error types

mod field;
mod source;

pub use field::*;
pub use source::*;
