//! The prelude exports the bit pattern types and the operations on
//! them.  Providing this prelude is the main purpose of the base
//! crate.
pub use super::twoscomplement::convert::*;
pub use super::twoscomplement::error::*;
pub use super::twoscomplement::pattern::*;
pub use super::twoscomplement::width::*;
pub use super::twoscomplement::Signum;
pub use super::width;
