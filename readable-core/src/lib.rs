//! Readable Core - Fundamental types
//!
//! This crate provides the core types used throughout Readable:
//! - `Number`: Bounded-precision decimal numbers
//! - `RawValue`: Loosely typed caller input
//! - `ReadableError`: Structured errors with programmatic context

mod number;
mod value;
mod error;

pub use number::{NonZeroNumber, Number, NumberError};
pub use value::RawValue;
pub use error::{ReadableError, ErrorKind, codes};
