//! Line-oriented conversion between source text and a JSON document.
//!
//! Each line is recorded with its number, its content without leading
//! whitespace, the indentation width, an emptiness flag and a shallow
//! category. Decoding re-applies the indentation as spaces.

pub mod converter;
pub mod shell;

pub use converter::{convert, decode, encode};
