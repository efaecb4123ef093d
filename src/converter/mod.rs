mod classify;
mod decoder;
mod dispatch;
mod encoder;
mod error;
mod types;

pub use classify::classify_line;
pub use decoder::{decode, try_decode};
pub use dispatch::{convert, looks_like_document, Direction};
pub use encoder::{encode, encode_line, indentation_width, try_encode};
pub use error::ConvertError;
pub use types::{Category, Document, LineRecord, MAX_INDENTATION};
