use super::classify::trim_line;
use super::decoder::decode;
use super::encoder::encode;
use serde_json::Value;
use tracing::debug;

/// Which way a piece of text should be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

impl Direction {
    /// Sniff the text: a JSON object with both `type` and `lines` keys is
    /// decoded, anything else is encoded.
    pub fn detect(text: &str) -> Self {
        if looks_like_document(text) {
            Direction::Decode
        } else {
            Direction::Encode
        }
    }
}

/// Check if text parses as a JSON object carrying `type` and `lines`
pub fn looks_like_document(text: &str) -> bool {
    match serde_json::from_str::<Value>(trim_line(text)) {
        Ok(Value::Object(map)) => map.contains_key("type") && map.contains_key("lines"),
        _ => false,
    }
}

/// Convert in whichever direction the text calls for.
///
/// The input is trimmed first, so surrounding blank lines and the first
/// line's indentation do not survive an encode through this entry point.
pub fn convert(text: &str) -> String {
    let trimmed = trim_line(text);
    if trimmed.is_empty() {
        return encode("");
    }

    let direction = Direction::detect(trimmed);
    debug!(?direction, bytes = trimmed.len(), "dispatching conversion");
    match direction {
        Direction::Decode => decode(trimmed),
        Direction::Encode => encode(trimmed),
    }
}
