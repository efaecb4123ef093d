use super::error::ConvertError;
use super::types::{error_line, Document, LineRecord};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Decode a JSON document back to text.
///
/// An `error` document is a successful decode: it yields its diagnostic line.
pub fn try_decode(text: &str) -> Result<String, ConvertError> {
    let value: Value = serde_json::from_str(text)?;
    let object = value.as_object().ok_or_else(|| {
        ConvertError::UnexpectedDecode(format!("expected a JSON object, found {}", kind_of(&value)))
    })?;

    match object.get("type").and_then(Value::as_str) {
        Some("code") => {
            let lines = read_lines(object)?;
            debug!(lines = lines.len(), "decoded code document");
            Document::Code { lines }.to_text()
        }
        Some("error") => Ok(match object.get("message") {
            Some(Value::String(message)) => error_line(message),
            Some(other) => error_line(&other.to_string()),
            None => error_line("unknown error"),
        }),
        _ => Err(ConvertError::UnknownDocumentShape),
    }
}

/// Decode JSON into text. Never fails; failures become a `# ...` line.
pub fn decode(text: &str) -> String {
    match try_decode(text) {
        Ok(code) => code,
        Err(err) => {
            warn!(%err, "decoding failed");
            err.to_diagnostic()
        }
    }
}

fn read_lines(object: &Map<String, Value>) -> Result<Vec<LineRecord>, ConvertError> {
    match object.get("lines") {
        None => Ok(Vec::new()),
        Some(lines) => Vec::<LineRecord>::deserialize(lines)
            .map_err(|e| ConvertError::UnexpectedDecode(e.to_string())),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
