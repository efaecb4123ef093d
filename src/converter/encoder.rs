use super::classify::{classify_line, is_line_space, trim_line};
use super::error::ConvertError;
use super::types::{Document, LineRecord};
use tracing::{debug, trace, warn};

/// Already-serialized error document, used only if serializing a fresh one fails.
const FALLBACK_ERROR_DOCUMENT: &str =
    "{\n  \"type\": \"error\",\n  \"message\": \"error while parsing code\",\n  \"lines\": []\n}";

/// Number of leading whitespace characters, or 0 for a blank line.
pub fn indentation_width(raw: &str) -> usize {
    if trim_line(raw).is_empty() {
        return 0;
    }
    raw.chars().take_while(|&c| is_line_space(c)).count()
}

/// Build the record for one physical line (1-based `line_number`).
pub fn encode_line(line_number: usize, raw: &str) -> LineRecord {
    let record = LineRecord {
        line_number,
        content: raw.trim_start_matches(is_line_space).to_string(),
        indentation: indentation_width(raw),
        is_empty: trim_line(raw).is_empty(),
        category: classify_line(raw),
    };
    trace!(
        line = record.line_number,
        category = ?record.category,
        indentation = record.indentation,
        "classified line"
    );
    record
}

/// Split on `\n` and encode every piece, including a trailing empty one.
pub fn try_encode(text: &str) -> Result<Document, ConvertError> {
    let lines: Vec<LineRecord> = text
        .split('\n')
        .enumerate()
        .map(|(i, raw)| encode_line(i + 1, raw))
        .collect();
    debug!(lines = lines.len(), "encoded text");
    Ok(Document::Code { lines })
}

/// Encode text into pretty JSON. Never fails; failures become an error document.
pub fn encode(text: &str) -> String {
    match try_encode(text).and_then(|doc| doc.to_json_pretty()) {
        Ok(json) => json,
        Err(err) => error_document_json(&err),
    }
}

pub(crate) fn error_document_json(err: &ConvertError) -> String {
    warn!(%err, "encoding failed, emitting error document");
    Document::error(err.to_string())
        .to_json_pretty()
        .unwrap_or_else(|_| FALLBACK_ERROR_DOCUMENT.to_string())
}
