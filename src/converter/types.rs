use super::error::ConvertError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Widest indentation a decoded record may ask for.
pub const MAX_INDENTATION: usize = 1 << 20;

/// Shallow syntactic category of one source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Comment,
    Statement,
    Assignment,
    BlockStart,
    #[default]
    Expression,
}

/// One physical line of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    #[serde(default, deserialize_with = "lenient_line_number")]
    pub line_number: usize,
    #[serde(default)]
    pub content: String,
    #[serde(default, deserialize_with = "lenient_indentation")]
    pub indentation: usize,
    #[serde(default, deserialize_with = "truthy")]
    pub is_empty: bool,
    #[serde(rename = "type", default, deserialize_with = "lenient_category")]
    pub category: Category,
}

impl LineRecord {
    /// Rebuild the physical line. Indentation always comes back as spaces.
    ///
    /// Fails instead of allocating when the indentation is past
    /// [`MAX_INDENTATION`] or the line cannot be reserved.
    pub fn to_line(&self) -> Result<String, ConvertError> {
        if self.is_empty {
            return Ok(String::new());
        }
        if self.indentation > MAX_INDENTATION {
            return Err(ConvertError::UnexpectedDecode(format!(
                "line {}: indentation {} exceeds {}",
                self.line_number, self.indentation, MAX_INDENTATION
            )));
        }
        let width = self
            .indentation
            .checked_add(self.content.len())
            .ok_or_else(|| {
                ConvertError::UnexpectedDecode(format!("line {}: line too long", self.line_number))
            })?;

        let mut line = String::new();
        line.try_reserve(width)
            .map_err(|e| ConvertError::UnexpectedDecode(e.to_string()))?;
        line.extend(std::iter::repeat(' ').take(self.indentation));
        line.push_str(&self.content);
        Ok(line)
    }
}

// Fields below never feed reconstruction, or only by truthiness, so odd
// values fall back instead of failing the whole document.

fn lenient_category<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Category::deserialize(value).unwrap_or_default())
}

fn lenient_line_number<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or_default())
}

/// `null`, `false`, zero, `""`, `[]` and `{}` are false; anything else is true.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    })
}

/// Negative widths pad nothing; booleans count as 0 or 1.
fn lenient_indentation<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Bool(b) => Ok(usize::from(b)),
        Value::Number(n) if n.as_i64().is_some_and(|i| i < 0) => Ok(0),
        Value::Number(n) => n
            .as_u64()
            .and_then(|u| usize::try_from(u).ok())
            .ok_or_else(|| D::Error::custom(format!("invalid indentation {}", n))),
        other => Err(D::Error::custom(format!("invalid indentation {}", other))),
    }
}

/// Structured form of a text blob, tagged `code` or `error` under `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Document {
    Code {
        lines: Vec<LineRecord>,
    },
    Error {
        message: String,
        /// Always empty; kept so both shapes carry a `lines` key.
        #[serde(default)]
        lines: Vec<LineRecord>,
    },
}

impl Document {
    pub fn error(message: impl Into<String>) -> Self {
        Document::Error {
            message: message.into(),
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[LineRecord] {
        match self {
            Document::Code { lines } | Document::Error { lines, .. } => lines,
        }
    }

    /// Pretty JSON, two-space indent, non-ASCII left as-is.
    pub fn to_json_pretty(&self) -> Result<String, ConvertError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConvertError::StructuralEncode(e.to_string()))
    }

    /// Reconstructed text for a code document, a diagnostic line otherwise.
    pub fn to_text(&self) -> Result<String, ConvertError> {
        match self {
            Document::Code { lines } => Ok(lines
                .iter()
                .map(LineRecord::to_line)
                .collect::<Result<Vec<_>, _>>()?
                .join("\n")),
            Document::Error { message, .. } => Ok(error_line(message)),
        }
    }
}

pub(crate) fn error_line(message: &str) -> String {
    format!("# Error: {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(content: &str, indentation: usize, is_empty: bool) -> LineRecord {
        LineRecord {
            line_number: 1,
            content: content.to_string(),
            indentation,
            is_empty,
            category: Category::Expression,
        }
    }

    #[test]
    fn record_fields_serialize_in_order() {
        let json = serde_json::to_string(&record("x", 2, false)).unwrap();
        assert_eq!(
            json,
            r#"{"line_number":1,"content":"x","indentation":2,"is_empty":false,"type":"expression"}"#
        );
    }

    #[test]
    fn block_start_uses_snake_case() {
        let json = serde_json::to_string(&Category::BlockStart).unwrap();
        assert_eq!(json, "\"block_start\"");
    }

    #[test]
    fn error_document_keeps_empty_lines_key() {
        let json = serde_json::to_string(&Document::error("boom")).unwrap();
        assert_eq!(json, r#"{"type":"error","message":"boom","lines":[]}"#);
    }

    #[test]
    fn pretty_output_keeps_unicode_literal() {
        let doc = Document::Code {
            lines: vec![record("привет = 1", 0, false)],
        };
        let json = doc.to_json_pretty().unwrap();
        assert!(json.contains("привет = 1"));
        assert!(json.contains("\n  \"lines\": ["));
    }

    #[test]
    fn to_line_pads_with_spaces() {
        assert_eq!(record("pass", 4, false).to_line().unwrap(), "    pass");
        assert_eq!(record("ignored", 8, true).to_line().unwrap(), "");
    }

    #[test]
    fn oversized_indentation_is_an_error() {
        for width in [MAX_INDENTATION + 1, usize::MAX, isize::MAX as usize] {
            assert!(matches!(
                record("x", width, false).to_line(),
                Err(ConvertError::UnexpectedDecode(_))
            ));
        }
        assert!(record("x", MAX_INDENTATION, false).to_line().is_ok());
    }

    #[test]
    fn line_number_is_read_leniently() {
        for raw in ["null", "\"1\"", "-1", "1.5"] {
            let json = format!(r#"{{"line_number":{raw},"content":"x"}}"#);
            let rec: LineRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(rec.line_number, 0, "line_number {raw}");
        }
    }

    #[test]
    fn is_empty_follows_truthiness() {
        let cases = [
            ("null", false),
            ("0", false),
            ("\"\"", false),
            ("[]", false),
            ("1", true),
            ("\"yes\"", true),
            ("[0]", true),
        ];
        for (raw, expected) in cases {
            let json = format!(r#"{{"content":"x","is_empty":{raw}}}"#);
            let rec: LineRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(rec.is_empty, expected, "is_empty {raw}");
        }
    }

    #[test]
    fn negative_indentation_pads_nothing() {
        let rec: LineRecord =
            serde_json::from_str(r#"{"content":"x","indentation":-3}"#).unwrap();
        assert_eq!(rec.to_line().unwrap(), "x");
    }

    #[test]
    fn fractional_indentation_is_rejected() {
        assert!(serde_json::from_str::<LineRecord>(r#"{"content":"x","indentation":1.5}"#).is_err());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let rec: LineRecord = serde_json::from_str(r#"{"content":"x"}"#).unwrap();
        assert_eq!(rec.indentation, 0);
        assert!(!rec.is_empty);
        assert_eq!(rec.category, Category::Expression);
    }

    #[test]
    fn unknown_category_is_tolerated() {
        let rec: LineRecord =
            serde_json::from_str(r#"{"content":"x","type":"decorator"}"#).unwrap();
        assert_eq!(rec.category, Category::Expression);
    }

    #[test]
    fn error_document_text() {
        assert_eq!(
            Document::error("bad input").to_text().unwrap(),
            "# Error: bad input"
        );
    }
}
