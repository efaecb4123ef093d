use thiserror::Error;

/// Failures inside the converter. None of these cross the total
/// `encode`/`decode`/`convert` entry points; they become text there.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("error while parsing code: {0}")]
    StructuralEncode(String),

    #[error("JSON parse error: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    #[error("general error: {0}")]
    UnexpectedDecode(String),

    #[error("unknown data format")]
    UnknownDocumentShape,
}

impl ConvertError {
    /// One-line comment form returned by `decode`.
    pub fn to_diagnostic(&self) -> String {
        format!("# {}", self)
    }
}
