use thiserror::Error;

/// The tool input was present but is not decodable JSON.
///
/// This is the only failure the card knows about. It never reaches the
/// renderer: the extractor reports it to a [crate::DiagnosticSink] and
/// carries on with an empty expression.
#[derive(Error, Debug)]
#[error("malformed tool input: {source}")]
pub struct MalformedInputError {
    #[from]
    source: serde_json::Error,
}

impl MalformedInputError {
    /// 1-based line of the decode failure.
    pub fn line(&self) -> usize {
        self.source.line()
    }

    /// 1-based column of the decode failure.
    pub fn column(&self) -> usize {
        self.source.column()
    }
}

/// Errors when loading a tool-call record from outside (file, stdin).
#[derive(Error, Debug)]
pub enum CardError {
    #[error("invalid tool-call record: {0}")]
    Record(#[source] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_input_message() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = MalformedInputError::from(json_err);
        assert!(err.to_string().starts_with("malformed tool input: "));
        assert!(err.to_string().contains("expected"));
        assert_eq!(err.line(), 1);
        assert!(err.column() >= 1);
    }

    #[test]
    fn test_record_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CardError::Record(json_err);
        assert!(err.to_string().starts_with("invalid tool-call record: "));
    }

    #[test]
    fn test_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = CardError::from(io_err);
        assert!(err.to_string().contains("file not found"));
    }
}
