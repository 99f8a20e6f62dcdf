//! Typed decode of a browser_eval tool input.
//!
//! The input is JSON text of the shape `{"expression": "<js>"}`. Decoding is
//! split into two outcomes: the text is not JSON at all ([MalformedInputError]),
//! or it is JSON and the `expression` field is either a string or absent.

use serde_json::Value;

use crate::error::MalformedInputError;

/// Decoded browser_eval input. Fields other than `expression` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionPayload {
    pub expression: Option<String>,
}

impl ExpressionPayload {
    /// Decode raw input text.
    ///
    /// JSON that is not an object, or whose `expression` is not a string,
    /// yields a payload without an expression rather than an error.
    pub fn decode(raw: &str) -> Result<Self, MalformedInputError> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(Self::from_value(&value))
    }

    pub fn from_value(value: &Value) -> Self {
        let expression = value
            .get("expression")
            .and_then(Value::as_str)
            .map(str::to_owned);
        Self { expression }
    }

    /// The expression, or empty text when absent.
    pub fn into_expression(self) -> String {
        self.expression.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_expression() {
        let payload = ExpressionPayload::decode(r#"{"expression":"document.title"}"#).unwrap();
        assert_eq!(payload.expression.as_deref(), Some("document.title"));
    }

    #[test]
    fn unknown_fields_ignored() {
        let payload =
            ExpressionPayload::decode(r#"{"timeout":5000,"expression":"1+1","await":true}"#).unwrap();
        assert_eq!(payload.into_expression(), "1+1");
    }

    #[test]
    fn missing_field_is_not_an_error() {
        let payload = ExpressionPayload::decode(r#"{"url":"https://example.com"}"#).unwrap();
        assert_eq!(payload, ExpressionPayload::default());
        assert_eq!(payload.into_expression(), "");
    }

    #[test]
    fn non_string_expression_is_absent() {
        for raw in [
            r#"{"expression":42}"#,
            r#"{"expression":{"code":"x"}}"#,
            r#"{"expression":null}"#,
            r#"{"expression":["a"]}"#,
        ] {
            let payload = ExpressionPayload::decode(raw).unwrap();
            assert!(payload.expression.is_none(), "{raw}");
        }
    }

    #[test]
    fn non_object_json_is_absent() {
        for raw in ["42", "\"expression\"", "[1,2]", "null", "true"] {
            let payload = ExpressionPayload::decode(raw).unwrap();
            assert!(payload.expression.is_none(), "{raw}");
        }
    }

    #[test]
    fn malformed_text_is_an_error() {
        assert!(ExpressionPayload::decode("not json").is_err());
        assert!(ExpressionPayload::decode("").is_err());
        assert!(ExpressionPayload::decode(r#"{"expression":"unterminated"#).is_err());
    }

    #[test]
    fn escapes_are_decoded() {
        let raw = r#"{"expression":"say(\"hi\")\n// café ✓"}"#;
        let payload = ExpressionPayload::decode(raw).unwrap();
        assert_eq!(payload.into_expression(), "say(\"hi\")\n// café ✓");
    }
}
