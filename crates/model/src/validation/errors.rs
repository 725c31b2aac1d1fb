use thiserror::Error;

/// Accumulates human-readable validation failures for a statement.
///
/// Messages keep the order they were added, so errors for a batch read
/// top-to-bottom the way its author wrote the batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Records "`<field>` is required" when the value is absent or empty.
    pub fn check_required_field(&mut self, field: &str, value: Option<&str>) {
        if value.is_none_or(str::is_empty) {
            self.messages.push(format!("{field} is required"));
        }
    }

    pub fn extend(&mut self, other: ValidationErrors) {
        self.messages.extend(other.messages);
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    /// Collapses the accumulated messages into a single error value for
    /// callers that abort on the first invalid statement.
    pub fn into_result(self) -> Result<(), ValidationFailed> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailed {
                messages: self.messages,
            })
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("statement validation failed: {}", .messages.join("; "))]
pub struct ValidationFailed {
    pub messages: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_required_field_flags_missing_and_empty() {
        let mut errors = ValidationErrors::new();
        errors.check_required_field("tableName", None);
        errors.check_required_field("columnName", Some(""));
        errors.check_required_field("schemaName", Some("public"));

        assert_eq!(
            errors.messages(),
            ["tableName is required", "columnName is required"]
        );
    }

    #[test]
    fn test_into_result_preserves_message_order() {
        let mut errors = ValidationErrors::new();
        errors.add("first");
        errors.add("second");

        let err = errors.into_result().unwrap_err();
        assert_eq!(err.messages, ["first", "second"]);
        assert_eq!(
            err.to_string(),
            "statement validation failed: first; second"
        );
    }

    #[test]
    fn test_empty_errors_convert_to_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }
}
