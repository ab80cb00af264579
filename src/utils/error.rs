use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Malformed record on line {line_number} ({line:?}): {reason}")]
    MalformedRecord {
        line_number: usize,
        line: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input lines. Fixing the data fixes the run.
    InputData,
    System,
}

impl ReportError {
    pub fn malformed(line_number: usize, line: &str, reason: impl Into<String>) -> Self {
        ReportError::MalformedRecord {
            line_number,
            line: line.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::MalformedRecord { .. } => ErrorCategory::InputData,
            ReportError::SerializationError(_)
            | ReportError::CsvError(_)
            | ReportError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::MalformedRecord {
                line_number, reason, ..
            } => format!("Input line {} could not be read: {}", line_number, reason),
            other => format!("Report output failed: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::InputData => {
                "Each line must be customerId,contractId,geozone,teamCode,projectCode,<seconds>s"
            }
            ErrorCategory::System => "Retry the run; if it keeps failing, try another output format",
        }
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::InputData => 1,
            ErrorCategory::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_record_message_names_line() {
        let err = ReportError::malformed(4, "a,b,c", "expected 6 fields, found 3");
        let text = err.to_string();
        assert!(text.contains("line 4"));
        assert!(text.contains("a,b,c"));
        assert!(text.contains("expected 6 fields"));
        assert_eq!(err.category(), ErrorCategory::InputData);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_system_errors_use_distinct_exit_code() {
        let err = ReportError::IoError(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "closed",
        ));
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.exit_code(), 3);
        assert!(err.user_friendly_message().starts_with("Report output failed"));
    }
}
