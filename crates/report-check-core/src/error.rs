use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportCheckError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Malformed {report} document: {reason}")]
    MalformedDocument { report: String, reason: String },

    #[error("Unknown report type '{0}'")]
    UnknownReportType(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for ReportCheckError {
    fn from(e: serde_json::Error) -> Self {
        ReportCheckError::SerializationError(e.to_string())
    }
}
