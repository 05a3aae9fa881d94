pub mod calculators;
pub mod error;
pub mod money;
pub mod report;
pub mod types;
pub mod validators;

pub use error::ReportCheckError;
pub use report::{validate_document, ReportType, ValidationOutcome};
pub use types::*;

/// Standard result type for all report-check operations
pub type ReportCheckResult<T> = Result<T, ReportCheckError>;
