use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("Chapter not found")]
    ChapterNotFound,

    #[error("Invalid course id: {value}")]
    InvalidCourseId { value: String },

    #[error("Database operation failed: {0}")]
    DatabaseError(#[from] mongodb::error::Error),

    #[error("Document decoding error: {0}")]
    DecodingError(#[from] mongodb::bson::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    ClientInput,
    Storage,
    Configuration,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::CourseNotFound | CatalogError::ChapterNotFound => ErrorCategory::NotFound,
            CatalogError::InvalidCourseId { .. } => ErrorCategory::ClientInput,
            CatalogError::DatabaseError(_) | CatalogError::IoError(_) => ErrorCategory::Storage,
            CatalogError::DecodingError(_) | CatalogError::SerializationError(_) => {
                ErrorCategory::Data
            }
            CatalogError::ConfigError { .. }
            | CatalogError::MissingConfigError { .. }
            | CatalogError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CatalogError::CourseNotFound
            | CatalogError::ChapterNotFound
            | CatalogError::InvalidCourseId { .. } => ErrorSeverity::Low,
            CatalogError::DecodingError(_) | CatalogError::SerializationError(_) => {
                ErrorSeverity::Medium
            }
            CatalogError::ConfigError { .. }
            | CatalogError::MissingConfigError { .. }
            | CatalogError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            CatalogError::DatabaseError(_) | CatalogError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::NotFound | ErrorCategory::ClientInput => self.to_string(),
            ErrorCategory::Storage => format!("Store operation failed: {}", self),
            ErrorCategory::Data => format!("Document did not match the expected schema: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::CourseNotFound | CatalogError::ChapterNotFound => {
                "Verify the course id and chapter ordinal against the catalog"
            }
            CatalogError::InvalidCourseId { .. } => {
                "Course ids are 24-character hex strings as issued by the store"
            }
            CatalogError::DatabaseError(_) => {
                "Check that the MongoDB URI points at a reachable server and retry"
            }
            CatalogError::DecodingError(_) | CatalogError::SerializationError(_) => {
                "Inspect the stored documents; the collection may contain malformed entries"
            }
            CatalogError::IoError(_) => "Check file paths and permissions",
            CatalogError::ConfigError { .. }
            | CatalogError::MissingConfigError { .. }
            | CatalogError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or CLI flags and restart"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages_are_fixed() {
        // These strings are part of the HTTP contract.
        assert_eq!(CatalogError::CourseNotFound.to_string(), "Course not found");
        assert_eq!(
            CatalogError::ChapterNotFound.to_string(),
            "Chapter not found"
        );
    }

    #[test]
    fn test_severity_classification() {
        assert_eq!(CatalogError::CourseNotFound.severity(), ErrorSeverity::Low);
        assert_eq!(
            CatalogError::MissingConfigError {
                field: "database.uri".to_string()
            }
            .severity(),
            ErrorSeverity::High
        );
        let io = CatalogError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(io.category(), ErrorCategory::Storage);
    }
}
