use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReorgError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Mapping parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Pattern error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Plan conflict: {first} and {second} both map to {}", destination.display())]
    PlanConflictError {
        destination: PathBuf,
        first: String,
        second: String,
    },

    #[error("Plan conflict: destination {} for {class_name} is already occupied by an unrelated file", destination.display())]
    DestinationOccupiedError {
        destination: PathBuf,
        class_name: String,
    },

    #[error("Move failed for {class_name} ({} -> {}) after {completed}/{total} moves: {reason}", source_path.display(), destination.display())]
    MoveFailedError {
        class_name: String,
        source_path: PathBuf,
        destination: PathBuf,
        completed: usize,
        total: usize,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ReorgError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Raised before any filesystem mutation
            ReorgError::ConfigError { .. }
            | ReorgError::InvalidConfigValueError { .. }
            | ReorgError::TomlError(_)
            | ReorgError::PlanConflictError { .. }
            | ReorgError::DestinationOccupiedError { .. } => ErrorSeverity::Medium,

            // The tree may be left partially migrated
            ReorgError::MoveFailedError { .. }
            | ReorgError::IoError(_)
            | ReorgError::SerializationError(_)
            | ReorgError::PatternError(_) => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReorgError::ConfigError { message } => {
                format!("The domain mapping is invalid: {}", message)
            }
            ReorgError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration for '{}': {}", field, reason)
            }
            ReorgError::TomlError(e) => format!("Could not parse the mapping file: {}", e),
            ReorgError::PlanConflictError { first, second, .. } => format!(
                "The plan is inconsistent: '{}' and '{}' resolve to the same destination",
                first, second
            ),
            ReorgError::DestinationOccupiedError {
                class_name,
                destination,
            } => format!(
                "Cannot move '{}': {} already exists and is not this class's file",
                class_name,
                destination.display()
            ),
            ReorgError::MoveFailedError {
                class_name,
                completed,
                total,
                reason,
                ..
            } => format!(
                "Move of '{}' failed ({}); {} of {} moves completed before the failure",
                class_name, reason, completed, total
            ),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReorgError::ConfigError { .. }
            | ReorgError::InvalidConfigValueError { .. }
            | ReorgError::TomlError(_) => {
                "Fix the mapping or CLI arguments and re-run; nothing was modified"
            }
            ReorgError::PlanConflictError { .. } | ReorgError::DestinationOccupiedError { .. } => {
                "Resolve the destination conflict and re-run; nothing was moved"
            }
            ReorgError::MoveFailedError { .. } => {
                "The tree is partially migrated; re-running continues where it stopped, or revert with your VCS"
            }
            _ => "Check the log output above for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReorgError>;
