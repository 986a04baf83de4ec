//! Error types for devkit
//!
//! Centralized error handling using thiserror. The view-state operations
//! never fail; these errors only come from loading and launching.

use thiserror::Error;

/// All error types that can occur in devkit
#[derive(Debug, Error)]
pub enum DevkitError {
    /// No tool with this id in the catalog
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Two catalog entries share an id
    #[error("Duplicate tool id: {0}")]
    DuplicateToolId(String),

    /// Catalog could not be read or is malformed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// The URL opener could not be started
    #[error("Launch error: {0}")]
    Launch(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for devkit operations
pub type Result<T> = std::result::Result<T, DevkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_not_found_error() {
        let err = DevkitError::ToolNotFound("unity".to_string());
        assert_eq!(err.to_string(), "Tool not found: unity");
    }

    #[test]
    fn test_duplicate_tool_id_error() {
        let err = DevkitError::DuplicateToolId("blender".to_string());
        assert_eq!(err.to_string(), "Duplicate tool id: blender");
    }

    #[test]
    fn test_launch_error() {
        let err = DevkitError::Launch("xdg-open: not found".to_string());
        assert_eq!(err.to_string(), "Launch error: xdg-open: not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DevkitError = io_err.into();
        assert!(matches!(err, DevkitError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_err = serde_yaml::from_str::<Vec<String>>("{ not: a list").unwrap_err();
        let err: DevkitError = yaml_err.into();
        assert!(matches!(err, DevkitError::Yaml(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: DevkitError = json_err.into();
        assert!(matches!(err, DevkitError::Json(_)));
    }
}
