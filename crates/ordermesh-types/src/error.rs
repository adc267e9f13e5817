//! Error types for the OrderMesh acceptance gate.
//!
//! All errors use the `MESH_ERR_` prefix convention for easy grepping in
//! logs. Error codes are grouped by subsystem:
//! - 1xx: Schema engine errors
//! - 2xx: Encoding errors
//! - 9xx: General / configuration errors
//!
//! A schema *rejection* is never an error: documents that fail validation
//! produce a negative [`crate::ValidationOutcome`] instead. The variants
//! here all mean the gate itself could not do its job.

use thiserror::Error;

/// Central error enum for all OrderMesh gate operations.
#[derive(Debug, Error)]
pub enum OrdermeshError {
    // =================================================================
    // Schema Engine Errors (1xx)
    // =================================================================
    /// The validation engine could not execute at all. This is a statement
    /// about the validator, never about the document it was given.
    #[error("MESH_ERR_100: Schema engine failure: {reason}")]
    EngineFailure { reason: String },

    /// A schema document failed to compile. Raised when an engine is
    /// constructed, never mid-validation.
    #[error("MESH_ERR_101: Schema compilation failed: {reason}")]
    SchemaCompile { reason: String },

    // =================================================================
    // Encoding Errors (2xx)
    // =================================================================
    /// An order could not be canonically encoded to JSON. The document
    /// never reached the schema engine.
    #[error("MESH_ERR_200: Order serialization failed: {0}")]
    OrderSerialization(String),

    /// An outbound envelope could not be canonically encoded to JSON.
    #[error("MESH_ERR_201: Envelope serialization failed: {0}")]
    EnvelopeSerialization(String),

    // =================================================================
    // General / Configuration (9xx)
    // =================================================================
    /// Configuration error (bad custom schema text, missing fields, etc.).
    #[error("MESH_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, OrdermeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_failure_display() {
        let err = OrdermeshError::EngineFailure {
            reason: "engine not initialized".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.starts_with("MESH_ERR_100"), "Got: {msg}");
        assert!(msg.contains("engine not initialized"));
    }

    #[test]
    fn serialization_display() {
        let err = OrdermeshError::OrderSerialization("key must be a string".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("MESH_ERR_200"));
        assert!(msg.contains("key must be a string"));
    }

    #[test]
    fn all_errors_have_mesh_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(OrdermeshError::EngineFailure {
                reason: "trap".into(),
            }),
            Box::new(OrdermeshError::SchemaCompile {
                reason: "bad ref".into(),
            }),
            Box::new(OrdermeshError::OrderSerialization("nope".into())),
            Box::new(OrdermeshError::EnvelopeSerialization("nope".into())),
            Box::new(OrdermeshError::Configuration("bad schema text".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("MESH_ERR_"),
                "Error missing MESH_ERR_ prefix: {msg}"
            );
        }
    }
}
