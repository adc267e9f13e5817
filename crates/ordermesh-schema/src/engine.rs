//! The schema engine contract.
//!
//! Everything above this seam (filter, gossip adapter) validates documents
//! through [`SchemaEngine`] and never learns which concrete engine answered.
//! Everything below it is an implementation detail: the compiled in-process
//! engine, a foreign callback, an out-of-process service.

use std::fmt;

use serde::{Deserialize, Serialize};

use ordermesh_types::{Result, ValidationOutcome};

// ---------------------------------------------------------------------------
// Document classification
// ---------------------------------------------------------------------------

/// Which wire document a byte buffer claims to be.
///
/// The engine keeps one schema per class; callers state the class, the
/// engine never guesses from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentClass {
    /// A bare [`ordermesh_types::SignedOrder`] document.
    Order,
    /// An [`ordermesh_types::OrderEnvelope`] wrapping an order.
    Envelope,
}

impl fmt::Display for DocumentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Order => write!(f, "order"),
            Self::Envelope => write!(f, "envelope"),
        }
    }
}

// ---------------------------------------------------------------------------
// Raw engine report
// ---------------------------------------------------------------------------

/// The raw result shape a foreign validation engine produces, before any
/// interpretation.
///
/// `fatal` set means the engine could not execute at all; `success` and
/// `errors` carry no meaning in that case and must not be read. Serde
/// derives cover engines that hand back this shape as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineReport {
    pub success: bool,
    /// Diagnostics in the order the engine produced them.
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fatal: Option<String>,
}

impl EngineReport {
    /// A clean pass.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            fatal: None,
        }
    }

    /// A rejection with the engine's diagnostics.
    #[must_use]
    pub fn rejected(errors: Vec<String>) -> Self {
        Self {
            success: false,
            errors,
            fatal: None,
        }
    }

    /// The engine could not execute.
    #[must_use]
    pub fn fatal(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            errors: Vec::new(),
            fatal: Some(reason.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Engine capability trait
// ---------------------------------------------------------------------------

/// A schema validation engine.
///
/// One operation: judge a document against the schema for its class.
/// `Err` means the engine malfunctioned (`MESH_ERR_100`), never that the
/// document is invalid — invalidity is a negative [`ValidationOutcome`].
///
/// Implementations must be safe to call concurrently; wrap single-threaded
/// engines in [`crate::SerializedEngine`].
pub trait SchemaEngine: Send + Sync {
    fn validate(&self, document: &[u8], class: DocumentClass) -> Result<ValidationOutcome>;
}
