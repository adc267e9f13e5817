//! Schema validation verdicts.
//!
//! A [`ValidationOutcome`] is a judgment about a *document* — it is what a
//! healthy engine returns for both good and bad input. Engine malfunction
//! is not representable here; it surfaces as
//! [`crate::OrdermeshError::EngineFailure`] instead, so "this order is
//! malformed" and "our validator is broken" can never be conflated.

use serde::{Deserialize, Serialize};

/// Verdict for a single validated document.
///
/// Fields are private to protect the invariant that a passing outcome
/// carries no diagnostics. The converse is deliberately not enforced: a
/// lenient engine may reject a document without saying why, and that
/// rejection is still authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    valid: bool,
    errors: Vec<String>,
}

impl ValidationOutcome {
    /// A passing verdict. Carries no diagnostics.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// A failing verdict with the engine's diagnostics, order preserved.
    ///
    /// An empty list is allowed: the rejection stands on its own.
    #[must_use]
    pub fn invalid(errors: Vec<String>) -> Self {
        Self {
            valid: false,
            errors,
        }
    }

    /// Whether the document passed validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Human-readable diagnostics, in the order the engine produced them.
    /// Empty for passing verdicts.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}
