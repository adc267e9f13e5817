//! The Order Filter: the gate's validation facade.
//!
//! Stateless and cheap to clone; every call goes straight to the injected
//! engine. The filter never absorbs errors: an engine failure propagates
//! to the caller, because only the outermost boundary (the gossip
//! adapter) knows what a failure should collapse to.
//!
//! Typed-order and raw-document entry points exist side by side. The
//! gossip path holds untrusted bytes and no typed order; internal callers
//! hold a typed order and should not pay a decode/encode round trip just
//! to reuse the byte path.

use std::sync::Arc;

use ordermesh_schema::{CompiledSchemaEngine, DocumentClass, SchemaEngine};
use ordermesh_types::{FilterConfig, Result, SignedOrder, ValidationOutcome};

/// Stateless validation facade over a schema engine.
#[derive(Clone)]
pub struct OrderFilter {
    engine: Arc<dyn SchemaEngine>,
}

impl OrderFilter {
    /// Build a filter over an injected engine.
    #[must_use]
    pub fn new(engine: Arc<dyn SchemaEngine>) -> Self {
        Self { engine }
    }

    /// Build a filter over the built-in compiled engine for `config`.
    pub fn with_compiled_engine(config: &FilterConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(CompiledSchemaEngine::new(config)?)))
    }

    /// Validate raw bytes claiming to be an order document.
    ///
    /// `Err` only on engine failure; a malformed document is a negative
    /// outcome.
    pub fn validate_order_document(&self, order_json: &[u8]) -> Result<ValidationOutcome> {
        self.engine.validate(order_json, DocumentClass::Order)
    }

    /// Validate a typed order by validating its canonical encoding.
    ///
    /// Fails with `MESH_ERR_200` if the order cannot be serialized; such
    /// an order never reaches the engine.
    pub fn validate_order(&self, order: &SignedOrder) -> Result<ValidationOutcome> {
        let encoded = order.to_canonical_json()?;
        self.validate_order_document(&encoded)
    }

    /// Boolean projection of [`Self::validate_order`].
    pub fn match_order(&self, order: &SignedOrder) -> Result<bool> {
        Ok(self.validate_order(order)?.is_valid())
    }

    /// Boolean projection of [`Self::validate_order_document`].
    pub fn match_order_document(&self, order_json: &[u8]) -> Result<bool> {
        Ok(self.validate_order_document(order_json)?.is_valid())
    }

    /// Validate raw bytes claiming to be an order envelope.
    pub fn validate_envelope_document(&self, envelope_json: &[u8]) -> Result<ValidationOutcome> {
        self.engine.validate(envelope_json, DocumentClass::Envelope)
    }

    /// Boolean projection of [`Self::validate_envelope_document`].
    pub fn match_envelope_document(&self, envelope_json: &[u8]) -> Result<bool> {
        Ok(self.validate_envelope_document(envelope_json)?.is_valid())
    }
}
