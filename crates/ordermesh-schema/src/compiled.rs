//! The default in-process engine.
//!
//! Compiles the resolved schema pair once at construction and answers
//! validation calls with no further allocation of engine state. Holding
//! compilation at construction means a broken schema surfaces as a
//! `MESH_ERR_101` before the gate ever sees traffic, never mid-message.

use jsonschema::Validator;
use serde_json::Value;
use tracing::debug;

use ordermesh_types::{FilterConfig, OrdermeshError, Result, ValidationOutcome};

use crate::{DocumentClass, FilterSchemas, SchemaEngine};

/// [`SchemaEngine`] backed by compiled JSON Schema validators.
#[derive(Debug)]
pub struct CompiledSchemaEngine {
    schemas: FilterSchemas,
    order: Validator,
    envelope: Validator,
}

impl CompiledSchemaEngine {
    /// Compile the engine for the given configuration.
    pub fn new(config: &FilterConfig) -> Result<Self> {
        config.validate()?;
        let schemas = FilterSchemas::resolve(config)?;
        let order = compile(schemas.order_schema(), "order schema")?;
        let envelope = compile(schemas.envelope_schema(), "envelope schema")?;
        debug!(
            chain_id = %schemas.chain_id(),
            schema_digest = %schemas.schema_digest(),
            topic = %schemas.topic(),
            "Compiled schema engine"
        );
        Ok(Self {
            schemas,
            order,
            envelope,
        })
    }

    /// The resolved schemas this engine was compiled from.
    #[must_use]
    pub fn schemas(&self) -> &FilterSchemas {
        &self.schemas
    }

    /// The gossip topic for orders validated by this engine.
    #[must_use]
    pub fn topic(&self) -> &str {
        self.schemas.topic()
    }
}

impl SchemaEngine for CompiledSchemaEngine {
    fn validate(&self, document: &[u8], class: DocumentClass) -> Result<ValidationOutcome> {
        // A document that is not JSON at all is an invalid document,
        // not an engine failure.
        let instance: Value = match serde_json::from_slice(document) {
            Ok(instance) => instance,
            Err(err) => {
                return Ok(ValidationOutcome::invalid(vec![format!(
                    "document is not valid JSON: {err}"
                )]));
            }
        };

        let validator = match class {
            DocumentClass::Order => &self.order,
            DocumentClass::Envelope => &self.envelope,
        };

        let errors: Vec<String> = validator
            .iter_errors(&instance)
            .map(|err| describe(&err))
            .collect();
        if errors.is_empty() {
            Ok(ValidationOutcome::ok())
        } else {
            Ok(ValidationOutcome::invalid(errors))
        }
    }
}

fn compile(schema: &Value, what: &str) -> Result<Validator> {
    jsonschema::validator_for(schema).map_err(|err| OrdermeshError::SchemaCompile {
        reason: format!("{what} failed to compile: {err}"),
    })
}

/// One diagnostic line per violation: instance path plus the engine's
/// message, matching the path format peers log for rejected shares.
fn describe(err: &jsonschema::ValidationError<'_>) -> String {
    let path = err.instance_path.to_string();
    if path.is_empty() {
        err.to_string()
    } else {
        format!("{path}: {err}")
    }
}
