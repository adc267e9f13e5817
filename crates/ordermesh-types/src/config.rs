//! Filter configuration.

use serde::{Deserialize, Serialize};

use crate::{constants, ChainId, OrdermeshError, Result};

/// Configuration for an order gate instance.
///
/// A gate is pinned to one chain: orders naming any other chain are
/// structurally invalid for this gate even if well-formed elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Chain this gate admits orders for.
    pub chain_id: ChainId,
    /// Prefix of the gossip topic the gate derives. Must start with `/`.
    pub topic_prefix: String,
    /// Replacement order schema (JSON text). `None` uses the built-in
    /// schema; deployments with extra order fields can override it.
    pub custom_order_schema: Option<String>,
}

impl FilterConfig {
    /// Default configuration pinned to the given chain.
    #[must_use]
    pub fn for_chain(chain_id: ChainId) -> Self {
        Self {
            chain_id,
            ..Self::default()
        }
    }

    /// Check the configuration for values that cannot produce a working
    /// gate.
    pub fn validate(&self) -> Result<()> {
        if self.topic_prefix.is_empty() {
            return Err(OrdermeshError::Configuration(
                "topic prefix must not be empty".to_owned(),
            ));
        }
        if !self.topic_prefix.starts_with('/') {
            return Err(OrdermeshError::Configuration(format!(
                "topic prefix must start with '/', got {:?}",
                self.topic_prefix
            )));
        }
        if let Some(schema) = &self.custom_order_schema {
            if schema.trim().is_empty() {
                return Err(OrdermeshError::Configuration(
                    "custom order schema must not be blank".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            chain_id: ChainId(constants::DEFAULT_CHAIN_ID),
            topic_prefix: constants::DEFAULT_TOPIC_PREFIX.to_owned(),
            custom_order_schema: None,
        }
    }
}
