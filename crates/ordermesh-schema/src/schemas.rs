//! Schema assembly for one network.
//!
//! The wire schemas ship inside the binary as JSON Schema (Draft 2020-12)
//! templates. [`FilterSchemas`] resolves them for a concrete network:
//! pins the order schema to the configured chain, inlines the order schema
//! into the envelope schema, and derives the gossip topic from the chain
//! id and the canonical schema digest. Peers subscribed to the same topic
//! are therefore validating against the same schema.

use serde_json::{json, Map, Value};
use sha2::{Digest, Sha256};

use ordermesh_types::{constants, ChainId, FilterConfig, OrdermeshError, Result};

/// Built-in order schema template.
pub const ORDER_SCHEMA_TEMPLATE: &str = include_str!("../schemas/signed-order.schema.json");

/// Built-in envelope schema template. Its `$defs` are filled in at
/// resolution time with the (possibly custom) order schema.
pub const ENVELOPE_SCHEMA_TEMPLATE: &str = include_str!("../schemas/order-envelope.schema.json");

/// The resolved schema pair for one network.
#[derive(Debug, Clone)]
pub struct FilterSchemas {
    chain_id: ChainId,
    order_schema: Value,
    envelope_schema: Value,
    digest_hex: String,
    topic: String,
}

impl FilterSchemas {
    /// Resolve the schema pair for the given configuration.
    ///
    /// Schema text that fails to parse or has the wrong shape is a
    /// `MESH_ERR_101` at resolution time; nothing is deferred to
    /// per-message validation.
    pub fn resolve(config: &FilterConfig) -> Result<Self> {
        let order_template = config
            .custom_order_schema
            .as_deref()
            .unwrap_or(ORDER_SCHEMA_TEMPLATE);

        let mut order_schema = parse_schema(order_template, "order schema")?;
        pin_chain_id(&mut order_schema, config.chain_id)?;

        let digest_hex = schema_digest(&order_schema)?;
        let topic = format!(
            "{}/v{}/chain/{}/schema/{digest_hex}",
            config.topic_prefix,
            constants::TOPIC_VERSION,
            config.chain_id.0
        );

        let mut envelope_schema = parse_schema(ENVELOPE_SCHEMA_TEMPLATE, "envelope schema")?;
        inline_order_schema(&mut envelope_schema, &order_schema)?;

        Ok(Self {
            chain_id: config.chain_id,
            order_schema,
            envelope_schema,
            digest_hex,
            topic,
        })
    }

    #[must_use]
    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// The chain-pinned order schema.
    #[must_use]
    pub fn order_schema(&self) -> &Value {
        &self.order_schema
    }

    /// The envelope schema with the order schema inlined under `$defs`.
    #[must_use]
    pub fn envelope_schema(&self) -> &Value {
        &self.envelope_schema
    }

    /// Hex digest of the canonical pinned order schema.
    #[must_use]
    pub fn schema_digest(&self) -> &str {
        &self.digest_hex
    }

    /// The gossip topic peers validating under this schema share.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }
}

fn parse_schema(text: &str, what: &str) -> Result<Value> {
    let schema: Value = serde_json::from_str(text).map_err(|err| OrdermeshError::SchemaCompile {
        reason: format!("{what} is not valid JSON: {err}"),
    })?;
    if !schema.is_object() {
        return Err(OrdermeshError::SchemaCompile {
            reason: format!("{what} root must be a JSON object"),
        });
    }
    Ok(schema)
}

/// Splice `"chainId": {"const": <id>}` into the order schema's properties.
///
/// Orders naming any other chain then fail schema validation outright,
/// which keeps one topic's order set single-chain.
fn pin_chain_id(order_schema: &mut Value, chain_id: ChainId) -> Result<()> {
    let root = object_mut(order_schema, "order schema")?;
    let properties = root
        .entry("properties")
        .or_insert_with(|| Value::Object(Map::new()));
    let properties = object_mut(properties, "order schema properties")?;
    properties.insert("chainId".to_owned(), json!({ "const": chain_id.0 }));
    Ok(())
}

/// Move the order schema into the envelope schema's `$defs`.
///
/// The inlined copy loses `$schema` and `$id` so its internal `#/$defs/...`
/// references resolve against the envelope document root; its own `$defs`
/// entries are merged into the envelope's for the same reason.
fn inline_order_schema(envelope_schema: &mut Value, order_schema: &Value) -> Result<()> {
    let mut inlined = order_schema.clone();
    let body = object_mut(&mut inlined, "order schema")?;
    body.remove("$schema");
    body.remove("$id");
    let order_defs = match body.remove("$defs") {
        Some(Value::Object(defs)) => defs,
        _ => Map::new(),
    };

    let root = object_mut(envelope_schema, "envelope schema")?;
    let defs = root
        .entry("$defs")
        .or_insert_with(|| Value::Object(Map::new()));
    let defs = object_mut(defs, "envelope schema $defs")?;
    for (name, def) in order_defs {
        defs.insert(name, def);
    }
    defs.insert("signedOrder".to_owned(), inlined);
    Ok(())
}

fn object_mut<'a>(value: &'a mut Value, what: &str) -> Result<&'a mut Map<String, Value>> {
    value.as_object_mut().ok_or_else(|| OrdermeshError::SchemaCompile {
        reason: format!("{what} must be a JSON object"),
    })
}

/// Short hex digest of the canonical (sorted-key) encoding of the pinned
/// order schema. Identical schema content yields an identical digest on
/// every node, so the digest can live in the topic name.
fn schema_digest(order_schema: &Value) -> Result<String> {
    let canonical =
        serde_json::to_vec(order_schema).map_err(|err| OrdermeshError::SchemaCompile {
            reason: format!("order schema could not be canonically encoded: {err}"),
        })?;
    let mut hasher = Sha256::new();
    hasher.update(b"ordermesh:order-schema:v1:");
    hasher.update(&canonical);
    let hash = hasher.finalize();
    Ok(hex::encode(&hash[..constants::SCHEMA_DIGEST_BYTES]))
}
