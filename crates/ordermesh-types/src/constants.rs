//! System-wide constants for the OrderMesh acceptance gate.

/// Default chain admitted by a gate when none is configured.
pub const DEFAULT_CHAIN_ID: u64 = 1;

/// Prefix for the order-sharing pub/sub topic.
pub const DEFAULT_TOPIC_PREFIX: &str = "/ordermesh/orders";

/// Version segment baked into topic names. Bump on wire-format breaks.
pub const TOPIC_VERSION: u16 = 1;

/// Bytes of the canonical schema digest exposed in topic names.
///
/// Peers that disagree on the validation regime land on different topics,
/// so the digest only has to separate regimes, not resist collisions.
pub const SCHEMA_DIGEST_BYTES: usize = 8;

/// `messageType` value carried by order share envelopes.
pub const ENVELOPE_MESSAGE_TYPE: &str = "order";
