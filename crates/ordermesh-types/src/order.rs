//! The signed order model shared on the gossip network.
//!
//! The gate treats orders as structured but opaque: it checks the *shape*
//! of an order against the wire schema and never its economic content
//! (prices, balances, on-chain state all belong to other planes).
//!
//! Wire encoding is camelCase JSON. Amounts encode as decimal strings,
//! account keys and signatures as lowercase `0x`-prefixed hex. Canonical
//! encoding is stable: the same logical order always serializes to
//! identical bytes, which is what makes schema validation over the JSON
//! form well-defined.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ChainId, OrdermeshError, Result};

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// A 32-byte account key (maker, taker, or token mint), rendered on the
/// wire as lowercase `0x`-prefixed hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Address(pub [u8; 32]);

impl Address {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(Self(decode_prefixed_hex(deserializer, "account key")?))
    }
}

// ---------------------------------------------------------------------------
// Signature
// ---------------------------------------------------------------------------

/// A 64-byte ed25519 signature over the order, rendered on the wire as
/// lowercase `0x`-prefixed hex. The gate checks its shape only; verifying
/// it belongs to the settlement plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature(pub [u8; 64]);

impl Signature {
    /// All-zero signature, used as a placeholder in tests and drafts.
    #[must_use]
    pub fn zeroed() -> Self {
        Self([0u8; 64])
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(Self(decode_prefixed_hex(deserializer, "signature")?))
    }
}

/// Decode a `0x`-prefixed hex string into a fixed-size byte array.
fn decode_prefixed_hex<'de, D, const N: usize>(
    deserializer: D,
    what: &'static str,
) -> std::result::Result<[u8; N], D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    let raw = text
        .strip_prefix("0x")
        .ok_or_else(|| D::Error::custom(format!("{what} must start with 0x")))?;
    let bytes = hex::decode(raw).map_err(D::Error::custom)?;
    bytes
        .try_into()
        .map_err(|_| D::Error::custom(format!("{what} must be {N} bytes")))
}

// ---------------------------------------------------------------------------
// SignedOrder
// ---------------------------------------------------------------------------

/// A cryptographically signed trading order as shared between peers.
///
/// Field order is fixed by this definition; together with string-encoded
/// numerics that makes [`SignedOrder::to_canonical_json`] stable across
/// calls and across nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedOrder {
    /// Chain the order settles on. Gates pin this to their own chain.
    pub chain_id: ChainId,
    pub maker_address: Address,
    /// Counterparty restriction; the zero key means "anyone".
    pub taker_address: Address,
    pub maker_token: Address,
    pub taker_token: Address,
    #[serde(with = "rust_decimal::serde::str")]
    pub maker_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub taker_amount: Decimal,
    /// UNIX seconds after which the order is dead.
    pub expiration_time_seconds: u64,
    /// Maker-chosen entropy so otherwise-identical orders stay distinct.
    #[serde(with = "u64_string")]
    pub salt: u64,
    pub signature: Signature,
}

impl SignedOrder {
    /// Canonical JSON bytes of this order.
    ///
    /// Schema validation is defined over this encoding, not the in-memory
    /// representation.
    pub fn to_canonical_json(&self) -> Result<Vec<u8>> {
        canonical_json(self)
    }

    /// Whether the order is past its expiration time.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        u64::try_from(now.timestamp()).unwrap_or(0) > self.expiration_time_seconds
    }
}

/// Canonical JSON bytes for an order-shaped value.
///
/// Encoding failures map to [`OrdermeshError::OrderSerialization`]; a
/// document that fails to encode never reaches schema validation.
pub fn canonical_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(|err| OrdermeshError::OrderSerialization(err.to_string()))
}

/// Salt serializes as a decimal string so 64-bit entropy survives
/// JSON consumers that parse numbers as doubles.
mod u64_string {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &u64,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<u64, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl SignedOrder {
    /// A structurally valid order on chain 1 with a placeholder signature.
    /// Deterministic, so canonical-encoding tests can compare bytes.
    pub fn dummy() -> Self {
        Self {
            chain_id: ChainId(crate::constants::DEFAULT_CHAIN_ID),
            maker_address: Address([0x11; 32]),
            taker_address: Address([0x00; 32]),
            maker_token: Address([0x22; 32]),
            taker_token: Address([0x33; 32]),
            maker_amount: Decimal::new(100, 0),
            taker_amount: Decimal::new(2500, 1), // 250.0
            expiration_time_seconds: 4_102_444_800, // 2100-01-01
            salt: 1,
            signature: Signature::zeroed(),
        }
    }

    /// A dummy order with randomized salt, for tests that need many
    /// distinct orders.
    pub fn dummy_with_random_salt() -> Self {
        Self {
            salt: rand::random(),
            ..Self::dummy()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
