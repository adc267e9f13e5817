//! Gossip-layer message types.
//!
//! [`GossipMessage`] is what a peer hands the gate: opaque bytes plus
//! transport metadata. [`OrderEnvelope`] is what those bytes should
//! contain for an order share: a typed wrapper naming the payload kind
//! and the topics it was published under.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{constants, MessageId, OrdermeshError, PeerId, Result, SignedOrder};

/// A raw message received from the gossip mesh, before any validation.
///
/// `from` is the peer that *originated* the message, which under flood
/// propagation is not necessarily the peer we received it from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GossipMessage {
    pub id: MessageId,
    pub from: PeerId,
    /// Payload bytes, expected (but not guaranteed) to be an
    /// [`OrderEnvelope`] in canonical JSON.
    pub data: Vec<u8>,
    pub received_at: DateTime<Utc>,
}

impl GossipMessage {
    #[must_use]
    pub fn new(from: PeerId, data: Vec<u8>) -> Self {
        Self {
            id: MessageId::new(),
            from,
            data,
            received_at: Utc::now(),
        }
    }
}

/// The typed payload an order share carries over the mesh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEnvelope {
    /// Payload discriminator. Order shares use
    /// [`constants::ENVELOPE_MESSAGE_TYPE`].
    pub message_type: String,
    pub order: SignedOrder,
    /// Topics the sender published under.
    pub topics: Vec<String>,
}

impl OrderEnvelope {
    /// Wrap an order for publication on a single topic.
    #[must_use]
    pub fn for_order(order: SignedOrder, topic: impl Into<String>) -> Self {
        Self {
            message_type: constants::ENVELOPE_MESSAGE_TYPE.to_owned(),
            order,
            topics: vec![topic.into()],
        }
    }

    /// Canonical JSON bytes of this envelope, the form peers put on the
    /// wire and the form the gate validates.
    pub fn to_canonical_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self)
            .map_err(|err| OrdermeshError::EnvelopeSerialization(err.to_string()))
    }
}
