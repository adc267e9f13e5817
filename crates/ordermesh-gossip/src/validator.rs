//! The gossip network's admission decision.
//!
//! The network layer calls one synchronous hook per inbound message and
//! expects a bare boolean: `true` relays the message, `false` drops it.
//! There is no error channel at this boundary, so this is the one place
//! in the gate where errors are absorbed — logged with identifying
//! detail, then collapsed to a rejection. A broken validator must fail
//! closed, never crash the dispatch path.

use tracing::{debug, error};

use ordermesh_filter::OrderFilter;
use ordermesh_types::{GossipMessage, PeerId};

use crate::ValidationContext;

/// The validator contract the gossip dispatch layer invokes.
///
/// `propagator` is the peer the message arrived from, which under flood
/// propagation is not necessarily `message.from`, the originator.
/// Implementations must always return, and must never panic: the answer
/// decides relay for the whole mesh, so an undecided message is a
/// dropped message.
pub trait MessageValidator: Send + Sync {
    fn validate(
        &self,
        cx: &ValidationContext,
        propagator: PeerId,
        message: &GossipMessage,
    ) -> bool;
}

/// [`MessageValidator`] over the Order Filter: accept exactly the
/// messages whose payload is a schema-valid order envelope.
pub struct FilterValidator {
    filter: OrderFilter,
}

impl FilterValidator {
    #[must_use]
    pub fn new(filter: OrderFilter) -> Self {
        Self { filter }
    }
}

impl MessageValidator for FilterValidator {
    fn validate(
        &self,
        cx: &ValidationContext,
        propagator: PeerId,
        message: &GossipMessage,
    ) -> bool {
        if cx.is_cancelled() {
            debug!(
                propagator = %propagator,
                message_id = %message.id,
                "Dropping gossip message: validation cancelled"
            );
            return false;
        }

        match self.filter.validate_envelope_document(&message.data) {
            Ok(outcome) if outcome.is_valid() => true,
            Ok(outcome) => {
                debug!(
                    propagator = %propagator,
                    originator = %message.from,
                    message_id = %message.id,
                    errors = ?outcome.errors(),
                    "Rejecting gossip message: envelope failed schema validation"
                );
                false
            }
            Err(err) => {
                // One attempt per message; redelivery is the network
                // layer's business.
                error!(
                    propagator = %propagator,
                    originator = %message.from,
                    message_id = %message.id,
                    error = %err,
                    "Match failed for inbound gossip message"
                );
                false
            }
        }
    }
}
