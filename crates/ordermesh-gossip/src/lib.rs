//! # ordermesh-gossip
//!
//! The network boundary of the OrderMesh gate. The gossip dispatch layer
//! knows nothing of schemas or engines; it hands every inbound message to
//! a [`MessageValidator`] and relays on `true`. [`FilterValidator`] is
//! that validator for order envelopes, collapsing the filter's richer
//! results into the boolean the network contract allows.

pub mod context;
pub mod validator;

pub use context::ValidationContext;
pub use validator::{FilterValidator, MessageValidator};
