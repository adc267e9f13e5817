//! # ordermesh-types
//!
//! Shared types, errors, and configuration for the **OrderMesh** gossip gate.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`PeerId`], [`MessageId`], [`ChainId`]
//! - **Order model**: [`SignedOrder`], [`Address`], [`Signature`]
//! - **Message model**: [`GossipMessage`], [`OrderEnvelope`]
//! - **Validation model**: [`ValidationOutcome`]
//! - **Configuration**: [`FilterConfig`]
//! - **Errors**: [`OrdermeshError`] with `MESH_ERR_` prefix codes
//! - **Constants**: wire-format and topic defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod message;
pub mod order;
pub mod outcome;

// Re-export all primary types at crate root for ergonomic imports:
//   use ordermesh_types::{SignedOrder, OrderEnvelope, ValidationOutcome, ...};

pub use config::*;
pub use error::*;
pub use ids::*;
pub use message::*;
pub use order::*;
pub use outcome::*;

// Constants are accessed via `ordermesh_types::constants::FOO`
// (not re-exported to avoid name collisions).
