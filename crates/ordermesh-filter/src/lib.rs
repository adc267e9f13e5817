//! # ordermesh-filter
//!
//! The **Order Filter**: the stateless validation facade of the OrderMesh
//! gossip gate. Wraps an injected [`ordermesh_schema::SchemaEngine`] and
//! exposes typed-order and raw-document validation, each with outcome and
//! boolean projections. Engine failures propagate; absorbing them is the
//! gossip boundary's job.

pub mod filter;

pub use filter::OrderFilter;
