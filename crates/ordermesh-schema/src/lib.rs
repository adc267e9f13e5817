//! # ordermesh-schema
//!
//! The schema plane of the **OrderMesh** gossip gate: everything between
//! "here are document bytes" and "valid / invalid / the engine broke".
//!
//! - [`SchemaEngine`]: the capability trait concrete engines implement.
//!   Callers receive an engine by injection and never look one up
//!   ambiently.
//! - [`EngineReport`] + [`interpret_report`]: the bridge from a foreign
//!   engine's raw result shape to a typed [`ordermesh_types::ValidationOutcome`],
//!   separating "document invalid" (a negative outcome) from "engine
//!   failed" (`MESH_ERR_100`).
//! - [`CallbackEngine`] / [`SerializedEngine`]: adapters that lift foreign
//!   validation callbacks into engines, with optional mutex serialization
//!   for engines unsafe under concurrency.
//! - [`FilterSchemas`] + [`CompiledSchemaEngine`]: the built-in engine —
//!   embedded JSON Schema documents resolved per network (chain pinning,
//!   envelope inlining, topic derivation) and compiled once at startup.

pub mod bridge;
pub mod compiled;
pub mod engine;
pub mod schemas;

pub use bridge::{interpret_report, CallbackEngine, SerializedEngine};
pub use compiled::CompiledSchemaEngine;
pub use engine::{DocumentClass, EngineReport, SchemaEngine};
pub use schemas::{FilterSchemas, ENVELOPE_SCHEMA_TEMPLATE, ORDER_SCHEMA_TEMPLATE};
