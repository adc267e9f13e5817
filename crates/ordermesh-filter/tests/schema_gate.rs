//! End-to-end checks of the filter over the real compiled engine.

use std::sync::Arc;

use serde_json::{json, Value};

use ordermesh_filter::OrderFilter;
use ordermesh_schema::CompiledSchemaEngine;
use ordermesh_types::{ChainId, FilterConfig, OrderEnvelope, SignedOrder};

fn gate() -> OrderFilter {
    OrderFilter::with_compiled_engine(&FilterConfig::default()).unwrap()
}

fn tampered(order: &SignedOrder, mutate: impl FnOnce(&mut Value)) -> Vec<u8> {
    let mut doc: Value = serde_json::from_slice(&order.to_canonical_json().unwrap()).unwrap();
    mutate(&mut doc);
    serde_json::to_vec(&doc).unwrap()
}

#[test]
fn well_formed_order_passes_both_paths() {
    let gate = gate();
    let order = SignedOrder::dummy();

    assert!(gate.match_order(&order).unwrap());
    assert!(gate
        .match_order_document(&order.to_canonical_json().unwrap())
        .unwrap());
}

#[test]
fn well_formed_envelope_passes() {
    let engine = CompiledSchemaEngine::new(&FilterConfig::default()).unwrap();
    let topic = engine.topic().to_owned();
    let gate = OrderFilter::new(Arc::new(engine));

    let envelope = OrderEnvelope::for_order(SignedOrder::dummy(), topic)
        .to_canonical_json()
        .unwrap();
    assert!(gate.match_envelope_document(&envelope).unwrap());
}

#[test]
fn missing_field_rejected_with_diagnostic() {
    let gate = gate();
    let doc = tampered(&SignedOrder::dummy(), |v| {
        v.as_object_mut().unwrap().remove("signature");
    });

    let outcome = gate.validate_order_document(&doc).unwrap();
    assert!(!outcome.is_valid());
    assert!(
        outcome.errors().iter().any(|e| e.contains("signature")),
        "Errors: {:?}",
        outcome.errors()
    );
}

#[test]
fn negative_amount_rejected() {
    let gate = gate();
    let doc = tampered(&SignedOrder::dummy(), |v| {
        v["makerAmount"] = json!("-5");
    });
    assert!(!gate.match_order_document(&doc).unwrap());
}

#[test]
fn wrong_chain_rejected_by_pinned_gate() {
    let gate = OrderFilter::with_compiled_engine(&FilterConfig::for_chain(ChainId(1337))).unwrap();

    let mut order = SignedOrder::dummy();
    order.chain_id = ChainId(1337);
    assert!(gate.match_order(&order).unwrap());

    order.chain_id = ChainId(1);
    assert!(!gate.match_order(&order).unwrap());
}

#[test]
fn typed_and_document_paths_agree_over_many_orders() {
    let gate = gate();
    for _ in 0..32 {
        let order = SignedOrder::dummy_with_random_salt();
        let encoded = order.to_canonical_json().unwrap();
        assert_eq!(
            gate.match_order(&order).unwrap(),
            gate.match_order_document(&encoded).unwrap()
        );
    }
}

#[test]
fn garbage_bytes_are_a_rejection_not_an_error() {
    let gate = gate();
    assert!(!gate.match_envelope_document(b"not json at all").unwrap());
    assert!(!gate.match_order_document(&[0xff, 0xfe, 0x00]).unwrap());
}
