//! Bridging foreign engine reports into typed outcomes.
//!
//! A foreign engine answers with an [`EngineReport`]; this module is the
//! single place that interpretation happens, so every engine — compiled,
//! callback, out-of-process — classifies failures identically:
//!
//! - `fatal` set        -> `Err(MESH_ERR_100)`, the document was never judged
//! - `success == true`  -> valid outcome
//! - `success == false` -> invalid outcome carrying the engine's diagnostics
//!
//! An invalid document is **not** an error. Only an engine that could not
//! execute produces one.

use std::sync::Mutex;

use ordermesh_types::{OrdermeshError, Result, ValidationOutcome};

use crate::{DocumentClass, EngineReport, SchemaEngine};

/// Interpret a raw foreign report.
///
/// When `fatal` is set the `success` and `errors` fields are not read.
/// A report of `success == false` with an empty error list maps to an
/// invalid outcome with no diagnostics: the engine's judgment is
/// authoritative and nothing is synthesized in its place.
pub fn interpret_report(report: EngineReport) -> Result<ValidationOutcome> {
    if let Some(reason) = report.fatal {
        return Err(OrdermeshError::EngineFailure { reason });
    }
    if report.success {
        Ok(ValidationOutcome::ok())
    } else {
        Ok(ValidationOutcome::invalid(report.errors))
    }
}

// ---------------------------------------------------------------------------
// CallbackEngine
// ---------------------------------------------------------------------------

/// Lifts a foreign validation callback into a [`SchemaEngine`].
///
/// The callback sees the raw document and class and answers with a raw
/// [`EngineReport`]; interpretation goes through [`interpret_report`].
/// This is the plug-in point for engines hosted elsewhere, and the way
/// tests script engine behavior.
pub struct CallbackEngine<F> {
    callback: F,
}

impl<F> CallbackEngine<F>
where
    F: Fn(&[u8], DocumentClass) -> EngineReport + Send + Sync,
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> SchemaEngine for CallbackEngine<F>
where
    F: Fn(&[u8], DocumentClass) -> EngineReport + Send + Sync,
{
    fn validate(&self, document: &[u8], class: DocumentClass) -> Result<ValidationOutcome> {
        interpret_report((self.callback)(document, class))
    }
}

// ---------------------------------------------------------------------------
// SerializedEngine
// ---------------------------------------------------------------------------

/// Serializes calls into an engine that is not safe for concurrent use.
///
/// Single-threaded foreign engines (cooperative interpreters, handles into
/// non-reentrant runtimes) get wrapped here; callers still see an ordinary
/// [`SchemaEngine`] and may share it across threads. Throughput drops to
/// one validation at a time, which is the price of the wrapped engine's
/// constraint, not a property of the gate.
pub struct SerializedEngine<F> {
    callback: Mutex<F>,
}

impl<F> SerializedEngine<F>
where
    F: FnMut(&[u8], DocumentClass) -> EngineReport + Send,
{
    pub fn new(callback: F) -> Self {
        Self {
            callback: Mutex::new(callback),
        }
    }
}

impl<F> SchemaEngine for SerializedEngine<F>
where
    F: FnMut(&[u8], DocumentClass) -> EngineReport + Send,
{
    fn validate(&self, document: &[u8], class: DocumentClass) -> Result<ValidationOutcome> {
        // A poisoned lock means a previous call panicked mid-validation.
        // That is an engine malfunction, never a judgment on this document.
        let mut callback = self
            .callback
            .lock()
            .map_err(|_| OrdermeshError::EngineFailure {
                reason: "engine lock poisoned by a previous panic".to_owned(),
            })?;
        interpret_report((*callback)(document, class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_maps_to_valid_outcome() {
        let outcome = interpret_report(EngineReport::ok()).unwrap();
        assert!(outcome.is_valid());
        assert!(outcome.errors().is_empty());
    }

    #[test]
    fn rejection_preserves_error_order() {
        let report = EngineReport::rejected(vec![
            "missing field: makerAddress".to_owned(),
            "salt must be a string".to_owned(),
        ]);
        let outcome = interpret_report(report).unwrap();
        assert!(!outcome.is_valid());
        assert_eq!(
            outcome.errors(),
            [
                "missing field: makerAddress".to_owned(),
                "salt must be a string".to_owned(),
            ]
        );
    }

    #[test]
    fn fatal_wins_over_success() {
        // A buggy engine may leave success=true alongside a fatal reason;
        // fatal decides and the rest is never read.
        let report = EngineReport {
            success: true,
            errors: vec!["leftover".to_owned()],
            fatal: Some("engine not initialized".to_owned()),
        };
        let err = interpret_report(report).unwrap_err();
        assert!(matches!(err, OrdermeshError::EngineFailure { .. }));
        assert!(format!("{err}").contains("engine not initialized"));
    }

    #[test]
    fn rejection_with_no_diagnostics_is_still_a_rejection() {
        let outcome = interpret_report(EngineReport::rejected(Vec::new())).unwrap();
        assert!(!outcome.is_valid());
        assert!(outcome.errors().is_empty());
    }

    #[test]
    fn stray_errors_on_success_are_dropped() {
        let report = EngineReport {
            success: true,
            errors: vec!["noise".to_owned()],
            fatal: None,
        };
        let outcome = interpret_report(report).unwrap();
        assert!(outcome.is_valid());
        assert!(outcome.errors().is_empty());
    }

    #[test]
    fn callback_engine_routes_through_bridge() {
        let engine = CallbackEngine::new(|document: &[u8], class| {
            assert_eq!(class, DocumentClass::Order);
            if document == b"{}" {
                EngineReport::rejected(vec!["empty order".to_owned()])
            } else {
                EngineReport::ok()
            }
        });

        assert!(engine
            .validate(b"real", DocumentClass::Order)
            .unwrap()
            .is_valid());
        let outcome = engine.validate(b"{}", DocumentClass::Order).unwrap();
        assert_eq!(outcome.errors(), ["empty order".to_owned()]);
    }

    #[test]
    fn serialized_engine_allows_mutable_state() {
        let mut calls = 0u32;
        let engine = SerializedEngine::new(move |_document: &[u8], _class| {
            calls += 1;
            if calls == 1 {
                EngineReport::rejected(vec!["first call always rejects".to_owned()])
            } else {
                EngineReport::ok()
            }
        });

        assert!(!engine
            .validate(b"x", DocumentClass::Envelope)
            .unwrap()
            .is_valid());
        assert!(engine
            .validate(b"x", DocumentClass::Envelope)
            .unwrap()
            .is_valid());
    }

    #[test]
    fn poisoned_engine_reports_failure_not_judgment() {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let mut first = true;
        let engine = SerializedEngine::new(move |_document: &[u8], _class| {
            if first {
                first = false;
                panic!("engine crashed mid-call");
            }
            EngineReport::ok()
        });

        let crashed = catch_unwind(AssertUnwindSafe(|| {
            let _ = engine.validate(b"x", DocumentClass::Order);
        }));
        assert!(crashed.is_err());

        let err = engine.validate(b"x", DocumentClass::Order).unwrap_err();
        assert!(matches!(err, OrdermeshError::EngineFailure { .. }));
        assert!(format!("{err}").contains("poisoned"));
    }

    #[test]
    fn engines_are_shareable_across_threads() {
        use std::sync::Arc;

        let engine: Arc<dyn SchemaEngine> =
            Arc::new(CallbackEngine::new(|_: &[u8], _| EngineReport::ok()));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = Arc::clone(&engine);
                std::thread::spawn(move || {
                    engine
                        .validate(b"doc", DocumentClass::Order)
                        .unwrap()
                        .is_valid()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
