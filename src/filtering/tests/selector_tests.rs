//! Unit tests for the validating selector.

use super::fixtures::{OrderRequest, OrderRules, RecordingEngine, message};
use crate::filtering::domain::{Message, ValidationFailure, ValidationHint};
use crate::filtering::ports::selector::MessageSelector;
use crate::filtering::validation::{FnResolver, StaticHints, ValidatingSelector};
use rstest::rstest;
use std::sync::Arc;

// ============================================================================
// Plain validation
// ============================================================================

#[rstest]
#[case::quiet(false)]
#[case::raising(true)]
fn valid_payload_is_accepted_regardless_of_rejection_flag(#[case] throw: bool) {
    let mut selector = ValidatingSelector::new(Arc::new(OrderRules));
    selector.set_throw_exception_on_rejection(throw);

    let result = selector.accept(&message("ACME", 3));

    assert!(result.expect("valid payload never raises"));
}

#[rstest]
fn invalid_payload_is_declined_quietly_by_default() {
    let selector = ValidatingSelector::new(Arc::new(OrderRules));

    let result = selector.accept(&message("", 3));

    assert!(!result.expect("quiet mode never raises"));
}

#[rstest]
fn invalid_payload_raises_when_rejection_flag_is_set() {
    let mut selector = ValidatingSelector::new(Arc::new(OrderRules));
    selector.set_throw_exception_on_rejection(true);

    let original = message("", 0);
    let error = selector
        .accept(&original)
        .expect_err("rejection should raise");

    assert_eq!(error.message().id(), original.id());
    assert_eq!(error.errors().error_count(), 2);
    assert_eq!(error.errors().object_name(), "orderRequest");
}

#[rstest]
fn rejection_error_carries_the_violated_constraints() {
    let mut selector = ValidatingSelector::new(Arc::new(OrderRules));
    selector.set_throw_exception_on_rejection(true);

    let error = selector
        .accept(&message("ACME", 0))
        .expect_err("rejection should raise");

    let codes: Vec<&str> = error.errors().failures().iter().map(|f| f.code()).collect();
    assert_eq!(codes, vec!["min"]);
}

// ============================================================================
// Hinted validation
// ============================================================================

#[rstest]
fn hinted_engine_receives_exactly_the_resolved_hints() {
    let engine = Arc::new(RecordingEngine::accepting());
    let mut selector = ValidatingSelector::with_smart_validator(engine.clone());
    selector.set_hints_resolver(Arc::new(StaticHints::new(vec![
        ValidationHint::new("checkout"),
        ValidationHint::new("express"),
    ])));

    selector
        .accept(&message("ACME", 1))
        .expect("engine accepts");

    assert_eq!(
        engine.hinted_calls(),
        vec![vec![
            ValidationHint::new("checkout"),
            ValidationHint::new("express"),
        ]],
    );
    assert_eq!(engine.plain_calls(), 0);
}

#[rstest]
fn hinted_engine_receives_empty_hints_without_a_resolver() {
    let engine = Arc::new(RecordingEngine::accepting());
    let selector = ValidatingSelector::with_smart_validator(engine.clone());

    selector
        .accept(&message("ACME", 1))
        .expect("engine accepts");

    assert_eq!(engine.hinted_calls(), vec![Vec::new()]);
}

#[rstest]
fn closure_resolver_feeds_the_engine() {
    let engine = Arc::new(RecordingEngine::accepting());
    let mut selector = ValidatingSelector::with_smart_validator(engine.clone());
    let resolver = FnResolver::new(|msg: &Message<OrderRequest>| {
        vec![ValidationHint::new(format!("for-{}", msg.payload().customer))]
    });
    selector.set_hints_resolver(Arc::new(resolver));

    selector
        .accept(&message("acme", 1))
        .expect("engine accepts");

    assert_eq!(engine.hinted_calls(), vec![vec![ValidationHint::new("for-acme")]]);
}

#[rstest]
fn plain_engine_is_never_called_with_hints() {
    let engine = Arc::new(RecordingEngine::accepting());
    let mut selector: ValidatingSelector<_> = ValidatingSelector::new(engine.clone());
    selector.set_hints_resolver(Arc::new(StaticHints::new(vec![ValidationHint::new(
        "ignored",
    )])));

    selector
        .accept(&message("ACME", 1))
        .expect("engine accepts");

    assert_eq!(engine.plain_calls(), 1);
    assert!(engine.hinted_calls().is_empty());
}

#[rstest]
fn hinted_rejection_honours_the_rejection_flag() {
    let engine = Arc::new(RecordingEngine::rejecting());
    let mut selector = ValidatingSelector::with_smart_validator(engine);

    assert!(!selector.accept(&message("ACME", 1)).expect("quiet mode"));

    selector.set_throw_exception_on_rejection(true);
    let error = selector
        .accept(&message("ACME", 1))
        .expect_err("raising mode");
    assert_eq!(
        error.errors().failures().first().map(ValidationFailure::code),
        Some("recorded"),
    );
}

#[rstest]
fn mode_is_fixed_at_construction() {
    let plain = ValidatingSelector::new(Arc::new(OrderRules));
    let hinted = ValidatingSelector::with_smart_validator(Arc::new(RecordingEngine::accepting()));

    assert!(!plain.is_hinted());
    assert!(hinted.is_hinted());
}

// ============================================================================
// Configuration-time mutation
// ============================================================================

#[rstest]
fn rejection_flag_change_affects_only_subsequent_calls() {
    let mut selector = ValidatingSelector::new(Arc::new(OrderRules));
    let invalid = message("", 1);

    assert!(!selector.accept(&invalid).expect("quiet mode never raises"));

    selector.set_throw_exception_on_rejection(true);
    assert!(selector.accept(&invalid).is_err());

    selector.set_throw_exception_on_rejection(false);
    assert!(!selector.accept(&invalid).expect("quiet mode never raises"));
}

#[rstest]
fn resolver_change_affects_only_subsequent_calls() {
    let engine = Arc::new(RecordingEngine::accepting());
    let mut selector = ValidatingSelector::with_smart_validator(engine.clone());

    selector
        .accept(&message("ACME", 1))
        .expect("engine accepts");

    selector.set_hints_resolver(Arc::new(StaticHints::new(vec![ValidationHint::new(
        "late",
    )])));
    selector
        .accept(&message("ACME", 1))
        .expect("engine accepts");

    assert_eq!(
        engine.hinted_calls(),
        vec![Vec::new(), vec![ValidationHint::new("late")]],
    );
}
