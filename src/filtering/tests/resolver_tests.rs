//! Unit tests for hint resolution strategies.

use super::fixtures::{OrderRequest, message};
use crate::filtering::domain::{Message, ValidationHint};
use crate::filtering::ports::validator::HintsResolver;
use crate::filtering::validation::{HeaderHints, NoHints, StaticHints};
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn no_hints_always_resolves_to_empty() {
    let resolver = NoHints;
    let hints = <NoHints as HintsResolver<OrderRequest>>::resolve(&resolver, &message("ACME", 1));
    assert!(hints.is_empty());
}

#[rstest]
fn static_hints_resolve_to_the_configured_list() {
    let resolver = StaticHints::new(vec![
        ValidationHint::new("checkout"),
        ValidationHint::new("express"),
    ]);

    let hints = resolver.resolve(&message("ACME", 1));

    assert_eq!(
        hints,
        vec![ValidationHint::new("checkout"), ValidationHint::new("express")],
    );
}

#[rstest]
fn header_hints_reads_a_string_header() {
    let resolver = HeaderHints::new("validation-groups");
    let msg = Message::builder(super::fixtures::order("ACME", 1))
        .with_header("validation-groups", json!("checkout"))
        .build(&DefaultClock);

    assert_eq!(resolver.resolve(&msg), vec![ValidationHint::new("checkout")]);
}

#[rstest]
fn header_hints_reads_an_array_header() {
    let resolver = HeaderHints::new("validation-groups");
    let msg = Message::builder(super::fixtures::order("ACME", 1))
        .with_header("validation-groups", json!(["checkout", "express"]))
        .build(&DefaultClock);

    assert_eq!(
        resolver.resolve(&msg),
        vec![ValidationHint::new("checkout"), ValidationHint::new("express")],
    );
}

#[rstest]
#[case::missing(None)]
#[case::number(Some(json!(7)))]
#[case::object(Some(json!({"group": "checkout"})))]
fn header_hints_yields_nothing_for_other_shapes(#[case] value: Option<serde_json::Value>) {
    let resolver = HeaderHints::new("validation-groups");
    let mut builder = Message::builder(super::fixtures::order("ACME", 1));
    if let Some(value) = value {
        builder = builder.with_header("validation-groups", value);
    }
    let msg = builder.build(&DefaultClock);

    assert!(resolver.resolve(&msg).is_empty());
}

#[rstest]
fn header_hints_ignores_non_string_array_elements() {
    let resolver = HeaderHints::new("validation-groups");
    let msg = Message::builder(super::fixtures::order("ACME", 1))
        .with_header("validation-groups", json!(["checkout", 7, null]))
        .build(&DefaultClock);

    assert_eq!(resolver.resolve(&msg), vec![ValidationHint::new("checkout")]);
}
