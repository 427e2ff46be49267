//! Unit tests for binding results and failure reporting.

use crate::filtering::domain::{BindingResult, ValidationFailure, simple_type_name};
use rstest::rstest;
use serde_json::json;

struct OrderRequest;

// ============================================================================
// Object name derivation
// ============================================================================

#[rstest]
fn object_name_is_lower_camel_simple_type_name() {
    let result = BindingResult::for_payload::<OrderRequest>();
    assert_eq!(result.object_name(), "orderRequest");
}

#[rstest]
fn generic_payload_types_drop_their_arguments() {
    let result = BindingResult::for_payload::<Vec<u8>>();
    assert_eq!(result.object_name(), "vec");
}

#[rstest]
fn simple_type_name_strips_path_and_generics() {
    assert_eq!(simple_type_name::<String>(), "String");
    assert_eq!(simple_type_name::<Vec<String>>(), "Vec");
    assert_eq!(simple_type_name::<OrderRequest>(), "OrderRequest");
}

// ============================================================================
// Failure collection
// ============================================================================

#[rstest]
fn fresh_result_has_no_errors() {
    let result = BindingResult::for_payload::<OrderRequest>();
    assert!(!result.has_errors());
    assert_eq!(result.error_count(), 0);
    assert!(result.failures().is_empty());
}

#[rstest]
fn failures_accumulate_in_insertion_order() {
    let mut result = BindingResult::for_payload::<OrderRequest>();
    result.reject_field("customer", "required", "customer must not be blank");
    result.reject("consistency", "order is internally inconsistent");

    assert!(result.has_errors());
    assert_eq!(result.error_count(), 2);
    assert_eq!(
        result.failures(),
        &[
            ValidationFailure::field("customer", "required", "customer must not be blank"),
            ValidationFailure::object("consistency", "order is internally inconsistent"),
        ],
    );
}

#[rstest]
fn display_summarises_all_failures() {
    let mut result = BindingResult::new("order".into());
    result.reject_field("quantity", "min", "quantity must be at least 1");
    result.reject("consistency", "order is internally inconsistent");

    let rendered = result.to_string();
    assert!(rendered.contains("'order' has 2 validation failure(s)"));
    assert!(rendered.contains("field 'quantity' [min]: quantity must be at least 1"));
    assert!(rendered.contains("object [consistency]: order is internally inconsistent"));
}

#[rstest]
fn display_reports_valid_results() {
    let result = BindingResult::new("order".into());
    assert_eq!(result.to_string(), "'order' is valid");
}

// ============================================================================
// Serialisation
// ============================================================================

#[rstest]
fn failures_serialise_with_a_kind_tag() {
    let failure = ValidationFailure::field("customer", "required", "customer must not be blank");
    let value = serde_json::to_value(&failure).expect("failure serialises");

    assert_eq!(
        value,
        json!({
            "kind": "field",
            "field": "customer",
            "code": "required",
            "message": "customer must not be blank",
        }),
    );
}
