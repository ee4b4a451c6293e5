//! Property-based tests for sieve-validator.

use proptest::prelude::*;
use serde_json::{Value, json};
use sieve_validator::prelude::*;

fn bounded_integers() -> EachRule {
    EachRule::new(json!(["integer", {"min": 0, "max": 100}]))
}

// ============================================================================
// FIRST FAILURE: the reported error belongs to the first bad element
// ============================================================================

proptest! {
    #[test]
    fn reports_first_out_of_range_element(items in prop::collection::vec(-50i64..150, 0..20)) {
        let outcome = bounded_integers().validate_value(&json!(items)).unwrap();

        match items.iter().find(|n| !(0..=100).contains(*n)) {
            None => prop_assert!(outcome.is_valid()),
            Some(n) => {
                let error = outcome.into_error().unwrap();
                let expected = if *n < 0 { "min" } else { "max" };
                prop_assert_eq!(error.code.as_ref(), expected);
            }
        }
    }

    #[test]
    fn validation_is_idempotent(items in prop::collection::vec(-50i64..150, 0..20)) {
        let rule = bounded_integers();
        let value = json!(items);
        let first = rule.validate_value(&value).unwrap();
        let second = rule.validate_value(&value).unwrap();
        prop_assert_eq!(first, second);
    }
}

// ============================================================================
// SCALARS: never a collection, always the rule's own failure
// ============================================================================

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        ".{0,12}".prop_map(Value::from),
    ]
}

proptest! {
    #[test]
    fn scalars_are_not_arrays(value in scalar(), prefer in any::<bool>()) {
        let rule = EachRule::builder(json!(["integer"]))
            .prefer_sub_rule_message(prefer)
            .build();
        let error = rule.validate_value(&value).unwrap().into_error().unwrap();

        prop_assert_eq!(error.code.as_ref(), "not_array");
        prop_assert_eq!(error.message.as_ref(), rule.policy().message());
    }
}

// ============================================================================
// MESSAGE POLICY: without preference no element detail leaks out
// ============================================================================

proptest! {
    #[test]
    fn own_message_has_no_params(items in prop::collection::vec("[a-z]{0,6}", 1..10)) {
        let rule = EachRule::builder(RuleDescription::instance(Text::new().min(2).max(4)))
            .prefer_sub_rule_message(false)
            .build();

        if let Some(error) = rule.validate_value(&json!(items)).unwrap().into_error() {
            prop_assert_eq!(error.code.as_ref(), "each_invalid");
            prop_assert!(error.params.is_empty());
        }
    }
}

// ============================================================================
// FILTERING: same shape, every element transformed
// ============================================================================

proptest! {
    #[test]
    fn filter_maps_every_element(items in prop::collection::vec(".{0,8}", 0..10)) {
        let rule = EachRule::new(json!(["uppercase"]));
        let mut record = Record::new().with_field("names", json!(items));

        prop_assert!(rule.validate_field(&mut record, "names").unwrap().is_valid());

        let expected: Vec<String> = items.iter().map(|s| s.to_uppercase()).collect();
        let expected = json!(expected);
        prop_assert_eq!(record.field("names"), Some(&expected));
    }
}

// ============================================================================
// TYPE CONVERSION: JSON numbers keep their value
// ============================================================================

proptest! {
    #[test]
    fn json_integer_as_i64_preserves_value(n in any::<i64>()) {
        let result: i64 = AsValidatable::<i64>::as_validatable(&json!(n)).unwrap();
        prop_assert_eq!(result, n);
    }

    #[test]
    fn json_integer_widens_to_f64(n in -(1i64 << 53)..=(1i64 << 53)) {
        let result: f64 = AsValidatable::<f64>::as_validatable(&json!(n)).unwrap();
        prop_assert_eq!(result as i64, n);
    }
}
