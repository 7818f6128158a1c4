//! Property-based tests for the set algebra laws.
//!
//! Inputs are drawn as either sequences or sets of mixed integer, float and text
//! values from small domains, so overlaps and duplicates are common.

use proptest::prelude::*;
use setops::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn element() -> impl Strategy<Value = Value> {
    prop_oneof![
        (0_i64..8).prop_map(Value::Integer),
        (0_u8..4).prop_map(|n| Value::Float(f64::from(n) / 2.0)),
        "[a-d]".prop_map(Value::Text),
        (0_i64..4).prop_map(|n| Value::Text(n.to_string())),
    ]
}

fn collection() -> impl Strategy<Value = Value> {
    prop::collection::vec(element(), 0..12).prop_flat_map(|elements| {
        prop_oneof![
            Just(Value::Sequence(elements.clone())),
            Just(Value::set(elements)),
        ]
    })
}

fn empty() -> Value {
    Value::Sequence(Vec::new())
}

fn element_set(collection: &Value) -> Set<Value> {
    to_set(collection).unwrap().into_owned()
}

// =============================================================================
// Equality Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_are_equal_reflexive(a in collection()) {
        prop_assert_eq!(are_equal(&a, &a), Ok(true));
    }

    #[test]
    fn prop_are_equal_ignores_shape_order_and_duplicates(
        elements in prop::collection::vec(element(), 0..12)
    ) {
        let mut shuffled = elements.clone();
        shuffled.reverse();
        shuffled.extend(elements.iter().cloned());

        let as_set = Value::set(elements);
        prop_assert_eq!(are_equal(&Value::Sequence(shuffled), &as_set), Ok(true));
    }

    #[test]
    fn prop_are_equal_symmetric(a in collection(), b in collection()) {
        prop_assert_eq!(are_equal(&a, &b), are_equal(&b, &a));
    }

    #[test]
    fn prop_are_equal_matches_set_equality(a in collection(), b in collection()) {
        prop_assert_eq!(are_equal(&a, &b), Ok(element_set(&a) == element_set(&b)));
    }
}

// =============================================================================
// Subset Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_empty_is_subset_of_everything(a in collection()) {
        prop_assert_eq!(is_subset(&empty(), &a), Ok(true));
    }

    #[test]
    fn prop_subset_of_empty_iff_empty(a in collection()) {
        let is_empty = element_set(&a).is_empty();
        prop_assert_eq!(is_subset(&a, &empty()), Ok(is_empty));
    }

    #[test]
    fn prop_operands_are_subsets_of_union(a in collection(), b in collection()) {
        let union = union(&a, &b).unwrap();
        prop_assert_eq!(is_subset(&a, &union), Ok(true));
        prop_assert_eq!(is_subset(&b, &union), Ok(true));
    }

    #[test]
    fn prop_intersection_is_subset_of_operands(a in collection(), b in collection()) {
        let intersection = intersection(&a, &b).unwrap();
        prop_assert_eq!(is_subset(&intersection, &a), Ok(true));
        prop_assert_eq!(is_subset(&intersection, &b), Ok(true));
    }
}

// =============================================================================
// Commutativity and Idempotence
// =============================================================================

proptest! {
    #[test]
    fn prop_union_commutative(a in collection(), b in collection()) {
        prop_assert_eq!(union(&a, &b), union(&b, &a));
    }

    #[test]
    fn prop_intersection_commutative(a in collection(), b in collection()) {
        prop_assert_eq!(intersection(&a, &b), intersection(&b, &a));
    }

    #[test]
    fn prop_union_idempotent(a in collection()) {
        prop_assert_eq!(union(&a, &a), Ok(element_set(&a)));
    }

    #[test]
    fn prop_intersection_idempotent(a in collection()) {
        prop_assert_eq!(intersection(&a, &a), Ok(element_set(&a)));
    }

    #[test]
    fn prop_difference_with_self_is_empty(a in collection()) {
        prop_assert!(difference(&a, &a).unwrap().is_empty());
    }

    #[test]
    fn prop_union_with_empty_is_identity(a in collection()) {
        prop_assert_eq!(union(&a, &empty()), Ok(element_set(&a)));
        prop_assert_eq!(union(&empty(), &a), Ok(element_set(&a)));
    }
}

// =============================================================================
// Difference Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_symmetric_difference_definition(a in collection(), b in collection()) {
        let expected = union(&difference(&a, &b).unwrap(), &difference(&b, &a).unwrap());
        prop_assert_eq!(symmetric_difference(&a, &b), expected);
    }

    #[test]
    fn prop_symmetric_difference_empty_iff_equal(a in collection(), b in collection()) {
        let is_empty = symmetric_difference(&a, &b).unwrap().is_empty();
        prop_assert_eq!(Ok(is_empty), are_equal(&a, &b));
    }

    #[test]
    fn prop_difference_excludes_right(a in collection(), b in collection()) {
        let difference = difference(&a, &b).unwrap();
        let right = element_set(&b);
        prop_assert!(difference.iter().all(|element| !right.contains(element)));
    }

    #[test]
    fn prop_difference_and_intersection_partition_left(a in collection(), b in collection()) {
        let difference = difference(&a, &b).unwrap();
        let intersection = intersection(&a, &b).unwrap();
        prop_assert_eq!(union(&difference, &intersection), Ok(element_set(&a)));
        prop_assert!(intersection.iter().all(|element| !difference.contains(element)));
    }
}

// =============================================================================
// Traversal Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_map_identity_yields_element_set(a in collection()) {
        prop_assert_eq!(map(&a, Value::clone), Ok(element_set(&a)));
    }

    #[test]
    fn prop_fold_counts_enumerated_elements(a in collection()) {
        let expected = elements(&a).unwrap().len();
        prop_assert_eq!(fold(&a, 0_usize, |count, _| count + 1), Ok(expected));
    }

    #[test]
    fn prop_forall_is_negated_exists(a in collection()) {
        let is_integer = |value: &Value| matches!(value, Value::Integer(_));
        let all = forall(&a, is_integer).unwrap();
        let any_not = exists(&a, |value| !is_integer(value)).unwrap();
        prop_assert_eq!(all, !any_not);
    }
}

// =============================================================================
// Strict Typing
// =============================================================================

proptest! {
    #[test]
    fn prop_integer_never_matches_its_float(n in -1000_i32..1000) {
        let numbers = values![n];
        let floats = values![f64::from(n)];
        prop_assert_eq!(are_equal(&numbers, &floats), Ok(false));
    }

    #[test]
    fn prop_integer_never_matches_its_text(n in 0_i64..1000) {
        let numbers = values![n];
        let texts = values![n.to_string()];
        prop_assert_eq!(is_subset(&numbers, &texts), Ok(false));
        prop_assert_eq!(is_subset(&texts, &numbers), Ok(false));
        prop_assert!(intersection(&numbers, &texts).unwrap().is_empty());
    }
}
