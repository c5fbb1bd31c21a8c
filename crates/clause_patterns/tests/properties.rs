//! Property-based tests for the matcher.
//!
//! Generated values and patterns check the laws the matcher promises:
//! 1. A literal pattern matches exactly the values equal to it.
//! 2. A literal normalized into a pattern matches itself.
//! 3. Sequence shape: a `k`-element prefix accepts lists of length `>= k`,
//!    and fully matches only at `k` unless a tail is declared.
//! 4. Matching is pure: the same pattern and subject give the same results.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use clause_patterns::{all_matched, Element, Pattern, Value};
use proptest::prelude::*;

// -- Value Strategies --

fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,7}").expect("valid regex")
}

fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::None),
        any::<bool>().prop_map(Value::Bool),
        (-1000i64..=1000).prop_map(Value::Int),
        (-1000.0f64..1000.0).prop_map(Value::Float),
        (b'a'..=b'z').prop_map(|c| Value::Char(c as char)),
        key_strategy().prop_map(Value::string),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    leaf_strategy().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::list),
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::tuple),
            prop::collection::vec((key_strategy(), inner.clone()), 0..4).prop_map(Value::map),
            (
                prop::sample::select(vec!["Point", "Foo", "Bar"]),
                prop::collection::vec((key_strategy(), inner), 0..4),
            )
                .prop_map(|(name, fields)| Value::object(name, fields)),
        ]
    })
}

fn wildcards(count: usize) -> Vec<Element> {
    (0..count).map(|_| Element::from(Pattern::Wildcard)).collect()
}

fn list_of(len: usize) -> Value {
    Value::list((0..len).map(|n| Value::Int(i64::try_from(n).unwrap())).collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn literal_matches_iff_equal(expected in value_strategy(), given in value_strategy()) {
        let pattern = Pattern::Value(expected.clone());
        prop_assert_eq!(pattern.is_match(&given), expected == given);
        prop_assert!(pattern.is_match(&expected));
    }

    #[test]
    fn normalized_literal_matches_itself(value in value_strategy()) {
        prop_assert!(Pattern::from_literal(value.clone()).is_match(&value));
    }

    #[test]
    fn sequence_shape_law(heads in 0usize..6, len in 0usize..10) {
        let subject = list_of(len);

        let closed = Pattern::sequence(wildcards(heads)).unwrap();
        let results = closed.match_value(&subject);
        prop_assert_eq!(results[0].matched, len >= heads);
        prop_assert_eq!(all_matched(&results), len == heads);

        let mut items = wildcards(heads);
        items.push(Element::Rest);
        let open = Pattern::sequence(items).unwrap();
        prop_assert_eq!(open.is_match(&subject), len >= heads);
    }

    #[test]
    fn binding_tail_partitions_the_subject(heads in 0usize..6, extra in 0usize..6) {
        let mut items: Vec<Element> = (0..heads)
            .map(|i| Element::from(Pattern::var(format!("h{i}"))))
            .collect();
        items.push(Element::Rest);
        items.push(Element::from(Pattern::var("rest")));
        let pattern = Pattern::args(Pattern::sequence(items).unwrap());

        let subject = list_of(heads + extra);
        let env = pattern.capture(&subject).unwrap();
        prop_assert_eq!(env.len(), heads + 1);
        let rest = env.lookup("rest").unwrap().as_list().unwrap();
        prop_assert_eq!(rest.len(), extra);
    }

    #[test]
    fn matching_is_pure(value in value_strategy(), subject in value_strategy()) {
        let pattern = Pattern::from_literal(value);
        let first = pattern.match_value(&subject);
        let second = pattern.match_value(&subject);
        prop_assert_eq!(first, second);
    }
}
