use crate::{Element, Pattern, PatternError, SequencePattern, Tail, Value};
use pretty_assertions::assert_eq;

#[test]
fn seq_macro_accepts_rest_marker() {
    let pattern = seq![Pattern::var("head"), .., Pattern::var("rest")].unwrap();
    let expected = SequencePattern::decompose(vec![
        Element::from(Pattern::var("head")),
        Element::Rest,
        Element::from(Pattern::var("rest")),
    ])
    .unwrap();
    assert_eq!(pattern, Pattern::Sequence(expected));
}

#[test]
fn seq_macro_normalizes_literals() {
    let pattern = seq![1, "a", ..].unwrap();
    let Pattern::Sequence(seq) = &pattern else {
        panic!("expected a sequence, got {pattern:?}");
    };
    assert_eq!(seq.heads(), &[Pattern::value(1), Pattern::value("a")]);
    assert_eq!(seq.tail(), &Tail::Open);
}

#[test]
fn seq_macro_reports_bad_tail() {
    let err = seq![.., 1].unwrap_err();
    assert!(matches!(err, PatternError::InvalidPatternShape { .. }));
}

#[test]
fn empty_seq_macro() {
    let pattern = seq![].unwrap();
    assert!(pattern.is_match(&Value::list(vec![])));
    assert!(!pattern.is_match(&Value::list(vec![Value::None])));
}

#[test]
fn tuple_macro_mixes_patterns_and_literals() {
    let pattern = tuple![Pattern::var("x"), 2, 3];
    assert_eq!(
        pattern,
        Pattern::tuple([Pattern::var("x"), Pattern::value(2), Pattern::value(3)])
    );
}

#[test]
fn mapping_macro() {
    let pattern = mapping! { "a" => tuple![false, Pattern::var("y")], "b" => 1 };
    assert_eq!(pattern.to_string(), "dict(a=(false, $y), b=1)");
    assert_eq!(mapping! {}, Pattern::mapping(Vec::<(String, Pattern)>::new()));
}

#[test]
fn dup_macro() {
    let pattern = dup![Pattern::var("all"), tuple![Pattern::var("a"), Pattern::Wildcard]].unwrap();
    let env = Pattern::args(pattern)
        .capture(&Value::tuple(vec![Value::int(1), Value::int(2)]))
        .unwrap();
    assert_eq!(env.lookup("a"), Some(&Value::int(1)));
    assert_eq!(env.len(), 2);
}
