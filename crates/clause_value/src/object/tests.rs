use super::*;
use pretty_assertions::assert_eq;

fn point(x: i64, y: i64) -> ObjectValue {
    ObjectValue::new("Point", [("x", Value::Int(x)), ("y", Value::Int(y))])
}

#[test]
fn layout_keeps_declaration_order() {
    let layout = ObjectLayout::new(&["z", "a", "m"]);
    assert_eq!(layout.names().collect::<Vec<_>>(), vec!["z", "a", "m"]);
    assert_eq!(layout.get_index("a"), Some(1));
    assert_eq!(layout.get_index("missing"), None);
    assert_eq!(layout.len(), 3);
}

#[test]
fn layout_ignores_repeated_names() {
    let layout = ObjectLayout::new(&["x", "x"]);
    assert_eq!(layout.len(), 1);
}

#[test]
fn field_lookup_by_name() {
    let p = point(1, 2);
    assert_eq!(p.type_name(), "Point");
    assert_eq!(p.get_field("x"), Some(&Value::Int(1)));
    assert_eq!(p.get_field("y"), Some(&Value::Int(2)));
    assert_eq!(p.get_field("z"), None);
    assert_eq!(p.layout().get_index("y"), Some(1));
}

#[test]
fn repeated_field_keeps_last_value() {
    let obj = ObjectValue::new("A", [("a", Value::Int(1)), ("a", Value::Int(5))]);
    assert_eq!(obj.field_count(), 1);
    assert_eq!(obj.layout().names().collect::<Vec<_>>(), vec!["a"]);
    assert_eq!(obj.get_field("a"), Some(&Value::Int(5)));
}

#[test]
fn equality_ignores_field_order() {
    let a = point(1, 2);
    let b = ObjectValue::new("Point", [("y", Value::Int(2)), ("x", Value::Int(1))]);
    assert_eq!(a, b);
    assert_ne!(a, point(1, 3));
}

#[test]
fn equality_is_nominal() {
    let a = point(1, 2);
    let b = ObjectValue::new("Vector", [("x", Value::Int(1)), ("y", Value::Int(2))]);
    assert_ne!(a, b);
}

#[test]
fn display_lists_fields() {
    assert_eq!(point(1, 2).to_string(), "Point(x=1, y=2)");
}
