use super::*;
use std::collections::HashSet;

#[test]
fn layer_equality_is_by_name() {
    let a = Layer::new("dependencies");
    let b = Layer::from("dependencies");

    assert_eq!(a, b);
    assert_eq!(a.name(), "dependencies");
    assert_eq!(a.to_string(), "dependencies");

    let set: HashSet<Layer> = [a, b, Layer::new("application")].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn layer_serializes_as_plain_string() {
    let json = serde_json::to_string(&Layer::new("application")).unwrap();
    assert_eq!(json, "\"application\"");
}
