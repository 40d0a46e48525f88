//! PriorityMap integration tests
//!
//! Ordering, ordered enumeration and in-place transforms.

use pathmap::{PathMap, PriorityMap, collection::Value};

fn init_priority_map() -> PriorityMap<String> {
    let mut map = PriorityMap::new();
    map.set("a", 10, "test1".to_string());
    map.set("b", 20, "test2".to_string());
    map.set("c", 5, "test3".to_string());
    map
}

#[test]
fn test_can_be_created() {
    let map: PriorityMap<String> = PriorityMap::default();
    assert_eq!(map.count(), 0);
    assert!(map.is_empty());
}

#[test]
fn test_set() {
    let map = init_priority_map();
    assert_eq!(map.count(), 3);
    assert_eq!(map.keys(), ["c", "a", "b"]);
    assert_eq!(map.values(), vec!["test3", "test1", "test2"]);
}

#[test]
fn test_unset() {
    let mut map = init_priority_map();
    map.unset("b");
    assert_eq!(map.count(), 2);
    assert_eq!(map.keys(), ["c", "a"]);
}

#[test]
fn test_map() {
    let mut map = init_priority_map();
    map.map(|value| format!("{value}-map"));

    assert_eq!(map.count(), 3);
    assert_eq!(map.keys(), ["c", "a", "b"]);
    assert_eq!(map.values(), vec!["test3-map", "test1-map", "test2-map"]);
}

#[test]
fn test_get_single_and_all() {
    let map = init_priority_map();
    assert_eq!(map.get("a").map(String::as_str), Some("test1"));
    assert!(map.get("zz").is_none());

    let fallback = "dflt".to_string();
    assert_eq!(map.get_or("zz", &fallback), "dflt");

    // Without a key: every value, in priority order
    let all: Vec<&str> = map.iter().map(|(_, value)| value.as_str()).collect();
    assert_eq!(all, vec!["test3", "test1", "test2"]);
}

#[test]
fn test_order_is_never_stale() {
    let mut map = init_priority_map();

    map.set("d", 7, "test4".to_string());
    assert_eq!(map.keys(), ["c", "d", "a", "b"]);

    map.set("c", 100, "test3".to_string());
    assert_eq!(map.keys(), ["d", "a", "b", "c"]);

    map.unset("a");
    assert_eq!(map.keys(), ["d", "b", "c"]);

    map.clear();
    assert!(map.keys().is_empty());

    map.set("only", 0, String::new());
    assert_eq!(map.keys(), ["only"]);
}

#[test]
fn test_for_each_and_with_args() {
    let map = init_priority_map();

    let mut order = Vec::new();
    map.for_each(|key, _| order.push(key.to_string()));
    assert_eq!(order, vec!["c", "a", "b"]);

    // Register each entry under a prefix passed along as the extra argument
    let mut target = PathMap::new();
    map.for_each_with_args(
        |key, value, base: &str| {
            target.set(format!("{base}/{key}"), value.as_str(), false);
        },
        "hooks",
    );
    let keys: Vec<&str> = target
        .lookup("hooks")
        .and_then(Value::as_map)
        .map(|hooks| hooks.keys().map(String::as_str).collect())
        .unwrap_or_default();
    assert_eq!(keys, vec!["c", "a", "b"]);
    assert_eq!(target.get("hooks/a"), Some(Value::from("test1")));
}

#[test]
fn test_holds_nested_values() {
    let mut map: PriorityMap<PathMap> = PriorityMap::new();
    let mut late = PathMap::new();
    late.set("stage", "late", false);
    let mut early = PathMap::new();
    early.set("stage", "early", false);

    map.set("late", 50, late);
    map.set("early", -50, early);

    let stages: Vec<Value> = map
        .values()
        .into_iter()
        .filter_map(|layer| layer.get("stage"))
        .collect();
    assert_eq!(stages, vec![Value::from("early"), Value::from("late")]);
}
