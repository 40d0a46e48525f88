//! Live aliases: writes through `get_ref` / `root_ref` land in the container.

use pathmap::{
    PathMap,
    collection::{Mapping, Value},
};

use crate::helpers::*;

#[test]
fn test_ref_elements_are_mutable() {
    let mut map = sample_map();

    // Alias to a nested level
    {
        let element = map.get_ref("three").expect("three exists");
        let inner = element.as_map_mut().expect("three is a mapping");
        assert_eq!(inner.get("A-one"), Some(&Value::from("31")));
        inner.insert("A-one", "Test");
    }

    // Alias to the whole tree
    {
        let root = map.root_ref();
        root.insert("four", "Test 4");
        if let Some(b_two) = root.get_path_mut("three/B-two") {
            *b_two = Value::from("Test B2");
        }
    }

    assert_texts(
        &map,
        &[
            ("three/A-one", "Test"),
            ("four", "Test 4"),
            ("three/B-two", "Test B2"),
        ],
    );
    assert!(map.has("four"));
    assert_eq!(map.count(), 4);
}

#[test]
fn test_alias_reaches_deeper_levels() {
    let mut map = sample_map();

    let three = map
        .get_ref("three")
        .and_then(Value::as_map_mut)
        .expect("three is a mapping");
    if let Some(int) = three.get_path_mut("C-three/int") {
        *int = Value::Int(11);
    }
    three.insert_path("C-three/added", "new", false).unwrap();

    assert_eq!(map.get("three/C-three/int"), Some(Value::Int(11)));
    assert_eq!(map.get("three/C-three/added"), Some(Value::from("new")));
}

#[test]
fn test_alias_can_replace_a_subtree() {
    let mut map = sample_map();

    *map.get_ref("three").unwrap() = Value::from("flat");

    assert_eq!(map.get("three"), Some(Value::from("flat")));
    assert!(!map.has("three/A-one"));
    assert_eq!(map.count(), 3);
}

#[test]
fn test_alias_to_scalar() {
    let mut map = sample_map();

    if let Some(Value::Text(text)) = map.get_ref("three/C-three/string") {
        text.push_str(" (edited)");
    }

    assert_texts(&map, &[("three/C-three/string", "A string (edited)")]);
}

#[test]
fn test_get_ref_missing_is_none() {
    let mut map = sample_map();

    assert!(map.get_ref("missing").is_none());
    assert!(map.get_ref("three/missing").is_none());
    assert!(map.get_ref("one/below-scalar").is_none());
    assert!(map.get_ref("").is_none());

    // Failed lookups create nothing
    assert_eq!(map.all(), sample_mapping());
}

#[test]
fn test_root_ref_clear_empties_container() {
    let mut map = sample_map();
    map.root_ref().clear();
    assert!(map.is_empty());

    map.root_ref().insert("a", Mapping::new().with("b", 1));
    assert_eq!(map.get("a/b"), Some(Value::Int(1)));
}

#[test]
fn test_copy_then_alias_do_not_interfere() {
    let mut map = PathMap::new();
    map.set("k", "v", false);

    let snapshot = map.get("k");
    *map.get_ref("k").unwrap() = Value::from("changed");

    assert_eq!(snapshot, Some(Value::from("v")));
    assert_eq!(map.get("k"), Some(Value::from("changed")));
}
