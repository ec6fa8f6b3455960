//! Sequences, fixed arrays and maps.

use crate::{mocker, COUNT};
use std::collections::{BTreeMap, HashMap};
use structmock::{mock_aggregate, FieldKind, MockError};

#[test]
fn test_default_sequence() -> anyhow::Result<()> {
    let mut mocker = mocker();
    for _ in 0..COUNT {
        let mut list: Vec<String> = Vec::new();
        mocker.mock("", &mut list)?;
        assert!((1..10).contains(&list.len()));
        assert!(list.iter().all(|s| (1..10).contains(&s.len())));
    }
    Ok(())
}

#[test]
fn test_sequence_is_replaced() -> anyhow::Result<()> {
    let mut mocker = mocker();
    let mut list = vec![-1i64; 20];
    mocker.mock("range(3, 3)", &mut list)?;
    assert_eq!(list.len(), 3);
    assert!(list.iter().all(|n| (1..10).contains(n)));
    Ok(())
}

#[test]
fn test_empty_sequence() -> anyhow::Result<()> {
    let mut mocker = mocker();
    let mut list = vec![1u8];
    mocker.mock("range(0, 0)", &mut list)?;
    assert!(list.is_empty());
    Ok(())
}

#[test]
fn test_negative_sequence_length_is_rejected() {
    let mut mocker = mocker();
    let mut list: Vec<u8> = Vec::new();
    let err = mocker.mock("range(-3, 2)", &mut list).unwrap_err();
    assert!(err.to_string().contains("lengths must not be negative"), "{err}");
    assert!((1..10).contains(&list.len()));
}

#[test]
fn test_element_directive_applies_one_level() -> anyhow::Result<()> {
    let mut mocker = mocker();
    mocker.set_tags(HashMap::from([(
        "pair".to_string(),
        "range(2, 2)".to_string(),
    )]));

    let mut grid: Vec<Vec<u8>> = Vec::new();
    mocker.mock("range(4, 4) elem(pair)", &mut grid)?;
    assert_eq!(grid.len(), 4);
    for row in &grid {
        assert_eq!(row.len(), 2);
        assert!(row.iter().all(|n| (1..10).contains(n)));
    }
    Ok(())
}

#[test]
fn test_fixed_array() -> anyhow::Result<()> {
    let mut mocker = mocker();
    let mut array = [0i32; 10];
    mocker.mock("", &mut array)?;
    assert!(array.iter().all(|n| (1..10).contains(n)));

    mocker.set_tags(HashMap::from([("neg".to_string(), "range(-3, -2)".to_string())]));
    mocker.mock("elem(neg)", &mut array)?;
    assert_eq!(array, [-3; 10]);
    Ok(())
}

#[test]
fn test_default_map() -> anyhow::Result<()> {
    let mut mocker = mocker();
    for _ in 0..COUNT {
        let mut map: HashMap<String, f64> = HashMap::new();
        mocker.mock("", &mut map)?;
        assert!((1..10).contains(&map.len()));
        for (k, v) in &map {
            assert!((1..10).contains(&k.len()));
            assert!(k.chars().all(|c| c.is_ascii_lowercase()), "{k}");
            assert!((1.0..10.0).contains(v));
        }
    }
    Ok(())
}

#[test]
fn test_map_key_and_elem_tags() -> anyhow::Result<()> {
    let mut mocker = mocker();
    mocker.set_tags(HashMap::from([
        ("word12".to_string(), "type(word) range(12, 12)".to_string()),
        ("sentence20".to_string(), "type(sentence) range(20, 20)".to_string()),
    ]));

    let mut map: BTreeMap<String, String> = BTreeMap::new();
    mocker.mock("range(10,10) key(word12) elem(sentence20)", &mut map)?;
    assert_eq!(map.len(), 10);
    for (k, v) in &map {
        assert_eq!(k.len(), 12);
        assert_eq!(v.split_whitespace().count(), 20);
    }
    Ok(())
}

#[test]
fn test_map_size_bounded_by_sampled_length() -> anyhow::Result<()> {
    let mut mocker = mocker();
    mocker.set_tags(HashMap::from([(
        "letter".to_string(),
        "value(a, b)".to_string(),
    )]));

    let mut map: HashMap<String, i64> = HashMap::new();
    mocker.mock("range(5, 5) key(letter)", &mut map)?;
    assert!(!map.is_empty() && map.len() <= 2);
    Ok(())
}

#[derive(Debug, Default)]
struct Index {
    by_id: HashMap<u32, String>,
    label: String,
}

mock_aggregate!(Index { by_id, label });

#[test]
fn test_unsupported_map_key_is_best_effort() {
    let mut mocker = mocker();
    let mut index = Index::default();

    let err = mocker.mock("", &mut index).unwrap_err();
    assert_eq!(err, MockError::UnsupportedMapKey(FieldKind::U32));
    assert_eq!(mocker.errors().len(), 1);
    assert!(index.by_id.is_empty());
    assert!(!index.label.is_empty());
}

#[test]
fn test_unsupported_map_key_leaves_map_untouched() {
    let mut mocker = mocker();
    let mut by_id = BTreeMap::from([(7i64, "kept".to_string())]);

    let err = mocker.mock("range(3, 3)", &mut by_id).unwrap_err();
    assert_eq!(err, MockError::UnsupportedMapKey(FieldKind::I64));
    assert_eq!(by_id.get(&7).map(String::as_str), Some("kept"));
    assert_eq!(by_id.len(), 1);
}
