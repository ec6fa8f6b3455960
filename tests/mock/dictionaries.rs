//! Tag and format dictionaries.

use crate::mocker;
use std::collections::HashMap;
use structmock::{DirectiveError, MockError};

fn tags(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_tag_replaces_directive() -> anyhow::Result<()> {
    let mut mocker = mocker();
    mocker.set_tags(tags(&[("bigInt", "range(123456, 123457)")]));

    let mut n = 0i64;
    mocker.mock("tag(bigInt)", &mut n)?;
    assert_eq!(n, 123456);

    let mut m = 0u64;
    mocker.mock("range(1, 2) tag(bigInt)", &mut m)?;
    assert_eq!(m, 123456);
    Ok(())
}

#[test]
fn test_tag_value_range() -> anyhow::Result<()> {
    let mut mocker = mocker();
    mocker.set_tags(tags(&[("hundred", "range(100, 101)")]));
    for _ in 0..10 {
        let mut n = 0i32;
        mocker.mock("tag(hundred)", &mut n)?;
        assert_eq!(n, 100);
    }
    Ok(())
}

#[test]
fn test_unknown_tag_is_ignored() -> anyhow::Result<()> {
    let mut mocker = mocker();
    let mut n = 0i64;
    mocker.mock("tag(missing) range(7, 8)", &mut n)?;
    assert_eq!(n, 7);
    Ok(())
}

#[test]
fn test_cyclic_tags_are_reported() {
    let mut mocker = mocker();
    mocker.set_tags(tags(&[("a", "tag(b)"), ("b", "tag(a)")]));

    let mut n = 0i64;
    let err = mocker.mock("tag(a)", &mut n).unwrap_err();
    assert_eq!(
        err,
        MockError::Directive(DirectiveError::conflict(
            "tag",
            "a",
            "tag",
            "a -> b",
            "cyclic tag reference"
        ))
    );
    assert!((1..10).contains(&n));
}

#[test]
fn test_dictionaries_are_read_per_call() -> anyhow::Result<()> {
    let mut mocker = mocker();
    mocker.set_tags(tags(&[("size", "range(3, 4)")]));
    let mut n = 0u8;
    mocker.mock("tag(size)", &mut n)?;
    assert_eq!(n, 3);

    mocker.set_tags(tags(&[("size", "range(9, 10)")]));
    mocker.mock("tag(size)", &mut n)?;
    assert_eq!(n, 9);
    Ok(())
}

#[test]
fn test_named_format() -> anyhow::Result<()> {
    let mut mocker = mocker();
    mocker.set_formats(tags(&[("dash", "%Y-%m-%d")]));

    let mut day = String::new();
    mocker.mock("type(date) format(dash)", &mut day)?;
    assert_eq!(day, chrono::Local::now().format("%Y-%m-%d").to_string());
    Ok(())
}
