//! Sessions built from configuration files.

use crate::init_logging;
use std::collections::HashMap;
use std::io::Write;
use structmock::{mock_aggregate, ConfigError, Mocker, MockerConfig};

const FIXTURE: &str = "tests/fixtures/mocker.yaml";

#[derive(Debug, Default, PartialEq)]
struct Post {
    title: String,
    body: String,
    published: String,
    tags: HashMap<String, String>,
}

mock_aggregate!(Post {
    title: "tag(title)",
    body: "tag(body)",
    published: "type(date) format(iso_day)",
    tags: "range(3, 3) key(word12) elem(word12)",
});

#[test]
fn test_session_from_fixture() -> anyhow::Result<()> {
    init_logging();
    let config = MockerConfig::from_file(FIXTURE)?;
    assert_eq!(config.seed, 42);

    let mut mocker = Mocker::from_config(&config);
    let mut post = Post::default();
    mocker.mock("", &mut post)?;

    assert_eq!(post.title.split_whitespace().count(), 5);
    assert_eq!(post.body.split_whitespace().count(), 20);
    assert_eq!(post.published.len(), 10);
    assert_eq!(post.tags.len(), 3);
    assert!(post.tags.iter().all(|(k, v)| k.len() == 12 && v.len() == 12));
    Ok(())
}

#[test]
fn test_same_config_replays() -> anyhow::Result<()> {
    init_logging();
    let config = MockerConfig::from_file(FIXTURE)?;

    let (mut a, mut b) = (Post::default(), Post::default());
    Mocker::from_config(&config).mock("", &mut a)?;
    Mocker::from_config(&config).mock("", &mut b)?;
    assert_eq!(a.title, b.title);
    assert_eq!(a.tags, b.tags);
    Ok(())
}

#[test]
fn test_config_from_temp_file() -> anyhow::Result<()> {
    init_logging();
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "seed: 9")?;
    writeln!(file, "tags:")?;
    writeln!(file, "  nine: \"range(9, 10)\"")?;

    let config = MockerConfig::from_file(file.path())?;
    let mut mocker = Mocker::from_config(&config);
    let mut n = 0i64;
    mocker.mock("tag(nine)", &mut n)?;
    assert_eq!(n, 9);
    Ok(())
}

#[test]
fn test_missing_config_file() {
    let result = MockerConfig::from_file("tests/fixtures/does-not-exist.yaml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}
