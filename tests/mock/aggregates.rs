//! Structs declared with `mock_aggregate!`.

use crate::{init_logging, mocker, SEED};
use structmock::{gen_func, mock_aggregate, GenFuncs, MockError, Mocker, Mockable};

#[derive(Debug, Default, Clone, PartialEq)]
struct Address {
    street: String,
    zip: u32,
}

mock_aggregate!(Address {
    street: "type(sentence) range(2, 4)",
    zip: "range(10000, 100000)",
});

#[derive(Debug, Default, Clone, PartialEq)]
struct Profile {
    set: String,
    default: String,
    slice: Vec<String>,
    embed: Address,
    email: String,
    score: f64,
    active: bool,
    secret: String,
    lucky: i64,
    nothing: (),
    home: Option<Box<Address>>,
    previous: Vec<Address>,
}

mock_aggregate!(Profile {
    set,
    default,
    slice,
    embed,
    email: "type(email)",
    score: "range(0, 5)",
    active: "value(true)",
    secret: "-",
    lucky: "mock(lucky)",
    nothing,
    home,
    previous: "range(2, 2)",
});

#[test]
fn test_struct_members() -> anyhow::Result<()> {
    let mut mocker = mocker();
    let mut profile = Profile {
        set: "asdf".to_string(),
        ..Profile::default()
    };
    mocker.mock("", &mut profile)?;

    assert_eq!(profile.set, "asdf");
    assert!((1..10).contains(&profile.default.len()));
    assert!((1..10).contains(&profile.slice.len()));
    assert!((10000..100000).contains(&profile.embed.zip));
    assert!(profile.embed.street.ends_with('.'));
    assert!(profile.email.contains('@'));
    assert!((0.0..5.0).contains(&profile.score));
    assert!(profile.active);
    assert!(profile.secret.is_empty());
    assert_eq!(profile.previous.len(), 2);
    assert!(profile.previous.iter().all(|a| a.zip >= 10000));
    Ok(())
}

#[test]
fn test_optional_member_is_allocated() -> anyhow::Result<()> {
    let mut mocker = mocker();
    let mut profile = Profile::default();
    mocker.mock("", &mut profile)?;

    let home = profile.home.expect("home allocated");
    assert!((10000..100000).contains(&home.zip));
    Ok(())
}

#[test]
fn test_preset_nested_struct_is_kept() -> anyhow::Result<()> {
    let mut mocker = mocker();
    let preset = Address {
        street: String::new(),
        zip: 12345,
    };
    let mut profile = Profile {
        embed: preset.clone(),
        ..Profile::default()
    };
    mocker.mock("", &mut profile)?;

    assert_eq!(profile.embed, preset);
    Ok(())
}

#[derive(Debug, Default)]
struct Site {
    street: String,
    country: String,
}

mock_aggregate!(Site { street });

#[derive(Debug, Default)]
struct PinnedSite {
    street: String,
    country: String,
}

mock_aggregate!(PinnedSite {
    street,
    country: "-",
});

#[derive(Debug, Default)]
struct Holder {
    site: Site,
    pinned: PinnedSite,
}

mock_aggregate!(Holder { site, pinned });

#[test]
fn test_presets_only_count_listed_members() -> anyhow::Result<()> {
    let mut mocker = mocker();
    let mut holder = Holder {
        site: Site {
            street: String::new(),
            country: "US".into(),
        },
        pinned: PinnedSite {
            street: String::new(),
            country: "US".into(),
        },
    };
    mocker.mock("", &mut holder)?;

    // Unlisted member: the struct still counts as zero and is filled
    assert!(!holder.site.street.is_empty());
    assert_eq!(holder.site.country, "US");

    // Excluded member: the struct counts as a preset and is kept
    assert!(holder.pinned.street.is_empty());
    assert_eq!(holder.pinned.country, "US");
    Ok(())
}

#[test]
fn test_gen_func_member() -> anyhow::Result<()> {
    let mut mocker = mocker();
    mocker.set_gen_funcs(GenFuncs::from([(
        "lucky".to_string(),
        gen_func(|| 101010i64),
    )]));

    let mut profile = Profile::default();
    mocker.mock("", &mut profile)?;
    assert_eq!(profile.lucky, 101010);
    Ok(())
}

#[test]
fn test_gen_func_owns_whole_struct() -> anyhow::Result<()> {
    let mut mocker = mocker();
    let fixed = Address {
        street: "Main St.".to_string(),
        zip: 1,
    };
    let value = fixed.clone();
    mocker.set_gen_funcs(GenFuncs::from([(
        "address".to_string(),
        gen_func(move || value.clone()),
    )]));

    let mut address = Address::default();
    mocker.mock("mock(address)", &mut address)?;
    assert_eq!(address, fixed);
    Ok(())
}

#[test]
fn test_gen_func_type_mismatch_is_recorded() {
    let mut mocker = mocker();
    mocker.set_gen_funcs(GenFuncs::from([(
        "lucky".to_string(),
        gen_func(|| "not a number".to_string()),
    )]));

    let mut profile = Profile::default();
    let err = mocker.mock("", &mut profile).unwrap_err();
    assert!(matches!(err, MockError::GenFuncType { ref name, .. } if name == "lucky"));
    assert_eq!(profile.lucky, 0);
    assert!(!profile.default.is_empty());
}

#[test]
fn test_same_seed_replays() -> anyhow::Result<()> {
    init_logging();
    let mut first = Mocker::with_seed(SEED);
    let mut second = Mocker::with_seed(SEED);

    let (mut a, mut b) = (Profile::default(), Profile::default());
    first.mock("", &mut a)?;
    second.mock("", &mut b)?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn test_registered_dynamic_target() -> anyhow::Result<()> {
    let mut mocker = mocker();
    let mut address = Address::default();

    let err = mocker.mock_dyn("", &mut address).unwrap_err();
    assert!(matches!(err, MockError::UnregisteredTarget(_)));
    assert!(address.is_zero());

    mocker.register::<Address>();
    mocker.mock_dyn("", &mut address)?;
    assert!((10000..100000).contains(&address.zip));
    Ok(())
}

#[test]
fn test_valid_is_permissive() -> anyhow::Result<()> {
    let mocker = mocker();
    assert!(mocker.valid("valid(anything)", &Address::default())?);
    Ok(())
}
