use std::fs;
use std::path::PathBuf;

use super::*;

#[test]
fn load_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("daycircle.toml");
    fs::write(
        &path,
        "format = \"html\"\nfont_family = \"Iosevka\"\ncolour_files = [\"palette.day\"]\n",
    )
    .unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.format, Some(ChartFormat::Html));
    assert_eq!(config.font_family.as_deref(), Some("Iosevka"));
    assert_eq!(config.colour_files, vec![PathBuf::from("palette.day")]);
    assert_eq!(config.output, None);
}

#[test]
fn load_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = Config::load(Some(&missing)).unwrap_err();
    assert!(matches!(err, DaycircleError::FileRead { .. }));
}

#[test]
fn load_invalid_toml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("daycircle.toml");
    fs::write(&path, "format = [not toml").unwrap();

    let err = Config::load(Some(&path)).unwrap_err();
    assert!(matches!(err, DaycircleError::TomlParse(_)));
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("daycircle.toml");
    fs::write(&path, "fromat = \"svg\"\n").unwrap();

    assert!(Config::load(Some(&path)).is_err());
}

#[test]
fn unknown_format_value_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("daycircle.toml");
    fs::write(&path, "format = \"png\"\n").unwrap();

    assert!(Config::load(Some(&path)).is_err());
}

#[test]
fn empty_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("daycircle.toml");
    fs::write(&path, "").unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config, Config::default());
}
