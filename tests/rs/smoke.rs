//! Integration smoke tests for `tech_tree`

use tech_tree::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn config_defaults_parse() {
    let config = tech_tree::config::Config::from_defaults();
    assert!(tech_tree::logger::Level::parse(&config.logging.level).is_some());
}
