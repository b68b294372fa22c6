use super::{settings_from_sources, Settings};

use std::collections::HashMap;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_point_at_local_rust_backend() {
    let settings = settings_from_sources(None, env_of(&[]));
    assert_eq!(settings.api_base, "http://localhost:8080");
    assert_eq!(settings.backend_name, "rust");
}

#[test]
fn file_then_env_then_flags() {
    let raw = r#"
api_base = "http://files:1000"
backend_name = "go"
"#;
    let from_file = settings_from_sources(Some(raw), env_of(&[]));
    assert_eq!(from_file.api_base, "http://files:1000");
    assert_eq!(from_file.backend_name, "go");

    let from_env = settings_from_sources(
        Some(raw),
        env_of(&[("API_URL", "http://env:2000"), ("APP__BACKEND_NAME", "node")]),
    );
    assert_eq!(from_env.api_base, "http://env:2000");
    assert_eq!(from_env.backend_name, "node");

    let from_flags = from_env.with_overrides(Some("http://flag:3000".into()), None);
    assert_eq!(from_flags.api_base, "http://flag:3000");
    assert_eq!(from_flags.backend_name, "node");
}

#[test]
fn prefixed_env_wins_and_blank_env_is_ignored() {
    let settings = settings_from_sources(
        None,
        env_of(&[
            ("API_URL", "http://plain:1"),
            ("APP__API_URL", "http://prefixed:2"),
            ("BACKEND_NAME", "   "),
        ]),
    );
    assert_eq!(settings.api_base, "http://prefixed:2");
    assert_eq!(settings.backend_name, "rust");
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let settings = settings_from_sources(Some("api_base = ["), env_of(&[]));
    assert_eq!(settings, Settings::default());
}

#[test]
fn client_config_normalizes_and_validates() {
    let config = Settings::default()
        .with_overrides(Some("http://localhost:8080/".into()), None)
        .client_config()
        .expect("valid config");
    assert_eq!(config.users_url(), "http://localhost:8080/api/rust/users");

    let bad = Settings::default().with_overrides(Some("localhost".into()), None);
    assert!(bad.client_config().is_err());
}
