use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("UPLOAD_ENDPOINT", "https://uploads.example.com")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(
        cfg.upload,
        UploadConfig {
            endpoint: "https://uploads.example.com".to_owned(),
            client: DEFAULT_UPLOAD_CLIENT.to_owned(),
            timeout_secs: DEFAULT_UPLOAD_TIMEOUT_SECS,
        }
    );
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("UPLOAD_ENDPOINT", "http://127.0.0.1:9000/"),
        ("UPLOAD_CLIENT", "mobile"),
        ("UPLOAD_TIMEOUT_SECS", " 5 "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.upload.endpoint, "http://127.0.0.1:9000");
    assert_eq!(cfg.upload.client, "mobile");
    assert_eq!(cfg.upload.timeout_secs, 5);
}

#[test]
fn from_lookup_requires_upload_endpoint() {
    assert_eq!(ServerConfig::from_lookup(lookup(&[])), Err(ConfigError::Missing("UPLOAD_ENDPOINT")));
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("UPLOAD_ENDPOINT", "  ")])),
        Err(ConfigError::Missing("UPLOAD_ENDPOINT"))
    );
}

#[test]
fn from_lookup_rejects_non_http_endpoint() {
    let err = ServerConfig::from_lookup(lookup(&[("UPLOAD_ENDPOINT", "ftp://files")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "UPLOAD_ENDPOINT", value: "ftp://files".to_owned() });
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err =
        ServerConfig::from_lookup(lookup(&[("UPLOAD_ENDPOINT", "https://u.example"), ("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".to_owned() });
}

#[test]
fn blank_upload_client_falls_back_to_default() {
    let cfg =
        ServerConfig::from_lookup(lookup(&[("UPLOAD_ENDPOINT", "https://u.example"), ("UPLOAD_CLIENT", " ")])).unwrap();
    assert_eq!(cfg.upload.client, DEFAULT_UPLOAD_CLIENT);
}
