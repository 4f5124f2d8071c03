use avatar_domain::config::{ApiConfig, LogConfig, RenderConfig, ServerConfig, StorageConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 3000);
    assert!(server.ssl.is_none());

    let render = RenderConfig::default();
    assert_eq!((render.default_width, render.default_height), (300, 300));
    assert_eq!(render.max_dimension, 4096);

    let storage = StorageConfig::default();
    assert_eq!(storage.static_dir, std::path::PathBuf::from("public"));

    let log = LogConfig::default();
    assert_eq!(log.level, "info");
    assert!(log.path.is_none());
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "storage": { "static_dir": "/srv/avatar" },
        "render": { "default_width": 128, "max_dimension": 1024 },
        "log": { "level": "debug", "json": true }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.storage.static_dir, std::path::PathBuf::from("/srv/avatar"));
    assert_eq!(cfg.render.default_width, 128);
    assert_eq!(cfg.render.default_height, 300, "unset fields keep their defaults");
    assert_eq!(cfg.render.max_dimension, 1024);
    assert_eq!(cfg.runtime.max_blocking_threads, 64);
    assert!(cfg.log.json);
}

#[test]
fn empty_document_yields_defaults() {
    let cfg: ApiConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg.server.port, 3000);
    assert_eq!(cfg.render.default_width, 300);
}
