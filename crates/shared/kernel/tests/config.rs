use avatar_kernel::config::{ConfigLoader, load_config};
use avatar_kernel::domain::config::ApiConfig;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;
use tracing::Level;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[test]
fn missing_default_file_falls_back_to_defaults() {
    let cfg: ApiConfig =
        ConfigLoader::new().env_source(HashMap::new()).load().expect("defaults load");
    assert_eq!(cfg.server.port, 3000);
    assert_eq!(cfg.render.default_width, 300);
    assert_eq!(cfg.storage.static_dir, Path::new("public"));
}

#[test]
fn explicit_file_must_exist() {
    let dir = tempdir().expect("temp dir");
    let result = load_config::<ApiConfig>(Some(dir.path().join("absent.toml")));
    assert!(result.is_err());
}

#[test]
fn file_values_override_defaults() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("server.toml");
    fs::write(
        &path,
        r#"
[server]
port = 8081

[render]
max_dimension = 2048

[log]
level = "debug"
"#,
    )
    .expect("write config");

    let cfg: ApiConfig = ConfigLoader::new()
        .file(&path)
        .env_source(HashMap::new())
        .load()
        .expect("file config loads");
    assert_eq!(cfg.server.port, 8081);
    assert_eq!(cfg.render.max_dimension, 2048);
    assert_eq!(cfg.render.default_height, 300);
    assert_eq!(cfg.log.level, "debug");
}

#[test]
fn environment_overrides_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("server.toml");
    fs::write(&path, "[server]\nport = 8081\n").expect("write config");

    let cfg: ApiConfig = ConfigLoader::new()
        .file(&path)
        .env_source(env(&[
            ("AVATAR__SERVER__PORT", "9090"),
            ("AVATAR__RENDER__DEFAULT_WIDTH", "128"),
            ("AVATAR__LOG__JSON", "true"),
            ("UNRELATED__SERVER__PORT", "1"),
        ]))
        .load()
        .expect("layered config loads");
    assert_eq!(cfg.server.port, 9090);
    assert_eq!(cfg.render.default_width, 128);
    assert!(cfg.log.json);
}

#[test]
fn malformed_values_are_reported() {
    let result = ConfigLoader::new()
        .env_source(env(&[("AVATAR__SERVER__PORT", "not-a-port")]))
        .load::<ApiConfig>();
    let err = result.expect_err("port must be numeric");
    assert!(err.to_string().contains("Failed to deserialize config"), "{err}");
}

#[test]
fn source_names_the_file_and_whether_it_is_required() {
    let loader = ConfigLoader::new();
    assert_eq!(loader.source(), (Path::new("server"), false));

    let loader = ConfigLoader::new().file("config/local.toml");
    assert_eq!(loader.source(), (Path::new("config/local.toml"), true));
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn load_under(level: Level) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let _: ApiConfig =
            ConfigLoader::new().env_source(HashMap::new()).load().expect("defaults load");
    });
    captured.text()
}

#[test]
fn loading_stays_quiet_at_info() {
    assert!(load_under(Level::INFO).is_empty());

    let debug = load_under(Level::DEBUG);
    assert!(debug.contains("Loading config"), "{debug}");
    assert!(debug.contains("path=server"), "{debug}");
}
