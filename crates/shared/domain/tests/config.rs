use vhub_domain::config::{
    ApiConfig, DatabaseConfig, LoggingConfig, RegistrationConfig, ServerConfig,
};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4583);
    assert!(server.ssl.is_none());

    let db = DatabaseConfig::default();
    assert!(db.url.starts_with("postgres://"));
    assert_eq!(db.max_connections, 10);
    assert_eq!(db.connect_attempts, 3);
    assert!(db.run_migrations);

    let registration = RegistrationConfig::default();
    assert_eq!(registration.min_password_length, 8);
    assert_eq!(registration.max_slug_length, 64);

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.directory.is_none());
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "database": { "url": "postgres://vhub@db/vhub", "max_connections": 4, "run_migrations": false },
        "security": { "registration": { "min_password_length": 12 } },
        "logging": { "level": "debug", "json": true, "directory": "/var/log/vhub" }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.database.url, "postgres://vhub@db/vhub");
    assert_eq!(cfg.database.max_connections, 4);
    assert!(!cfg.database.run_migrations);
    // Unspecified keys keep their defaults.
    assert_eq!(cfg.database.acquire_timeout_seconds, 5);
    assert_eq!(cfg.security.registration.min_password_length, 12);
    assert_eq!(cfg.security.registration.max_fullname_length, 128);
    assert!(cfg.logging.json);
    assert_eq!(cfg.logging.directory, Some(std::path::PathBuf::from("/var/log/vhub")));
}

#[test]
fn empty_document_yields_defaults() {
    let cfg: ApiConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg.server.port, 4583);
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn deref_mut_copies_on_write() {
    let original = ApiConfig::default();
    let mut changed = original.clone();
    changed.server.port = 9000;

    assert_eq!(original.server.port, 4583);
    assert_eq!(changed.server.port, 9000);
}
