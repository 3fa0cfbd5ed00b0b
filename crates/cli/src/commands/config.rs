use std::env;
use std::fs;
use std::path::Path;

use happycore_core::config::{resolve_config_path, AppConfig, LoadOptions};
use toml::Value;

struct Field<'a> {
    key_path: &'static str,
    env_keys: &'static [&'static str],
    value: &'a str,
}

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = resolve_config_path(None);
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let catalog_path = config.catalog.path.display().to_string();
    let port = config.server.port.to_string();
    let graceful_shutdown_secs = config.server.graceful_shutdown_secs.to_string();
    let log_format = format!("{:?}", config.logging.format);

    let fields = [
        Field { key_path: "catalog.path", env_keys: &["HAPPYCORE_CATALOG_PATH"], value: &catalog_path },
        Field {
            key_path: "server.bind_address",
            env_keys: &["HAPPYCORE_SERVER_BIND_ADDRESS"],
            value: &config.server.bind_address,
        },
        Field { key_path: "server.port", env_keys: &["HAPPYCORE_SERVER_PORT"], value: &port },
        Field {
            key_path: "server.graceful_shutdown_secs",
            env_keys: &["HAPPYCORE_SERVER_GRACEFUL_SHUTDOWN_SECS"],
            value: &graceful_shutdown_secs,
        },
        Field {
            key_path: "logging.level",
            env_keys: &["HAPPYCORE_LOGGING_LEVEL", "HAPPYCORE_LOG_LEVEL"],
            value: &config.logging.level,
        },
        Field {
            key_path: "logging.format",
            env_keys: &["HAPPYCORE_LOGGING_FORMAT", "HAPPYCORE_LOG_FORMAT"],
            value: &log_format,
        },
    ];

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    for field in &fields {
        let source = field_source(
            field.key_path,
            field.env_keys,
            config_file_doc.as_ref(),
            config_file_path.as_deref(),
        );
        lines.push(render_line(field.key_path, field.value, source));
    }

    lines.join("\n")
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| env::var_os(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
