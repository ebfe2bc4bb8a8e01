use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use tracing::warn;

const SETTINGS_FILE: &str = "site.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
    pub sanity_project_id: Option<String>,
    pub sanity_dataset: String,
    pub sanity_api_version: String,
    pub sanity_use_cdn: bool,
    pub content_fixture: Option<PathBuf>,
    pub revalidate_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".into(),
            sanity_project_id: None,
            sanity_dataset: "production".into(),
            sanity_api_version: "2024-01-01".into(),
            sanity_use_cdn: true,
            content_fixture: None,
            revalidate_seconds: 60,
        }
    }
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

pub fn load_settings_from<F>(path: &Path, env: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<HashMap<String, toml::Value>>(&raw) {
            Ok(file_cfg) => {
                for (key, value) in &file_cfg {
                    apply(&mut settings, key, &file_value(value));
                }
            }
            Err(error) => warn!(path = %path.display(), %error, "ignoring unreadable settings file"),
        }
    }

    let overrides: [(&str, &[&str]); 7] = [
        ("bind_addr", &["SITE_BIND", "APP__BIND_ADDR"]),
        ("sanity_project_id", &["SANITY_PROJECT_ID", "APP__SANITY_PROJECT_ID"]),
        ("sanity_dataset", &["SANITY_DATASET", "APP__SANITY_DATASET"]),
        ("sanity_api_version", &["APP__SANITY_API_VERSION"]),
        ("sanity_use_cdn", &["APP__SANITY_USE_CDN"]),
        ("content_fixture", &["APP__CONTENT_FIXTURE"]),
        ("revalidate_seconds", &["APP__REVALIDATE_SECONDS"]),
    ];
    for (key, names) in overrides {
        for name in names {
            if let Some(v) = env(name) {
                apply(&mut settings, key, &v);
            }
        }
    }

    settings
}

fn file_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn apply(settings: &mut Settings, key: &str, value: &str) {
    let optional = |v: &str| {
        let v = v.trim();
        (!v.is_empty()).then(|| v.to_string())
    };
    match key {
        "bind_addr" => settings.bind_addr = value.to_string(),
        "sanity_project_id" => settings.sanity_project_id = optional(value),
        "sanity_dataset" => settings.sanity_dataset = value.to_string(),
        "sanity_api_version" => settings.sanity_api_version = value.to_string(),
        "sanity_use_cdn" => match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => settings.sanity_use_cdn = true,
            "false" | "0" | "no" => settings.sanity_use_cdn = false,
            _ => warn!(%value, "ignoring invalid sanity_use_cdn"),
        },
        "content_fixture" => settings.content_fixture = optional(value).map(PathBuf::from),
        "revalidate_seconds" => match value.trim().parse::<u64>() {
            Ok(parsed) => settings.revalidate_seconds = parsed,
            Err(_) => warn!(%value, "ignoring invalid revalidate_seconds"),
        },
        other => warn!(key = other, "ignoring unknown setting"),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
