use std::path::{Path, PathBuf};

use super::types::AppConfig;

/// Environment variable consulted on every submission for the service base URL.
pub const API_URL_ENV: &str = "BFHL_API_URL";

/// Get the default bfhl data directory: ~/.bfhl
pub fn get_bfhl_data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(".bfhl"))
}

pub fn load_from_path(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)?;
    let cfg = toml::from_str::<AppConfig>(&s)?;
    tracing::debug!(target: "bfhl.config", path = %path.display(), "loaded config file");
    Ok(cfg)
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    // Priority 1: ~/.bfhl/config.toml (highest)
    let home_config = get_bfhl_data_dir().ok().map(|d| d.join("config.toml"));

    // Priority 2: ./config.toml (current directory)
    let local_config = Path::new("config.toml");

    match home_config {
        Some(p) if p.exists() => load_from_path(&p),
        _ if local_config.exists() => load_from_path(local_config),
        _ => Ok(AppConfig::default()),
    }
}

/// Resolves the base URL at call time.
///
/// Order: explicit override (CLI flag), then `BFHL_API_URL`, then `api.base_url`.
/// Blank values are skipped. Returns `None` when nothing is configured.
pub fn resolve_base_url(cfg: &AppConfig, explicit: Option<&str>) -> Option<String> {
    let from_env = std::env::var(API_URL_ENV).ok();
    pick_base_url(explicit, from_env.as_deref(), &cfg.api.base_url)
}

fn pick_base_url(explicit: Option<&str>, env: Option<&str>, configured: &str) -> Option<String> {
    [explicit, env, Some(configured)]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(|s| s.trim_end_matches('/').to_string())
}
