use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Root configuration structure, deserialized from `.license-vetter/config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub report: ReportConfig,
    pub review: ReviewConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Collector used when `--collector` is not given.
    pub collector: CollectorKind,
}

/// Which collector the results are fed to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CollectorKind {
    /// Plain-text summary of content needing review.
    #[default]
    Summary,
    /// Draft one review request per item needing review.
    Review,
}

/// Settings for drafted review requests.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Project the requests are filed against, e.g. `technology.dash`.
    pub project: Option<String>,
    pub title_prefix: String,
    /// Maximum requests drafted per run; `0` means no limit.
    pub max_requests: usize,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            project: None,
            title_prefix: "License review".to_string(),
            max_requests: 25,
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override`, the path passed via `--config`
/// 2. `<working_dir>/.license-vetter/config.toml`
/// 3. `~/.config/license-vetter/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(working_dir: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = working_dir.join(".license-vetter").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("license-vetter")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("parsing config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.report.collector, CollectorKind::Summary);
        assert_eq!(cfg.review.title_prefix, "License review");
        assert_eq!(cfg.review.max_requests, 25);
        assert!(cfg.review.project.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let cfg: Config = toml::from_str(
            r#"
[review]
project = "technology.dash"
"#,
        )
        .unwrap();
        assert_eq!(cfg.review.project.as_deref(), Some("technology.dash"));
        assert_eq!(cfg.review.max_requests, 25);
        assert_eq!(cfg.report.collector, CollectorKind::Summary);
    }

    #[test]
    fn test_project_config_is_found() {
        let dir = tempfile::tempdir().unwrap();
        let cfg_dir = dir.path().join(".license-vetter");
        std::fs::create_dir_all(&cfg_dir).unwrap();
        std::fs::write(
            cfg_dir.join("config.toml"),
            "[report]\ncollector = \"review\"\n\n[review]\nmax_requests = 0\n",
        )
        .unwrap();

        let cfg = load_config(dir.path(), None).unwrap();
        assert_eq!(cfg.report.collector, CollectorKind::Review);
        assert_eq!(cfg.review.max_requests, 0);
    }

    #[test]
    fn test_override_wins_and_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[report\n").unwrap();

        let err = load_config(dir.path(), Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
    }
}
