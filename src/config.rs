use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::AuditError;
use crate::ranking::{EngagementConfig, EngagementScorer, RankingConfig, RankingPipeline};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub simulated_ms: u64,
}

impl LatencyConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.simulated_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    pub ranking: RankingConfig,
    pub engagement: EngagementConfig,
    pub latency: LatencyConfig,
}

impl AuditConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), AuditError> {
        let config_path = path.or_else(default_config_path);
        let mut config = match config_path.as_ref() {
            Some(path) if path.exists() => Self::read(path)?,
            _ => AuditConfig::default(),
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn read(path: &Path) -> Result<Self, AuditError> {
        let contents = std::fs::read_to_string(path).map_err(|source| AuditError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn write(&self, path: &Path) -> Result<(), AuditError> {
        let write_err = |source| AuditError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, self.to_toml()?).map_err(write_err)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, AuditError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn pipeline(&self) -> RankingPipeline {
        RankingPipeline::new(
            EngagementScorer::new(self.engagement.clone()),
            self.ranking.limit,
        )
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("AUDIT_RESULT_LIMIT").and_then(|v| v.trim().parse().ok()) {
            self.ranking.limit = value;
        }
        if let Some(value) = lookup("AUDIT_LATENCY_MS").and_then(|v| v.trim().parse().ok()) {
            self.latency.simulated_ms = value;
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("AUDIT_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/audit.toml")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_generator_constants() {
        let config = AuditConfig::default();
        assert_eq!(config.ranking.limit, 10);
        assert_eq!(config.engagement.base, 10_000);
        assert_eq!(config.engagement.step, 800);
        assert_eq!(config.engagement.noise_modulus, 2_000);
        assert_eq!(config.latency.delay(), Duration::ZERO);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: AuditConfig = toml::from_str("[latency]\nsimulated_ms = 1500\n").unwrap();
        assert_eq!(config.latency.simulated_ms, 1500);
        assert_eq!(config.engagement, EngagementConfig::default());
        assert_eq!(config.ranking, RankingConfig::default());
    }

    #[test]
    fn overrides_apply_parseable_values_only() {
        let vars: HashMap<&str, &str> =
            HashMap::from([("AUDIT_RESULT_LIMIT", " 5 "), ("AUDIT_LATENCY_MS", "soon")]);
        let mut config = AuditConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.ranking.limit, 5);
        assert_eq!(config.latency.simulated_ms, 0);
    }

    #[test]
    fn write_then_read_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("audit.toml");

        let mut config = AuditConfig::default();
        config.latency.simulated_ms = 250;
        config.engagement.step = 500;
        config.write(&path).unwrap();

        let loaded = AuditConfig::read(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let (config, used) = AuditConfig::load(Some(path.clone())).unwrap();
        assert_eq!(used, Some(path));
        assert_eq!(config.engagement, EngagementConfig::default());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[ranking\nlimit = ").unwrap();
        assert!(matches!(
            AuditConfig::read(&path),
            Err(AuditError::ConfigParse(_))
        ));
    }
}
