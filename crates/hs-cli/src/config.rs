//! # CLI Configuration
//!
//! Resolves the reference data and high-risk usage profile for a run.
//!
//! The reference-data path comes from the first of:
//!
//! 1. `--reference <path>`
//! 2. `HIRESHIELD_REFERENCE`
//! 3. `reference_data` in the `--config` file, relative to that file
//!
//! With none of these, the compiled-in tables are used.
//!
//! ```yaml
//! # hireshield.yaml
//! reference_data: reference/us-2026.yaml
//! high_risk_profile: onboarding
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hs_pack::ReferenceData;
use hs_rules::{HighRiskUsages, UsageProfile};
use serde::Deserialize;

/// Environment variable naming a reference-data file.
pub const REFERENCE_ENV: &str = "HIRESHIELD_REFERENCE";

/// Contents of a `--config` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Reference-data YAML. Relative paths resolve against the config file.
    pub reference_data: Option<PathBuf>,
    /// Which usage set counts as high-risk.
    pub high_risk_profile: UsageProfile,
}

impl CliConfig {
    /// Read a config file, resolving `reference_data` against its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let mut config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        if let Some(rel) = config.reference_data.take() {
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            config.reference_data = Some(resolve_relative(&rel, base));
        }
        Ok(config)
    }
}

/// Everything a subcommand needs from configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Jurisdiction table, checklist templates, document catalog.
    pub reference: ReferenceData,
    /// The high-risk usage set for evaluations.
    pub high_risk: HighRiskUsages,
}

impl Settings {
    /// Built-in reference data with the audit usage set.
    pub fn builtin() -> Self {
        Self {
            reference: ReferenceData::builtin(),
            high_risk: HighRiskUsages::audit(),
        }
    }

    /// Resolve settings from the global CLI flags and the environment.
    pub fn resolve(config: Option<&Path>, reference: Option<&Path>) -> Result<Self> {
        let file = match config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let env = std::env::var_os(REFERENCE_ENV).map(PathBuf::from);
        let path = reference_path(reference, env, file.reference_data.as_deref());

        let reference = match path {
            Some(p) => {
                tracing::info!(path = %p.display(), "loading reference data");
                ReferenceData::load(&p)
                    .with_context(|| format!("failed to load reference data: {}", p.display()))?
            }
            None => ReferenceData::builtin(),
        };
        Ok(Self {
            reference,
            high_risk: HighRiskUsages::for_profile(file.high_risk_profile),
        })
    }
}

/// Pick the reference-data path by precedence: flag, environment, config.
pub fn reference_path(
    flag: Option<&Path>,
    env: Option<PathBuf>,
    config: Option<&Path>,
) -> Option<PathBuf> {
    flag.map(Path::to_path_buf)
        .or_else(|| env.filter(|p| !p.as_os_str().is_empty()))
        .or_else(|| config.map(Path::to_path_buf))
}

fn resolve_relative(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_env_and_config() {
        let got = reference_path(
            Some(Path::new("flag.yaml")),
            Some(PathBuf::from("env.yaml")),
            Some(Path::new("cfg.yaml")),
        );
        assert_eq!(got, Some(PathBuf::from("flag.yaml")));
    }

    #[test]
    fn env_beats_config() {
        let got = reference_path(None, Some(PathBuf::from("env.yaml")), Some(Path::new("cfg.yaml")));
        assert_eq!(got, Some(PathBuf::from("env.yaml")));
    }

    #[test]
    fn empty_env_is_ignored() {
        let got = reference_path(None, Some(PathBuf::new()), Some(Path::new("cfg.yaml")));
        assert_eq!(got, Some(PathBuf::from("cfg.yaml")));
    }

    #[test]
    fn nothing_set_means_builtin() {
        assert_eq!(reference_path(None, None, None), None);
    }

    #[test]
    fn config_file_resolves_relative_reference() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join("hireshield.yaml");
        std::fs::write(
            &cfg,
            "reference_data: data/ref.yaml\nhigh_risk_profile: onboarding\n",
        )
        .unwrap();
        let loaded = CliConfig::load(&cfg).unwrap();
        assert_eq!(loaded.reference_data, Some(dir.path().join("data/ref.yaml")));
        assert_eq!(loaded.high_risk_profile, UsageProfile::Onboarding);
    }

    #[test]
    fn config_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join("empty.yaml");
        std::fs::write(&cfg, "{}\n").unwrap();
        assert_eq!(CliConfig::load(&cfg).unwrap(), CliConfig::default());
    }

    #[test]
    fn config_file_rejects_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join("bad.yaml");
        std::fs::write(&cfg, "refrence_data: x.yaml\n").unwrap();
        assert!(CliConfig::load(&cfg).is_err());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }

    #[test]
    fn explicit_reference_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("ref.yaml");
        std::fs::write(
            &data,
            "jurisdictions:\n  - code: TX\n    name: Texas\n    law: Texas TRAIGA\n    is_regulated: true\n",
        )
        .unwrap();
        let settings = Settings::resolve(None, Some(&data)).unwrap();
        assert!(settings.reference.requirements.is_regulated("TX"));
        assert!(settings.reference.requirements.get("NYC").is_none());
    }

    #[test]
    fn onboarding_profile_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("ref.yaml");
        std::fs::write(&data, "{}\n").unwrap();
        let cfg = dir.path().join("cfg.yaml");
        std::fs::write(&cfg, "high_risk_profile: onboarding\n").unwrap();
        let settings = Settings::resolve(Some(&cfg), Some(&data)).unwrap();
        assert_eq!(settings.high_risk, HighRiskUsages::onboarding());
    }
}
