//! Infrastructure implementation of the `ConfigStore` port.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::application::ports::ConfigStore;
use crate::domain::IronsConfig;

/// Production implementation of `ConfigStore` backed by a YAML file on disk.
///
/// The default location is resolved per call so `IRONS_CONFIG` and
/// `XDG_CONFIG_HOME` changes are picked up.
#[derive(Debug, Default, Clone)]
pub struct YamlConfigStore {
    path: Option<PathBuf>,
}

impl YamlConfigStore {
    /// Store pinned to an explicit file.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<IronsConfig> {
        let path = self.path()?;
        if !path.exists() {
            return Ok(IronsConfig::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(IronsConfig::default());
        }
        serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
    }

    fn save(&self, config: &IronsConfig) -> Result<()> {
        let path = self.path()?;
        if let Some(parent) = path.parent() {
            create_private_dir(parent)?;
        }
        let content = serde_yaml::to_string(config).context("cannot serialize config")?;

        let tmp = path.with_extension("yml.tmp");
        std::fs::write(&tmp, content).with_context(|| format!("cannot write {}", tmp.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&tmp, std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("cannot set permissions on {}", tmp.display()))?;
        }

        std::fs::rename(&tmp, &path)
            .with_context(|| format!("cannot replace {}", path.display()))?;
        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    fn path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        default_path()
    }
}

/// `$IRONS_CONFIG`, else `$XDG_CONFIG_HOME/irons/config.yml`, else
/// `~/.config/irons/config.yml`.
fn default_path() -> Result<PathBuf> {
    if let Some(val) = non_empty_env("IRONS_CONFIG") {
        return Ok(PathBuf::from(val));
    }
    let base = match non_empty_env("XDG_CONFIG_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?
            .join(".config"),
    };
    Ok(base.join("irons").join("config.yml"))
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn create_private_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.exists() {
        return Ok(());
    }
    std::fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(dir, std::fs::Permissions::from_mode(0o700))
            .with_context(|| format!("cannot set permissions on {}", dir.display()))?;
    }
    Ok(())
}
