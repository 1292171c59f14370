use crate::migration::{self, RawConfig};
use crate::model::Configuration;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait ConfigStore {
    /// Charge la configuration brute (forme éventuellement ancienne).
    /// `None` si rien n'a encore été enregistré.
    fn load(&self) -> anyhow::Result<Option<RawConfig>>;
    /// Sauvegarde de manière atomique.
    fn save(&self, config: &Configuration) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for JsonStorage {
    fn load(&self) -> anyhow::Result<Option<RawConfig>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no stored configuration");
            return Ok(None);
        }
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let raw: RawConfig = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(Some(raw))
    }

    fn save(&self, config: &Configuration) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(config)?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }
}

/// Charge, migre, et ne réécrit le stockage que si la migration a changé la forme.
///
/// Sans configuration enregistrée, renvoie la configuration par défaut sans
/// l'écrire.
pub fn load_configuration(store: &dyn ConfigStore) -> anyhow::Result<Configuration> {
    let Some(raw) = store.load()? else {
        return Ok(Configuration::default());
    };
    let migrated = migration::migrate(raw);
    if migrated.changed {
        tracing::info!(from = ?migrated.from, "stored configuration migrated");
        store.save(&migrated.config)?;
    }
    Ok(migrated.config)
}
