use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PartlookupConfig {
    pub database: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("partlookup.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("partlookup.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<PartlookupConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: PartlookupConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

/// Pick the database path: explicit flag wins, then the config file, then
/// the default next to the working directory.
pub fn resolve_database_path(
    flag: Option<PathBuf>,
    config: Option<&PartlookupConfig>,
) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    if let Some(db) = config.and_then(|c| c.database.as_deref()) {
        return PathBuf::from(db);
    }
    default_database_path()
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
