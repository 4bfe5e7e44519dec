use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use super::{Catalog, EconomyConfig};

const CATALOG_RELATIVE_PATH: &str = "assets/catalog.json";

pub fn catalog_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(CATALOG_RELATIVE_PATH)
}

pub fn load_catalog() -> Result<Catalog> {
    load_catalog_from_path(catalog_path())
}

pub fn load_catalog_from_path(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let catalog: Catalog = read_json(path, "catalog")?;
    catalog
        .validate()
        .with_context(|| format!("invalid catalog: {}", path.display()))?;
    Ok(catalog)
}

impl EconomyConfig {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: Self = read_json(path, "economy config")?;
        config
            .validate()
            .with_context(|| format!("invalid economy config: {}", path.display()))?;
        Ok(config)
    }
}

fn read_json<T>(path: &Path, label: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading {label} file: {}", path.display()))?;

    serde_json::from_str(&raw)
        .with_context(|| format!("failed parsing {label} file as JSON: {}", path.display()))
}
