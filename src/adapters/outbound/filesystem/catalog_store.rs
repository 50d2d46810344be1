use crate::ports::outbound::CatalogStore;
use crate::sbom_extraction::domain::ResourceCatalog;
use crate::shared::error::ExportError;
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// JsonCatalogStore adapter persisting the resource catalog as pretty JSON
///
/// The file is the hand-off between the two subcommands: `list-resources`
/// overwrites it wholesale, `extract` treats it as read-only.
pub struct JsonCatalogStore {
    path: PathBuf,
}

impl JsonCatalogStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for JsonCatalogStore {
    fn load(&self) -> Result<ResourceCatalog> {
        if !self.path.exists() {
            return Err(ExportError::CatalogNotFound {
                path: self.path.clone(),
            }
            .into());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read resource catalog: {}", self.path.display()))?;

        let catalog = serde_json::from_str(&content).map_err(|e| ExportError::CatalogParseError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;

        Ok(catalog)
    }

    fn save(&self, catalog: &ResourceCatalog) -> Result<()> {
        let json = serde_json::to_string_pretty(catalog)?;

        fs::write(&self.path, json).map_err(|e| ExportError::FileWriteError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;

        Ok(())
    }
}
