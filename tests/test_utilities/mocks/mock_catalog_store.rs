use boost_sbom_export::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock CatalogStore capturing saved catalogs in memory
#[derive(Default)]
pub struct MockCatalogStore {
    preset: Option<ResourceCatalog>,
    pub saved: Arc<Mutex<Option<ResourceCatalog>>>,
}

impl MockCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: ResourceCatalog) -> Self {
        Self {
            preset: Some(catalog),
            saved: Arc::new(Mutex::new(None)),
        }
    }
}

impl CatalogStore for MockCatalogStore {
    fn load(&self) -> Result<ResourceCatalog> {
        self.preset
            .clone()
            .ok_or_else(|| anyhow::anyhow!("mock catalog not loaded"))
    }

    fn save(&self, catalog: &ResourceCatalog) -> Result<()> {
        *self.saved.lock().unwrap() = Some(catalog.clone());
        Ok(())
    }
}
