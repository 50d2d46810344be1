use crate::sbom_extraction::domain::ResourceCatalog;
use crate::shared::Result;

/// CatalogStore port for persisting the resource catalog
///
/// The catalog is read-only for the extractor and fully overwritten by each
/// `list-resources` run.
pub trait CatalogStore {
    /// Loads the catalog, failing if it has never been written.
    fn load(&self) -> Result<ResourceCatalog>;

    /// Saves the catalog, replacing any prior contents.
    fn save(&self, catalog: &ResourceCatalog) -> Result<()>;
}
