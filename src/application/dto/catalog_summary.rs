/// CatalogSummary - counts reported after a `list-resources` run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSummary {
    pub organization_count: usize,
    pub project_count: usize,
}
