use crate::sbom_extraction::domain::PackageRecord;
use crate::shared::Result;

/// One page of the packages connection for a single analysis.
#[derive(Debug, Clone)]
pub struct PackagesPage {
    pub records: Vec<PackageRecord>,
    pub total_count: usize,
    pub has_next_page: bool,
}

/// PackageRepository port for walking the packages of one analysis
///
/// Same pagination contract as [`AnalysisRepository`]: 1-based pages,
/// continue while `has_next_page`, no retry.
///
/// [`AnalysisRepository`]: super::AnalysisRepository
pub trait PackageRepository {
    /// Fetches one page of packages for the given analysis.
    ///
    /// # Arguments
    /// * `analysis_id` - Opaque analysis identifier from the catalog
    /// * `page` - 1-based page number
    fn fetch_packages_page(&self, analysis_id: &str, page: usize) -> Result<PackagesPage>;
}
