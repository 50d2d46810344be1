use crate::sbom_extraction::domain::AnalysisRecord;
use crate::shared::Result;

/// One page of the analyses connection.
#[derive(Debug, Clone)]
pub struct AnalysesPage {
    pub records: Vec<AnalysisRecord>,
    pub total_count: usize,
    pub has_next_page: bool,
}

/// AnalysisRepository port for walking the remote analyses collection
///
/// Pagination is the server's contract: the caller advances a 1-based page
/// counter while `has_next_page` stays true. Implementations do not retry;
/// any transport or server failure surfaces as an error.
pub trait AnalysisRepository {
    /// Fetches one page of analyses.
    ///
    /// # Arguments
    /// * `page` - 1-based page number
    fn fetch_analyses_page(&self, page: usize) -> Result<AnalysesPage>;
}
