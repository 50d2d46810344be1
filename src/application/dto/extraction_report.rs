use crate::sbom_extraction::domain::PackageRecord;

/// ExtractionReport - everything retrieved for one extraction target
///
/// Records arrive in server page order; ordering for output is the
/// formatter's concern.
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    pub target_name: String,
    pub records: Vec<PackageRecord>,
    /// Total the server reported when pagination terminated.
    pub reported_total: usize,
}
