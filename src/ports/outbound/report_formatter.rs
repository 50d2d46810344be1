use crate::sbom_extraction::domain::PackageRecord;
use crate::shared::Result;

/// ReportFormatter port for rendering package records into report content
///
/// Implementations own the row ordering and header of the output format.
pub trait ReportFormatter {
    /// Formats package records into a complete report document.
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, records: Vec<PackageRecord>) -> Result<String>;
}
