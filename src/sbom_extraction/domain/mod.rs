pub mod analysis;
pub mod catalog;
pub mod package_record;
pub mod progress;
pub mod selection;
pub mod vulnerability;

pub use analysis::AnalysisRecord;
pub use catalog::{ProjectAnalysis, ResourceCatalog};
pub use package_record::{PackageRecord, SeverityCounts};
pub use progress::PercentMilestones;
pub use selection::{resolve_extraction_targets, ExtractionTarget, Selection};
pub use vulnerability::VulnerabilityEntry;
