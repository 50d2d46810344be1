//! boost-sbom-export - CSV exports from the BoostSecurity SBOM inventory
//!
//! This library extracts package inventory, licensing, and vulnerability
//! data from the BoostSecurity SBOM inventory GraphQL API and renders it as
//! per-project CSV reports, following hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_extraction`): Catalog grouping, selection
//!   resolution, row flattening, progress milestones
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use boost_sbom_export::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let client = BoostApiClient::new("api-token")?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case with injected dependencies
//! let use_case = ExtractSbomUseCase::new(client, progress_reporter);
//!
//! // Execute
//! let target = ExtractionTarget {
//!     name: "example-org-backend".to_string(),
//!     analysis_id: "analysis-1".to_string(),
//! };
//! let report = use_case.execute(&target)?;
//!
//! // Format output
//! let formatter = CsvReportFormatter::new();
//! let output = formatter.format(report.records)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod sbom_extraction;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, JsonCatalogStore, ReportWorkspace,
    };
    pub use crate::adapters::outbound::formatters::CsvReportFormatter;
    pub use crate::adapters::outbound::network::BoostApiClient;
    pub use crate::application::dto::{CatalogSummary, ExtractionReport};
    pub use crate::application::use_cases::{ExtractSbomUseCase, ListResourcesUseCase};
    pub use crate::ports::outbound::{
        AnalysesPage, AnalysisRepository, CatalogStore, OutputPresenter, PackageRepository,
        PackagesPage, ProgressReporter, ReportFormatter,
    };
    pub use crate::sbom_extraction::domain::{
        resolve_extraction_targets, AnalysisRecord, ExtractionTarget, PackageRecord,
        PercentMilestones, ProjectAnalysis, ResourceCatalog, Selection, SeverityCounts,
        VulnerabilityEntry,
    };
    pub use crate::shared::Result;
}
