/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, file system, console).
pub mod analysis_repository;
pub mod catalog_store;
pub mod output_presenter;
pub mod package_repository;
pub mod progress_reporter;
pub mod report_formatter;

pub use analysis_repository::{AnalysesPage, AnalysisRepository};
pub use catalog_store::CatalogStore;
pub use output_presenter::OutputPresenter;
pub use package_repository::{PackageRepository, PackagesPage};
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
