/// Mock implementations for testing
mod mock_analysis_repository;
mod mock_catalog_store;
mod mock_package_repository;
mod mock_progress_reporter;

pub use mock_analysis_repository::MockAnalysisRepository;
pub use mock_catalog_store::MockCatalogStore;
pub use mock_package_repository::MockPackageRepository;
pub use mock_progress_reporter::MockProgressReporter;
