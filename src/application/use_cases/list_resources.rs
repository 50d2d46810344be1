use crate::application::dto::CatalogSummary;
use crate::ports::outbound::{AnalysisRepository, CatalogStore, ProgressReporter};
use crate::sbom_extraction::domain::ResourceCatalog;
use crate::shared::Result;

/// ListResourcesUseCase - rebuilds the resource catalog
///
/// Walks the analyses collection to completion, groups the records by
/// organization, and overwrites the persisted catalog. The page loop owns
/// its accumulator and terminates on the server's has-next-page flag.
///
/// # Type Parameters
/// * `A` - AnalysisRepository implementation
/// * `S` - CatalogStore implementation
/// * `P` - ProgressReporter implementation
pub struct ListResourcesUseCase<A, S, P> {
    analysis_repository: A,
    catalog_store: S,
    progress_reporter: P,
}

impl<A, S, P> ListResourcesUseCase<A, S, P>
where
    A: AnalysisRepository,
    S: CatalogStore,
    P: ProgressReporter,
{
    /// Creates a new ListResourcesUseCase with injected dependencies
    pub fn new(analysis_repository: A, catalog_store: S, progress_reporter: P) -> Self {
        Self {
            analysis_repository,
            catalog_store,
            progress_reporter,
        }
    }

    /// Executes the catalog rebuild.
    ///
    /// No retry and no partial-result handling: the first failed page fetch
    /// aborts the run and leaves the previous catalog file untouched.
    pub fn execute(&self) -> Result<CatalogSummary> {
        self.progress_reporter
            .report("🔍 Listing analyses from the SBOM inventory...");

        let mut catalog = ResourceCatalog::new();
        let mut page = 1;
        loop {
            let batch = self.analysis_repository.fetch_analyses_page(page)?;
            let has_next_page = batch.has_next_page;

            for record in batch.records {
                catalog.insert(record);
            }
            self.progress_reporter.report_progress(
                catalog.project_count(),
                batch.total_count,
                Some("analyses"),
            );

            if !has_next_page {
                break;
            }
            page += 1;
        }

        self.catalog_store.save(&catalog)?;

        let summary = CatalogSummary {
            organization_count: catalog.organization_count(),
            project_count: catalog.project_count(),
        };
        self.progress_reporter.report_completion(&format!(
            "✅ Cataloged {} project(s) across {} organization(s)",
            summary.project_count, summary.organization_count
        ));

        Ok(summary)
    }
}
