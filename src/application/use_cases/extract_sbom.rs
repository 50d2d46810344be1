use crate::application::dto::ExtractionReport;
use crate::ports::outbound::{PackageRepository, ProgressReporter};
use crate::sbom_extraction::domain::{ExtractionTarget, PackageRecord, PercentMilestones};
use crate::shared::Result;

/// ExtractSbomUseCase - retrieves every package of one analysis
///
/// Walks the packages collection to completion, accumulating records in
/// server page order. All pages are buffered before the caller writes any
/// output; a mid-run failure therefore leaves no partial report behind.
///
/// # Type Parameters
/// * `R` - PackageRepository implementation
/// * `P` - ProgressReporter implementation
pub struct ExtractSbomUseCase<R, P> {
    package_repository: R,
    progress_reporter: P,
}

impl<R, P> ExtractSbomUseCase<R, P>
where
    R: PackageRepository,
    P: ProgressReporter,
{
    /// Creates a new ExtractSbomUseCase with injected dependencies
    pub fn new(package_repository: R, progress_reporter: P) -> Self {
        Self {
            package_repository,
            progress_reporter,
        }
    }

    /// Executes the extraction for one target.
    ///
    /// Announces a milestone the first time the cumulative row count crosses
    /// each 10% multiple of the server-reported total.
    pub fn execute(&self, target: &ExtractionTarget) -> Result<ExtractionReport> {
        if target.analysis_id.is_empty() {
            anyhow::bail!("Analysis id is required for {}", target.name);
        }

        self.progress_reporter
            .report(&format!("Extracting SBOM for {}...", target.name));

        let mut records: Vec<PackageRecord> = Vec::new();
        let mut milestones = PercentMilestones::new();
        let mut reported_total;
        let mut page = 1;
        loop {
            let batch = self
                .package_repository
                .fetch_packages_page(&target.analysis_id, page)?;
            reported_total = batch.total_count;
            let has_next_page = batch.has_next_page;

            for record in batch.records {
                records.push(record);
                self.progress_reporter.report_progress(
                    records.len(),
                    reported_total,
                    Some(&target.name),
                );
                if let Some(percentage) = milestones.advance(records.len(), reported_total) {
                    self.progress_reporter
                        .report(&format!("{}% loaded...", percentage));
                }
            }

            if !has_next_page {
                break;
            }
            page += 1;
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Retrieved {} package(s) for {}",
            records.len(),
            target.name
        ));

        Ok(ExtractionReport {
            target_name: target.name.clone(),
            records,
            reported_total,
        })
    }
}
