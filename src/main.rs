use boost_sbom_export::adapters::outbound::console::StderrProgressReporter;
use boost_sbom_export::adapters::outbound::filesystem::{
    FileSystemWriter, JsonCatalogStore, ReportWorkspace,
};
use boost_sbom_export::adapters::outbound::formatters::CsvReportFormatter;
use boost_sbom_export::adapters::outbound::network::BoostApiClient;
use boost_sbom_export::application::use_cases::{ExtractSbomUseCase, ListResourcesUseCase};
use boost_sbom_export::cli::{Args, Command};
use boost_sbom_export::config;
use boost_sbom_export::ports::outbound::{CatalogStore, OutputPresenter, ReportFormatter};
use boost_sbom_export::sbom_extraction::domain::resolve_extraction_targets;
use boost_sbom_export::shared::error::{ExitCode, ExportError};
use boost_sbom_export::shared::Result;
use chrono::Local;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(&args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run(args: &Args) -> Result<()> {
    match args.command {
        Command::ListResources => list_resources(),
        Command::Extract => extract(),
    }
}

/// Rebuilds `available_resources.json` from the remote analyses collection.
fn list_resources() -> Result<()> {
    let token = config::api_token()?;

    // Create adapters (Dependency Injection)
    let client = BoostApiClient::new(&token)?;
    let catalog_store = JsonCatalogStore::new(PathBuf::from(config::CATALOG_PATH));
    let progress_reporter = StderrProgressReporter::new();

    let use_case = ListResourcesUseCase::new(client, catalog_store, progress_reporter);
    use_case.execute()?;

    Ok(())
}

/// Writes one CSV report per selected organization/project pair.
fn extract() -> Result<()> {
    let selections = config::selected_resources();
    if selections.is_empty() {
        return Err(ExportError::EmptySelection.into());
    }

    let token = config::api_token()?;
    let client = BoostApiClient::new(&token)?;

    let catalog_path = PathBuf::from(config::CATALOG_PATH);
    let catalog = JsonCatalogStore::new(catalog_path.clone()).load()?;
    let targets = resolve_extraction_targets(&catalog, &selections, &catalog_path)?;

    let workspace = ReportWorkspace::new(Path::new(config::ARTIFACTS_DIR), Local::now());
    workspace.ensure_created()?;

    let formatter = CsvReportFormatter::new();
    for target in targets {
        // Fresh reporter per target so each extraction gets its own bar
        let use_case = ExtractSbomUseCase::new(client.clone(), StderrProgressReporter::new());
        let report = use_case.execute(&target)?;

        let content = formatter.format(report.records)?;
        let writer = FileSystemWriter::new(workspace.report_path(&target.name));
        writer.present(&content)?;
    }

    Ok(())
}
