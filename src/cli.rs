use clap::{Parser, Subcommand};

/// Export SBOM and vulnerability CSV reports from the BoostSecurity SBOM inventory
#[derive(Parser, Debug)]
#[command(name = "boost-sbom-export")]
#[command(version)]
#[command(
    about = "Export SBOM and vulnerability CSV reports from the BoostSecurity SBOM inventory",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Rebuild the catalog of available organizations and projects
    ListResources,
    /// Write one CSV report per selected organization/project pair
    Extract,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
