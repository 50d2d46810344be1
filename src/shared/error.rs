use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow wrapper scripts to distinguish operator mistakes
/// (fixable without touching the network) from runtime failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - all selected reports were written
    Success = 0,
    /// Configuration error (missing token, empty selection, stale catalog)
    ConfigurationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a top-level error, inspecting the chain for
    /// a configuration-class [`ExportError`].
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<ExportError>() {
            Some(e) if e.is_configuration() => ExitCode::ConfigurationError,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ConfigurationError => write!(f, "Configuration Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the export workflow.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("API token not found\n\n💡 Hint: Set the {var} environment variable with a BoostSecurity API key")]
    MissingApiToken { var: &'static str },

    #[error("No resources selected\n\n💡 Hint: Edit the selected_resources list in src/config.rs and rebuild")]
    EmptySelection,

    #[error("No analysis ids found for the selected resources\n\n💡 Hint: Edit the selected_resources list in src/config.rs to name organization/project pairs that exist in {catalog}")]
    NoMatchingTargets { catalog: PathBuf },

    #[error("Resource catalog not found: {path}\n\n💡 Hint: Run `boost-sbom-export list-resources` first to build it")]
    CatalogNotFound { path: PathBuf },

    #[error("Failed to parse resource catalog: {path}\nDetails: {details}\n\n💡 Hint: Re-run `boost-sbom-export list-resources` to rebuild the file")]
    CatalogParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

impl ExportError {
    /// Configuration errors are operator mistakes that can be fixed without
    /// retrying the network call.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, ExportError::FileWriteError { .. })
    }
}
