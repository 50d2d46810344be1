//! Operator configuration.
//!
//! The selection list is edited in source: pick the organization/project
//! pairs below, rebuild, then run `extract`. There is no config file and no
//! CLI flag for selection.

use crate::sbom_extraction::domain::Selection;
use crate::shared::error::ExportError;
use crate::shared::Result;
use std::env;

/// Environment variable supplying the BoostSecurity API key.
pub const TOKEN_ENV_VAR: &str = "BOOST_API_TOKEN";

/// Fixed relative path of the persisted resource catalog.
pub const CATALOG_PATH: &str = "./available_resources.json";

/// Root folder for report output; one timestamped subfolder per run.
pub const ARTIFACTS_DIR: &str = "artifacts";

// EDIT THIS: the organization/project pairs to extract. Pairs must exist in
// the catalog written by `list-resources`.
pub fn selected_resources() -> Vec<Selection> {
    vec![
        Selection::new("example-org", "backend"),
        Selection::new("example-org", "frontend"),
    ]
}
// END EDIT

/// Reads the API token, failing fast before any network activity.
pub fn api_token() -> Result<String> {
    match env::var(TOKEN_ENV_VAR) {
        Ok(token) if !token.is_empty() => Ok(token),
        _ => Err(ExportError::MissingApiToken { var: TOKEN_ENV_VAR }.into()),
    }
}
