use std::collections::HashSet;
use std::path::Path;

use crate::shared::error::ExportError;
use crate::shared::Result;

use super::catalog::ResourceCatalog;

/// An operator-requested organization/project pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub organization: String,
    pub project: String,
}

impl Selection {
    pub fn new(organization: &str, project: &str) -> Self {
        Self {
            organization: organization.to_string(),
            project: project.to_string(),
        }
    }

    /// Composite key shared with catalog entries.
    pub fn composite_key(&self) -> String {
        format!("{}-{}", self.organization, self.project)
    }
}

/// A resolved (display name, analysis id) pair ready for extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionTarget {
    pub name: String,
    pub analysis_id: String,
}

/// Intersects the operator selection with the resource catalog.
///
/// Catalog entries are scanned in catalog order, so the resulting targets
/// (and therefore the report files) follow the catalog, not the selection
/// list. Resolution happens before any package query is issued.
pub fn resolve_extraction_targets(
    catalog: &ResourceCatalog,
    selected: &[Selection],
    catalog_path: &Path,
) -> Result<Vec<ExtractionTarget>> {
    if selected.is_empty() {
        return Err(ExportError::EmptySelection.into());
    }

    let requested: HashSet<String> = selected.iter().map(Selection::composite_key).collect();

    let mut targets = Vec::new();
    for (organization, projects) in catalog.iter() {
        for project in projects {
            let complete_name = format!("{}-{}", organization, project.project_name);
            if requested.contains(&complete_name) {
                targets.push(ExtractionTarget {
                    name: complete_name,
                    analysis_id: project.analysis_id.clone(),
                });
            }
        }
    }

    if targets.is_empty() {
        return Err(ExportError::NoMatchingTargets {
            catalog: catalog_path.to_path_buf(),
        }
        .into());
    }

    Ok(targets)
}
