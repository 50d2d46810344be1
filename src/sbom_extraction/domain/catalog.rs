use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::analysis::AnalysisRecord;

/// One project entry under an organization in the resource catalog.
///
/// The serialized field names are the on-disk JSON contract of
/// `available_resources.json`; do not rename them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAnalysis {
    pub project_name: String,
    pub analysis_id: String,
}

/// Lookup table mapping organization name to its scanned projects.
///
/// The first occurrence of an organization creates its sequence; subsequent
/// records append in server page order. The whole table is rebuilt from
/// scratch on every `list-resources` run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceCatalog {
    organizations: BTreeMap<String, Vec<ProjectAnalysis>>,
}

impl ResourceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups an analysis record under its organization.
    pub fn insert(&mut self, record: AnalysisRecord) {
        self.organizations
            .entry(record.organization_name)
            .or_default()
            .push(ProjectAnalysis {
                project_name: record.project_name,
                analysis_id: record.analysis_id,
            });
    }

    /// Iterates organizations with their project sequences.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<ProjectAnalysis>)> {
        self.organizations.iter()
    }

    pub fn organization_count(&self) -> usize {
        self.organizations.len()
    }

    pub fn project_count(&self) -> usize {
        self.organizations.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.organizations.is_empty()
    }
}
