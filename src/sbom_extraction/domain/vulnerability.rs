/// Sentinel shown when a vulnerability has no fixed-by versions.
const NO_FIXABLE_VERSIONS: &str = "No Fixable Versions";

/// One vulnerability attached to a package, reduced to what the report needs.
///
/// `severity` is carried verbatim from the server; callers substitute
/// `"Unknown"` when the field is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VulnerabilityEntry {
    pub id: String,
    pub severity: String,
    pub fixed_by: Vec<String>,
}

impl VulnerabilityEntry {
    pub fn new(id: String, severity: String, fixed_by: Vec<String>) -> Self {
        Self {
            id,
            severity,
            fixed_by,
        }
    }

    /// Formats the entry for the Vulnerabilities CSV cell:
    /// `"{id} {severity} ({comma-joined fixed versions})"`, with a sentinel
    /// when no fixed versions exist.
    pub fn summary(&self) -> String {
        let fixed_versions = if self.fixed_by.is_empty() {
            NO_FIXABLE_VERSIONS.to_string()
        } else {
            self.fixed_by.join(", ")
        };
        format!("{} {} ({})", self.id, self.severity, fixed_versions)
    }
}
