use super::vulnerability::VulnerabilityEntry;

/// Vulnerability counts per severity bucket, as reported by the server.
///
/// Seven buckets: the report's severity columns plus the `none` and
/// `unknown` tails. Missing counters default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub critical: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
    pub info: u64,
    pub none: u64,
    pub unknown: u64,
}

/// One package from the packages collection, carrying everything a single
/// CSV row needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub name: String,
    pub version: String,
    pub ecosystem: String,
    pub licenses: Vec<String>,
    pub vulnerabilities: Vec<VulnerabilityEntry>,
    pub severity_counts: SeverityCounts,
}

impl PackageRecord {
    /// License expressions joined for the single License column.
    pub fn license_expression(&self) -> String {
        self.licenses.join(", ")
    }

    /// Vulnerability summaries separated by a blank line, matching the
    /// multi-line Vulnerabilities cell of the report.
    pub fn vulnerability_summary(&self) -> String {
        self.vulnerabilities
            .iter()
            .map(VulnerabilityEntry::summary)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Key for the case-insensitive report ordering.
    pub fn sort_key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Flattens the record into the 12 CSV fields in header order.
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.version.clone(),
            self.license_expression(),
            self.ecosystem.clone(),
            self.severity_counts.critical.to_string(),
            self.severity_counts.high.to_string(),
            self.severity_counts.medium.to_string(),
            self.severity_counts.low.to_string(),
            self.severity_counts.info.to_string(),
            self.severity_counts.none.to_string(),
            self.severity_counts.unknown.to_string(),
            self.vulnerability_summary(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> PackageRecord {
        PackageRecord {
            name: "requests".to_string(),
            version: "2.31.0".to_string(),
            ecosystem: "pypi".to_string(),
            licenses: vec!["Apache-2.0".to_string(), "MIT".to_string()],
            vulnerabilities: vec![
                VulnerabilityEntry::new(
                    "CVE-2024-1234".to_string(),
                    "HIGH".to_string(),
                    vec!["2.32.0".to_string()],
                ),
                VulnerabilityEntry::new(
                    "CVE-2024-5678".to_string(),
                    "LOW".to_string(),
                    vec![],
                ),
            ],
            severity_counts: SeverityCounts {
                critical: 1,
                high: 2,
                medium: 3,
                low: 4,
                info: 0,
                none: 0,
                unknown: 5,
            },
        }
    }

    #[test]
    fn test_license_expression_joins_with_comma() {
        assert_eq!(sample_record().license_expression(), "Apache-2.0, MIT");
    }

    #[test]
    fn test_license_expression_empty() {
        let mut record = sample_record();
        record.licenses.clear();
        assert_eq!(record.license_expression(), "");
    }

    #[test]
    fn test_vulnerability_summary_joins_with_blank_line() {
        let expected =
            "CVE-2024-1234 HIGH (2.32.0)\n\nCVE-2024-5678 LOW (No Fixable Versions)";
        assert_eq!(sample_record().vulnerability_summary(), expected);
    }

    #[test]
    fn test_vulnerability_summary_empty() {
        let mut record = sample_record();
        record.vulnerabilities.clear();
        assert_eq!(record.vulnerability_summary(), "");
    }

    #[test]
    fn test_to_record_has_twelve_fields_in_header_order() {
        let fields = sample_record().to_record();
        assert_eq!(fields.len(), 12);
        assert_eq!(fields[0], "requests");
        assert_eq!(fields[1], "2.31.0");
        assert_eq!(fields[2], "Apache-2.0, MIT");
        assert_eq!(fields[3], "pypi");
        assert_eq!(fields[4], "1");
        assert_eq!(fields[5], "2");
        assert_eq!(fields[6], "3");
        assert_eq!(fields[7], "4");
        assert_eq!(fields[8], "0");
        assert_eq!(fields[9], "0");
        assert_eq!(fields[10], "5");
        assert!(fields[11].contains("CVE-2024-1234"));
    }

    #[test]
    fn test_sort_key_is_lowercased() {
        let mut record = sample_record();
        record.name = "Zeta".to_string();
        assert_eq!(record.sort_key(), "zeta");
    }

    #[test]
    fn test_severity_counts_default_to_zero() {
        let counts = SeverityCounts::default();
        assert_eq!(counts.critical, 0);
        assert_eq!(counts.unknown, 0);
    }
}
