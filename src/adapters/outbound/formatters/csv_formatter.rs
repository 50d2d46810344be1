use crate::ports::outbound::ReportFormatter;
use crate::sbom_extraction::domain::PackageRecord;
use crate::shared::Result;

/// Fixed report header: four identity columns, the seven severity buckets,
/// and the flattened vulnerability list.
const REPORT_HEADER: [&str; 12] = [
    "Library Name",
    "Version",
    "License",
    "Ecosystem",
    "Critical",
    "High",
    "Medium",
    "Low",
    "Info",
    "None",
    "Unknown",
    "Vulnerabilities",
];

/// CsvReportFormatter adapter rendering package records as a CSV document
///
/// Rows are sorted case-insensitively by library name. Multi-line and
/// comma-bearing cells are quoted by the csv writer.
pub struct CsvReportFormatter;

impl CsvReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvReportFormatter {
    fn format(&self, mut records: Vec<PackageRecord>) -> Result<String> {
        records.sort_by_key(|record| record.sort_key());

        let mut writer = csv::Writer::from_writer(vec![]);
        writer.write_record(REPORT_HEADER)?;
        for record in &records {
            writer.write_record(record.to_record())?;
        }

        let bytes = writer.into_inner()?;
        Ok(String::from_utf8(bytes)?)
    }
}
