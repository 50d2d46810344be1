/// One scanned project snapshot as reported by the analyses collection.
///
/// The analysis id is an opaque server-side identifier; it is never
/// interpreted, only passed back when querying packages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRecord {
    pub organization_name: String,
    pub project_name: String,
    pub analysis_id: String,
}

impl AnalysisRecord {
    pub fn new(organization_name: String, project_name: String, analysis_id: String) -> Self {
        Self {
            organization_name,
            project_name,
            analysis_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_record_fields() {
        let record = AnalysisRecord::new(
            "orgA".to_string(),
            "p1".to_string(),
            "id1".to_string(),
        );
        assert_eq!(record.organization_name, "orgA");
        assert_eq!(record.project_name, "p1");
        assert_eq!(record.analysis_id, "id1");
    }
}
