use boost_sbom_export::prelude::*;

/// Mock AnalysisRepository serving pre-canned pages
pub struct MockAnalysisRepository {
    pages: Vec<AnalysesPage>,
    fail: bool,
}

impl MockAnalysisRepository {
    pub fn new(pages: Vec<AnalysesPage>) -> Self {
        Self { pages, fail: false }
    }

    pub fn with_failure() -> Self {
        Self {
            pages: Vec::new(),
            fail: true,
        }
    }
}

impl AnalysisRepository for MockAnalysisRepository {
    fn fetch_analyses_page(&self, page: usize) -> Result<AnalysesPage> {
        if self.fail {
            anyhow::bail!("mock analyses failure");
        }
        self.pages
            .get(page - 1)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("unexpected analyses page request: {}", page))
    }
}
