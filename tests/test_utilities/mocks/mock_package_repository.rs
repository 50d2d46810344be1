use boost_sbom_export::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock PackageRepository serving pre-canned pages and recording requests
pub struct MockPackageRepository {
    pages: Vec<PackagesPage>,
    fail: bool,
    pub requested: Arc<Mutex<Vec<(String, usize)>>>,
}

impl MockPackageRepository {
    pub fn new(pages: Vec<PackagesPage>) -> Self {
        Self {
            pages,
            fail: false,
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            pages: Vec::new(),
            fail: true,
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl PackageRepository for MockPackageRepository {
    fn fetch_packages_page(&self, analysis_id: &str, page: usize) -> Result<PackagesPage> {
        self.requested
            .lock()
            .unwrap()
            .push((analysis_id.to_string(), page));

        if self.fail {
            anyhow::bail!("mock packages failure");
        }
        self.pages
            .get(page - 1)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("unexpected packages page request: {}", page))
    }
}
