//! GraphQL documents for the SBOM inventory API.
//!
//! Pagination is the server's contract: `first`/`page` go in, `totalCount`
//! and `pageInfo.hasNextPage` come out. Only the fields the reports consume
//! are requested.

/// Walks the analyses collection; one node per scanned project snapshot.
pub const LIST_ANALYSES: &str = r#"
query ListAnalyses($first: Int, $page: Int, $search: String, $withVulnerabilities: Boolean) {
  analyses(
    first: $first
    page: $page
    filters: {search: $search, withVulnerabilities: $withVulnerabilities}
  ) {
    totalCount
    edges {
      node {
        analysisId
        organizationName
        projectName
      }
    }
    pageInfo {
      hasNextPage
    }
  }
}
"#;

/// Walks the packages collection of one analysis, including the nested
/// vulnerability and license sub-objects the CSV rows flatten.
pub const LIST_PACKAGES: &str = r#"
query ListPackages($first: Int, $page: Int, $search: String, $analysisId: String, $withVulnerabilities: Boolean, $isFixable: Boolean, $withoutTransitiveThrough: Boolean, $licenses: [String!]) {
  packages(
    first: $first
    page: $page
    filters: {search: $search, analysisId: $analysisId, withVulnerabilities: $withVulnerabilities, isFixable: $isFixable, withoutTransitiveThrough: $withoutTransitiveThrough, licenses: $licenses}
  ) {
    totalCount
    edges {
      node {
        name
        version
        ecosystem
        licenses {
          expression
        }
        vulnerabilities {
          edges {
            node {
              originalId
              fixedBy
              severity
            }
          }
        }
        vulnerabilityCount {
          critical
          high
          medium
          low
          info
          none
          unknown
        }
      }
    }
    pageInfo {
      hasNextPage
    }
  }
}
"#;
