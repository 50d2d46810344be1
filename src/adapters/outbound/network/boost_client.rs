use crate::ports::outbound::{AnalysesPage, AnalysisRepository, PackageRepository, PackagesPage};
use crate::sbom_extraction::domain::{
    AnalysisRecord, PackageRecord, SeverityCounts, VulnerabilityEntry,
};
use crate::shared::Result;
use reqwest::blocking::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::queries;

/// BoostSecurity SBOM inventory API client
///
/// Implements the [`AnalysisRepository`] and [`PackageRepository`] ports over
/// the inventory GraphQL endpoint with a blocking HTTP client.
///
/// # Security
/// - Implements timeout (30 seconds)
/// - Does not retry failed requests (any failure aborts the run)
/// - The bearer token is marked sensitive so it never appears in debug output
#[derive(Clone)]
pub struct BoostApiClient {
    client: Client,
    endpoint: String,
}

impl BoostApiClient {
    const API_ENDPOINT: &'static str = "https://api.boostsecurity.io/sbom-inventory/graphql";
    const TIMEOUT_SECONDS: u64 = 30;
    /// Server page size shared by both collections.
    const PAGE_SIZE: usize = 100;
    /// Browser-shaped user agent expected by the endpoint.
    const USER_AGENT: &'static str =
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:109.0) Gecko/20100101 Firefox/119.0";

    /// Creates a new inventory API client authenticating with the given token.
    pub fn new(token: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .default_headers(Self::default_headers(token)?)
            .build()?;

        Ok(Self {
            client,
            endpoint: Self::API_ENDPOINT.to_string(),
        })
    }

    fn default_headers(token: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static(Self::USER_AGENT));
        headers.insert(header::ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-US,en;q=0.5"),
        );
        headers.insert("prefer", HeaderValue::from_static("safe"));
        headers.insert("dnt", HeaderValue::from_static("1"));
        headers.insert("sec-fetch-dest", HeaderValue::from_static("empty"));
        headers.insert("sec-gpc", HeaderValue::from_static("1"));
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));

        let mut authorization = HeaderValue::from_str(&format!("ApiKey {}", token))?;
        authorization.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, authorization);

        Ok(headers)
    }

    /// Executes one GraphQL document and unwraps the `data` envelope.
    fn execute<V: Serialize, D: DeserializeOwned>(&self, query: &str, variables: &V) -> Result<D> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&GraphQlRequest { query, variables })
            .send()?;

        if !response.status().is_success() {
            anyhow::bail!(
                "SBOM inventory API returned status code {}",
                response.status()
            );
        }

        let body: GraphQlResponse<D> = response.json()?;

        if let Some(errors) = body.errors {
            if !errors.is_empty() {
                let details = errors
                    .into_iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>()
                    .join("; ");
                anyhow::bail!("SBOM inventory API returned errors: {}", details);
            }
        }

        body.data
            .ok_or_else(|| anyhow::anyhow!("SBOM inventory API response contained no data"))
    }
}

impl AnalysisRepository for BoostApiClient {
    fn fetch_analyses_page(&self, page: usize) -> Result<AnalysesPage> {
        let variables = AnalysesVariables {
            first: Self::PAGE_SIZE,
            page,
            search: "",
            with_vulnerabilities: false,
        };

        let data: AnalysesData = self.execute(queries::LIST_ANALYSES, &variables)?;
        let connection = data.analyses;

        Ok(AnalysesPage {
            records: connection
                .edges
                .into_iter()
                .map(|edge| edge.node.into_record())
                .collect(),
            total_count: connection.total_count,
            has_next_page: connection.page_info.has_next_page,
        })
    }
}

impl PackageRepository for BoostApiClient {
    fn fetch_packages_page(&self, analysis_id: &str, page: usize) -> Result<PackagesPage> {
        let variables = PackagesVariables {
            first: Self::PAGE_SIZE,
            page,
            search: "",
            analysis_id,
            with_vulnerabilities: false,
            is_fixable: false,
            without_transitive_through: false,
            licenses: &[],
        };

        let data: PackagesData = self.execute(queries::LIST_PACKAGES, &variables)?;
        let connection = data.packages;

        Ok(PackagesPage {
            records: connection
                .edges
                .into_iter()
                .map(|edge| edge.node.into_record())
                .collect(),
            total_count: connection.total_count,
            has_next_page: connection.page_info.has_next_page,
        })
    }
}

// GraphQL request/response envelopes

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    variables: &'a V,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<D> {
    data: Option<D>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysesVariables<'a> {
    first: usize,
    page: usize,
    search: &'a str,
    with_vulnerabilities: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PackagesVariables<'a> {
    first: usize,
    page: usize,
    search: &'a str,
    analysis_id: &'a str,
    with_vulnerabilities: bool,
    is_fixable: bool,
    without_transitive_through: bool,
    licenses: &'a [String],
}

// Connection envelopes shared by both collections. Every field is defaulted
// so a malformed response degrades to empty output instead of aborting.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Connection<T> {
    #[serde(default)]
    total_count: usize,
    #[serde(default)]
    edges: Vec<Edge<T>>,
    #[serde(default)]
    page_info: PageInfo,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self {
            total_count: 0,
            edges: Vec::new(),
            page_info: PageInfo::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Edge<T> {
    node: T,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    #[serde(default)]
    has_next_page: bool,
}

#[derive(Debug, Deserialize)]
struct AnalysesData {
    #[serde(default)]
    analyses: Connection<AnalysisNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisNode {
    #[serde(default)]
    analysis_id: String,
    #[serde(default)]
    organization_name: String,
    #[serde(default)]
    project_name: String,
}

impl AnalysisNode {
    fn into_record(self) -> AnalysisRecord {
        AnalysisRecord::new(self.organization_name, self.project_name, self.analysis_id)
    }
}

#[derive(Debug, Deserialize)]
struct PackagesData {
    #[serde(default)]
    packages: Connection<PackageNode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageNode {
    #[serde(default)]
    name: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    ecosystem: String,
    #[serde(default)]
    licenses: Vec<LicenseNode>,
    #[serde(default)]
    vulnerabilities: VulnerabilityConnection,
    #[serde(default)]
    vulnerability_count: VulnerabilityCountNode,
}

impl PackageNode {
    fn into_record(self) -> PackageRecord {
        PackageRecord {
            name: self.name,
            version: self.version,
            ecosystem: self.ecosystem,
            licenses: self
                .licenses
                .into_iter()
                .map(|license| license.expression)
                .collect(),
            vulnerabilities: self
                .vulnerabilities
                .edges
                .into_iter()
                .map(|edge| edge.node.into_entry())
                .collect(),
            severity_counts: self.vulnerability_count.into_counts(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct LicenseNode {
    #[serde(default)]
    expression: String,
}

#[derive(Debug, Default, Deserialize)]
struct VulnerabilityConnection {
    #[serde(default)]
    edges: Vec<Edge<VulnerabilityNode>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VulnerabilityNode {
    #[serde(default)]
    original_id: String,
    /// The server sends `null` for vulnerabilities without fix data.
    #[serde(default)]
    fixed_by: Option<Vec<String>>,
    #[serde(default)]
    severity: Option<String>,
}

impl VulnerabilityNode {
    fn into_entry(self) -> VulnerabilityEntry {
        VulnerabilityEntry::new(
            self.original_id,
            self.severity.unwrap_or_else(|| "Unknown".to_string()),
            self.fixed_by.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
struct VulnerabilityCountNode {
    #[serde(default)]
    critical: u64,
    #[serde(default)]
    high: u64,
    #[serde(default)]
    medium: u64,
    #[serde(default)]
    low: u64,
    #[serde(default)]
    info: u64,
    #[serde(default)]
    none: u64,
    #[serde(default)]
    unknown: u64,
}

impl VulnerabilityCountNode {
    fn into_counts(self) -> SeverityCounts {
        SeverityCounts {
            critical: self.critical,
            high: self.high,
            medium: self.medium,
            low: self.low,
            info: self.info,
            none: self.none,
            unknown: self.unknown,
        }
    }
}
