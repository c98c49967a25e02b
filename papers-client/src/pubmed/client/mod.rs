mod summary;

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::{ParseError, Result};
use crate::pubmed::models::PublicationRecord;
use crate::pubmed::responses::ESearchResult;
use crate::transport::{ReqwestTransport, Transport};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

/// Database queried on every call
pub(crate) const DATABASE: &str = "pubmed";

/// Response mode requested on every call
pub(crate) const RETMODE: &str = "json";

pub(crate) const ESEARCH_ENDPOINT: &str = "esearch.fcgi";
pub(crate) const ESUMMARY_ENDPOINT: &str = "esummary.fcgi";

/// Client for the PubMed ESearch and ESummary APIs
///
/// Holds no per-query state; concurrent calls on a shared client are
/// independent.
#[derive(Clone)]
pub struct PubMedClient {
    transport: Arc<dyn Transport>,
}

impl PubMedClient {
    /// Create a new PubMed client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use papers_client::PubMedClient;
    ///
    /// let client = PubMedClient::new().expect("HTTP client should build");
    /// ```
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::new())
    }

    /// Create a new PubMed client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use papers_client::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_api_key("your_api_key_here")
    ///     .with_email("researcher@example.com");
    ///
    /// let client = PubMedClient::with_config(config).expect("HTTP client should build");
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create a client over an arbitrary [`Transport`]
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Search for articles using a query string
    ///
    /// The query is passed to PubMed verbatim.
    ///
    /// # Returns
    ///
    /// Returns a `Result<Vec<String>>` containing PMIDs of matching articles
    ///
    /// # Errors
    ///
    /// * `PubMedError::RequestError` / `PubMedError::ApiError` - If the request fails
    /// * `PubMedError::Parse` - If the response is not an ESearch result
    ///
    /// # Example
    ///
    /// ```no_run
    /// use papers_client::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new()?;
    ///     let pmids = client.search_articles("cancer treatment").await?;
    ///     println!("Found {} articles", pmids.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(query = %query))]
    pub async fn search_articles(&self, query: &str) -> Result<Vec<String>> {
        let params = [
            ("db", DATABASE.to_string()),
            ("term", query.to_string()),
            ("retmode", RETMODE.to_string()),
        ];

        debug!("Making ESearch API request");
        let body = self.transport.get_json(ESEARCH_ENDPOINT, &params).await?;
        let pmids = Self::parse_esearch_response(body)?;

        info!(results_found = pmids.len(), "Search completed successfully");

        Ok(pmids)
    }

    /// Search and fetch publication records in a single operation
    ///
    /// Errors from either call are returned unchanged. If the summary call
    /// fails no records are returned, even though the search succeeded.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use papers_client::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new()?;
    ///     let records = client.search_and_fetch("cancer treatment").await?;
    ///     for record in &records {
    ///         println!("{}: {:?}", record.pmid, record.company_affiliations);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn search_and_fetch(&self, query: &str) -> Result<Vec<PublicationRecord>> {
        let pmids = self.search_articles(query).await?;

        let pmid_refs: Vec<&str> = pmids.iter().map(|s| s.as_str()).collect();
        self.fetch_summaries(&pmid_refs).await
    }

    pub(crate) fn parse_esearch_response(body: Value) -> Result<Vec<String>> {
        if body.get("esearchresult").is_none() {
            return Err(ParseError::MissingField {
                endpoint: "esearch",
                field: "esearchresult",
            }
            .into());
        }

        let search_result: ESearchResult = serde_json::from_value(body)?;

        // A 200 OK can still carry an ERROR field; the idlist is used as-is
        if let Some(error_msg) = &search_result.esearchresult.error {
            warn!(error = %error_msg, "ESearch reported an error");
        }

        let total_count: usize = search_result
            .esearchresult
            .count
            .as_ref()
            .and_then(|c| c.parse().ok())
            .unwrap_or(0);

        if total_count > search_result.esearchresult.idlist.len() {
            debug!(
                total_count,
                returned = search_result.esearchresult.idlist.len(),
                "Only the first page of search results is used"
            );
        }

        Ok(search_result.esearchresult.idlist)
    }
}
