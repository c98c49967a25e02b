//! ESummary API operations for fetching publication records

use std::collections::HashSet;

use crate::error::{ParseError, Result};
use crate::pubmed::extract::extract_record;
use crate::pubmed::models::PublicationRecord;
use crate::pubmed::responses::{ESummaryDocSum, ESummaryResponse};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::{DATABASE, ESUMMARY_ENDPOINT, PubMedClient, RETMODE};

impl PubMedClient {
    /// Fetch summaries for `pmids` in one ESummary call and extract records
    ///
    /// Records come back in the order of `pmids`. Identifiers with no summary
    /// in the response are dropped silently, and an empty slice returns
    /// without calling the API.
    ///
    /// # Errors
    ///
    /// * `PubMedError::RequestError` / `PubMedError::ApiError` - If the request fails
    /// * `PubMedError::Parse` - If the response has no `result` object
    ///
    /// # Example
    ///
    /// ```no_run
    /// use papers_client::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new()?;
    ///     let records = client.fetch_summaries(&["31978945", "33515491"]).await?;
    ///     for record in &records {
    ///         println!("{}: {} ({})", record.pmid, record.title, record.publication_date);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(pmids_count = pmids.len()))]
    pub async fn fetch_summaries(&self, pmids: &[&str]) -> Result<Vec<PublicationRecord>> {
        if pmids.is_empty() {
            return Ok(Vec::new());
        }

        let params = [
            ("db", DATABASE.to_string()),
            ("id", pmids.join(",")),
            ("retmode", RETMODE.to_string()),
        ];

        debug!("Making ESummary API request");
        let body = self.transport.get_json(ESUMMARY_ENDPOINT, &params).await?;

        let records = Self::parse_esummary_response(body, pmids)?;
        info!(
            requested = pmids.len(),
            parsed = records.len(),
            "ESummary request completed"
        );

        Ok(records)
    }

    /// Turn an ESummary body into records for the requested identifiers
    pub(crate) fn parse_esummary_response(
        body: Value,
        pmids: &[&str],
    ) -> Result<Vec<PublicationRecord>> {
        if body.get("result").is_none() {
            return Err(ParseError::MissingField {
                endpoint: "esummary",
                field: "result",
            }
            .into());
        }

        let response: ESummaryResponse = serde_json::from_value(body)?;

        let mut seen = HashSet::with_capacity(pmids.len());
        let mut records = Vec::with_capacity(pmids.len());

        // Walking the requested ids skips the "uids" bookkeeping key
        for &pmid in pmids {
            if !seen.insert(pmid) {
                continue;
            }

            let Some(doc_value) = response.result.get(pmid) else {
                warn!(uid = %pmid, "UID not found in ESummary response");
                continue;
            };

            // Individual bad fields are tolerated, a non-object document is not
            if !doc_value.is_object() {
                warn!(uid = %pmid, "ESummary document is not an object");
                continue;
            }

            let doc: ESummaryDocSum = match serde_json::from_value(doc_value.clone()) {
                Ok(doc) => doc,
                Err(e) => {
                    warn!(uid = %pmid, error = %e, "Failed to parse ESummary document");
                    continue;
                }
            };

            if let Some(error) = &doc.error {
                warn!(uid = %pmid, error = %error, "ESummary returned error for UID");
                continue;
            }

            records.push(extract_record(pmid, &doc));
        }

        Ok(records)
    }
}
