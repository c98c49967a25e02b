//! Entry point used by the command-line tool

use std::sync::Arc;

use tracing::instrument;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::pubmed::{PubMedClient, PublicationRecord};
use crate::transport::Transport;

/// Query in, publication records out
///
/// Each [`Pipeline::run`] is independent; nothing is kept between runs.
///
/// # Example
///
/// ```no_run
/// use papers_client::{ClientConfig, Pipeline};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let pipeline = Pipeline::new(ClientConfig::new().with_api_key("your_api_key_here"))?;
///     let records = pipeline.run("cancer treatment").await?;
///     println!("{} papers", records.len());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Pipeline {
    client: PubMedClient,
}

impl Pipeline {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_client(PubMedClient::with_config(config)?))
    }

    pub fn with_client(client: PubMedClient) -> Self {
        Self { client }
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self::with_client(PubMedClient::with_transport(transport))
    }

    /// Search PubMed for `query` and return one record per summarised hit
    #[instrument(skip(self))]
    pub async fn run(&self, query: &str) -> Result<Vec<PublicationRecord>> {
        self.client.search_and_fetch(query).await
    }
}
