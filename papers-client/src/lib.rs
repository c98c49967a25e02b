//! # Papers Client
//!
//! Search PubMed, fetch article summaries and flag the authors and
//! affiliations that point to industry rather than academia.
//!
//! ## Features
//!
//! - **PubMed search**: one ESearch call per query, one ESummary call for the hits
//! - **Affiliation heuristics**: keyword-based academic and company detection
//! - **Flat records**: one [`PublicationRecord`] per article, ready for CSV
//! - **Pluggable transport**: the HTTP layer sits behind the [`Transport`] trait
//!
//! ## Quick Start
//!
//! ```no_run
//! use papers_client::{ClientConfig, Pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new().with_api_key("your_api_key_here");
//!     let pipeline = Pipeline::new(config)?;
//!
//!     for record in pipeline.run("cancer treatment").await? {
//!         println!("{}: {}", record.pmid, record.title);
//!         println!("  Non-academic authors: {}", record.non_academic_authors.join(", "));
//!         println!("  Companies: {}", record.company_affiliations.join(", "));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod affiliation;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod pubmed;
pub mod transport;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use error::{ParseError, PubMedError, Result};
pub use pipeline::Pipeline;
pub use pubmed::{PubMedClient, PublicationRecord};
pub use transport::{ReqwestTransport, Transport};
