//! PubMed client for searching and summarising articles
//!
//! The client functionality is split across focused modules under [`client`]:
//! - `client/mod.rs` - Core client struct, constructors and ESearch
//! - `client/summary` - ESummary API and record assembly
//!
//! [`extract`] turns one ESummary document into a [`PublicationRecord`].

pub mod client;
pub mod extract;
pub mod models;
pub mod responses;

// Re-export public types
pub use client::PubMedClient;
pub use extract::extract_record;
pub use models::PublicationRecord;
pub use responses::{ESummaryAuthor, ESummaryCorrespondence, ESummaryDocSum};
