use serde::{Deserialize, Serialize};

/// One publication with its industry-affiliation findings
///
/// Built once per summary document and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRecord {
    /// PubMed ID
    pub pmid: String,
    /// Article title, empty when absent
    pub title: String,
    /// Publication date as reported by PubMed, empty when absent
    pub publication_date: String,
    /// Authors whose affiliation names no academic institution
    pub non_academic_authors: Vec<String>,
    /// Affiliation segments naming a pharmaceutical or biotech company
    pub company_affiliations: Vec<String>,
    /// Corresponding author email, empty when absent
    pub corresponding_email: String,
}
