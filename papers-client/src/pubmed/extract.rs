//! Conversion of raw ESummary documents into [`PublicationRecord`]s
//!
//! Extraction never fails. Missing fields fall back to empty strings or
//! empty lists.

use crate::affiliation::{is_non_academic, is_pharma_company};
use crate::pubmed::models::PublicationRecord;
use crate::pubmed::responses::{ESummaryAuthor, ESummaryDocSum};

/// Separator between institutions in the affiliation blob
pub const AFFILIATION_SEPARATOR: char = ';';

/// Build the output record for one summary document
pub fn extract_record(pmid: &str, doc: &ESummaryDocSum) -> PublicationRecord {
    PublicationRecord {
        pmid: pmid.to_string(),
        title: doc.title.clone().unwrap_or_default(),
        publication_date: doc.pubdate.clone().unwrap_or_default(),
        non_academic_authors: non_academic_authors(doc.authors.as_deref().unwrap_or_default()),
        company_affiliations: company_affiliations(doc.affiliation.as_deref().unwrap_or_default()),
        corresponding_email: doc
            .correspondence
            .as_ref()
            .and_then(|c| c.email.clone())
            .unwrap_or_default(),
    }
}

/// Names of authors classified as non-academic, in author order
///
/// Authors without a name are skipped.
pub fn non_academic_authors(authors: &[ESummaryAuthor]) -> Vec<String> {
    authors
        .iter()
        .filter(|author| is_non_academic(author.affiliation.as_deref().unwrap_or_default()))
        .filter_map(|author| author.name.clone())
        .collect()
}

/// Affiliation segments that look like companies, in blob order
///
/// Segments are not trimmed: `"Acme; Beta Pharma"` yields `" Beta Pharma"`.
pub fn company_affiliations(affiliation: &str) -> Vec<String> {
    affiliation
        .split(AFFILIATION_SEPARATOR)
        .filter(|segment| is_pharma_company(segment))
        .map(str::to_string)
        .collect()
}
