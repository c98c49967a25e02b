//! Output writers for publication records
//!
//! - **CSV** - one row per record with a fixed header
//! - **Console** - pretty-printed JSON per record

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::pubmed::PublicationRecord;

/// Separator used for the list-valued CSV columns
pub const LIST_SEPARATOR: &str = ", ";

/// CSV header in column order
pub const CSV_HEADERS: [&str; 6] = [
    "PubmedID",
    "Title",
    "PublicationDate",
    "Non-academicAuthor(s)",
    "CompanyAffiliation(s)",
    "CorrespondingAuthorEmail",
];

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "PubmedID")]
    pmid: &'a str,
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "PublicationDate")]
    publication_date: &'a str,
    #[serde(rename = "Non-academicAuthor(s)")]
    non_academic_authors: String,
    #[serde(rename = "CompanyAffiliation(s)")]
    company_affiliations: String,
    #[serde(rename = "CorrespondingAuthorEmail")]
    corresponding_email: &'a str,
}

impl<'a> From<&'a PublicationRecord> for CsvRow<'a> {
    fn from(record: &'a PublicationRecord) -> Self {
        Self {
            pmid: &record.pmid,
            title: &record.title,
            publication_date: &record.publication_date,
            non_academic_authors: record.non_academic_authors.join(LIST_SEPARATOR),
            company_affiliations: record.company_affiliations.join(LIST_SEPARATOR),
            corresponding_email: &record.corresponding_email,
        }
    }
}

/// Write records as CSV, header first
///
/// The header is written even when there are no records.
pub fn write_csv<W: Write>(records: &[PublicationRecord], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(CSV_HEADERS)?;
    for record in records {
        wtr.serialize(CsvRow::from(record))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write records as CSV to `path`, replacing any existing file
pub fn save_csv<P: AsRef<Path>>(records: &[PublicationRecord], path: P) -> Result<()> {
    let file = std::fs::File::create(path.as_ref())?;
    write_csv(records, file)
}

/// Render records for a terminal, one JSON object per record
pub fn render_records<W: Write>(records: &[PublicationRecord], mut writer: W) -> Result<()> {
    for record in records {
        let json = serde_json::to_string_pretty(record).map_err(io::Error::from)?;
        writeln!(writer, "{}", json)?;
    }
    writer.flush()?;
    Ok(())
}
