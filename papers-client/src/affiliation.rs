//! Keyword heuristics for author affiliation text
//!
//! Matching is a case-insensitive substring test, not a word match:
//! "Biotechnology Corp" contains "biotech", "Collaborative Research" contains "lab".

/// Keywords marking an affiliation as academic
pub const ACADEMIC_KEYWORDS: [&str; 3] = ["university", "institute", "lab"];

/// Keywords marking an affiliation as a pharmaceutical or biotech company
pub const COMPANY_KEYWORDS: [&str; 3] = ["pharma", "biotech", "company"];

/// Whether the affiliation text names no academic institution
///
/// Absence of every academic keyword counts as non-academic, so empty or
/// unrecognisable text is non-academic.
///
/// ```
/// use papers_client::affiliation::is_non_academic;
///
/// assert!(is_non_academic("Acme Biotech Inc"));
/// assert!(!is_non_academic("Department of Biology, Harvard University"));
/// assert!(is_non_academic(""));
/// ```
pub fn is_non_academic(affiliation: &str) -> bool {
    !contains_any(affiliation, &ACADEMIC_KEYWORDS)
}

/// Whether the affiliation text looks like a pharmaceutical or biotech company
///
/// ```
/// use papers_client::affiliation::is_pharma_company;
///
/// assert!(is_pharma_company("Novartis Pharma AG"));
/// assert!(!is_pharma_company("State University"));
/// ```
pub fn is_pharma_company(affiliation: &str) -> bool {
    contains_any(affiliation, &COMPANY_KEYWORDS)
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let lowered = text.to_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword))
}
