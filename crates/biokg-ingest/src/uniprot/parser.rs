//! UniProt XML response parsing and curated entry selection
//!
//! A query answer is a `<uniprot>` document holding zero or more `<entry>`
//! elements:
//!
//! ```xml
//! <uniprot xmlns="http://uniprot.org/uniprot">
//!   <entry dataset="Swiss-Prot" created="1987-08-13" modified="2024-01-24" version="283">
//!     <accession>P04637</accession>
//!     <accession>Q15086</accession>
//!     <name>P53_HUMAN</name>
//!     ...
//!   </entry>
//! </uniprot>
//! ```
//!
//! Only the `dataset` and `version` attributes and the `<accession>` children
//! are read; everything else in an entry is skipped. Each `<entry>` is decoded
//! on its own, so one entry with an unexpected shape is rejected without
//! losing its neighbours.

use crate::error::LookupError;
use crate::uniprot::models::CandidateEntry;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;
use std::fmt;

const ENTRY_TAG: &[u8] = b"entry";

/// Entry as it appears on the wire, before validation
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(rename = "@dataset", default)]
    dataset: Option<String>,
    #[serde(rename = "@version", default)]
    version: Option<String>,
    #[serde(rename = "accession", default)]
    accessions: Vec<String>,
}

/// Reason an entry was left out of selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryRejection {
    /// The entry element could not be decoded
    Malformed(String),
    MissingDataset,
    MissingVersion,
    InvalidVersion(String),
    NoAccession,
}

impl fmt::Display for EntryRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryRejection::Malformed(reason) => write!(f, "entry is malformed: {}", reason),
            EntryRejection::MissingDataset => write!(f, "entry has no dataset attribute"),
            EntryRejection::MissingVersion => write!(f, "entry has no version attribute"),
            EntryRejection::InvalidVersion(raw) => write!(f, "entry version '{}' is not a number", raw),
            EntryRejection::NoAccession => write!(f, "entry has no accession"),
        }
    }
}

/// Every entry of one response, validated in document order
#[derive(Debug, Default)]
pub struct ParsedResponse {
    pub candidates: Vec<CandidateEntry>,
    pub rejected: Vec<EntryRejection>,
}

/// Parse a response body into candidate entries
///
/// A blank body means the query matched nothing. A body that is not
/// well-formed XML is a [`LookupError::Parse`].
pub fn parse_response(body: &str) -> Result<ParsedResponse, LookupError> {
    if body.trim().is_empty() {
        return Ok(ParsedResponse::default());
    }

    let mut parsed = ParsedResponse::default();
    for fragment in entry_fragments(body)? {
        match decode_entry(fragment).and_then(validate_entry) {
            Ok(candidate) => parsed.candidates.push(candidate),
            Err(rejection) => parsed.rejected.push(rejection),
        }
    }

    Ok(parsed)
}

/// Raw text of each `<entry>` directly below the document root
fn entry_fragments(body: &str) -> Result<Vec<&str>, LookupError> {
    let mut reader = Reader::from_str(body);
    let mut fragments = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;
    let mut entry_start = None;

    loop {
        let offset = reader.buffer_position() as usize;
        let event = reader
            .read_event()
            .map_err(|e| LookupError::Parse(format!("{} (near byte {})", e, offset)))?;

        match event {
            Event::Start(e) => {
                seen_root = true;
                if depth == 1 && e.local_name().as_ref() == ENTRY_TAG {
                    entry_start = Some(offset);
                }
                depth += 1;
            },
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 1 {
                    if let Some(start) = entry_start.take() {
                        let end = reader.buffer_position() as usize;
                        fragments.push(fragment(body, start, end)?);
                    }
                }
            },
            Event::Empty(e) => {
                seen_root = true;
                if depth == 1 && e.local_name().as_ref() == ENTRY_TAG {
                    let end = reader.buffer_position() as usize;
                    fragments.push(fragment(body, offset, end)?);
                }
            },
            Event::Eof => break,
            _ => {},
        }
    }

    if depth != 0 {
        return Err(LookupError::Parse(format!(
            "document ends with {} unclosed element(s)",
            depth
        )));
    }

    if !seen_root {
        return Err(LookupError::Parse("document has no root element".to_string()));
    }

    Ok(fragments)
}

fn fragment(body: &str, start: usize, end: usize) -> Result<&str, LookupError> {
    body.get(start..end)
        .ok_or_else(|| LookupError::Parse(format!("entry span {}..{} is out of range", start, end)))
}

fn decode_entry(fragment: &str) -> Result<RawEntry, EntryRejection> {
    quick_xml::de::from_str(fragment).map_err(|e| EntryRejection::Malformed(e.to_string()))
}

fn validate_entry(raw: RawEntry) -> Result<CandidateEntry, EntryRejection> {
    let dataset = raw
        .dataset
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .ok_or(EntryRejection::MissingDataset)?;

    let raw_version = raw.version.ok_or(EntryRejection::MissingVersion)?;
    let version = raw_version
        .trim()
        .parse::<u32>()
        .map_err(|_| EntryRejection::InvalidVersion(raw_version.clone()))?;

    let accessions: Vec<String> = raw
        .accessions
        .into_iter()
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .collect();

    if accessions.is_empty() {
        return Err(EntryRejection::NoAccession);
    }

    Ok(CandidateEntry {
        accessions,
        dataset,
        version,
    })
}

/// Pick the curated entry with the highest version
///
/// Entries from other datasets never qualify. On equal versions the entry
/// seen first is kept.
pub fn select_curated<'a>(
    candidates: &'a [CandidateEntry],
    curated_dataset: &str,
) -> Option<&'a CandidateEntry> {
    let mut best: Option<&CandidateEntry> = None;

    for candidate in candidates.iter().filter(|c| c.dataset == curated_dataset) {
        if best.is_none_or(|current| candidate.version > current.version) {
            best = Some(candidate);
        }
    }

    best
}
