//! Gene-to-protein mapping models

use serde::{Deserialize, Serialize};

/// One row of the input gene table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    /// Entrez Gene ID (e.g., "7157")
    pub gene_id: String,
    /// HGNC gene symbol (e.g., "TP53")
    pub gene_symbol: String,
}

impl InputRecord {
    pub fn new(gene_id: impl Into<String>, gene_symbol: impl Into<String>) -> Self {
        Self {
            gene_id: gene_id.into(),
            gene_symbol: gene_symbol.into(),
        }
    }
}

/// A UniProt entry returned for a query, already validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEntry {
    /// Accessions in document order; the first is the primary accession
    pub accessions: Vec<String>,
    /// Dataset the entry belongs to ("Swiss-Prot" or "TrEMBL")
    pub dataset: String,
    /// Entry version
    pub version: u32,
}

impl CandidateEntry {
    /// Primary accession. Validation guarantees at least one accession.
    pub fn primary_accession(&self) -> &str {
        self.accessions.first().map(String::as_str).unwrap_or_default()
    }
}

/// How a record's lookup ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingStatus {
    /// A curated entry was selected
    Resolved,
    /// The service answered but no curated entry was usable
    NotFound,
    /// Non-success status or no response at all
    RequestFailed,
    /// The response body did not parse
    ParseFailed,
    /// The record lacked a gene id or symbol, so no request was made
    InvalidInput,
}

/// Output row: one per input record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedMapping {
    pub gene_id: String,
    /// Full protein URI; `None` when unresolved
    pub protein_id: Option<String>,
    /// Version of the selected entry; 0 when unresolved
    pub version: u32,
    pub status: MappingStatus,
}

impl ResolvedMapping {
    pub fn resolved(gene_id: impl Into<String>, protein_id: String, version: u32) -> Self {
        Self {
            gene_id: gene_id.into(),
            protein_id: Some(protein_id),
            version,
            status: MappingStatus::Resolved,
        }
    }

    pub fn unresolved(gene_id: impl Into<String>, status: MappingStatus) -> Self {
        Self {
            gene_id: gene_id.into(),
            protein_id: None,
            version: 0,
            status,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.protein_id.is_some()
    }
}
