//! UniProt resolver configuration

use crate::error::{IngestError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// UniProt Resolver Constants
// ============================================================================

/// UniProt query endpoint answering `query` + `format=xml`.
pub const DEFAULT_API_URL: &str = "https://www.uniprot.org/uniprot/";

/// Prefix turning an accession into a protein URI.
pub const DEFAULT_URI_PREFIX: &str = "http://www.uniprot.org/uniprot/";

/// NCBI taxonomy id for Homo sapiens (http://purl.uniprot.org/core/taxonomy/9606).
pub const HUMAN_TAXON: u32 = 9606;

/// Dataset tag of the manually reviewed UniProtKB section.
pub const SWISS_PROT_DATASET: &str = "Swiss-Prot";

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the UniProt resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniProtConfig {
    /// Query endpoint
    pub api_url: String,
    /// Prefix prepended to the selected accession
    pub uri_prefix: String,
    /// Taxonomy filter added to every query
    pub taxonomy_id: u32,
    /// Dataset tag that marks an entry as curated
    pub curated_dataset: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for UniProtConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            uri_prefix: DEFAULT_URI_PREFIX.to_string(),
            taxonomy_id: HUMAN_TAXON,
            curated_dataset: SWISS_PROT_DATASET.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl UniProtConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_uri_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.uri_prefix = prefix.into();
        self
    }

    pub fn with_taxonomy(mut self, taxonomy_id: u32) -> Self {
        self.taxonomy_id = taxonomy_id;
        self
    }

    pub fn with_curated_dataset(mut self, dataset: impl Into<String>) -> Self {
        self.curated_dataset = dataset.into();
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Build the protein URI for an accession
    pub fn protein_uri(&self, accession: &str) -> String {
        format!("{}{}", self.uri_prefix, accession)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(IngestError::config("UniProt API URL cannot be empty"));
        }

        if self.uri_prefix.is_empty() {
            return Err(IngestError::config("UniProt URI prefix cannot be empty"));
        }

        if self.curated_dataset.trim().is_empty() {
            return Err(IngestError::config("Curated dataset tag cannot be empty"));
        }

        if self.taxonomy_id == 0 {
            return Err(IngestError::config("Taxonomy id must be greater than 0"));
        }

        if self.timeout_secs == 0 {
            return Err(IngestError::config("Request timeout must be greater than 0 seconds"));
        }

        Ok(())
    }
}
