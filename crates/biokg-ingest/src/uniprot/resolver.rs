//! Gene to UniProt resolution

use crate::error::Result;
use crate::uniprot::client::UniProtClient;
use crate::uniprot::config::UniProtConfig;
use crate::uniprot::models::{MappingStatus, ResolvedMapping};
use crate::uniprot::parser::{parse_response, select_curated};
use crate::uniprot::query::LookupQuery;
use tracing::{debug, info, instrument, warn};

/// Resolves genes to their curated UniProt entry
pub struct UniProtResolver {
    client: UniProtClient,
    config: UniProtConfig,
}

impl UniProtResolver {
    pub fn new(config: UniProtConfig) -> Result<Self> {
        config.validate()?;
        let client = UniProtClient::new(&config)?;
        Ok(Self { client, config })
    }

    /// Resolve one gene to at most one protein URI
    ///
    /// Never fails: request, parse and extraction problems come back as an
    /// unresolved mapping with the matching [`MappingStatus`].
    #[instrument(skip(self))]
    pub async fn resolve_one(&self, gene_id: &str, gene_symbol: &str) -> ResolvedMapping {
        let gene_id = gene_id.trim();
        let gene_symbol = gene_symbol.trim();

        if gene_id.is_empty() || gene_symbol.is_empty() {
            warn!("Skipping record without gene id or gene symbol");
            return ResolvedMapping::unresolved(gene_id, MappingStatus::InvalidInput);
        }

        let query = LookupQuery::new(gene_id, gene_symbol, self.config.taxonomy_id);

        let body = match self.client.fetch(&query).await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "FAILED GET request for Entrez ID {} ({})", gene_id, gene_symbol);
                return ResolvedMapping::unresolved(gene_id, MappingStatus::RequestFailed);
            },
        };

        let parsed = match parse_response(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "XML loading failed for Entrez ID {} ({})", gene_id, gene_symbol);
                return ResolvedMapping::unresolved(gene_id, MappingStatus::ParseFailed);
            },
        };

        for rejection in &parsed.rejected {
            debug!(reason = %rejection, "Skipping UniProt entry");
        }

        match select_curated(&parsed.candidates, &self.config.curated_dataset) {
            Some(entry) => {
                let protein_id = self.config.protein_uri(entry.primary_accession());
                info!(
                    protein_id = %protein_id,
                    version = entry.version,
                    "Entrez ID {} mapped to UniProt",
                    gene_id
                );
                ResolvedMapping::resolved(gene_id, protein_id, entry.version)
            },
            None => {
                warn!(
                    candidates = parsed.candidates.len(),
                    "FAILED UniProt ID extraction for Entrez ID {}", gene_id
                );
                ResolvedMapping::unresolved(gene_id, MappingStatus::NotFound)
            },
        }
    }
}
