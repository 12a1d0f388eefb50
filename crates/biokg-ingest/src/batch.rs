//! Batch driver: gene table in, mapping table out

use crate::error::{IngestError, Result};
use crate::progress::record_progress;
use crate::table::{self, OutputFormat};
use crate::uniprot::models::{MappingStatus, ResolvedMapping};
use crate::uniprot::resolver::UniProtResolver;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

pub const DEFAULT_INPUT_PATH: &str = "data/cosmic.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "data/cosmic_uniprot_ids.csv";

/// Options for one batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub show_progress: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            format: OutputFormat::default(),
            show_progress: false,
        }
    }
}

/// Per-status counts for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub resolved: usize,
    pub not_found: usize,
    pub request_failed: usize,
    pub parse_failed: usize,
    pub invalid_input: usize,
}

impl BatchSummary {
    fn record(&mut self, status: MappingStatus) {
        self.total += 1;
        match status {
            MappingStatus::Resolved => self.resolved += 1,
            MappingStatus::NotFound => self.not_found += 1,
            MappingStatus::RequestFailed => self.request_failed += 1,
            MappingStatus::ParseFailed => self.parse_failed += 1,
            MappingStatus::InvalidInput => self.invalid_input += 1,
        }
    }

    pub fn unresolved(&self) -> usize {
        self.total - self.resolved
    }
}

/// Resolve every input record in order and write the mapping table
///
/// Only a missing or unusable input table fails the run; every record
/// produces exactly one output row.
pub async fn run_batch(resolver: &UniProtResolver, options: &BatchOptions) -> Result<BatchSummary> {
    if !options.input.is_file() {
        error!(path = %options.input.display(), "Input data file not found");
        return Err(IngestError::MissingInput(options.input.clone()));
    }

    let records = table::read_records(&options.input)?;
    info!(
        input = %options.input.display(),
        records = records.len(),
        "Loaded gene records"
    );

    let pb = record_progress(records.len() as u64, options.show_progress);
    let mut mappings: Vec<ResolvedMapping> = Vec::with_capacity(records.len());
    let mut summary = BatchSummary::default();

    for record in &records {
        let mapping = resolver
            .resolve_one(&record.gene_id, &record.gene_symbol)
            .await;
        summary.record(mapping.status);
        mappings.push(mapping);
        pb.inc(1);
    }
    pb.finish_and_clear();

    table::write_mappings(&options.output, &mappings, &options.format)?;

    info!(
        output = %options.output.display(),
        total = summary.total,
        resolved = summary.resolved,
        not_found = summary.not_found,
        request_failed = summary.request_failed,
        parse_failed = summary.parse_failed,
        invalid_input = summary.invalid_input,
        "Mapping table written"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_by_status() {
        let mut summary = BatchSummary::default();
        for status in [
            MappingStatus::Resolved,
            MappingStatus::NotFound,
            MappingStatus::RequestFailed,
            MappingStatus::Resolved,
            MappingStatus::InvalidInput,
        ] {
            summary.record(status);
        }

        assert_eq!(summary.total, 5);
        assert_eq!(summary.resolved, 2);
        assert_eq!(summary.unresolved(), 3);
        assert_eq!(summary.parse_failed, 0);
    }
}
