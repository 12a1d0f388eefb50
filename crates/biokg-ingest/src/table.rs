//! Tabular input and output
//!
//! Input is a COSMIC-style gene table; only the `Entrez GeneId` and
//! `Gene Symbol` columns are read. Output has one row per input record.

use crate::error::{IngestError, Result};
use crate::uniprot::models::{InputRecord, ResolvedMapping};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const GENE_ID_COLUMN: &str = "Entrez GeneId";
pub const GENE_SYMBOL_COLUMN: &str = "Gene Symbol";

pub const OUTPUT_GENE_ID_COLUMN: &str = "EntrezGeneId";
pub const OUTPUT_PROTEIN_ID_COLUMN: &str = "UniProtID";
pub const OUTPUT_VERSION_COLUMN: &str = "UniProtVersion";

/// Written in place of a protein id for unresolved rows.
pub const DEFAULT_UNRESOLVED_SENTINEL: &str = "NOTFOUND";

/// Output table layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFormat {
    /// Emit the `UniProtVersion` column
    pub include_version: bool,
    pub unresolved_sentinel: String,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self {
            include_version: true,
            unresolved_sentinel: DEFAULT_UNRESOLVED_SENTINEL.to_string(),
        }
    }
}

impl OutputFormat {
    fn header(&self) -> Vec<&'static str> {
        let mut header = vec![OUTPUT_GENE_ID_COLUMN, OUTPUT_PROTEIN_ID_COLUMN];
        if self.include_version {
            header.push(OUTPUT_VERSION_COLUMN);
        }
        header
    }

    fn row(&self, mapping: &ResolvedMapping) -> Vec<String> {
        let protein_id = mapping
            .protein_id
            .clone()
            .unwrap_or_else(|| self.unresolved_sentinel.clone());

        let mut row = vec![mapping.gene_id.clone(), protein_id];
        if self.include_version {
            row.push(mapping.version.to_string());
        }
        row
    }
}

/// Read all gene records in file order
pub fn read_records(path: &Path) -> Result<Vec<InputRecord>> {
    if !path.is_file() {
        return Err(IngestError::MissingInput(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.headers()?.clone();

    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| {
                IngestError::invalid_input(format!(
                    "{} is missing required column '{}'",
                    path.display(),
                    name
                ))
            })
    };
    let gene_id_idx = column(GENE_ID_COLUMN)?;
    let gene_symbol_idx = column(GENE_SYMBOL_COLUMN)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let field = |idx: usize| row.get(idx).unwrap_or_default().trim();
        records.push(InputRecord::new(
            normalize_gene_id(field(gene_id_idx)),
            field(gene_symbol_idx),
        ));
    }

    Ok(records)
}

/// Drop a zero fraction from numeric ids ("7157.0" -> "7157")
fn normalize_gene_id(raw: &str) -> String {
    match raw.split_once('.') {
        Some((int, frac))
            if !int.is_empty()
                && int.bytes().all(|b| b.is_ascii_digit())
                && !frac.is_empty()
                && frac.bytes().all(|b| b == b'0') =>
        {
            int.to_string()
        },
        _ => raw.to_string(),
    }
}

/// Write mappings, creating parent directories as needed
pub fn write_mappings(path: &Path, mappings: &[ResolvedMapping], format: &OutputFormat) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(format.header())?;
    for mapping in mappings {
        writer.write_record(format.row(mapping))?;
    }
    writer.flush()?;

    Ok(())
}
