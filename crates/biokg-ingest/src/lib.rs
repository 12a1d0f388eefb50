//! BioKG Ingest Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Builds identifier mappings for the BioKG knowledge graph.
//!
//! # Supported Mappings
//!
//! - **COSMIC → UniProt**: Entrez Gene ID + gene symbol to a curated UniProtKB URI
//!
//! # Example
//!
//! ```no_run
//! use biokg_ingest::batch::{run_batch, BatchOptions};
//! use biokg_ingest::uniprot::{UniProtConfig, UniProtResolver};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let resolver = UniProtResolver::new(UniProtConfig::default())?;
//!     let summary = run_batch(&resolver, &BatchOptions::default()).await?;
//!     tracing::info!(resolved = summary.resolved, "done");
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod error;
pub mod progress;
pub mod table;
pub mod uniprot;

pub use error::{IngestError, LookupError, Result};
