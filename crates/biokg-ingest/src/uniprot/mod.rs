//! UniProt identifier mapping
//!
//! Resolves an Entrez Gene ID and gene symbol to the curated (Swiss-Prot)
//! UniProtKB entry with the highest version.
//!
//! # Example
//!
//! ```no_run
//! use biokg_ingest::uniprot::{UniProtConfig, UniProtResolver};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let resolver = UniProtResolver::new(UniProtConfig::default())?;
//!     let mapping = resolver.resolve_one("7157", "TP53").await;
//!     println!("{:?}", mapping.protein_id);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod models;
pub mod parser;
pub mod query;
pub mod resolver;

pub use config::UniProtConfig;
pub use models::{CandidateEntry, InputRecord, MappingStatus, ResolvedMapping};
pub use resolver::UniProtResolver;
