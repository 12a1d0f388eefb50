//! BioKG Ingest - identifier mapping tool

use anyhow::Result;
use biokg_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use biokg_ingest::batch::{run_batch, BatchOptions, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use biokg_ingest::table::{OutputFormat, DEFAULT_UNRESOLVED_SENTINEL};
use biokg_ingest::uniprot::config::{
    UniProtConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_URI_PREFIX, HUMAN_TAXON,
    SWISS_PROT_DATASET,
};
use biokg_ingest::uniprot::UniProtResolver;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "biokg-ingest")]
#[command(author, version, about = "BioKG identifier mapping tool")]
struct Cli {
    /// Mapping to build
    #[command(subcommand)]
    mapping: Mapping,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Mapping {
    /// Map COSMIC genes (Entrez Gene ID + symbol) to UniProt
    CosmicUniprot {
        /// Input gene table with 'Entrez GeneId' and 'Gene Symbol' columns
        #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
        input: PathBuf,

        /// Output mapping table
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// UniProt query endpoint
        #[arg(long, env = "UNIPROT_API_URL", default_value = DEFAULT_API_URL)]
        api_url: String,

        /// Prefix for the emitted protein URIs
        #[arg(long, env = "UNIPROT_URI_PREFIX", default_value = DEFAULT_URI_PREFIX)]
        uri_prefix: String,

        /// NCBI taxonomy id to restrict the lookup to
        #[arg(long, env = "UNIPROT_TAXONOMY_ID", default_value_t = HUMAN_TAXON)]
        taxonomy: u32,

        /// Dataset tag of curated entries
        #[arg(long, default_value = SWISS_PROT_DATASET)]
        curated_dataset: String,

        /// Per-request timeout in seconds
        #[arg(long, env = "UNIPROT_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,

        /// Value written for genes without a curated entry
        #[arg(long, default_value = DEFAULT_UNRESOLVED_SENTINEL)]
        sentinel: String,

        /// Omit the UniProtVersion column
        #[arg(long)]
        no_version_column: bool,

        /// Show a progress bar
        #[arg(long)]
        progress: bool,
    },
}

const LOG_DIR: &str = "log";
const LOG_FILE_PREFIX: &str = "cosmic_uniprot_map";

/// Logging before `LOG_*` overrides: stdout plus a daily file under `./log`
fn base_log_config(verbose: bool) -> LogConfig {
    let log_level = if verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };

    LogConfig::builder()
        .level(log_level)
        .output(LogOutput::Both)
        .log_dir(LOG_DIR)
        .log_file_prefix(LOG_FILE_PREFIX)
        .build()
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_config = base_log_config(cli.verbose).with_env_overrides()?;

    let _log_guard = init_logging(&log_config)?;

    match cli.mapping {
        Mapping::CosmicUniprot {
            input,
            output,
            api_url,
            uri_prefix,
            taxonomy,
            curated_dataset,
            timeout_secs,
            sentinel,
            no_version_column,
            progress,
        } => {
            let config = UniProtConfig::new()
                .with_api_url(api_url)
                .with_uri_prefix(uri_prefix)
                .with_taxonomy(taxonomy)
                .with_curated_dataset(curated_dataset)
                .with_timeout(timeout_secs);
            let resolver = UniProtResolver::new(config)?;

            let options = BatchOptions {
                input,
                output,
                format: OutputFormat {
                    include_version: !no_version_column,
                    unresolved_sentinel: sentinel,
                },
                show_progress: progress,
            };

            info!("Mapping COSMIC genes to UniProt");
            let summary = run_batch(&resolver, &options).await?;
            info!(
                resolved = summary.resolved,
                unresolved = summary.unresolved(),
                "Mapping complete"
            );
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_logs_go_to_console_and_file_by_default() {
        let config = base_log_config(false);
        assert_eq!(config.output, LogOutput::Both);
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.log_dir, Path::new("log"));
        assert_eq!(config.log_file_prefix, "cosmic_uniprot_map");
    }

    #[test]
    fn test_verbose_enables_debug() {
        assert_eq!(base_log_config(true).level, LogLevel::Debug);
    }
}
