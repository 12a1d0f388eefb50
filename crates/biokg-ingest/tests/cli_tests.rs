//! Tests for the biokg-ingest binary

mod common;

use assert_cmd::Command;
use common::{api_url, fixture, fixture_path, mount_lookup, xml_response};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use wiremock::{MockServer, ResponseTemplate};

/// Variables the binary reads from the environment (or a `.env` file)
const ENV_VARS: &[&str] = &[
    "UNIPROT_API_URL",
    "UNIPROT_URI_PREFIX",
    "UNIPROT_TAXONOMY_ID",
    "UNIPROT_TIMEOUT_SECS",
    "LOG_LEVEL",
    "LOG_OUTPUT",
    "LOG_FORMAT",
    "LOG_DIR",
    "LOG_FILE_PREFIX",
    "LOG_FILTER",
    "RUST_LOG",
];

/// Binary with a clean environment, logging to the console only
fn biokg_ingest() -> Command {
    let mut cmd = bare_biokg_ingest();
    cmd.env("LOG_OUTPUT", "console");
    cmd
}

fn bare_biokg_ingest() -> Command {
    let mut cmd = Command::cargo_bin("biokg-ingest").unwrap();
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_missing_input_exits_with_error() {
    let dir = TempDir::new().unwrap();

    biokg_ingest()
        .arg("cosmic-uniprot")
        .arg("--input")
        .arg(dir.path().join("cosmic.csv"))
        .arg("--output")
        .arg(dir.path().join("out.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));

    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn test_default_logging_writes_log_file() {
    let dir = TempDir::new().unwrap();
    let log_dir = dir.path().join("log");

    bare_biokg_ingest()
        .env("LOG_DIR", &log_dir)
        .arg("cosmic-uniprot")
        .arg("--input")
        .arg(dir.path().join("cosmic.csv"))
        .arg("--output")
        .arg(dir.path().join("out.csv"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Input data file not found"));

    let log_files: Vec<_> = fs::read_dir(&log_dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("cosmic_uniprot_map"))
        })
        .collect();

    assert_eq!(log_files.len(), 1);
    let contents = fs::read_to_string(&log_files[0]).unwrap();
    assert!(contents.contains("Input data file not found"));
}

#[tokio::test]
async fn test_cosmic_uniprot_run() {
    let server = MockServer::start().await;
    mount_lookup(&server, "7157", "TP53", xml_response(fixture("uniprot_tp53.xml"))).await;
    mount_lookup(&server, "672", "BRCA1", xml_response(fixture("uniprot_brca1_mixed.xml"))).await;
    mount_lookup(&server, "3845", "KRAS", ResponseTemplate::new(503)).await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("cosmic_uniprot_ids.csv");

    biokg_ingest()
        .arg("cosmic-uniprot")
        .arg("-i")
        .arg(fixture_path("cosmic_sample.csv"))
        .arg("-o")
        .arg(&output)
        .arg("--api-url")
        .arg(api_url(&server))
        .assert()
        .success()
        .stdout(predicate::str::contains("Mapping complete"));

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "EntrezGeneId,UniProtID,UniProtVersion\n\
         7157,http://www.uniprot.org/uniprot/P04637,5\n\
         672,http://www.uniprot.org/uniprot/P38398-2,7\n\
         3845,NOTFOUND,0\n"
    );
}

#[test]
fn test_help_lists_subcommand() {
    biokg_ingest()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cosmic-uniprot"));
}
