//! Shared helpers for biokg-ingest integration tests

#![allow(dead_code)]

use biokg_ingest::uniprot::UniProtConfig;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

pub const URI_PREFIX: &str = "http://purl.uniprot.org/uniprot/";
pub const QUERY_PATH: &str = "/uniprot/";

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("Failed to read fixture")
}

pub fn api_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), QUERY_PATH)
}

pub fn test_config(server: &MockServer) -> UniProtConfig {
    UniProtConfig::new()
        .with_api_url(api_url(server))
        .with_uri_prefix(URI_PREFIX)
        .with_timeout(5)
}

/// Mount a response for one human gene lookup
pub async fn mount_lookup(
    server: &MockServer,
    gene_id: &str,
    gene_symbol: &str,
    response: ResponseTemplate,
) {
    Mock::given(method("GET"))
        .and(path(QUERY_PATH))
        .and(query_param(
            "query",
            format!("GENEID:{} AND {} AND taxonomy:9606", gene_id, gene_symbol),
        ))
        .and(query_param("format", "xml"))
        .respond_with(response)
        .mount(server)
        .await;
}

pub fn xml_response(body: impl Into<String>) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/xml")
        .set_body_string(body.into())
}

/// Collects formatted log lines emitted on the current thread
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Route this thread's events into a fresh capture until the guard drops
    pub fn install() -> (Self, DefaultGuard) {
        let capture = Self::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (capture, guard)
    }

    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .expect("log buffer poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
