//! UniProt query construction

use std::fmt;

/// Conjunctive lookup for one gene in one organism
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery<'a> {
    pub gene_id: &'a str,
    pub gene_symbol: &'a str,
    pub taxonomy_id: u32,
}

impl<'a> LookupQuery<'a> {
    pub fn new(gene_id: &'a str, gene_symbol: &'a str, taxonomy_id: u32) -> Self {
        Self {
            gene_id,
            gene_symbol,
            taxonomy_id,
        }
    }

    /// Request parameters; values are URL-encoded by the HTTP client.
    pub fn params(&self) -> [(&'static str, String); 2] {
        [("query", self.to_string()), ("format", "xml".to_string())]
    }
}

impl fmt::Display for LookupQuery<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GENEID:{} AND {} AND taxonomy:{}",
            self.gene_id, self.gene_symbol, self.taxonomy_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string() {
        let query = LookupQuery::new("7157", "TP53", 9606);
        assert_eq!(query.to_string(), "GENEID:7157 AND TP53 AND taxonomy:9606");
    }

    #[test]
    fn test_params_request_xml() {
        let query = LookupQuery::new("672", "BRCA1", 10090);
        let params = query.params();
        assert_eq!(params[0].0, "query");
        assert_eq!(params[0].1, "GENEID:672 AND BRCA1 AND taxonomy:10090");
        assert_eq!(params[1], ("format", "xml".to_string()));
    }
}
