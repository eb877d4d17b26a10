use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub q: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub organic: Option<Vec<OrganicResult>>,
    /// Serper reports failures as `{"message": "...", "statusCode": 400}`.
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OrganicResult {
    pub snippet: Option<String>,
    pub link: Option<String>,
}

/// One ranked web result: the excerpt and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub snippet: String,
    pub url: String,
}

impl SearchResponse {
    /// Organic results in provider rank order. A response without an
    /// `organic` field yields no results.
    pub fn into_results(self) -> Vec<SearchResult> {
        self.organic
            .unwrap_or_default()
            .into_iter()
            .map(|item| SearchResult {
                snippet: item.snippet.unwrap_or_default(),
                url: item.link.unwrap_or_default(),
            })
            .collect()
    }
}
