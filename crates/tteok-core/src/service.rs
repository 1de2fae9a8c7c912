use crate::record::LexicalRecord;

/// Opaque code addressing one word sense in the dictionary service.
pub type RecordId = String;

/// Dictionary service operations the pipeline needs.
///
/// Implementations are expected to be strictly request/response; the
/// pipeline never issues overlapping calls.
#[async_trait::async_trait]
pub trait DictionaryService: Send + Sync {
    /// Exact-match word search. Returns the identifiers on one result
    /// page, in service order.
    async fn search_exact(
        &self,
        word: &str,
        page: usize,
        per_page: usize,
    ) -> Result<Vec<RecordId>, ServiceError>;

    /// One page of members of a subject category.
    async fn subject_category_members(
        &self,
        category: u32,
        page: usize,
        per_page: usize,
    ) -> Result<Vec<RecordId>, ServiceError>;

    /// One page of members of a meaning category.
    async fn meaning_category_members(
        &self,
        category: u32,
        page: usize,
        per_page: usize,
    ) -> Result<Vec<RecordId>, ServiceError>;

    /// Full record for one sense, with English as the translation
    /// language.
    async fn view(&self, id: &RecordId) -> Result<LexicalRecord, ServiceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Error reported by the service itself (bad key, malformed
    /// query, rate limit).
    #[error("dictionary API error {code}: {message}")]
    Api { code: String, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response shape: {0}")]
    Malformed(String),

    #[error("no record found for target code {0}")]
    NotFound(RecordId),
}
