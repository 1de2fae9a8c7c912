use serde::Deserialize;

use tteok_core::record::LexicalRecord;
use tteok_core::service::{DictionaryService, RecordId, ServiceError};

const DEFAULT_BASE_URL: &str = "https://krdict.korean.go.kr/api";

/// English as the translation target, per the service's language
/// numbering.
const TRANS_LANG_ENGLISH: &str = "1";

/// Client for the Korean Learners' Dictionary open API.
///
/// Strictly request/response; the pipeline drives it one call at a
/// time.
pub struct KrdictClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl KrdictClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different endpoint, for tests against a
    /// local stand-in.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            base_url,
            api_key,
            client: reqwest::Client::new(),
        }
    }

    async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<String, ServiceError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        tracing::debug!(%url, status = %response.status(), "dictionary request");

        response
            .text()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))
    }

    async fn search(&self, params: &[(&str, &str)]) -> Result<Vec<RecordId>, ServiceError> {
        let body = self.get("search", params).await?;
        decode_search(&body)
    }
}

#[async_trait::async_trait]
impl DictionaryService for KrdictClient {
    async fn search_exact(
        &self,
        word: &str,
        page: usize,
        per_page: usize,
    ) -> Result<Vec<RecordId>, ServiceError> {
        let start = page.to_string();
        let num = per_page.to_string();
        self.search(&[
            ("q", word),
            ("method", "exact"),
            ("part", "word"),
            ("start", &start),
            ("num", &num),
            ("translated", "y"),
            ("trans_lang", TRANS_LANG_ENGLISH),
        ])
        .await
    }

    async fn subject_category_members(
        &self,
        category: u32,
        page: usize,
        per_page: usize,
    ) -> Result<Vec<RecordId>, ServiceError> {
        let cat = category.to_string();
        let start = page.to_string();
        let num = per_page.to_string();
        self.search(&[
            ("part", "word"),
            ("subject_cat", &cat),
            ("start", &start),
            ("num", &num),
        ])
        .await
    }

    async fn meaning_category_members(
        &self,
        category: u32,
        page: usize,
        per_page: usize,
    ) -> Result<Vec<RecordId>, ServiceError> {
        let cat = category.to_string();
        let start = page.to_string();
        let num = per_page.to_string();
        self.search(&[
            ("part", "word"),
            ("sense_cat", &cat),
            ("start", &start),
            ("num", &num),
        ])
        .await
    }

    async fn view(&self, id: &RecordId) -> Result<LexicalRecord, ServiceError> {
        let body = self
            .get(
                "view",
                &[
                    ("method", "target_code"),
                    ("q", id),
                    ("translated", "y"),
                    ("trans_lang", TRANS_LANG_ENGLISH),
                ],
            )
            .await?;
        decode_view(&body, id)
    }
}

// Wire shapes. The service reports errors in-band, so every body is
// tried as an error envelope first.

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    error_code: String,
    message: String,
}

#[derive(Deserialize)]
struct SearchEnvelope {
    data: SearchData,
}

#[derive(Deserialize)]
struct SearchData {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Deserialize)]
struct SearchResult {
    target_code: TargetCode,
}

/// The service is inconsistent about whether target codes are JSON
/// numbers or strings; accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum TargetCode {
    Num(u64),
    Str(String),
}

impl From<TargetCode> for RecordId {
    fn from(code: TargetCode) -> Self {
        match code {
            TargetCode::Num(n) => n.to_string(),
            TargetCode::Str(s) => s,
        }
    }
}

#[derive(Deserialize)]
struct ViewEnvelope {
    data: ViewData,
}

#[derive(Deserialize)]
struct ViewData {
    #[serde(default)]
    results: Vec<ViewResult>,
}

#[derive(Deserialize)]
struct ViewResult {
    word_info: LexicalRecord,
}

fn check_error(body: &str) -> Result<(), ServiceError> {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return Err(ServiceError::Api {
            code: envelope.error.error_code,
            message: envelope.error.message,
        });
    }
    Ok(())
}

fn decode_search(body: &str) -> Result<Vec<RecordId>, ServiceError> {
    check_error(body)?;
    let envelope: SearchEnvelope =
        serde_json::from_str(body).map_err(|e| ServiceError::Malformed(e.to_string()))?;
    Ok(envelope
        .data
        .results
        .into_iter()
        .map(|r| r.target_code.into())
        .collect())
}

fn decode_view(body: &str, id: &RecordId) -> Result<LexicalRecord, ServiceError> {
    check_error(body)?;
    let envelope: ViewEnvelope =
        serde_json::from_str(body).map_err(|e| ServiceError::Malformed(e.to_string()))?;
    envelope
        .data
        .results
        .into_iter()
        .next()
        .map(|r| r.word_info)
        .ok_or_else(|| ServiceError::NotFound(id.clone()))
}
