mod categories;
mod client;

pub use categories::{meaning_category_code, subject_category_code};
pub use client::KrdictClient;

/// Where to get an API key, surfaced whenever one is missing or
/// rejected.
pub const KEY_ISSUANCE_URL: &str = "https://krdict.korean.go.kr/openApi/openApiInfo";
