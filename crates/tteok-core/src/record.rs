use serde::Deserialize;

/// One word sense as returned by a dictionary view request.
///
/// The service nominally guarantees all keys when asked to, but in
/// practice optional sections still go missing, so every section here
/// deserializes to its empty form when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct LexicalRecord {
    pub word: String,
    #[serde(default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub original_language_info: Vec<OriginalLanguageInfo>,
    #[serde(default)]
    pub pronunciation_info: Vec<PronunciationInfo>,
    #[serde(default)]
    pub definition_info: Vec<DefinitionInfo>,
}

/// Origin-language decomposition of the headword. Entries tagged
/// `한자` carry the Chinese-character origin.
#[derive(Debug, Clone, Deserialize)]
pub struct OriginalLanguageInfo {
    pub language_type: String,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub hanja_info: Vec<HanjaInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HanjaInfo {
    pub hanja: String,
    #[serde(default)]
    pub readings: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PronunciationInfo {
    #[serde(default)]
    pub pronunciation: Option<String>,
}

/// One sense definition with its translations, patterns and examples.
#[derive(Debug, Clone, Deserialize)]
pub struct DefinitionInfo {
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub translations: Vec<TranslationInfo>,
    #[serde(default)]
    pub pattern_info: Vec<PatternInfo>,
    #[serde(default)]
    pub example_info: Vec<ExampleInfo>,
}

/// Translation of one sense into one target language. The language
/// tag is the service's own label, e.g. `영어` for English.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationInfo {
    pub language: String,
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub definition: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatternInfo {
    pub pattern: String,
}

/// One example usage, tagged `문장` (sentence), `구` (phrase) or
/// `대화` (conversation).
#[derive(Debug, Clone, Deserialize)]
pub struct ExampleInfo {
    #[serde(rename = "type")]
    pub kind: String,
    pub example: String,
}
