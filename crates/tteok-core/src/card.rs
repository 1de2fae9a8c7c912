use serde::Serialize;

/// Flat, template-ready view of one lexical record.
///
/// Every field a template may reference is always present, defaulting
/// to its empty form when the source record omits it. Templates do
/// direct key lookups, so key completeness is the contract here, not
/// an optimization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardData {
    pub word: String,
    pub part_of_speech: String,
    pub hanja: String,
    pub hanja_components: Vec<HanjaComponent>,
    pub pronunciations: Vec<String>,
    pub definitions: Vec<CardDefinition>,
}

/// One character of the hanja origin with its readings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HanjaComponent {
    pub character: String,
    pub readings: Vec<String>,
}

/// One sense of the headword, flattened for the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardDefinition {
    pub definition: Option<String>,
    pub translated_word: Option<String>,
    pub translated_definition: Option<String>,
    pub sentence_patterns: Vec<String>,
    pub example_sentences: Vec<String>,
    pub example_phrases: Vec<String>,
    pub example_conversation: Vec<String>,
}

impl Default for CardDefinition {
    fn default() -> Self {
        Self {
            definition: None,
            translated_word: None,
            translated_definition: None,
            sentence_patterns: Vec::new(),
            example_sentences: Vec::new(),
            example_phrases: Vec::new(),
            example_conversation: Vec::new(),
        }
    }
}
