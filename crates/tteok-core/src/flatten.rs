use crate::card::{CardData, CardDefinition, HanjaComponent};
use crate::record::{DefinitionInfo, LexicalRecord};

/// Language-type tag marking a Chinese-character origin.
const LANG_TYPE_HANJA: &str = "한자";
/// Translation language tag for English.
const LANG_ENGLISH: &str = "영어";
/// Example type tags.
const EXAMPLE_SENTENCE: &str = "문장";
const EXAMPLE_PHRASE: &str = "구";
const EXAMPLE_CONVERSATION: &str = "대화";

/// Which variant-dependent fields the flattener fills in.
///
/// Disabled fields still appear in the output with their empty
/// defaults; templates can always look them up.
#[derive(Debug, Clone, Copy)]
pub struct FlattenOptions {
    pub part_of_speech: bool,
    pub sentence_patterns: bool,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            part_of_speech: true,
            sentence_patterns: true,
        }
    }
}

/// Flatten one lexical record into template-ready card data.
///
/// Pure and total: missing optional sections become empty defaults,
/// never errors.
pub fn flatten(record: &LexicalRecord, options: FlattenOptions) -> CardData {
    let (hanja, hanja_components) = flatten_hanja(record);
    CardData {
        word: record.word.clone(),
        part_of_speech: if options.part_of_speech {
            record.part_of_speech.clone().unwrap_or_default()
        } else {
            String::new()
        },
        hanja,
        hanja_components,
        pronunciations: flatten_pronunciations(record),
        definitions: record
            .definition_info
            .iter()
            .map(|defn| flatten_definition(defn, options))
            .collect(),
    }
}

/// Take the first origin-language entry tagged as hanja, in list
/// order. Later tagged entries are ignored, matching the service's
/// convention that the first one carries the decomposition.
fn flatten_hanja(record: &LexicalRecord) -> (String, Vec<HanjaComponent>) {
    for lang_info in &record.original_language_info {
        if lang_info.language_type != LANG_TYPE_HANJA {
            continue;
        }
        let components = lang_info
            .hanja_info
            .iter()
            .map(|info| HanjaComponent {
                character: info.hanja.clone(),
                readings: info.readings.clone(),
            })
            .collect();
        return (lang_info.original_language.clone(), components);
    }
    (String::new(), Vec::new())
}

fn flatten_pronunciations(record: &LexicalRecord) -> Vec<String> {
    record
        .pronunciation_info
        .iter()
        .map(|info| info.pronunciation.clone().unwrap_or_default())
        .collect()
}

fn flatten_definition(defn: &DefinitionInfo, options: FlattenOptions) -> CardDefinition {
    let mut card = CardDefinition {
        definition: defn.definition.clone(),
        ..CardDefinition::default()
    };

    // One translation per language should be all the service sends;
    // take the first English entry either way.
    if let Some(english) = defn.translations.iter().find(|t| t.language == LANG_ENGLISH) {
        card.translated_word = english.word.clone();
        card.translated_definition = english.definition.clone();
    }

    if options.sentence_patterns {
        card.sentence_patterns = defn
            .pattern_info
            .iter()
            .map(|info| info.pattern.clone())
            .collect();
    }

    for example in &defn.example_info {
        match example.kind.as_str() {
            EXAMPLE_SENTENCE => card.example_sentences.push(example.example.clone()),
            EXAMPLE_PHRASE => card.example_phrases.push(example.example.clone()),
            EXAMPLE_CONVERSATION => card.example_conversation.push(example.example.clone()),
            // Unrecognized type tags are dropped.
            _ => {}
        }
    }

    card
}
