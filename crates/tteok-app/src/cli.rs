use std::path::PathBuf;

use clap::Parser;

use crate::writer::CardNaming;

/// Generate flashcard files from the Korean Learners' Dictionary.
#[derive(Debug, Parser)]
#[command(name = "tteok")]
pub struct Cli {
    /// Words for which to generate card files.
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

    /// API key for the Korean Learners' Dictionary API
    /// (overrides KRDICT_API_KEY).
    #[arg(long)]
    pub krdict_api_key: Option<String>,

    /// Generate cards for words of a specific subject category
    /// (name or numeric code).
    #[arg(long, value_name = "CATEGORY")]
    pub subject_category: Option<String>,

    /// Generate cards for words of a specific meaning category
    /// (name or numeric code).
    #[arg(long, value_name = "CATEGORY")]
    pub meaning_category: Option<String>,

    /// File of words (one line per word) for which to generate card
    /// files.
    #[arg(long, value_name = "FILE")]
    pub words_file: Option<PathBuf>,

    /// File containing the Handlebars template for cards.
    #[arg(long, value_name = "FILE", default_value = "templates/default.md.hbs")]
    pub card_template: PathBuf,

    /// Directory to output card files.
    #[arg(long, value_name = "DIR", default_value = "cards")]
    pub cards_dir: PathBuf,

    /// Maximum result pages to fetch per query.
    #[arg(long, default_value_t = 999)]
    pub max_pages: usize,

    /// How card files are named after the headword.
    #[arg(long, value_enum, default_value_t = CardNaming::TargetCode)]
    pub naming: CardNaming,
}
