use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use tteok_core::flatten::FlattenOptions;
use tteok_core::resolve::{PagingPolicy, Selector};
use tteok_krdict::{KEY_ISSUANCE_URL, meaning_category_code, subject_category_code};

use crate::cli::Cli;
use crate::writer::CardNaming;

/// Everything the pipeline needs, resolved once at startup.
#[derive(Debug)]
pub struct Config {
    pub api_key: String,
    pub selector: Selector,
    pub template: String,
    pub cards_dir: PathBuf,
    pub paging: PagingPolicy,
    pub naming: CardNaming,
    pub flatten: FlattenOptions,
}

impl Config {
    /// Resolve CLI arguments and the environment into a config.
    ///
    /// The API key comes from the flag first, then KRDICT_API_KEY;
    /// neither set is a fatal pre-flight error. Category flags take
    /// precedence over positional words, subject before meaning; a
    /// words file replaces positional words.
    pub fn resolve(cli: Cli) -> Result<Self> {
        let api_key = match cli.krdict_api_key.or_else(|| env::var("KRDICT_API_KEY").ok()) {
            Some(key) if !key.is_empty() => key,
            _ => bail!(
                "An API key for the Korean Learners' Dictionary should be set with \
                 KRDICT_API_KEY or --krdict-api-key. You can obtain one with an \
                 account from {KEY_ISSUANCE_URL}."
            ),
        };

        let selector = if let Some(name) = &cli.subject_category {
            let code = subject_category_code(name)
                .with_context(|| format!("unknown subject category: {name}"))?;
            Selector::SubjectCategory(code)
        } else if let Some(name) = &cli.meaning_category {
            let code = meaning_category_code(name)
                .with_context(|| format!("unknown meaning category: {name}"))?;
            Selector::MeaningCategory(code)
        } else {
            let words = match &cli.words_file {
                Some(path) => fs::read_to_string(path)
                    .with_context(|| format!("failed to read words file {}", path.display()))?
                    .lines()
                    .map(str::to_string)
                    .collect(),
                None => cli.words,
            };
            Selector::Words(words)
        };

        let template = fs::read_to_string(&cli.card_template).with_context(|| {
            format!(
                "failed to read card template {}",
                cli.card_template.display()
            )
        })?;

        Ok(Self {
            api_key,
            selector,
            template,
            cards_dir: cli.cards_dir,
            paging: PagingPolicy {
                per_page: 100,
                max_pages: cli.max_pages,
            },
            naming: cli.naming,
            flatten: FlattenOptions::default(),
        })
    }
}
