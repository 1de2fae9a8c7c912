use std::collections::HashMap;

use anyhow::{Context, Result};

use tteok_core::flatten::flatten;
use tteok_core::render::CardRenderer;
use tteok_core::resolve::resolve;
use tteok_core::service::DictionaryService;

use crate::config::Config;
use crate::writer::{card_file_name, write_card};

/// Run the whole pipeline: resolve identifiers, then fetch, flatten,
/// render and write one card at a time.
pub async fn run<S, R>(service: &S, renderer: &R, config: &Config) -> Result<usize>
where
    S: DictionaryService + ?Sized,
    R: CardRenderer + ?Sized,
{
    tokio::fs::create_dir_all(&config.cards_dir)
        .await
        .with_context(|| {
            format!(
                "failed to create cards directory {}",
                config.cards_dir.display()
            )
        })?;

    let ids = resolve(service, &config.selector, config.paging)
        .await
        .context("word lookup failed")?;

    println!("Generating cards for {} words", ids.len());

    // Only used for sequence naming; carries nothing else between
    // iterations.
    let mut per_word_sequence: HashMap<String, usize> = HashMap::new();

    for (i, id) in ids.iter().enumerate() {
        let record = service
            .view(id)
            .await
            .with_context(|| format!("failed to fetch record {id}"))?;

        let card = flatten(&record, config.flatten);
        let rendered = renderer
            .render(&card, &config.template)
            .with_context(|| format!("failed to render card for {} [{id}]", card.word))?;

        let sequence = per_word_sequence
            .entry(card.word.clone())
            .and_modify(|n| *n += 1)
            .or_insert(1);
        let file_name = card_file_name(config.naming, &card.word, id, *sequence);

        write_card(&config.cards_dir, &file_name, &rendered)
            .await
            .with_context(|| format!("failed to write {file_name}"))?;

        println!(
            "Card generated for {} [{id}] ({}/{})",
            card.word,
            i + 1,
            ids.len()
        );
    }

    Ok(ids.len())
}
