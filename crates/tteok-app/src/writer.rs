use std::io;
use std::path::Path;

use clap::ValueEnum;

use tteok_core::service::RecordId;

/// How a card file is named after its headword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CardNaming {
    /// `{word}_{target_code}.md`
    TargetCode,
    /// `{word}_{n}.md`, numbering senses of the same word from 1.
    Sequence,
}

pub fn card_file_name(
    naming: CardNaming,
    word: &str,
    id: &RecordId,
    word_sequence: usize,
) -> String {
    match naming {
        CardNaming::TargetCode => format!("{word}_{id}.md"),
        CardNaming::Sequence => format!("{word}_{word_sequence}.md"),
    }
}

/// Write one rendered card. An existing file of the same name is
/// overwritten without warning.
pub async fn write_card(dir: &Path, file_name: &str, card: &str) -> io::Result<()> {
    tokio::fs::write(dir.join(file_name), card).await
}
