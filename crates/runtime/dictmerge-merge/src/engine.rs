//! Set union over providers

use crate::Result;
use dictmerge_core::{Word, WordSet};
use dictmerge_provider::DictionaryProvider;
use tracing::info;

/// Sorted, deduplicated union of every provider's words.
///
/// Words compare by exact value; the result is in ascending byte order.
pub fn merge(providers: &[DictionaryProvider]) -> Vec<Word> {
    let merged = providers
        .iter()
        .fold(WordSet::new(), |mut merged, dictionary| {
            let words: WordSet = dictionary.read().iter().cloned().collect();
            info!(
                "Size of appended dictionary [{}] is {} words",
                dictionary.name(),
                words.len()
            );
            merged.extend(words);
            merged
        });

    let mut sorted: Vec<Word> = merged.into_iter().collect();
    sorted.sort_unstable();
    sorted
}

/// Write `words` to every provider; read-only ones skip silently.
/// Stops at the first failure.
pub fn write_all(providers: &mut [DictionaryProvider], words: &[Word]) -> Result<()> {
    for dictionary in providers.iter_mut() {
        info!("Write merged dictionary to {}", dictionary.name());
        dictionary.write(words)?;
    }
    Ok(())
}
