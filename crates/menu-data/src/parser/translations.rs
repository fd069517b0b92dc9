use tracing::warn;

use super::tsv::{content_lines, split_line};
use crate::models::{Language, TranslationTable};

/// Parse the wide UI-text sheet: first column is the text key, each further
/// column is one language named by its header code (KA, EN, RU).
///
/// Unknown language columns are ignored. Cells a short row did not reach are
/// left out, so lookups for them echo the key.
pub fn parse_translations(tsv: &str) -> TranslationTable {
    let mut table = TranslationTable::new();
    let mut lines = content_lines(tsv);

    let header = match lines.next() {
        Some(line) => split_line(line),
        None => return table,
    };

    let columns: Vec<Option<Language>> = header
        .iter()
        .skip(1)
        .map(|code| match code.parse::<Language>() {
            Ok(lang) => Some(lang),
            Err(e) => {
                warn!("Ignoring UI text column: {}", e);
                None
            }
        })
        .collect();

    for line in lines {
        let cells = split_line(line);
        let key = match cells.first() {
            Some(key) if !key.is_empty() => key,
            _ => continue,
        };

        for (index, lang) in columns.iter().enumerate() {
            let (Some(lang), Some(value)) = (lang, cells.get(index + 1)) else {
                continue;
            };
            table.insert(*lang, key.clone(), value.clone());
        }
    }

    table
}

/// Supported languages named in the header row, in column order
pub fn header_languages(tsv: &str) -> Vec<Language> {
    content_lines(tsv)
        .next()
        .map(|line| {
            split_line(line)
                .iter()
                .skip(1)
                .filter_map(|code| code.parse::<Language>().ok())
                .collect()
        })
        .unwrap_or_default()
}
