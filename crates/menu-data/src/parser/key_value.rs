use std::collections::BTreeMap;

use super::tsv::{content_lines, split_line};

/// Parse a two-column (key, value) sheet into a flat map.
///
/// The header row is skipped, rows with an empty key are ignored, and a row
/// without a value cell maps to an empty string. Later duplicates win.
pub fn parse_key_values(tsv: &str) -> BTreeMap<String, String> {
    let mut values = BTreeMap::new();

    for line in content_lines(tsv).skip(1) {
        let mut cells = split_line(line).into_iter();
        let key = cells.next().unwrap_or_default();
        if key.is_empty() {
            continue;
        }
        let value = cells.next().unwrap_or_default();
        values.insert(key, value);
    }

    values
}
