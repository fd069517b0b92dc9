pub mod key_value;
pub mod translations;
pub mod tsv;

pub use key_value::parse_key_values;
pub use translations::{header_languages, parse_translations};
pub use tsv::{parse_records, parse_table, CellValue, Record, TsvTable};
