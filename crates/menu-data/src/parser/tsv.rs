use serde::Serialize;
use std::sync::Arc;

/// Field separator of spreadsheet TSV exports. No quoting or escaping.
pub const DELIMITER: char = '\t';

/// Coerced cell value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Precedence: literal TRUE/FALSE, then a finite decimal number, then the raw text.
    /// Empty cells stay empty text.
    pub fn coerce(raw: &str) -> Self {
        match raw {
            "TRUE" => CellValue::Bool(true),
            "FALSE" => CellValue::Bool(false),
            "" => CellValue::Text(String::new()),
            _ => match raw.parse::<f64>() {
                Ok(number) if number.is_finite() => CellValue::Number(number),
                _ => CellValue::Text(raw.to_string()),
            },
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            _ => None,
        }
    }
}

/// Split one line into trimmed cells
pub(crate) fn split_line(line: &str) -> Vec<String> {
    line.split(DELIMITER).map(|cell| cell.trim().to_string()).collect()
}

/// Non-blank lines of `text`; handles both LF and CRLF exports.
/// Leading/trailing tabs are kept so empty edge cells do not shift columns.
pub(crate) fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|line| !line.trim().is_empty())
}

/// One data row, with fields named by the header row.
///
/// Rows shorter than the header are kept: the unfilled fields read as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    headers: Arc<[String]>,
    cells: Vec<String>,
}

impl Record {
    fn position(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Trimmed raw cell; `None` for an unknown column or a cell the row did not reach
    pub fn text(&self, name: &str) -> Option<&str> {
        self.position(name)
            .and_then(|index| self.cells.get(index))
            .map(String::as_str)
    }

    /// Raw cell with empty treated as absent
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.text(name).filter(|value| !value.is_empty())
    }

    /// Coerced cell value
    pub fn get(&self, name: &str) -> Option<CellValue> {
        self.text(name).map(CellValue::coerce)
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(|value| value.as_bool())
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(|value| value.as_number())
    }

    /// True when the row had fewer cells than the header
    pub fn is_partial(&self) -> bool {
        self.cells.len() < self.headers.len()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

/// Header row plus data records
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TsvTable {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

impl TsvTable {
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|header| header == name)
    }

    /// Which of `required` the header row lacks
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|column| !self.has_column(column))
            .map(|column| column.to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse header + rows into a table. Empty or header-only input yields no records.
pub fn parse_table(tsv: &str) -> TsvTable {
    let mut lines = content_lines(tsv);

    let headers = match lines.next() {
        Some(header_line) => split_line(header_line),
        None => return TsvTable::default(),
    };
    let shared: Arc<[String]> = headers.clone().into();

    let records = lines
        .map(|line| Record {
            headers: Arc::clone(&shared),
            cells: split_line(line),
        })
        .collect();

    TsvTable { headers, records }
}

/// Records only, for callers that do not need the header row
pub fn parse_records(tsv: &str) -> Vec<Record> {
    parse_table(tsv).records
}
