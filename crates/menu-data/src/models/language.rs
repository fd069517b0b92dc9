use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported UI languages (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    #[default]
    Ka,
    En,
    Ru,
}

impl Language {
    /// All languages in display order
    pub const ALL: [Language; 3] = [Language::Ka, Language::En, Language::Ru];

    /// Column/wire code, e.g. "KA"
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ka => "KA",
            Language::En => "EN",
            Language::Ru => "RU",
        }
    }

    /// Suffix used by per-language sheet columns, e.g. `nameKa`
    pub fn column_suffix(&self) -> &'static str {
        match self {
            Language::Ka => "Ka",
            Language::En => "En",
            Language::Ru => "Ru",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported language code: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "KA" => Ok(Language::Ka),
            "EN" => Ok(Language::En),
            "RU" => Ok(Language::Ru),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// One string per supported language. Empty means "no value".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub ka: String,
    pub en: String,
    pub ru: String,
}

impl LocalizedText {
    pub fn new(ka: impl Into<String>, en: impl Into<String>, ru: impl Into<String>) -> Self {
        Self {
            ka: ka.into(),
            en: en.into(),
            ru: ru.into(),
        }
    }

    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Ka => &self.ka,
            Language::En => &self.en,
            Language::Ru => &self.ru,
        }
    }

    pub fn set(&mut self, lang: Language, value: impl Into<String>) {
        let value = value.into();
        match lang {
            Language::Ka => self.ka = value,
            Language::En => self.en = value,
            Language::Ru => self.ru = value,
        }
    }

    /// Text for `lang`, or None when the cell was empty
    pub fn non_empty(&self, lang: Language) -> Option<&str> {
        let value = self.get(lang);
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    pub fn is_empty(&self) -> bool {
        Language::ALL.iter().all(|lang| self.get(*lang).is_empty())
    }
}
