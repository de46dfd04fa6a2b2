//! Language selection and translation lookup.
//!
//! There is no process-wide "current language". Every caller passes the
//! `Language` it is working in, usually taken from the request.

mod catalog;
pub mod handlers;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    Ar,
    En,
}

impl Language {
    /// Strict lookup by code. Accepts region tags such as `fr-MA`.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "fr" => Some(Language::Fr),
            "ar" => Some(Language::Ar),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Lenient lookup: unknown codes resolve to the default language.
    pub fn parse(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    /// English name of the language, used when instructing the model.
    pub fn english_name(&self) -> &'static str {
        match self {
            Language::Fr => "French",
            Language::Ar => "Arabic",
            Language::En => "English",
        }
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::Fr => catalog::FR,
            Language::Ar => catalog::AR,
            Language::En => catalog::EN,
        }
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = Option::<String>::deserialize(deserializer)?;
        Ok(code.as_deref().map(Language::parse).unwrap_or_default())
    }
}

/// Looks up a dotted key (`results.level`). Missing keys return the key itself.
pub fn translate(language: Language, key: &str) -> &str {
    language
        .table()
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}

/// Translates `key` and substitutes `{name}` placeholders.
pub fn translate_with(language: Language, key: &str, args: &[(&str, &str)]) -> String {
    args.iter()
        .fold(translate(language, key).to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}

/// Full table for one language, grouped by section.
pub fn catalog(language: Language) -> BTreeMap<&'static str, BTreeMap<&'static str, &'static str>> {
    let mut sections: BTreeMap<&str, BTreeMap<&str, &str>> = BTreeMap::new();
    for (key, value) in language.table() {
        if let Some((section, name)) = key.split_once('.') {
            sections.entry(section).or_default().insert(name, value);
        }
    }
    sections
}
