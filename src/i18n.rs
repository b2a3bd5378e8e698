//! Localized page content.
//!
//! Dictionaries live under `content/<variant>/<lang>.json` and are embedded at
//! compile time. Lookups go through [`Localizer`], which never fails: a
//! missing key resolves to [`Resolved::Missing`] and the page renders the key
//! path itself, so gaps stay visible instead of breaking it.
use std::{
    fmt,
    str::FromStr,
    sync::{Arc, LazyLock},
};

use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::SiteVariant;

pub static GLOBAL_DICTIONARY_CACHE: LazyLock<DashMap<(SiteVariant, Language), Arc<Value>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Unsupported language code: {0}")]
    UnsupportedLanguage(String),
    #[error("Unknown site variant: {0}")]
    UnknownVariant(String),
    #[error("No dictionary bundled at {0}")]
    MissingDictionary(String),
    #[error("Couldn't parse dictionary {path}: {reason}")]
    Parse { path: String, reason: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Es];

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Short label shown on the switcher button.
    pub fn label(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Es => "ES",
        }
    }

    /// Parses `code`, falling back to the default language when unsupported.
    pub fn from_code_or_default(code: &str) -> Self {
        code.parse().unwrap_or_else(|err| {
            log::warn!("{err}; using {}", Self::default());
            Self::default()
        })
    }
}

impl FromStr for Language {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "es-MX" and "en_US" select their primary language
        let primary = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            _ => Err(ContentError::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Result of looking up a dictionary path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// Nothing usable at this path; carries the path for display.
    Missing(String),
    Text(String),
    List(Vec<String>),
    /// Named children in declaration order.
    Entries(Vec<(String, Resolved)>),
}

impl Resolved {
    fn from_value(path: &str, value: &Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s.clone()),
            Value::Number(n) => Self::Text(n.to_string()),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(Self::List)
                .unwrap_or_else(|| Self::Missing(path.to_string())),
            Value::Object(map) => Self::Entries(
                map.iter()
                    .map(|(key, child)| {
                        let child_path = format!("{path}.{key}");
                        (key.clone(), Self::from_value(&child_path, child))
                    })
                    .collect(),
            ),
            Value::Null | Value::Bool(_) => Self::Missing(path.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }
}

fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(root, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Reads and parses the bundled dictionary for `variant` in `language`.
pub fn load_dictionary(variant: SiteVariant, language: Language) -> Result<Value, ContentError> {
    load_asset(&format!("{}/{}.json", variant.slug(), language.code()))
}

fn load_asset(path: &str) -> Result<Value, ContentError> {
    let file =
        ContentAssets::get(path).ok_or_else(|| ContentError::MissingDictionary(path.to_string()))?;
    parse_dictionary(path, &file.data)
}

fn parse_dictionary(path: &str, data: &[u8]) -> Result<Value, ContentError> {
    serde_json::from_slice(data).map_err(|e| ContentError::Parse {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

/// A dictionary that failed to load is replaced by an empty one, so every
/// lookup in it resolves to [`Resolved::Missing`].
fn into_dictionary(loaded: Result<Value, ContentError>) -> Arc<Value> {
    match loaded {
        Ok(value) => Arc::new(value),
        Err(err) => {
            log::error!("{err}; every key will render as its path");
            Arc::new(Value::Null)
        }
    }
}

fn dictionary(variant: SiteVariant, language: Language) -> Arc<Value> {
    let cache = &*GLOBAL_DICTIONARY_CACHE;
    cache
        .entry((variant, language))
        .or_insert_with(|| into_dictionary(load_dictionary(variant, language)))
        .clone()
}

fn resolve_value(dictionary: &Value, path: &str) -> Resolved {
    match lookup(dictionary, path) {
        Some(value) => Resolved::from_value(path, value),
        None => Resolved::Missing(path.to_string()),
    }
}

/// Language a page opens with. An explicit request wins over the visitor's
/// saved choice; unsupported requests fall back to the default.
pub fn initial_language(
    requested: Option<&str>,
    stored: Option<Language>,
    default: Language,
) -> Language {
    match (requested, stored) {
        (Some(code), _) => Language::from_code_or_default(code),
        (None, Some(language)) => language,
        (None, None) => default,
    }
}

/// Resolves content paths for one site variant and an active language.
///
/// The localizer is a plain value: switching language changes this value
/// only, and the parsed dictionaries stay shared in the global cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localizer {
    variant: SiteVariant,
    language: Language,
}

impl Localizer {
    pub fn new(variant: SiteVariant, language: Language) -> Self {
        Self { variant, language }
    }

    pub fn variant(&self) -> SiteVariant {
        self.variant
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switches the active language, returning the one actually selected.
    pub fn set_language(&mut self, code: &str) -> Language {
        self.language = Language::from_code_or_default(code);
        self.language
    }

    pub fn resolve(&self, path: &str) -> Resolved {
        self.resolve_in(self.language, path)
    }

    pub fn resolve_in(&self, language: Language, path: &str) -> Resolved {
        resolve_value(&dictionary(self.variant, language), path)
    }

    /// Text at `path`; `None` when missing or not a string.
    pub fn text(&self, path: &str) -> Option<String> {
        match self.resolve(path) {
            Resolved::Text(s) => Some(s),
            other => self.unusable(path, &other, "a string"),
        }
    }

    /// String list at `path`; `None` when missing or not a list of strings.
    pub fn list(&self, path: &str) -> Option<Vec<String>> {
        match self.resolve(path) {
            Resolved::List(items) => Some(items),
            other => self.unusable(path, &other, "a list"),
        }
    }

    /// Named children at `path`; `None` when missing or not an object.
    pub fn entries(&self, path: &str) -> Option<Vec<(String, Resolved)>> {
        match self.resolve(path) {
            Resolved::Entries(entries) => Some(entries),
            other => self.unusable(path, &other, "an object"),
        }
    }

    fn unusable<T>(&self, path: &str, found: &Resolved, expected: &str) -> Option<T> {
        if !found.is_missing() {
            log::warn!(
                "{path} is not {expected} in {}/{}",
                self.variant,
                self.language
            );
        }
        None
    }
}
