use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::i18n::{ContentError, Language};
use crate::page::Section;

/// Variant slug baked in by `build.rs` from `PORTFOLIO_VARIANT`.
pub const BUILD_VARIANT: &str = env!("PORTFOLIO_VARIANT");
/// RFC 3339 timestamp of the build, stamped by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");
/// Local storage key holding the visitor's language choice.
pub const LANGUAGE_STORAGE_KEY: &str = "language";

/// One content arrangement of the landing page. All variants share the same
/// template and differ only in their dictionaries and section lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteVariant {
    #[default]
    Strategy,
    Consulting,
    Analytics,
    Automation,
}

impl SiteVariant {
    pub const ALL: [SiteVariant; 4] = [
        SiteVariant::Strategy,
        SiteVariant::Consulting,
        SiteVariant::Analytics,
        SiteVariant::Automation,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Strategy => "strategy",
            Self::Consulting => "consulting",
            Self::Analytics => "analytics",
            Self::Automation => "automation",
        }
    }

    /// Content sections rendered between the description and the contact row,
    /// in display order.
    pub fn sections(self) -> &'static [Section] {
        use Section::*;
        match self {
            Self::Strategy => &[Industries, SystemsThinking, Skills, StrategicMap, Objective],
            Self::Consulting => &[Industries, Skills, Benefits, Pricing],
            Self::Analytics => &[Industries, Skills, StrategicMap, Pricing],
            Self::Automation => &[Industries, Skills, Benefits, Objective, Pricing],
        }
    }
}

impl FromStr for SiteVariant {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.slug() == slug)
            .ok_or_else(|| ContentError::UnknownVariant(s.to_string()))
    }
}

impl fmt::Display for SiteVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub variant: SiteVariant,
    pub default_language: Language,
}

impl SiteConfig {
    /// Configuration compiled into this build.
    pub fn from_build() -> Self {
        Self::from_slug(BUILD_VARIANT)
    }

    fn from_slug(slug: &str) -> Self {
        let variant = slug.parse().unwrap_or_else(|err| {
            log::warn!("{err}; serving the {} variant", SiteVariant::default());
            SiteVariant::default()
        });
        Self {
            variant,
            default_language: Language::default(),
        }
    }
}
