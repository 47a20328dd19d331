//! UI locales accepted by the backend, sent on every request as `X-Language`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported UI locale. Turkish is the product default.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    /// Turkish (`tr`). The default.
    #[default]
    #[serde(rename = "tr")]
    Turkish,

    /// English (`en`).
    #[serde(rename = "en")]
    English,

    /// German (`de`).
    #[serde(rename = "de")]
    German,

    /// French (`fr`).
    #[serde(rename = "fr")]
    French,

    /// Italian (`it`).
    #[serde(rename = "it")]
    Italian,

    /// Spanish (`es`).
    #[serde(rename = "es")]
    Spanish,

    /// Arabic (`ar`).
    #[serde(rename = "ar")]
    Arabic,
}

impl Locale {
    /// The two-letter code used in the `X-Language` header.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Turkish => "tr",
            Locale::English => "en",
            Locale::German => "de",
            Locale::French => "fr",
            Locale::Italian => "it",
            Locale::Spanish => "es",
            Locale::Arabic => "ar",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Locale {
    type Err = ();

    /// Accepts a bare code (`tr`) or a region-qualified tag (`tr-TR`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.split('-').next().unwrap_or("").to_ascii_lowercase();
        match code.as_str() {
            "tr" => Ok(Locale::Turkish),
            "en" => Ok(Locale::English),
            "de" => Ok(Locale::German),
            "fr" => Ok(Locale::French),
            "it" => Ok(Locale::Italian),
            "es" => Ok(Locale::Spanish),
            "ar" => Ok(Locale::Arabic),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_and_qualified_tags() {
        assert_eq!("tr".parse::<Locale>(), Ok(Locale::Turkish));
        assert_eq!("de-DE".parse::<Locale>(), Ok(Locale::German));
        assert_eq!("AR".parse::<Locale>(), Ok(Locale::Arabic));
        assert!("xx".parse::<Locale>().is_err());
    }

    #[test]
    fn default_is_turkish() {
        assert_eq!(Locale::default().code(), "tr");
    }
}
