// crates/featuredict-core/src/locale.rs
use crate::error::{FeatureError, Result};
use std::fmt;
use std::str::FromStr;

/// A locale reduced to the parts that select a translation overlay:
/// language, optional script and optional region.
///
/// Equality, hashing and ordering cover all three parts, so `de`, `de-AT`
/// and `de-Cyrl-AT` are distinct keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    language: String,
    script: Option<String>,
    region: Option<String>,
}

impl Locale {
    /// A locale consisting of a language only, e.g. `Locale::new("de")`.
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            script: None,
            region: None,
        }
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.region = non_empty(region).map(|r| r.to_ascii_uppercase());
        self
    }

    pub fn with_script(mut self, script: &str) -> Self {
        self.script = non_empty(script).map(title_case);
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// BCP-47 style tag built only from language, script and region,
    /// e.g. `de-Cyrl-AT`.
    pub fn language_tag(&self) -> String {
        let mut tag = self.language.clone();
        if let Some(script) = &self.script {
            tag.push('-');
            tag.push_str(script);
        }
        if let Some(region) = &self.region {
            tag.push('-');
            tag.push_str(region);
        }
        tag
    }

    /// The locales whose overlays make up this locale, most general first:
    /// `de`, `de-AT`, `de-Cyrl`, `de-Cyrl-AT`.
    ///
    /// ```rust
    /// use featuredict_core::Locale;
    ///
    /// let l: Locale = "de-Cyrl-AT".parse().unwrap();
    /// let tags: Vec<String> = l.components().iter().map(Locale::language_tag).collect();
    /// assert_eq!(tags, ["de", "de-AT", "de-Cyrl", "de-Cyrl-AT"]);
    /// ```
    pub fn components(&self) -> Vec<Locale> {
        let language = Locale::new(&self.language);
        let mut out = Vec::with_capacity(4);
        out.push(language.clone());
        if let Some(region) = &self.region {
            out.push(language.clone().with_region(region));
        }
        if let Some(script) = &self.script {
            out.push(language.clone().with_script(script));
        }
        if let (Some(region), Some(script)) = (&self.region, &self.script) {
            out.push(language.with_script(script).with_region(region));
        }
        out
    }
}

impl FromStr for Locale {
    type Err = FeatureError;

    /// Parses tags like `de`, `de-AT`, `pt_BR`, `zh-Hant-TW`.
    /// Subtags that are neither a script nor a region are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().split(['-', '_']);
        let language = parts.next().unwrap_or_default();
        if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(FeatureError::InvalidLocale(s.to_owned()));
        }

        let mut locale = Locale::new(language);
        for part in parts {
            let is_alpha = part.chars().all(|c| c.is_ascii_alphabetic());
            let is_digit = part.chars().all(|c| c.is_ascii_digit());
            match part.len() {
                4 if is_alpha && locale.script.is_none() => locale = locale.with_script(part),
                2 if is_alpha && locale.region.is_none() => locale = locale.with_region(part),
                3 if is_digit && locale.region.is_none() => locale = locale.with_region(part),
                _ => {}
            }
        }
        Ok(locale)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language_tag())
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

fn title_case(s: &str) -> String {
    s.char_indices()
        .map(|(i, c)| {
            if i == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}
