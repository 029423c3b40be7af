//! Build-time configuration.
//!
//! The bundle runs in the browser, so values are baked in when the wasm is compiled
//! (`option_env!`). Parsing goes through a lookup function so it can be exercised with
//! arbitrary values.

use std::str::FromStr;

use chrono::Locale;
use dioxus_logger::tracing::Level;
use url::Url;

use crate::client::{error::ConfigError, util::date::DisplayZone};

const DEFAULT_IMAGE_BUCKET: &str = "event-images";
const DEFAULT_DATE_LOCALE: &str = "es_ES";
const DEFAULT_DATE_PATTERN: &str = "%A, %-d de %B de %Y";
const DEFAULT_FEATURED_LIMIT: usize = 3;
const DEFAULT_UPCOMING_LIMIT: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Project base URL without a trailing slash.
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub image_bucket: String,
    /// Overrides the bundled placeholder image.
    pub placeholder_image: Option<String>,
    pub date_locale: Locale,
    pub date_pattern: String,
    /// Zone dates are shown and entered in; the browser's own unless set.
    pub time_zone: DisplayZone,
    /// Number of upcoming events featured on the home page.
    pub featured_limit: usize,
    /// Number of upcoming events listed next to the calendar.
    pub upcoming_limit: usize,
    pub log_level: Level,
}

impl Config {
    /// Reads the configuration baked in at build time.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(build_env)
    }

    /// Configuration for `supabase_url` with every optional value at its default.
    pub fn with_defaults(supabase_url: &str, anon_key: &str) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match key {
            "SUPABASE_URL" => Some(supabase_url.to_string()),
            "SUPABASE_ANON_KEY" => Some(anon_key.to_string()),
            _ => None,
        })
    }

    /// Builds the configuration from `lookup`, which returns the value of a variable.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every required variable present and every value valid
    /// - `Err(ConfigError::MissingEnvVar)` - `SUPABASE_URL` or `SUPABASE_ANON_KEY` absent or blank
    /// - `Err(ConfigError::InvalidEnvValue)` - A value failed to parse
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &str| get(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        let supabase_url = parse_base_url("SUPABASE_URL", &require("SUPABASE_URL")?)?;
        let supabase_anon_key = require("SUPABASE_ANON_KEY")?;

        let date_locale = match get("KALENDO_DATE_LOCALE") {
            Some(raw) => Locale::try_from(raw.as_str()).map_err(|_| invalid(
                "KALENDO_DATE_LOCALE",
                format!("unknown locale {:?}", raw),
            ))?,
            None => Locale::try_from(DEFAULT_DATE_LOCALE)
                .map_err(|_| invalid("KALENDO_DATE_LOCALE", "default locale missing".to_string()))?,
        };

        let time_zone = match get("KALENDO_TIME_ZONE") {
            Some(raw) => raw
                .parse::<DisplayZone>()
                .map_err(|reason| invalid("KALENDO_TIME_ZONE", reason))?,
            None => DisplayZone::Local,
        };

        let log_level = match get("LOG_LEVEL") {
            Some(raw) => Level::from_str(&raw)
                .map_err(|_| invalid("LOG_LEVEL", format!("unknown level {:?}", raw)))?,
            None => Level::INFO,
        };

        Ok(Self {
            supabase_url,
            supabase_anon_key,
            image_bucket: get("KALENDO_IMAGE_BUCKET").unwrap_or_else(|| DEFAULT_IMAGE_BUCKET.to_string()),
            placeholder_image: get("KALENDO_PLACEHOLDER_IMAGE"),
            date_locale,
            date_pattern: get("KALENDO_DATE_PATTERN").unwrap_or_else(|| DEFAULT_DATE_PATTERN.to_string()),
            time_zone,
            featured_limit: parse_limit("KALENDO_FEATURED_LIMIT", get("KALENDO_FEATURED_LIMIT"), DEFAULT_FEATURED_LIMIT)?,
            upcoming_limit: parse_limit("KALENDO_UPCOMING_LIMIT", get("KALENDO_UPCOMING_LIMIT"), DEFAULT_UPCOMING_LIMIT)?,
            log_level,
        })
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "SUPABASE_URL" => option_env!("SUPABASE_URL"),
        "SUPABASE_ANON_KEY" => option_env!("SUPABASE_ANON_KEY"),
        "KALENDO_IMAGE_BUCKET" => option_env!("KALENDO_IMAGE_BUCKET"),
        "KALENDO_PLACEHOLDER_IMAGE" => option_env!("KALENDO_PLACEHOLDER_IMAGE"),
        "KALENDO_DATE_LOCALE" => option_env!("KALENDO_DATE_LOCALE"),
        "KALENDO_DATE_PATTERN" => option_env!("KALENDO_DATE_PATTERN"),
        "KALENDO_TIME_ZONE" => option_env!("KALENDO_TIME_ZONE"),
        "KALENDO_FEATURED_LIMIT" => option_env!("KALENDO_FEATURED_LIMIT"),
        "KALENDO_UPCOMING_LIMIT" => option_env!("KALENDO_UPCOMING_LIMIT"),
        "LOG_LEVEL" => option_env!("LOG_LEVEL"),
        _ => None,
    };

    value.map(str::to_string)
}

fn invalid(var: &str, reason: String) -> ConfigError {
    ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason,
    }
}

fn parse_base_url(var: &str, raw: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| invalid(var, e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(var, format!("unsupported scheme {:?}", url.scheme())));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

fn parse_limit(var: &str, raw: Option<String>, default: usize) -> Result<usize, ConfigError> {
    match raw {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(0) => Err(invalid(var, "must be at least 1".to_string())),
            Ok(limit) => Ok(limit),
            Err(e) => Err(invalid(var, e.to_string())),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::Locale;
    use dioxus_logger::tracing::Level;

    use super::Config;
    use crate::client::{error::ConfigError, util::date::DisplayZone};

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    /// Expect defaults for every optional value and a normalized base URL
    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://project.supabase.co/"),
            ("SUPABASE_ANON_KEY", "anon"),
        ]))
        .unwrap();

        assert_eq!(config.supabase_url, "https://project.supabase.co");
        assert_eq!(config.image_bucket, "event-images");
        assert_eq!(config.placeholder_image, None);
        assert_eq!(config.date_locale, Locale::es_ES);
        assert_eq!(config.date_pattern, "%A, %-d de %B de %Y");
        assert_eq!(config.time_zone, DisplayZone::Local);
        assert_eq!(config.featured_limit, 3);
        assert_eq!(config.upcoming_limit, 5);
        assert_eq!(config.log_level, Level::INFO);
    }

    /// Expect MissingEnvVar when the anon key is absent or blank
    #[test]
    fn requires_anon_key() {
        let result = Config::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://project.supabase.co"),
            ("SUPABASE_ANON_KEY", "  "),
        ]));

        assert_eq!(
            result,
            Err(ConfigError::MissingEnvVar("SUPABASE_ANON_KEY".to_string()))
        );
    }

    /// Expect InvalidEnvValue for malformed URLs, locales and limits
    #[test]
    fn rejects_invalid_values() {
        let base = [
            ("SUPABASE_URL", "https://project.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
        ];
        let with = |extra: (&'static str, &'static str)| {
            let mut pairs = base.to_vec();
            pairs.push(extra);
            Config::from_lookup(lookup(&pairs))
        };

        assert!(matches!(
            Config::from_lookup(lookup(&[("SUPABASE_URL", "ftp://x"), ("SUPABASE_ANON_KEY", "anon")])),
            Err(ConfigError::InvalidEnvValue { .. })
        ));
        assert!(matches!(
            with(("KALENDO_DATE_LOCALE", "xx_YY")),
            Err(ConfigError::InvalidEnvValue { .. })
        ));
        assert!(matches!(
            with(("KALENDO_TIME_ZONE", "Mars/Olympus")),
            Err(ConfigError::InvalidEnvValue { .. })
        ));
        assert!(matches!(
            with(("KALENDO_FEATURED_LIMIT", "0")),
            Err(ConfigError::InvalidEnvValue { .. })
        ));
        assert!(matches!(
            with(("LOG_LEVEL", "loud")),
            Err(ConfigError::InvalidEnvValue { .. })
        ));
    }

    /// Expect overrides to replace defaults
    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://project.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("KALENDO_DATE_LOCALE", "en_US"),
            ("KALENDO_DATE_PATTERN", "%A, %B %-d, %Y"),
            ("KALENDO_TIME_ZONE", "utc"),
            ("KALENDO_UPCOMING_LIMIT", "8"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.time_zone, DisplayZone::utc());
        assert_eq!(config.date_locale, Locale::en_US);
        assert_eq!(config.date_pattern, "%A, %B %-d, %Y");
        assert_eq!(config.upcoming_limit, 8);
        assert_eq!(config.log_level, Level::DEBUG);
    }
}
