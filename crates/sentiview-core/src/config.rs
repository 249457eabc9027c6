use std::env;
use std::str::FromStr;

use crate::envelope::SCHEMA_VERSION;
use crate::{Locale, NumberFormatter, ValidationError};

/// Environment variable overriding the formatter locale.
pub const LOCALE_ENV: &str = "SENTIVIEW_LOCALE";

/// Settings shared by every consumer of the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Locale used for number formatting.
    pub locale: Locale,
    /// Version stamped on emitted envelopes.
    pub schema_version: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            schema_version: String::from(SCHEMA_VERSION),
        }
    }
}

impl DashboardConfig {
    /// Defaults, with the locale taken from `SENTIVIEW_LOCALE` when set.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_locale_var(env::var(LOCALE_ENV).ok().as_deref())
    }

    fn from_locale_var(value: Option<&str>) -> Result<Self, ValidationError> {
        let mut config = Self::default();
        if let Some(value) = value.filter(|value| !value.trim().is_empty()) {
            config.locale = Locale::from_str(value)?;
        }
        Ok(config)
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn number_formatter(&self) -> NumberFormatter {
        NumberFormatter::new(self.locale)
    }
}
