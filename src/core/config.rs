//! Site configuration from environment variables.
//!
//! Load configuration using `SiteConfig::from_env()` after calling `dotenvy::dotenv()`.
//! Values missing at runtime fall back to the ones present when the crate was
//! built, so the hydrated bundle and the server agree on the same site.

use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://api.example.com/api";
pub const DEFAULT_SITE_IDENTIFIER: &str = "demo-property";
pub const DEFAULT_THANK_YOU_PATH: &str = "/thank-you";
pub const DEFAULT_CONTACT_PHONE: &str = "+918181817136";
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 1000;
pub const DEFAULT_POPUP_DELAY_MS: u64 = 5000;
pub const DEFAULT_POPUP_INTERVAL_MS: u64 = 300_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("thank-you path must start with '/': {0}")]
    RelativeThankYouPath(String),
}

/// Site configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Base URL of the content API, without trailing slash
    /// Example: https://api.example.com/api
    pub api_url: String,

    /// Slug sent as `website=` with every request
    pub site_identifier: String,

    /// Delay between a successful lead submission and the redirect
    pub redirect_delay_ms: u64,

    /// Route the contact form navigates to after a successful submission
    pub thank_you_path: String,

    /// Whether the contact form rejects an empty email address
    pub email_required: bool,

    /// Whether the home page periodically opens the contact dialog
    pub popup_enabled: bool,
    pub popup_delay_ms: u64,
    pub popup_interval_ms: u64,

    /// Phone number used by the call and WhatsApp buttons
    pub contact_phone: String,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| build_time(key)))
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let text = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        let millis = |key: &str, default: u64| match lookup(key) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("{key}={raw:?} is not a number of milliseconds, using {default}");
                default
            }),
            None => default,
        };
        let flag = |key: &str, default: bool| match lookup(key) {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                tracing::warn!("{key}={raw:?} is not a boolean, using {default}");
                default
            }),
            None => default,
        };

        Self {
            api_url: text("SITE_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            site_identifier: text("SITE_SLUG", DEFAULT_SITE_IDENTIFIER),
            redirect_delay_ms: millis("SITE_REDIRECT_DELAY_MS", DEFAULT_REDIRECT_DELAY_MS),
            thank_you_path: text("SITE_THANK_YOU_PATH", DEFAULT_THANK_YOU_PATH),
            email_required: flag("SITE_EMAIL_REQUIRED", true),
            popup_enabled: flag("SITE_POPUP_ENABLED", false),
            popup_delay_ms: millis("SITE_POPUP_DELAY_MS", DEFAULT_POPUP_DELAY_MS),
            popup_interval_ms: millis("SITE_POPUP_INTERVAL_MS", DEFAULT_POPUP_INTERVAL_MS),
            contact_phone: text("SITE_CONTACT_PHONE", DEFAULT_CONTACT_PHONE),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.is_empty() {
            return Err(ConfigError::Empty("SITE_API_URL"));
        }
        if self.site_identifier.is_empty() {
            return Err(ConfigError::Empty("SITE_SLUG"));
        }
        if !self.thank_you_path.starts_with('/') {
            return Err(ConfigError::RelativeThankYouPath(
                self.thank_you_path.clone(),
            ));
        }
        Ok(())
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn popup_delay(&self) -> Duration {
        Duration::from_millis(self.popup_delay_ms)
    }

    pub fn popup_interval(&self) -> Duration {
        Duration::from_millis(self.popup_interval_ms)
    }

    /// `tel:` link for the call button
    pub fn call_link(&self) -> String {
        format!("tel:{}", self.contact_phone)
    }

    /// WhatsApp deep link; the number is sent without `+` or spaces
    pub fn whatsapp_link(&self) -> String {
        let digits: String = self
            .contact_phone
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        format!("https://wa.me/{digits}")
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn build_time(key: &str) -> Option<String> {
    let value = match key {
        "SITE_API_URL" => option_env!("SITE_API_URL"),
        "SITE_SLUG" => option_env!("SITE_SLUG"),
        "SITE_REDIRECT_DELAY_MS" => option_env!("SITE_REDIRECT_DELAY_MS"),
        "SITE_THANK_YOU_PATH" => option_env!("SITE_THANK_YOU_PATH"),
        "SITE_EMAIL_REQUIRED" => option_env!("SITE_EMAIL_REQUIRED"),
        "SITE_POPUP_ENABLED" => option_env!("SITE_POPUP_ENABLED"),
        "SITE_POPUP_DELAY_MS" => option_env!("SITE_POPUP_DELAY_MS"),
        "SITE_POPUP_INTERVAL_MS" => option_env!("SITE_POPUP_INTERVAL_MS"),
        "SITE_CONTACT_PHONE" => option_env!("SITE_CONTACT_PHONE"),
        _ => None,
    };
    value.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> SiteConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SiteConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = config_from(&[]);

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.site_identifier, DEFAULT_SITE_IDENTIFIER);
        assert_eq!(config.redirect_delay_ms, 1000);
        assert_eq!(config.thank_you_path, "/thank-you");
        assert!(config.email_required);
        assert!(!config.popup_enabled);
        assert_eq!(config.popup_delay(), Duration::from_secs(5));
        assert_eq!(config.popup_interval(), Duration::from_secs(300));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_values_are_read_and_trimmed() {
        let config = config_from(&[
            ("SITE_API_URL", " https://content.test/api/ "),
            ("SITE_SLUG", "skyline-towers"),
            ("SITE_REDIRECT_DELAY_MS", "1500"),
            ("SITE_THANK_YOU_PATH", "/thanku"),
            ("SITE_EMAIL_REQUIRED", "false"),
            ("SITE_POPUP_ENABLED", "yes"),
        ]);

        assert_eq!(config.api_url, "https://content.test/api");
        assert_eq!(config.site_identifier, "skyline-towers");
        assert_eq!(config.redirect_delay(), Duration::from_millis(1500));
        assert_eq!(config.thank_you_path, "/thanku");
        assert!(!config.email_required);
        assert!(config.popup_enabled);
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let config = config_from(&[("SITE_REDIRECT_DELAY_MS", "soon")]);
        assert_eq!(config.redirect_delay_ms, DEFAULT_REDIRECT_DELAY_MS);
    }

    #[test]
    fn test_invalid_flag_falls_back() {
        let config = config_from(&[("SITE_EMAIL_REQUIRED", "maybe")]);
        assert!(config.email_required);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = config_from(&[("SITE_SLUG", "   ")]);
        assert_eq!(config.site_identifier, DEFAULT_SITE_IDENTIFIER);
    }

    #[test]
    fn test_validate_rejects_relative_thank_you_path() {
        let config = config_from(&[("SITE_THANK_YOU_PATH", "thank-you")]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::RelativeThankYouPath("thank-you".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_empty_identifier() {
        let mut config = config_from(&[]);
        config.site_identifier.clear();
        assert_eq!(config.validate(), Err(ConfigError::Empty("SITE_SLUG")));
    }

    #[test]
    fn test_contact_links() {
        let config = config_from(&[("SITE_CONTACT_PHONE", "+91 81818 17136")]);
        assert_eq!(config.call_link(), "tel:+91 81818 17136");
        assert_eq!(config.whatsapp_link(), "https://wa.me/918181817136");
    }

    #[test]
    fn test_flag_parsing() {
        assert_eq!(parse_flag("ON"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag(""), None);
    }
}
