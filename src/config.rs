use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Localization
    pub default_locale: String,
    pub locales_dir: Option<PathBuf>,

    // Company details (footer, contact page)
    pub company_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub whatsapp: Option<String>,
    pub address: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,

    // Products
    pub katip_url: Option<String>,

    // Contact form
    pub contact_submit_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().context("PORT must be a valid port number")?,
                Err(_) => 3000,
            },

            // Localization
            default_locale: std::env::var("DEFAULT_LOCALE").unwrap_or_else(|_| "en".to_string()),
            locales_dir: optional("LOCALES_DIR").map(PathBuf::from),

            // Company
            company_name: std::env::var("COMPANY_NAME").unwrap_or_else(|_| "Arkaya".to_string()),
            phone: optional("COMPANY_PHONE"),
            email: optional("COMPANY_EMAIL"),
            whatsapp: optional("COMPANY_WHATSAPP"),
            address: optional("COMPANY_ADDRESS"),
            linkedin: optional("COMPANY_LINKEDIN"),
            twitter: optional("COMPANY_TWITTER"),
            facebook: optional("COMPANY_FACEBOOK"),

            // Products
            katip_url: optional("KATIP_URL"),

            // Contact form
            contact_submit_delay: Duration::from_millis(
                std::env::var("CONTACT_SUBMIT_DELAY_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(1000),
            ),
        })
    }

    /// Address the HTTP server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            default_locale: "en".to_string(),
            locales_dir: None,
            company_name: "Arkaya".to_string(),
            phone: None,
            email: None,
            whatsapp: None,
            address: None,
            linkedin: None,
            twitter: None,
            facebook: None,
            katip_url: None,
            contact_submit_delay: Duration::from_millis(1000),
        }
    }
}

/// Read an env var, treating unset and blank the same.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "HOST",
        "PORT",
        "DEFAULT_LOCALE",
        "LOCALES_DIR",
        "COMPANY_NAME",
        "COMPANY_PHONE",
        "COMPANY_EMAIL",
        "KATIP_URL",
        "CONTACT_SUBMIT_DELAY_MS",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.default_locale, "en");
        assert!(config.locales_dir.is_none());
        assert_eq!(config.company_name, "Arkaya");
        assert!(config.phone.is_none());
        assert_eq!(config.contact_submit_delay, Duration::from_millis(1000));
    }

    #[test]
    #[serial]
    fn test_reads_overrides() {
        clear_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("DEFAULT_LOCALE", "tr");
        std::env::set_var("COMPANY_PHONE", "+90 555 000 00 00");
        std::env::set_var("CONTACT_SUBMIT_DELAY_MS", "0");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.port, 8080);
        assert_eq!(config.default_locale, "tr");
        assert_eq!(config.phone.as_deref(), Some("+90 555 000 00 00"));
        assert_eq!(config.contact_submit_delay, Duration::ZERO);
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_error() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        let result = Config::from_env();
        clear_env();

        assert!(result.unwrap_err().to_string().contains("PORT"));
    }

    #[test]
    #[serial]
    fn test_blank_optional_is_unset() {
        clear_env();
        std::env::set_var("COMPANY_EMAIL", "   ");
        let config = Config::from_env().unwrap();
        clear_env();

        assert!(config.email.is_none());
    }
}
