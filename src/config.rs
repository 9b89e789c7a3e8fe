use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub service_host: String,
    pub port: u16,

    // Language cookie
    pub language_cookie: String,
    pub language_cookie_max_age_days: u32,

    // Route table
    pub strict_route_validation: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            service_host: std::env::var("SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid port number (0-65535)")?,

            // Language cookie
            language_cookie: std::env::var("LANGUAGE_COOKIE").unwrap_or_else(|_| "lang".to_string()),
            language_cookie_max_age_days: std::env::var("LANGUAGE_COOKIE_MAX_AGE_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(365),

            // Route table
            strict_route_validation: std::env::var("STRICT_ROUTE_VALIDATION")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listening on: {}:{}", self.service_host, self.port);
        tracing::info!(
            "  Language cookie: {} (max age {} days)",
            self.language_cookie,
            self.language_cookie_max_age_days
        );
        tracing::info!("  Strict route validation: {}", self.strict_route_validation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 5] = [
        "SERVICE_HOST",
        "PORT",
        "LANGUAGE_COOKIE",
        "LANGUAGE_COOKIE_MAX_AGE_DAYS",
        "STRICT_ROUTE_VALIDATION",
    ];

    fn clear_env_vars() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_config_with_defaults() {
        clear_env_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.service_host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.language_cookie, "lang");
        assert_eq!(config.language_cookie_max_age_days, 365);
        assert!(!config.strict_route_validation);
    }

    #[test]
    #[serial]
    fn test_config_with_all_vars() {
        clear_env_vars();
        env::set_var("SERVICE_HOST", "127.0.0.1");
        env::set_var("PORT", "3000");
        env::set_var("LANGUAGE_COOKIE", "site_lang");
        env::set_var("LANGUAGE_COOKIE_MAX_AGE_DAYS", "30");
        env::set_var("STRICT_ROUTE_VALIDATION", "TRUE");

        let config = Config::from_env().unwrap();

        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.language_cookie, "site_lang");
        assert_eq!(config.language_cookie_max_age_days, 30);
        assert!(config.strict_route_validation);

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_invalid_port() {
        clear_env_vars();
        env::set_var("PORT", "not-a-number");

        let result = Config::from_env();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("PORT"));

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_port_out_of_range() {
        clear_env_vars();
        env::set_var("PORT", "99999");

        assert!(Config::from_env().is_err());

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_invalid_max_age_uses_default() {
        clear_env_vars();
        env::set_var("LANGUAGE_COOKIE_MAX_AGE_DAYS", "forever");

        let config = Config::from_env().unwrap();
        assert_eq!(config.language_cookie_max_age_days, 365);

        clear_env_vars();
    }
}
