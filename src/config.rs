use std::{collections::HashMap, time::Duration};

/// Listener, database and CORS settings, filled from the command line.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// SQLite file path, or `:memory:`
    pub database: String,
    /// Allowed frontend origin; `None` allows any origin
    pub cors_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8001,
            database: "portfolio.db".to_string(),
            cors_origin: None,
        }
    }
}

/// Mail relay settings loaded from environment variables.
///
/// Credentials are optional here; a relay without them fails when a
/// notification is attempted, not at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailConfig {
    /// Where contact notifications are delivered
    pub recipient: Option<String>,
    /// SMTP login, also used as the From address
    pub username: Option<String>,
    pub password: Option<String>,
    pub host: String,
    pub port: u16,
    /// Upgrade a plain connection with STARTTLS instead of connecting over TLS
    pub starttls: bool,
    pub timeout: Duration,
}

impl MailConfig {
    pub const RECIPIENT_KEY: &'static str = "EMAIL_TO";
    pub const USERNAME_KEY: &'static str = "EMAIL_USER";
    pub const PASSWORD_KEY: &'static str = "EMAIL_PASSWORD";
    pub const HOST_KEY: &'static str = "SMTP_HOST";
    pub const PORT_KEY: &'static str = "SMTP_PORT";
    pub const STARTTLS_KEY: &'static str = "SMTP_STARTTLS";
    pub const TIMEOUT_KEY: &'static str = "SMTP_TIMEOUT_SECS";

    fn tracked_keys() -> [&'static str; 7] {
        [
            Self::RECIPIENT_KEY,
            Self::USERNAME_KEY,
            Self::PASSWORD_KEY,
            Self::HOST_KEY,
            Self::PORT_KEY,
            Self::STARTTLS_KEY,
            Self::TIMEOUT_KEY,
        ]
    }

    pub fn from_env() -> Self {
        let values = Self::tracked_keys()
            .into_iter()
            .filter_map(|key| std::env::var(key).ok().map(|value| (key.to_string(), value)))
            .collect::<HashMap<_, _>>();
        Self::from_map(&values)
    }

    pub fn from_map(values: &HashMap<String, String>) -> Self {
        fn read(values: &HashMap<String, String>, key: &str) -> Option<String> {
            values
                .get(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        }

        let starttls = read(values, Self::STARTTLS_KEY)
            .map(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);
        let port = read(values, Self::PORT_KEY)
            .and_then(|value| value.parse().ok())
            .unwrap_or(if starttls { 587 } else { 465 });
        let timeout_secs = read(values, Self::TIMEOUT_KEY)
            .and_then(|value| value.parse().ok())
            .unwrap_or(10);

        Self {
            recipient: read(values, Self::RECIPIENT_KEY),
            username: read(values, Self::USERNAME_KEY),
            password: read(values, Self::PASSWORD_KEY),
            host: read(values, Self::HOST_KEY).unwrap_or_else(|| "smtp.gmail.com".to_string()),
            port,
            starttls,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Environment keys that still need a value before mail can be sent.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.recipient.is_none() {
            missing.push(Self::RECIPIENT_KEY);
        }
        if self.username.is_none() {
            missing.push(Self::USERNAME_KEY);
        }
        if self.password.is_none() {
            missing.push(Self::PASSWORD_KEY);
        }
        missing
    }
}
