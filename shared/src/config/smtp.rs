//! SMTP relay configuration for outgoing mail

use serde::{Deserialize, Serialize};

/// Credentials and sender identity for the SMTP relay
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmtpConfig {
    /// Relay host name (`SMTP_HOST`)
    pub host: String,

    /// Relay port (`SMTP_PORT`), implicit TLS on 465
    pub port: u16,

    /// Login user, also used as the sender address (`SMTP_USER`)
    pub username: String,

    /// Login password (`SMTP_PASS`)
    #[serde(skip_serializing)]
    pub password: String,

    /// Display name placed in the `From` header (`SMTP_FROM_NAME`)
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

impl SmtpConfig {
    /// Build from a key lookup. Returns `None` when `SMTP_HOST` is not set.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("SMTP_HOST").filter(|h| !h.trim().is_empty())?;
        Some(Self {
            host,
            port: lookup("SMTP_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(465),
            username: lookup("SMTP_USER").unwrap_or_default(),
            password: lookup("SMTP_PASS").unwrap_or_default(),
            from_name: lookup("SMTP_FROM_NAME").unwrap_or_else(default_from_name),
        })
    }

    /// Formatted `From` mailbox, e.g. `"Foodzy" <shop@example.com>`
    pub fn from_mailbox(&self) -> String {
        format!("\"{}\" <{}>", self.from_name, self.username)
    }
}

fn default_from_name() -> String {
    String::from("Foodzy")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smtp_config_requires_host() {
        assert!(SmtpConfig::from_lookup(|_| None).is_none());
        assert!(SmtpConfig::from_lookup(|key| (key == "SMTP_HOST").then(|| "  ".to_string())).is_none());
    }

    #[test]
    fn test_smtp_config_from_lookup() {
        let config = SmtpConfig::from_lookup(|key| match key {
            "SMTP_HOST" => Some("smtp.example.com".to_string()),
            "SMTP_USER" => Some("shop@example.com".to_string()),
            "SMTP_PASS" => Some("secret".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.port, 465);
        assert_eq!(config.from_mailbox(), "\"Foodzy\" <shop@example.com>");
    }

    #[test]
    fn test_password_not_serialized() {
        let config = SmtpConfig {
            host: "smtp.example.com".to_string(),
            port: 587,
            username: "shop@example.com".to_string(),
            password: "secret".to_string(),
            from_name: "Foodzy".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}
