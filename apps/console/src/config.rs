use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; startup fails only on malformed values.
///
/// Without `API_BASE` the backend base is the console's own origin. The boot
/// health probe then runs before the console listens, so it fails and the
/// console starts in offline demo mode (or "API Unreachable" with
/// `OFFLINE_FALLBACK=false`).
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Origin the console is reachable at. Used as the backend base when
    /// `API_BASE` is not set.
    pub public_origin: String,
    /// Resolved agent backend base URL, without a trailing slash.
    pub api_base: String,
    /// Serve canned demo results when the backend health probe fails.
    pub offline_fallback: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// True when the backend base is the console itself.
    pub fn backend_is_self(&self) -> bool {
        self.api_base == self.public_origin.trim_end_matches('/')
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let public_origin = non_blank(lookup("PUBLIC_ORIGIN"))
            .unwrap_or_else(|| format!("http://127.0.0.1:{port}"));

        let api_base = non_blank(lookup("API_BASE"))
            .unwrap_or_else(|| public_origin.clone())
            .trim_end_matches('/')
            .to_string();

        let offline_fallback = match lookup("OFFLINE_FALLBACK") {
            None => true,
            Some(v) => parse_flag(&v).context("OFFLINE_FALLBACK must be true or false")?,
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            public_origin,
            api_base,
            offline_fallback,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognised flag value '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let c = config(&[]).unwrap();
        assert_eq!(c.port, 8080);
        assert_eq!(c.rust_log, "info");
        assert_eq!(c.public_origin, "http://127.0.0.1:8080");
        assert_eq!(c.api_base, "http://127.0.0.1:8080");
        assert!(c.offline_fallback);
    }

    #[test]
    fn test_api_base_defaults_to_public_origin() {
        let c = config(&[("PUBLIC_ORIGIN", "https://console.example.org")]).unwrap();
        assert_eq!(c.api_base, "https://console.example.org");
    }

    #[test]
    fn test_backend_is_self_only_without_api_base() {
        assert!(config(&[]).unwrap().backend_is_self());
        assert!(config(&[("PUBLIC_ORIGIN", "http://console.local/")])
            .unwrap()
            .backend_is_self());
        assert!(!config(&[("API_BASE", "http://agents:8000")])
            .unwrap()
            .backend_is_self());
    }

    #[test]
    fn test_api_base_override_trimmed() {
        let c = config(&[("API_BASE", "  http://agents:8000/  ")]).unwrap();
        assert_eq!(c.api_base, "http://agents:8000");
    }

    #[test]
    fn test_blank_api_base_ignored() {
        let c = config(&[("API_BASE", "   "), ("PORT", "9000")]).unwrap();
        assert_eq!(c.api_base, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_offline_fallback_flag() {
        assert!(!config(&[("OFFLINE_FALLBACK", "false")]).unwrap().offline_fallback);
        assert!(config(&[("OFFLINE_FALLBACK", "YES")]).unwrap().offline_fallback);
        assert!(config(&[("OFFLINE_FALLBACK", "maybe")]).is_err());
    }

    #[test]
    fn test_bad_port_is_error() {
        assert!(config(&[("PORT", "eighty")]).is_err());
    }
}
