//! Connection configuration types for Jama field sync.
//!
//! Responsibilities:
//! - Normalize the configured base URL.
//! - Build [`ClientSettings`] from the `CLIENT_SETTINGS` section.
//!
//! Does NOT handle:
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `ConnectionConfig::base_url` always carries an `http://` or `https://` scheme
//!   and has no trailing slash.
//! - The normalized URL is passed by value to the client; nothing is stored globally.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::constants::{CLIENT_SETTINGS_SECTION, DEFAULT_TIMEOUT_SECS};
use crate::loader::{ConfigError, IniDocument, Result};
use crate::types::auth::{AuthConfig, AuthStrategy};

const HTTPS: &str = "https://";
const HTTP: &str = "http://";

/// Normalize a base URL.
///
/// Trailing slashes are removed, but a bare `https://` or `http://` is never
/// shortened further. A missing scheme defaults to `https://`.
///
/// # Examples
///
/// - `"jama.example.com/"` -> `"https://jama.example.com"`
/// - `"http://localhost:8080//"` -> `"http://localhost:8080"`
/// - `"https:///"` -> `"https://"`
pub fn normalize_base_url(raw: &str) -> String {
    let mut url = raw.trim();
    while url.ends_with('/') && url != HTTPS && url != HTTP {
        url = &url[..url.len() - 1];
    }
    if url.starts_with(HTTPS) || url.starts_with(HTTP) {
        url.to_string()
    } else {
        format!("{HTTPS}{url}")
    }
}

/// Connection settings for the Jama Connect server.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Normalized base URL (e.g., https://company.jamacloud.com)
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl ConnectionConfig {
    /// Build a connection config from a raw base URL, normalizing it first.
    pub fn new(raw_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(raw_url),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Everything needed to construct an authenticated client.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl ClientSettings {
    /// Read `CLIENT_SETTINGS` from a parsed config file.
    ///
    /// All four keys (`jama_connect_url`, `oauth`, `user_id`, `user_secret`)
    /// are required.
    pub fn from_document(doc: &IniDocument) -> Result<Self> {
        let section = CLIENT_SETTINGS_SECTION;

        let raw_url = doc.require(section, "jama_connect_url")?;
        if raw_url.is_empty() {
            return Err(ConfigError::invalid(section, "jama_connect_url", "URL is empty"));
        }
        let connection = ConnectionConfig::new(raw_url);
        match Url::parse(&connection.base_url) {
            Ok(parsed) if parsed.host_str().is_some() => {}
            Ok(_) => {
                return Err(ConfigError::invalid(
                    section,
                    "jama_connect_url",
                    format!("'{}' has no host", connection.base_url),
                ));
            }
            Err(e) => {
                return Err(ConfigError::invalid(
                    section,
                    "jama_connect_url",
                    format!("'{}' is not a valid URL: {e}", connection.base_url),
                ));
            }
        }

        let oauth = doc.require_bool(section, "oauth")?;
        let user_id = doc.require(section, "user_id")?.to_string();
        let user_secret = SecretString::new(doc.require(section, "user_secret")?.into());

        Ok(Self {
            connection,
            auth: AuthConfig {
                strategy: AuthStrategy::from_credentials(oauth, user_id, user_secret),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::path::Path;

    fn doc(contents: &str) -> IniDocument {
        IniDocument::parse(Path::new("config.ini"), contents).unwrap()
    }

    #[test]
    fn test_normalize_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url("https://jama.example.com///"),
            "https://jama.example.com"
        );
        assert_eq!(
            normalize_base_url("http://localhost:8080/"),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_normalize_adds_https_scheme() {
        assert_eq!(
            normalize_base_url("  jama.example.com/ "),
            "https://jama.example.com"
        );
    }

    #[test]
    fn test_normalize_never_shortens_bare_scheme() {
        assert_eq!(normalize_base_url("https:///"), "https://");
        assert_eq!(normalize_base_url("http://"), "http://");
    }

    #[test]
    fn test_from_document_basic_auth() {
        let doc = doc(
            "[CLIENT_SETTINGS]\n\
             jama_connect_url = company.jamacloud.com/\n\
             oauth = false\n\
             user_id = alice \n\
             user_secret = pw\n",
        );
        let settings = ClientSettings::from_document(&doc).unwrap();
        assert_eq!(
            settings.connection.base_url,
            "https://company.jamacloud.com"
        );
        match settings.auth.strategy {
            AuthStrategy::Basic { username, password } => {
                assert_eq!(username, "alice");
                assert_eq!(password.expose_secret(), "pw");
            }
            AuthStrategy::OAuth { .. } => panic!("expected basic auth"),
        }
    }

    #[test]
    fn test_from_document_oauth() {
        let doc = doc(
            "[CLIENT_SETTINGS]\n\
             jama_connect_url = https://company.jamacloud.com\n\
             oauth = True\n\
             user_id = client\n\
             user_secret = secret\n",
        );
        let settings = ClientSettings::from_document(&doc).unwrap();
        assert!(settings.auth.strategy.is_oauth());
    }

    #[test]
    fn test_from_document_missing_each_required_key() {
        let full = [
            "jama_connect_url = https://company.jamacloud.com",
            "oauth = false",
            "user_id = alice",
            "user_secret = pw",
        ];
        for skip in 0..full.len() {
            let mut contents = String::from("[CLIENT_SETTINGS]\n");
            for (i, line) in full.iter().enumerate() {
                if i != skip {
                    contents.push_str(line);
                    contents.push('\n');
                }
            }
            let err = ClientSettings::from_document(&doc(&contents)).unwrap_err();
            assert!(
                matches!(err, ConfigError::MissingKey { .. }),
                "line {skip}: {err}"
            );
        }
    }

    #[test]
    fn test_from_document_missing_section() {
        let err = ClientSettings::from_document(&doc("[SCRIPT_SETTINGS]\nfilter_id = 1\n"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingSection { .. }));
    }

    #[test]
    fn test_from_document_rejects_bad_oauth_flag() {
        let doc = doc(
            "[CLIENT_SETTINGS]\n\
             jama_connect_url = https://company.jamacloud.com\n\
             oauth = perhaps\n\
             user_id = alice\n\
             user_secret = pw\n",
        );
        assert!(matches!(
            ClientSettings::from_document(&doc).unwrap_err(),
            ConfigError::InvalidValue { .. }
        ));
    }

    #[test]
    fn test_from_document_rejects_empty_url() {
        let doc = doc(
            "[CLIENT_SETTINGS]\n\
             jama_connect_url =\n\
             oauth = false\n\
             user_id = alice\n\
             user_secret = pw\n",
        );
        assert!(matches!(
            ClientSettings::from_document(&doc).unwrap_err(),
            ConfigError::InvalidValue { .. }
        ));
    }

    #[test]
    fn test_error_does_not_leak_secret() {
        let doc = doc(
            "[CLIENT_SETTINGS]\n\
             jama_connect_url = https://company.jamacloud.com\n\
             oauth = nope\n\
             user_id = alice\n\
             user_secret = do-not-print-me\n",
        );
        let err = ClientSettings::from_document(&doc).unwrap_err();
        assert!(!err.to_string().contains("do-not-print-me"));
    }
}
