//! API credential resolution
//!
//! Credentials are discovered from two alternative named pairs of
//! configuration entries, checked in fixed priority order. The lookup is
//! a port so the one-time environment read stays an explicit injected
//! value (the binary passes a process-environment lookup, tests pass a
//! map-backed fake).

use thiserror::Error;

/// Primary pair: generic OpenAI-compatible endpoint.
pub const PRIMARY_BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const PRIMARY_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Secondary pair: OpenRouter endpoint.
pub const SECONDARY_BASE_URL_VAR: &str = "OPENROUTER_BASE_URL";
pub const SECONDARY_API_KEY_VAR: &str = "OPENROUTER_API_KEY";

/// Errors that can occur during credential resolution
#[derive(Error, Debug)]
pub enum CredentialsError {
    #[error(
        "No API credentials found. Set OPENAI_BASE_URL/OPENAI_API_KEY \
         or OPENROUTER_BASE_URL/OPENROUTER_API_KEY."
    )]
    NotFound,
}

/// A resolved (base-URL, API key) pair (Value Object)
///
/// The key is secret: the `Debug` impl redacts it and nothing in this
/// workspace logs or echoes it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    base_url: String,
    api_key: String,
}

impl Credentials {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Read-only access to named configuration entries.
pub trait CredentialLookup {
    /// Value of the named entry, or `None` if unset.
    fn get(&self, name: &str) -> Option<String>;
}

/// Resolve credentials from the configured sources.
///
/// The primary pair wins when BOTH entries are present and non-empty;
/// otherwise the secondary pair is tried under the same rule. Partial
/// pairs are discarded. Runs once per invocation, no retry. A miss is
/// fatal and must be reported before any network attempt.
pub fn resolve_credentials(
    lookup: &dyn CredentialLookup,
) -> Result<Credentials, CredentialsError> {
    let pairs = [
        (PRIMARY_BASE_URL_VAR, PRIMARY_API_KEY_VAR),
        (SECONDARY_BASE_URL_VAR, SECONDARY_API_KEY_VAR),
    ];

    for (url_var, key_var) in pairs {
        let base_url = lookup.get(url_var).filter(|v| !v.is_empty());
        let api_key = lookup.get(key_var).filter(|v| !v.is_empty());

        if let (Some(base_url), Some(api_key)) = (base_url, api_key) {
            return Ok(Credentials::new(base_url, api_key));
        }
    }

    Err(CredentialsError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapLookup(HashMap<&'static str, &'static str>);

    impl MapLookup {
        fn new(entries: &[(&'static str, &'static str)]) -> Self {
            Self(entries.iter().copied().collect())
        }
    }

    impl CredentialLookup for MapLookup {
        fn get(&self, name: &str) -> Option<String> {
            self.0.get(name).map(|v| v.to_string())
        }
    }

    #[test]
    fn test_primary_pair_wins() {
        let lookup = MapLookup::new(&[
            ("OPENAI_BASE_URL", "https://api.openai.com/v1"),
            ("OPENAI_API_KEY", "sk-primary"),
            ("OPENROUTER_BASE_URL", "https://openrouter.ai/api/v1"),
            ("OPENROUTER_API_KEY", "sk-or-secondary"),
        ]);

        let creds = resolve_credentials(&lookup).unwrap();
        assert_eq!(creds.base_url(), "https://api.openai.com/v1");
        assert_eq!(creds.api_key(), "sk-primary");
    }

    #[test]
    fn test_secondary_pair_alone_resolves() {
        let lookup = MapLookup::new(&[
            ("OPENROUTER_BASE_URL", "https://openrouter.ai/api/v1"),
            ("OPENROUTER_API_KEY", "sk-or-secondary"),
        ]);

        let creds = resolve_credentials(&lookup).unwrap();
        assert_eq!(creds.base_url(), "https://openrouter.ai/api/v1");
        assert_eq!(creds.api_key(), "sk-or-secondary");
    }

    #[test]
    fn test_partial_primary_falls_back_to_secondary() {
        // Primary URL set but primary key empty: the pair is discarded.
        let lookup = MapLookup::new(&[
            ("OPENAI_BASE_URL", "https://api.openai.com/v1"),
            ("OPENAI_API_KEY", ""),
            ("OPENROUTER_BASE_URL", "https://openrouter.ai/api/v1"),
            ("OPENROUTER_API_KEY", "sk-or-secondary"),
        ]);

        let creds = resolve_credentials(&lookup).unwrap();
        assert_eq!(creds.base_url(), "https://openrouter.ai/api/v1");
        assert_eq!(creds.api_key(), "sk-or-secondary");
    }

    #[test]
    fn test_no_complete_pair_is_not_found() {
        let lookup = MapLookup::new(&[
            ("OPENAI_BASE_URL", "https://api.openai.com/v1"),
            ("OPENROUTER_API_KEY", "sk-or-secondary"),
        ]);

        let result = resolve_credentials(&lookup);
        assert!(matches!(result, Err(CredentialsError::NotFound)));
    }

    #[test]
    fn test_empty_environment_is_not_found() {
        let lookup = MapLookup::new(&[]);
        assert!(matches!(
            resolve_credentials(&lookup),
            Err(CredentialsError::NotFound)
        ));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let creds = Credentials::new("https://api.openai.com/v1", "sk-very-secret");
        let rendered = format!("{:?}", creds);
        assert!(!rendered.contains("sk-very-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
