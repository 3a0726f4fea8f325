//! Session identity used to authenticate against the source admin API.
//!
//! The collector never reads ambient state directly; it asks a
//! [`SessionProvider`] for credentials so it can run without a real browser
//! session in tests.

use crate::AppConfig;

/// Credentials of an authenticated admin session.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCredentials {
    /// Merchant (store) identifier, part of every listing URL.
    pub merchant_id: String,
    /// Raw `Cookie` header value attached to every request.
    pub cookie: String,
}

impl std::fmt::Debug for SessionCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCredentials")
            .field("merchant_id", &self.merchant_id)
            .field("cookie", &"[redacted]")
            .finish()
    }
}

/// Source of session credentials for the collector.
///
/// Returning `None` means no session identity is resolvable; the collector
/// aborts before making any request.
pub trait SessionProvider {
    fn credentials(&self) -> Option<SessionCredentials>;
}

/// A provider holding fixed credentials, or none at all.
#[derive(Debug, Clone, Default)]
pub struct StaticSessionProvider {
    credentials: Option<SessionCredentials>,
}

impl StaticSessionProvider {
    #[must_use]
    pub fn new(merchant_id: &str, cookie: &str) -> Self {
        Self {
            credentials: Some(SessionCredentials {
                merchant_id: merchant_id.to_owned(),
                cookie: cookie.to_owned(),
            }),
        }
    }

    /// A provider that never yields credentials.
    #[must_use]
    pub fn unauthenticated() -> Self {
        Self::default()
    }

    /// Builds a provider from the configured merchant id and cookie.
    ///
    /// Both must be present; either one missing yields an unauthenticated
    /// provider.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        match (&config.merchant_id, &config.session_cookie) {
            (Some(merchant_id), Some(cookie)) => Self::new(merchant_id, cookie),
            _ => Self::unauthenticated(),
        }
    }
}

impl SessionProvider for StaticSessionProvider {
    fn credentials(&self) -> Option<SessionCredentials> {
        self.credentials.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn config(merchant_id: Option<&str>, cookie: Option<&str>) -> AppConfig {
        AppConfig {
            api_base_url: "http://localhost".to_string(),
            merchant_id: merchant_id.map(str::to_owned),
            session_cookie: cookie.map(str::to_owned),
            page_limit: 200,
            request_timeout_secs: 30,
            user_agent: "test".to_string(),
            output_dir: PathBuf::from("."),
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn from_config_with_both_values_yields_credentials() {
        let provider = StaticSessionProvider::from_config(&config(Some("m1"), Some("sid=1")));
        let creds = provider.credentials().expect("expected credentials");
        assert_eq!(creds.merchant_id, "m1");
        assert_eq!(creds.cookie, "sid=1");
    }

    #[test]
    fn from_config_without_cookie_is_unauthenticated() {
        let provider = StaticSessionProvider::from_config(&config(Some("m1"), None));
        assert!(provider.credentials().is_none());
    }

    #[test]
    fn from_config_without_merchant_is_unauthenticated() {
        let provider = StaticSessionProvider::from_config(&config(None, Some("sid=1")));
        assert!(provider.credentials().is_none());
    }

    #[test]
    fn debug_redacts_cookie() {
        let creds = SessionCredentials {
            merchant_id: "m1".to_string(),
            cookie: "sid=secret".to_string(),
        };
        assert!(!format!("{creds:?}").contains("secret"));
    }
}
