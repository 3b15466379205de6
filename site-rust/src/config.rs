use crate::{SiteError, SiteResult};
use portfolio_sdk::{
    google::{GoogleModel, GoogleModelOptions},
    relay::{Web3FormsRelay, Web3FormsRelayOptions},
    FormRelay, LanguageModel,
};
use std::{path::PathBuf, sync::Arc, time::Duration};

pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const GEMINI_MODEL_VAR: &str = "GEMINI_MODEL";
pub const WEB3FORMS_KEY_VAR: &str = "WEB3FORMS_KEY";
pub const PREFS_PATH_VAR: &str = "PORTFOLIO_PREFS_PATH";
pub const REQUEST_TIMEOUT_VAR: &str = "PORTFOLIO_REQUEST_TIMEOUT_SECS";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
/// Sent when no relay key is configured; the relay rejects it server-side.
pub const PLACEHOLDER_WEB3FORMS_KEY: &str = "YOUR_ACCESS_KEY";
pub const DEFAULT_PREFS_PATH: &str = ".portfolio-prefs.json";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Externally supplied settings. Both credentials are optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub web3forms_key: String,
    pub prefs_path: PathBuf,
    pub request_timeout: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            web3forms_key: PLACEHOLDER_WEB3FORMS_KEY.to_string(),
            prefs_path: PathBuf::from(DEFAULT_PREFS_PATH),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl SiteConfig {
    /// Read the configuration from the process environment, loading a `.env`
    /// file first when one exists.
    pub fn from_env() -> SiteResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup. Empty values
    /// are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> SiteResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let request_timeout = match get(REQUEST_TIMEOUT_VAR) {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    SiteError::Config(format!(
                        "{REQUEST_TIMEOUT_VAR} must be a whole number of seconds, got '{raw}'"
                    ))
                })?;
                if secs == 0 {
                    return Err(SiteError::Config(format!(
                        "{REQUEST_TIMEOUT_VAR} must be greater than zero"
                    )));
                }
                Duration::from_secs(secs)
            }
            None => defaults.request_timeout,
        };

        Ok(Self {
            gemini_api_key: get(GEMINI_API_KEY_VAR),
            gemini_model: get(GEMINI_MODEL_VAR).unwrap_or(defaults.gemini_model),
            web3forms_key: get(WEB3FORMS_KEY_VAR).unwrap_or(defaults.web3forms_key),
            prefs_path: get(PREFS_PATH_VAR).map_or(defaults.prefs_path, PathBuf::from),
            request_timeout,
        })
    }

    pub fn http_client(&self) -> SiteResult<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.request_timeout)
            .build()
            .map_err(|error| SiteError::Config(format!("Failed to build HTTP client: {error}")))
    }

    /// The chat model, or `None` when no API key is configured.
    pub fn language_model(
        &self,
        client: &reqwest::Client,
    ) -> Option<Arc<dyn LanguageModel + Send + Sync>> {
        let api_key = self.gemini_api_key.clone()?;
        Some(Arc::new(GoogleModel::new(
            self.gemini_model.clone(),
            GoogleModelOptions {
                api_key,
                client: Some(client.clone()),
                ..Default::default()
            },
        )))
    }

    pub fn form_relay(&self, client: &reqwest::Client) -> Arc<dyn FormRelay + Send + Sync> {
        if self.web3forms_key == PLACEHOLDER_WEB3FORMS_KEY {
            tracing::warn!("{WEB3FORMS_KEY_VAR} is not set, contact form submissions will be rejected");
        }
        Arc::new(Web3FormsRelay::new(Web3FormsRelayOptions {
            access_key: self.web3forms_key.clone(),
            endpoint: None,
            client: Some(client.clone()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn missing_variables_fall_back_to_defaults() {
        let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.web3forms_key, PLACEHOLDER_WEB3FORMS_KEY);
        assert!(config.language_model(&reqwest::Client::new()).is_none());
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config =
            SiteConfig::from_lookup(lookup(&[(GEMINI_API_KEY_VAR, "  "), (WEB3FORMS_KEY_VAR, "")]))
                .unwrap();
        assert_eq!(config.gemini_api_key, None);
        assert_eq!(config.web3forms_key, PLACEHOLDER_WEB3FORMS_KEY);
    }

    #[test]
    fn reads_all_variables() {
        let config = SiteConfig::from_lookup(lookup(&[
            (GEMINI_API_KEY_VAR, "g-key"),
            (GEMINI_MODEL_VAR, "gemini-2.5-flash"),
            (WEB3FORMS_KEY_VAR, "w-key"),
            (PREFS_PATH_VAR, "/tmp/prefs.json"),
            (REQUEST_TIMEOUT_VAR, "5"),
        ]))
        .unwrap();
        assert_eq!(config.gemini_api_key.as_deref(), Some("g-key"));
        assert_eq!(config.gemini_model, "gemini-2.5-flash");
        assert_eq!(config.web3forms_key, "w-key");
        assert_eq!(config.prefs_path, PathBuf::from("/tmp/prefs.json"));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        let model = config.language_model(&reqwest::Client::new()).unwrap();
        assert_eq!(model.model_id(), "gemini-2.5-flash");
    }

    #[test]
    fn rejects_invalid_timeout() {
        for raw in ["soon", "0"] {
            let result = SiteConfig::from_lookup(lookup(&[(REQUEST_TIMEOUT_VAR, raw)]));
            assert!(matches!(result, Err(SiteError::Config(_))), "{raw}");
        }
    }
}
