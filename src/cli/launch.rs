//! Resolve the settings a chat or one-shot session starts with.

use std::sync::Arc;

use crate::api::client::{GeminiClient, ModelClient};
use crate::core::config::data::Config;
use crate::core::constants::BASE_URL_ENV;
use crate::utils::url::normalize_base_url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSettings {
    pub model: String,
    pub base_url: String,
    pub system_instruction: String,
}

impl LaunchSettings {
    /// `-m` beats the config file for the model; `GEMINI_BASE_URL` beats the
    /// config file for the base URL. Blank overrides are ignored.
    pub fn resolve(config: &Config, model_flag: Option<&str>, env_base_url: Option<&str>) -> Self {
        let model = non_blank(model_flag).unwrap_or_else(|| config.model().to_string());
        let base_url = non_blank(env_base_url).unwrap_or_else(|| config.base_url().to_string());

        Self {
            model,
            base_url: normalize_base_url(&base_url),
            system_instruction: config.system_instruction().to_string(),
        }
    }

    pub fn from_environment(config: &Config, model_flag: Option<&str>) -> Self {
        let env_base_url = std::env::var(BASE_URL_ENV).ok();
        Self::resolve(config, model_flag, env_base_url.as_deref())
    }

    pub fn client(&self, api_key: &str) -> Arc<dyn ModelClient> {
        Arc::new(GeminiClient::new(self.base_url.clone(), api_key))
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_SYSTEM_INSTRUCTION};

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let settings = LaunchSettings::resolve(&Config::default(), None, None);
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.system_instruction, DEFAULT_SYSTEM_INSTRUCTION);
    }

    #[test]
    fn flag_and_environment_override_config() {
        let config = Config {
            model: Some("config-model".into()),
            base_url: Some("http://config.test/v1beta".into()),
            system_instruction: Some("be terse".into()),
        };

        let settings = LaunchSettings::resolve(&config, None, None);
        assert_eq!(settings.model, "config-model");
        assert_eq!(settings.base_url, "http://config.test/v1beta");
        assert_eq!(settings.system_instruction, "be terse");

        let settings =
            LaunchSettings::resolve(&config, Some("flag-model"), Some("http://env.test/v1beta/"));
        assert_eq!(settings.model, "flag-model");
        assert_eq!(settings.base_url, "http://env.test/v1beta");
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let settings = LaunchSettings::resolve(&Config::default(), Some("  "), Some(""));
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }
}
