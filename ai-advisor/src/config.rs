use thiserror::Error;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const MODEL_VAR: &str = "OPENAI_MODEL";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing environment variable: '{0}'")]
    MissingVar(&'static str),
}

/// Advisor configuration, built once at process start and passed by reference
/// into every collaborator. No hidden process-wide client state.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub api_key: String,
    pub model: String,
}

impl AdvisorConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_owned(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Reads the api key (required) and model (optional) from the
    /// environment.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| Error::MissingVar(API_KEY_VAR))?;
        let model = std::env::var(MODEL_VAR).unwrap_or_else(|_| DEFAULT_MODEL.to_owned());
        Ok(Self { api_key, model })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_env_reports_missing_key() {
        std::env::remove_var(API_KEY_VAR);
        let err = AdvisorConfig::from_env().expect_err("key is unset");
        assert!(err.to_string().contains(API_KEY_VAR));
    }

    #[test]
    fn test_builder_defaults_and_override() {
        let config = AdvisorConfig::new("sk-test");
        assert_eq!(config.model, DEFAULT_MODEL);
        let config = config.with_model("gpt-4");
        assert_eq!(config.model, "gpt-4");
        assert_eq!(config.api_key, "sk-test");
    }
}
