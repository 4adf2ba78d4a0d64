use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub inference: InferenceConfig,
    pub voting: VotingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Hosted transformer and NER models
#[derive(Debug, Deserialize, Clone)]
pub struct InferenceConfig {
    pub api_url: String,
    pub api_token: String,
    pub sentiment_model: String,
    pub ner_model: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct VotingConfig {
    pub threshold: f64,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("inference.api_url", "https://api-inference.huggingface.co")?
            .set_default("inference.api_token", "")?
            .set_default(
                "inference.sentiment_model",
                "distilbert-base-uncased-finetuned-sst-2-english",
            )?
            .set_default("inference.ner_model", "dslim/bert-base-NER")?
            .set_default("inference.timeout_seconds", 30)?
            .set_default("voting.threshold", bias_core::DEFAULT_THRESHOLD)?
            // Load from config file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // Override with environment variables (BIAS__VOTING__THRESHOLD, etc.)
            .add_source(
                Environment::with_prefix("BIAS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.voting.threshold;
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::Message(format!(
                "voting.threshold must be within [0, 1], got {}",
                threshold
            )));
        }
        if self.inference.api_url.trim().is_empty() {
            return Err(ConfigError::Message("inference.api_url cannot be empty".into()));
        }
        Ok(())
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        inference: InferenceConfig {
            // Nothing listens here; tests never reach the network
            api_url: "http://127.0.0.1:9".to_string(),
            api_token: String::new(),
            sentiment_model: "test-sentiment".to_string(),
            ner_model: "test-ner".to_string(),
            timeout_seconds: 1,
        },
        voting: VotingConfig { threshold: 0.3 },
    }
}
