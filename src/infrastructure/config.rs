use serde::Deserialize;

const MISSING_API_SETTINGS: &str =
    "You must set the REPORT_RESULTS_API_KEY and REPORT_RESULTS_API_ENDPOINT environment variables.";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_endpoint: String,
    #[serde(default = "default_query_file")]
    pub query_file: String,
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
    /// Replace transport fault text with a fixed message before it reaches the caller.
    #[serde(default)]
    pub redact_transport_faults: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    pub fn new(api_key: impl Into<String>, api_endpoint: impl Into<String>) -> Self {
        Self {
            app: AppConfig::default(),
            api_key: api_key.into(),
            api_endpoint: api_endpoint.into(),
            query_file: default_query_file(),
            templates_dir: default_templates_dir(),
            redact_transport_faults: false,
        }
    }

    pub fn from_env() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("REPORT_RESULTS")
                    .prefix_separator("_")
                    .separator("__"),
            );
        let cfg = builder.build()?;
        let config: Config = cfg.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.api_key.trim().is_empty() || self.api_endpoint.trim().is_empty() {
            return Err(config::ConfigError::Message(MISSING_API_SETTINGS.into()));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_query_file() -> String {
    "report_check_query.graphql".to_string()
}

fn default_templates_dir() -> String {
    "templates".to_string()
}
