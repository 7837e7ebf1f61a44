use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub jwt_secret: SecretString,
    pub storage_base_url: String,
    pub storage_service_key: SecretString,
    pub model_api_base: String,
    pub model_api_key: Option<SecretString>,
    pub model_name: String,
    pub model_temperature: f32,
    pub model_timeout_secs: u64,
    pub min_extract_chars: usize,
    pub max_prompt_chars: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "edupal-local".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            jwt_secret: SecretString::from(
                env::var("JWT_SECRET")
                    .unwrap_or_else(|_| "dev_secret_key_change_in_production".to_string()),
            ),
            storage_base_url: env::var("STORAGE_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:54321/storage/v1".to_string()),
            storage_service_key: SecretString::from(
                env::var("STORAGE_SERVICE_KEY").unwrap_or_else(|_| "storage_service_key".to_string()),
            ),
            model_api_base: env::var("MODEL_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            model_api_key: env::var("MODEL_API_KEY").ok().map(SecretString::from),
            model_name: env::var("MODEL_NAME").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            model_temperature: env::var("MODEL_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.2),
            model_timeout_secs: env::var("MODEL_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(120),
            min_extract_chars: env::var("MIN_EXTRACT_CHARS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(50),
            max_prompt_chars: env::var("MAX_PROMPT_CHARS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(100_000),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let jwt_secret = self.jwt_secret.expose_secret();
        let storage_key = self.storage_service_key.expose_secret();

        if jwt_secret == "dev_secret_key_change_in_production" {
            panic!(
                "FATAL: JWT_SECRET is using default value! Set JWT_SECRET environment variable to a secure random string."
            );
        }

        if jwt_secret.len() < 32 {
            panic!(
                "FATAL: JWT_SECRET is too short ({}). Must be at least 32 characters for security.",
                jwt_secret.len()
            );
        }

        if storage_key == "storage_service_key" {
            panic!(
                "FATAL: STORAGE_SERVICE_KEY is using default value! Set STORAGE_SERVICE_KEY environment variable."
            );
        }

        if self.model_api_key.is_none() {
            log::warn!("MODEL_API_KEY is not set; generation requests will be rejected with 503");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "edupal-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
            storage_base_url: "http://localhost:54321/storage/v1".to_string(),
            storage_service_key: SecretString::from("test_storage_key".to_string()),
            model_api_base: "http://localhost:11434/v1".to_string(),
            model_api_key: Some(SecretString::from("test_model_key".to_string())),
            model_name: "test-model".to_string(),
            model_temperature: 0.2,
            model_timeout_secs: 5,
            min_extract_chars: 50,
            max_prompt_chars: 100_000,
        }
    }
}
