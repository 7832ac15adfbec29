use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mongo_url: String,
    pub db_name: String,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set in the environment")]
    Missing(&'static str),

    #[error("Invalid {key} value `{value}`")]
    Invalid { key: &'static str, value: String },
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` when present, `.env` otherwise.
    pub fn load_env_files() {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let mongo_url = required("MONGO_URL")?;
        let db_name = required("DB_NAME")?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?,
            None => 8001,
        };

        Ok(Self {
            mongo_url,
            db_name,
            host,
            port,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
