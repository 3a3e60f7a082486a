use crate::middleware::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_namespace: String,
    pub db_database: String,
    pub db_password: Option<String>,
    pub db_username: Option<String>,
    pub db_url: String,
    pub is_development: bool,
    pub server_port: u16,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        let _ = dotenvy::dotenv();
        let db_namespace = std::env::var("DB_NAMESPACE").unwrap_or("namespace".to_string());
        let db_database = std::env::var("DB_DATABASE").unwrap_or("database".to_string());
        let db_password = std::env::var("DB_PASSWORD").ok();
        let db_username = std::env::var("DB_USERNAME").ok();
        let db_url = std::env::var("DB_URL").unwrap_or("mem://".to_string());

        let is_development = std::env::var("DEVELOPMENT")
            .map(|v| v.eq("true"))
            .unwrap_or(false);

        let server_port = match std::env::var("SERVER_PORT") {
            Ok(port) => port.parse::<u16>().map_err(|_| AppError::Generic {
                description: format!("SERVER_PORT must be a port number, got '{port}'"),
            })?,
            Err(_) => 8080,
        };

        Ok(Self {
            db_namespace,
            db_database,
            db_password,
            db_username,
            db_url,
            is_development,
            server_port,
        })
    }
}
