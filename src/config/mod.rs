use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration, loaded from environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub email: EmailConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// Seconds between overdue-notice scans
    pub overdue_check_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    pub sendgrid_api_key: String,
    pub from_email: String,
    /// Public base URL embedded in email links
    pub app_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    pub rate_limit_per_minute: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                overdue_check_secs: env::var("OVERDUE_CHECK_SECS")
                    .unwrap_or_else(|_| "86400".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid OVERDUE_CHECK_SECS".to_string())
                    })?,
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            email: EmailConfig {
                sendgrid_api_key: env::var("SENDGRID_API_KEY")
                    .map_err(|_| AppError::Configuration("SENDGRID_API_KEY not set".to_string()))?,
                from_email: env::var("SENDGRID_FROM_EMAIL")
                    .unwrap_or_else(|_| "noreply@chargetax.example".to_string()),
                app_url: env::var("APP_URL")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            },
            security: SecurityConfig {
                rate_limit_per_minute: env::var("RATE_LIMIT_PER_MINUTE")
                    .unwrap_or_else(|_| "1000".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid RATE_LIMIT_PER_MINUTE".to_string())
                    })?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.app.overdue_check_secs == 0 {
            return Err(AppError::Configuration(
                "Overdue check interval must be greater than 0".to_string(),
            ));
        }

        if self.security.rate_limit_per_minute == 0 {
            return Err(AppError::Configuration(
                "Rate limit must be greater than 0".to_string(),
            ));
        }

        if self.email.sendgrid_api_key.trim().is_empty() {
            return Err(AppError::Configuration(
                "SendGrid API key cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
