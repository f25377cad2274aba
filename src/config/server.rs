use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

/// HTTP server binding configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let workers_default = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(2);

        Ok(ServerConfig {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("Invalid SERVER_PORT".to_string()))?,
            workers: env::var("SERVER_WORKERS")
                .map(|v| {
                    v.parse()
                        .map_err(|_| AppError::Configuration("Invalid SERVER_WORKERS".to_string()))
                })
                .unwrap_or(Ok(workers_default))?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
