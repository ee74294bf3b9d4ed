//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::{HeaderValue, Method, header};
use storyseed_scale::domain::rules::RuleBook;
use tower_http::cors::CorsLayer;

use crate::error::AppError;

/// Validated server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Origin allowed to call the API from a browser.
    pub allowed_origin: String,
    /// Optional YAML rule book replacing the built-in scale rules.
    pub scale_rules_path: Option<PathBuf>,
}

impl Config {
    /// Reads `HOST`, `PORT`, `ALLOWED_ORIGIN` and `SCALE_RULES_PATH`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` is not a valid `u16`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;
        let allowed_origin =
            lookup("ALLOWED_ORIGIN").unwrap_or_else(|| "http://localhost:3000".to_string());
        let scale_rules_path = lookup("SCALE_RULES_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            allowed_origin,
            scale_rules_path,
        })
    }

    /// Returns the address to bind.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `HOST:PORT` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }

    /// Returns the CORS layer admitting the configured origin.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the origin is not a valid header value.
    pub fn cors_layer(&self) -> Result<CorsLayer, AppError> {
        let origin: HeaderValue = self
            .allowed_origin
            .parse()
            .map_err(|e| AppError::Config(format!("ALLOWED_ORIGIN is invalid: {e}")))?;
        Ok(CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]))
    }

    /// Loads the scale rule book: the YAML file when configured, the
    /// built-in tables otherwise.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Server` if the file can not be read and
    /// `AppError::Rules` if it does not parse.
    pub fn load_rule_book(&self) -> Result<RuleBook, AppError> {
        match &self.scale_rules_path {
            Some(path) => {
                let source = std::fs::read_to_string(path)?;
                Ok(RuleBook::from_yaml(&source)?)
            }
            None => Ok(RuleBook::builtin()),
        }
    }
}
