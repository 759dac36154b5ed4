//! Database connection settings.

use std::fmt;

use crate::error::{AppError, ErrorKind};

/// Where and as whom to connect for the catalog query.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
    /// Accept the server certificate without validation.
    pub trust_cert: bool,
}

impl DbConfig {
    /// Build from resolved CLI/env values; a password must have been given.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        database: impl Into<String>,
        username: impl Into<String>,
        password: Option<String>,
        trust_cert: bool,
    ) -> Result<Self, AppError> {
        let password = password.filter(|p| !p.is_empty()).ok_or_else(|| {
            AppError::new(
                ErrorKind::Config,
                "Missing database password (--db-password or GCAT_DB_PASSWORD in environment/.env).",
            )
        })?;
        let host = host.into();
        if host.trim().is_empty() {
            return Err(AppError::new(ErrorKind::Config, "Database host must not be empty."));
        }
        Ok(Self {
            host,
            port,
            database: database.into(),
            username: username.into(),
            password,
            trust_cert,
        })
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("trust_cert", &self.trust_cert)
            .finish()
    }
}
