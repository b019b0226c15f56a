use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Database used when `DATABASE_URL` is unset. `mode=rwc` creates the file.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://bookshelf.db?mode=rwc";

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    pub database_url: String,
    /// Directory that uploaded covers are written to and served from.
    pub media_root: PathBuf,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Largest accepted request body, cover included (default: 5 MiB).
    pub max_upload_bytes: usize,
    /// Load the sample catalog when the book list is viewed on a sparse
    /// database (default: `true`).
    pub auto_seed: bool,
    /// Session token signing configuration.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                          |
    /// |------------------------|----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                        |
    /// | `PORT`                 | `3000`                           |
    /// | `DATABASE_URL`         | `sqlite://bookshelf.db?mode=rwc` |
    /// | `MEDIA_ROOT`           | `media`                          |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                             |
    /// | `MAX_UPLOAD_BYTES`     | `5242880`                        |
    /// | `AUTO_SEED`            | `true`                           |
    ///
    /// See [`JwtConfig::from_env`] for the session variables.
    ///
    /// # Panics
    ///
    /// Panics with the variable name if a value fails to parse.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());

        let media_root =
            PathBuf::from(std::env::var("MEDIA_ROOT").unwrap_or_else(|_| "media".into()));

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| "5242880".into())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let auto_seed = std::env::var("AUTO_SEED")
            .map(|v| parse_flag(&v).expect("AUTO_SEED must be true/false/1/0/yes/no"))
            .unwrap_or(true);

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            database_url,
            media_root,
            request_timeout_secs,
            max_upload_bytes,
            auto_seed,
            jwt,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
