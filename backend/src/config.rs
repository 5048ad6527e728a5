use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::Uri;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_STATIC_ROOT: &str = "web";
pub const DEFAULT_ENTRY_DOCUMENT: &str = "/index.html";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_ADDR must be a socket address like 127.0.0.1:3000, got '{0}'")]
    InvalidBindAddr(String),
    #[error("ENTRY_DOCUMENT must be an absolute path like /index.html, got '{0}'")]
    InvalidEntryDocument(String),
}

/// Runtime settings for the static server, read from the environment
/// (a `.env` file is loaded first if present).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub static_root: PathBuf,
    pub entry_document: Uri,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr.clone()))?;

        let static_root = lookup("STATIC_ROOT")
            .filter(|root| !root.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STATIC_ROOT.to_string());

        let entry_document = lookup("ENTRY_DOCUMENT")
            .unwrap_or_else(|| DEFAULT_ENTRY_DOCUMENT.to_string());
        if !entry_document.starts_with('/') {
            return Err(ConfigError::InvalidEntryDocument(entry_document));
        }
        let entry_document = entry_document
            .parse::<Uri>()
            .map_err(|_| ConfigError::InvalidEntryDocument(entry_document.clone()))?;

        Ok(Self {
            bind_addr,
            static_root: PathBuf::from(static_root),
            entry_document,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = ServerConfig::from_vars(lookup_in(&[])).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.static_root, PathBuf::from("web"));
        assert_eq!(config.entry_document.path(), "/index.html");
    }

    #[test]
    fn overrides_are_read() {
        let config = ServerConfig::from_vars(lookup_in(&[
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("STATIC_ROOT", "/srv/site"),
            ("ENTRY_DOCUMENT", "/static/index.html"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.static_root, PathBuf::from("/srv/site"));
        assert_eq!(config.entry_document.path(), "/static/index.html");
    }

    #[test]
    fn blank_static_root_falls_back_to_default() {
        let config = ServerConfig::from_vars(lookup_in(&[("STATIC_ROOT", "  ")])).unwrap();
        assert_eq!(config.static_root, PathBuf::from("web"));
    }

    #[test]
    fn bad_bind_addr_is_rejected() {
        let err = ServerConfig::from_vars(lookup_in(&[("BIND_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr(addr) if addr == "localhost"));
    }

    #[test]
    fn relative_entry_document_is_rejected() {
        let err =
            ServerConfig::from_vars(lookup_in(&[("ENTRY_DOCUMENT", "index.html")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEntryDocument(_)));
    }
}
