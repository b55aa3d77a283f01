//! Error types for fetching, parsing, card extraction and export
//!
//! A missing field is not an error anywhere in this crate: it becomes an
//! empty string. These types cover the failures that are either downgraded
//! (detail pages), skipped (cards) or surfaced (top-level fetches, exports).

use std::path::PathBuf;
use thiserror::Error;

/// Network or HTTP status failure from the transport
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("HTTP request failed: {url} - {message}")]
    Network { url: String, message: String },

    #[error("HTTP error {status}: {url}")]
    Status { url: String, status: u16 },

    #[error("Failed to read response body from {url}: {message}")]
    Body { url: String, message: String },
}

impl FetchError {
    pub fn network(url: &str, message: impl Into<String>) -> Self {
        Self::Network {
            url: url.to_string(),
            message: message.into(),
        }
    }

    pub fn status(url: &str, status: u16) -> Self {
        Self::Status {
            url: url.to_string(),
            status,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Network { url, .. } | Self::Status { url, .. } | Self::Body { url, .. } => url,
        }
    }
}

/// Raw document bytes that cannot be turned into a queryable tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("HTML parsing failed: document is empty")]
    EmptyDocument,
}

/// Unexpected structural problem while reading a single card
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardExtractionFailure {
    #[error("URL resolution failed: {href} against {base_url} - {reason}")]
    UrlResolution {
        href: String,
        base_url: String,
        reason: String,
    },
}

/// Failure while writing records to disk
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV encoding failed for {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("JSON encoding failed for {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Invalid or unloadable configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config from file: {source}")]
    Load {
        #[from]
        source: config::ConfigError,
    },

    #[error("Configuration validation failed: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Invalid CSS selector: {selector} - {reason}")]
    InvalidSelector { selector: String, reason: String },
}

impl ConfigError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type ExportResult<T> = Result<T, ExportError>;
