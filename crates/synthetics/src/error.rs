use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

use crate::config::ConfigError;

/// Failure below HTTP: DNS, connect, TLS, timeout.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    #[error("Network error: {0}")]
    Network(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("HTTP {status} from {path}: {body}")]
    Remote {
        status: StatusCode,
        path: String,
        body: String,
    },
    /// 404 on create, update or delete: the object the call targets does
    /// not exist.
    #[error("{path} answered 404; the object does not exist")]
    NotFoundOnMutation { path: String },
    #[error("Delete was not acknowledged: {0}")]
    DeleteRejected(String),
    #[error("Invalid JSON body: {0}")]
    Decode(#[source] serde_json::Error),
    /// The body decoded but its `type` tag names another check subtype.
    #[error("Expected a {expected} check, the service returned {found:?}")]
    KindMismatch {
        expected: &'static str,
        found: String,
    },
    #[error("Could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("API key is not a valid header value")]
    InvalidApiKey,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// How many search matches a data source accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    ExactlyOne,
    AtLeastOne,
    Any,
}

impl Cardinality {
    pub fn accepts(self, found: usize) -> bool {
        match self {
            Cardinality::ExactlyOne => found == 1,
            Cardinality::AtLeastOne => found >= 1,
            Cardinality::Any => true,
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cardinality::ExactlyOne => f.write_str("exactly one"),
            Cardinality::AtLeastOne => f.write_str("at least one"),
            Cardinality::Any => f.write_str("any number of"),
        }
    }
}

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("Expected {expected} {resource} matching {query:?}, found {found}")]
    Cardinality {
        resource: &'static str,
        query: String,
        expected: Cardinality,
        found: usize,
    },
    #[error("Import id {0:?} is not an integer")]
    InvalidImportId(String),
    #[error("No {resource} with id {id}")]
    NotFound { resource: &'static str, id: i64 },
}

impl AdapterError {
    /// Errors the user can fix by changing the query or id, as opposed to
    /// failures talking to the service.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AdapterError::Cardinality { .. }
                | AdapterError::InvalidImportId(_)
                | AdapterError::NotFound { .. }
        )
    }
}
