use thiserror::Error;
use tonic::Status;

/// Broker-wide error type.
///
/// Configuration and storage failures during startup are fatal; the same
/// kinds occurring at steady state are logged at the call site and the
/// offending operation is abandoned.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("subscription does not exist")]
    SubscriptionNotFound,

    #[error("subscription already exists")]
    SubscriptionExists,

    #[error("subscription is already in use")]
    SubscriptionInUse,

    #[error("could not start streaming, subscription is already active")]
    StreamAlreadyActive,

    #[error("could not stop streaming, subscription is not active")]
    StreamNotActive,

    #[error("invalid topic pattern {pattern:?}: {source}")]
    InvalidTopicPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("transport: {0}")]
    Transport(#[from] tonic::transport::Error),
}

/// Failures of the record stores. Every store operation surfaces this single
/// kind regardless of whether the underlying cause was I/O or serialization.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage codec: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("invalid record key {0:?}")]
    InvalidKey(String),
}

impl From<Error> for Status {
    fn from(err: Error) -> Self {
        match &err {
            Error::SubscriptionNotFound => Status::not_found(err.to_string()),
            Error::StreamAlreadyActive | Error::StreamNotActive | Error::SubscriptionInUse => {
                Status::failed_precondition(err.to_string())
            }
            Error::SubscriptionExists => Status::already_exists(err.to_string()),
            Error::InvalidTopicPattern { .. } => Status::invalid_argument(err.to_string()),
            _ => Status::internal(err.to_string()),
        }
    }
}
