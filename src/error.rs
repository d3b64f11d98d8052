use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("transit error: {0}")]
    Transit(#[from] TransitError),

    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Startup configuration failures. These are fatal: the process refuses
/// to start rather than answering messages with a broken setup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("invalid timeout value {value:?}: {reason}")]
    InvalidTimeout { value: String, reason: String },
}

/// Failures of a single transit call. Never fatal; the orchestrator
/// turns each one into a reply string.
#[derive(Error, Debug)]
pub enum TransitError {
    #[error("network error: {0}")]
    Network(String),

    #[error("{op} returned http status {status}")]
    Status { op: &'static str, status: u16 },

    #[error("malformed {op} response: {reason}")]
    MalformedResponse { op: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("invalid base64: {0}")]
    InvalidBase64(String),

    #[error("decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(String),
}

pub type Result<T> = std::result::Result<T, Error>;
