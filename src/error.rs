use crate::types::Season;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    NotFound(String),

    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid API key header value")]
    ApiKey(#[from] reqwest::header::InvalidHeaderValue),

    #[error("worker task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),

    #[error("IO error: {0}")]
    Io(#[from] IOError),

    #[error(transparent)]
    EnvVar(#[from] EnvVarError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    JSON(#[from] JSONError),
}

impl Error {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}

/// The one failure kind of an upstream call. Transport, status and decode
/// problems are all reported through it; `season` is set once the call is
/// part of a season fan-out.
#[derive(thiserror::Error, Debug)]
#[error("{}{cause}", match season { Some(s) => format!("season {s}: "), None => "".into() })]
pub struct FetchError {
    season: Option<Season>,
    #[source]
    cause: FetchCause,
}

#[derive(thiserror::Error, Debug)]
pub enum FetchCause {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed request to {endpoint}: {status}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    #[error("unexpected response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Other(String),
}

impl FetchError {
    pub fn new(cause: impl Into<FetchCause>) -> Self {
        Self {
            season: None,
            cause: cause.into(),
        }
    }

    pub fn status(endpoint: &str, status: reqwest::StatusCode) -> Self {
        Self::new(FetchCause::Status {
            endpoint: endpoint.into(),
            status,
        })
    }

    pub fn decode(endpoint: &str, source: serde_json::Error) -> Self {
        Self::new(FetchCause::Decode {
            endpoint: endpoint.into(),
            source,
        })
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self::new(FetchCause::Other(message.into()))
    }

    /// Tags the error with the season whose fetch failed.
    pub fn in_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    pub fn season(&self) -> Option<Season> {
        self.season
    }

    pub fn cause(&self) -> &FetchCause {
        &self.cause
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(source: reqwest::Error) -> Self {
        Self::new(source)
    }
}

#[derive(thiserror::Error, Debug)]
#[error("{source} ({file})")]
pub struct IOError {
    file: std::path::PathBuf,
    #[source]
    source: std::io::Error,
}

impl IOError {
    pub fn new(file: impl Into<std::path::PathBuf>, source: std::io::Error) -> Self {
        Self {
            file: file.into(),
            source,
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("{source} ({var})")]
pub struct EnvVarError {
    var: String,
    #[source]
    source: std::env::VarError,
}

impl EnvVarError {
    pub fn new(var: &str, source: std::env::VarError) -> Self {
        Self {
            var: var.into(),
            source,
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("{source} {}", match file { Some(f) => f.display().to_string(), None => "".into()})]
pub struct JSONError {
    file: Option<std::path::PathBuf>,
    #[source]
    source: serde_json::Error,
}

impl JSONError {
    pub fn new(file: Option<std::path::PathBuf>, source: serde_json::Error) -> Self {
        Self { file, source }
    }
}
