//! Rich diagnostic error types for bookbuddy.
//!
//! Each stage of the startup pipeline defines its own error type with miette
//! `#[diagnostic]` derives. [`StartupError`] collects everything that stops
//! the process from starting; [`QueryError`] is the only failure a running
//! session can produce, and it is always recoverable.

use miette::Diagnostic;
use thiserror::Error;

/// Everything that prevents bookbuddy from reaching the prompt.
#[derive(Debug, Error, Diagnostic)]
pub enum StartupError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Corpus(#[from] CorpusError),
}

// ---------------------------------------------------------------------------
// Fetch errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum FetchError {
    #[error("HTTP {status} from {url}")]
    #[diagnostic(
        code(bookbuddy::fetch::status),
        help(
            "The book listing could not be downloaded. Check the URL in the \
             [source] section of your config, or your internet connection."
        )
    )]
    Status { url: String, status: u16 },

    #[error("transport error fetching \"{url}\": {message}")]
    #[diagnostic(
        code(bookbuddy::fetch::transport),
        help("The host could not be reached. Check that the network is available.")
    )]
    Transport { url: String, message: String },

    #[error("failed to read response body from \"{url}\": {message}")]
    #[diagnostic(
        code(bookbuddy::fetch::body),
        help("The server closed the connection or sent a body that is not valid text.")
    )]
    Body { url: String, message: String },

    #[error("failed to start {workers} fetch workers: {message}")]
    #[diagnostic(
        code(bookbuddy::fetch::pool),
        help("Lower `workers` in the [source] section of your config.")
    )]
    WorkerPool { workers: usize, message: String },
}

// ---------------------------------------------------------------------------
// Cache errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum CacheError {
    #[error("failed to read book cache {path}: {message}")]
    #[diagnostic(
        code(bookbuddy::cache::read),
        help(
            "The cache file exists but could not be parsed. Delete it to \
             re-fetch the catalog on the next run."
        )
    )]
    Read { path: String, message: String },

    #[error("failed to write book cache {path}: {message}")]
    #[diagnostic(
        code(bookbuddy::cache::write),
        help("Check that the cache directory exists and is writable.")
    )]
    Write { path: String, message: String },
}

// ---------------------------------------------------------------------------
// Corpus errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum CorpusError {
    #[error("no usable book records: all {discarded} row(s) had empty text")]
    #[diagnostic(
        code(bookbuddy::corpus::empty),
        help(
            "Every record had an empty title, author and description. If the \
             records came from the cache, delete the cache file and run again \
             so the catalog is scraped afresh."
        )
    )]
    Empty { discarded: usize },
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config: {path}")]
    #[diagnostic(
        code(bookbuddy::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {message}")]
    #[diagnostic(
        code(bookbuddy::config::parse),
        help("Check the TOML syntax in the config file.")
    )]
    Parse { path: String, message: String },

    #[error("invalid configuration: {message}")]
    #[diagnostic(code(bookbuddy::config::invalid), help("{message}"))]
    Invalid { message: String },
}

// ---------------------------------------------------------------------------
// Query errors
// ---------------------------------------------------------------------------

/// A failed lookup at the prompt. The session reports it and keeps going.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum QueryError {
    #[error("book not found: \"{title}\"")]
    #[diagnostic(
        code(bookbuddy::query::not_found),
        help("Titles must match exactly, including capitalization.")
    )]
    TitleNotFound { title: String },
}

pub type StartupResult<T> = std::result::Result<T, StartupError>;
pub type FetchResult<T> = std::result::Result<T, FetchError>;
pub type CacheResult<T> = std::result::Result<T, CacheError>;
pub type CorpusResult<T> = std::result::Result<T, CorpusError>;
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
pub type QueryResult<T> = std::result::Result<T, QueryError>;
