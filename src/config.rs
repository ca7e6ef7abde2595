//! Runtime configuration, optionally loaded from a TOML file.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! stock Goodreads "Best Books Ever" setup with a `scraped_books.csv` cache in
//! the working directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

/// Where and how the catalog is scraped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Listing page holding `.bookTitle` / `.authorName` elements.
    #[serde(default = "default_listing_url")]
    pub listing_url: String,
    /// Prefix joined to each relative `href` on the listing page.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Upper bound on books taken from the listing.
    #[serde(default = "default_max_books")]
    pub max_books: usize,
    /// Size of the detail-page worker pool.
    #[serde(default = "default_workers")]
    pub workers: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Vocabulary cap; the most frequent terms are kept.
    #[serde(default = "default_max_features")]
    pub max_features: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Compared case-insensitively against the trimmed input line.
    #[serde(default = "default_exit_keyword")]
    pub exit_keyword: String,
}

fn default_listing_url() -> String {
    "https://www.goodreads.com/list/show/1.Best_Books_Ever".into()
}
fn default_base_url() -> String {
    "https://www.goodreads.com".into()
}
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
        .into()
}
fn default_max_books() -> usize {
    50
}
fn default_workers() -> usize {
    10
}
fn default_cache_path() -> PathBuf {
    PathBuf::from("scraped_books.csv")
}
fn default_max_features() -> usize {
    50_000
}
fn default_top_k() -> usize {
    5
}
fn default_exit_keyword() -> String {
    "exit".into()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            listing_url: default_listing_url(),
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            max_books: default_max_books(),
            workers: default_workers(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: default_cache_path(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_features: default_max_features(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            exit_keyword: default_exit_keyword(),
        }
    }
}

impl Config {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let positive = [
            ("source.max_books", self.source.max_books),
            ("source.workers", self.source.workers),
            ("index.max_features", self.index.max_features),
            ("query.top_k", self.query.top_k),
        ];
        for (name, value) in positive {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    message: format!("`{name}` must be greater than 0"),
                });
            }
        }
        if self.query.exit_keyword.trim().is_empty() {
            return Err(ConfigError::Invalid {
                message: "`query.exit_keyword` must not be empty".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_setup() {
        let config = Config::default();
        assert_eq!(config.source.max_books, 50);
        assert_eq!(config.source.workers, 10);
        assert_eq!(config.index.max_features, 50_000);
        assert_eq!(config.query.top_k, 5);
        assert_eq!(config.query.exit_keyword, "exit");
        assert_eq!(config.cache.path, PathBuf::from("scraped_books.csv"));
        assert!(config.source.user_agent.starts_with("Mozilla/5.0"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [source]
            workers = 4

            [query]
            top_k = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.source.workers, 4);
        assert_eq!(config.source.max_books, 50);
        assert_eq!(config.query.top_k, 3);
        assert_eq!(config.query.exit_keyword, "exit");
    }

    #[test]
    fn zero_workers_is_invalid() {
        let mut config = Config::default();
        config.source.workers = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref message } if message.contains("workers")));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bookbuddy.toml");
        std::fs::write(&path, "[cache]\npath = \"books.csv\"\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.cache.path, PathBuf::from("books.csv"));
    }

    #[test]
    fn load_rejects_bad_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bookbuddy.toml");
        std::fs::write(&path, "[source\nworkers = ").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = Config::load(Path::new("/nonexistent/bookbuddy.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
