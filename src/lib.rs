// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # bookbuddy
//!
//! "Similar book" recommendations over a small scraped catalog.
//!
//! ## Pipeline
//!
//! - **Fetch** (`fetch`): listing + detail pages via `ureq`, parsed with `scraper`
//! - **Cache** (`cache`): presence-check CSV cache of the raw records
//! - **Corpus** (`corpus`): field merging and blank-row removal
//! - **Index** (`index`): TF-IDF vectors and all-pairs cosine similarity
//! - **Engine** (`engine`): the context object holding corpus + index
//! - **Session** (`session`): the interactive prompt
//!
//! ## Library usage
//!
//! ```
//! use bookbuddy::config::IndexConfig;
//! use bookbuddy::engine::Engine;
//! use bookbuddy::model::BookRecord;
//!
//! let engine = Engine::from_records(
//!     vec![
//!         BookRecord::new("Book A", "Auth1", "space adventure"),
//!         BookRecord::new("Book B", "Auth2", "space opera saga"),
//!         BookRecord::new("Book C", "Auth3", "cooking recipes"),
//!     ],
//!     &IndexConfig::default(),
//! )
//! .unwrap();
//! let recs = engine.recommend("Book A", 5).unwrap();
//! assert_eq!(recs[0].title, "Book B");
//! ```

pub mod cache;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod fetch;
pub mod index;
pub mod model;
pub mod session;
