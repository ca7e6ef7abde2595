//! End-to-end tests for the bookbuddy pipeline.
//!
//! These run the full startup path (cache-or-fetch, normalization, index
//! build) against in-process sources and a temporary cache directory, then
//! drive the interactive session.

use std::cell::Cell;
use std::collections::HashMap;

use bookbuddy::config::Config;
use bookbuddy::engine::Engine;
use bookbuddy::error::{CorpusError, FetchError, FetchResult, StartupError};
use bookbuddy::fetch::{BookSource, DESCRIPTION_UNAVAILABLE, PageFetcher, Scraper};
use bookbuddy::model::BookRecord;
use bookbuddy::session::{Reply, Session, SessionState};

/// Canned records that count how often they are requested.
struct CountingSource {
    records: Vec<BookRecord>,
    calls: Cell<usize>,
}

impl CountingSource {
    fn new(records: Vec<BookRecord>) -> Self {
        Self {
            records,
            calls: Cell::new(0),
        }
    }
}

impl BookSource for CountingSource {
    fn fetch_books(&self) -> FetchResult<Vec<BookRecord>> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.records.clone())
    }
}

struct FailingSource;

impl BookSource for FailingSource {
    fn fetch_books(&self) -> FetchResult<Vec<BookRecord>> {
        Err(FetchError::Status {
            url: "https://books.test/list".into(),
            status: 500,
        })
    }
}

struct CannedPages(HashMap<String, String>);

impl PageFetcher for CannedPages {
    fn get(&self, url: &str) -> FetchResult<String> {
        self.0.get(url).cloned().ok_or_else(|| FetchError::Transport {
            url: url.into(),
            message: "connection refused".into(),
        })
    }
}

fn config_in(dir: &std::path::Path) -> Config {
    let mut config = Config::default();
    config.cache.path = dir.join("scraped_books.csv");
    config.source.listing_url = "https://books.test/list".into();
    config.source.base_url = "https://books.test".into();
    config
}

fn catalog() -> Vec<BookRecord> {
    vec![
        BookRecord::new("Dune", "Frank Herbert", "Desert planet, spice, and a galactic empire."),
        BookRecord::new("Foundation", "Isaac Asimov", "A galactic empire falls; a plan to save it."),
        BookRecord::new("Hyperion", "Dan Simmons", "Pilgrims cross a galactic hegemony."),
        BookRecord::new("Emma", "Jane Austen", "Matchmaking in a quiet English village."),
        BookRecord::new("Persuasion", "Jane Austen", "A second chance at love in an English town."),
        BookRecord::new("Beloved", "Toni Morrison", "A haunted house after slavery."),
        BookRecord::new("The Road", "Cormac McCarthy", "Father and son cross a burned planet."),
        BookRecord::new("", "", ""),
    ]
}

#[test]
fn bootstrap_fetches_then_reuses_cache() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = config_in(dir.path());

    let source = CountingSource::new(catalog());
    let first = Engine::bootstrap(&config, &source).unwrap();
    assert_eq!(source.calls.get(), 1);
    assert!(config.cache.path.exists());

    // Second run: the cache is present, the source must not be touched.
    let second = Engine::bootstrap(&config, &FailingSource).unwrap();
    assert_eq!(first.corpus().entries(), second.corpus().entries());
    assert_eq!(
        first.recommend("Dune", 5).unwrap(),
        second.recommend("Dune", 5).unwrap()
    );
}

#[test]
fn cache_round_trip_preserves_records() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = config_in(dir.path());

    Engine::bootstrap(&config, &CountingSource::new(catalog())).unwrap();
    let cached = bookbuddy::cache::CacheStore::new(&config.cache.path)
        .load()
        .unwrap();
    assert_eq!(cached, catalog());
}

#[test]
fn blank_rows_are_dropped_from_the_corpus() {
    let engine = Engine::from_records(catalog(), &Config::default().index).unwrap();
    assert_eq!(engine.corpus().len(), 7);
}

#[test]
fn failed_listing_aborts_startup_without_cache() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = config_in(dir.path());

    let err = Engine::bootstrap(&config, &FailingSource).err().unwrap();
    assert!(matches!(err, StartupError::Fetch(FetchError::Status { status: 500, .. })));
    assert!(!config.cache.path.exists());
}

#[test]
fn all_blank_catalog_aborts_startup() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = config_in(dir.path());
    let source = CountingSource::new(vec![BookRecord::default(); 4]);

    let err = Engine::bootstrap(&config, &source).err().unwrap();
    assert!(matches!(err, StartupError::Corpus(CorpusError::Empty { discarded: 4 })));
}

#[test]
fn similarity_matrix_is_symmetric_with_unit_diagonal() {
    let engine = Engine::from_records(catalog(), &Config::default().index).unwrap();
    let matrix = engine.index().matrix();
    for i in 0..matrix.size() {
        assert_eq!(matrix.get(i, i), 1.0);
        for j in 0..matrix.size() {
            assert_eq!(matrix.get(i, j), matrix.get(j, i));
            assert!((0.0..=1.0).contains(&matrix.get(i, j)));
        }
    }
}

#[test]
fn present_title_returns_five_others() {
    let engine = Engine::from_records(catalog(), &Config::default().index).unwrap();
    for entry in engine.corpus().entries() {
        let recs = engine.recommend(&entry.record.title, 5).unwrap();
        assert_eq!(recs.len(), 5);
        assert!(recs.iter().all(|r| r.title != entry.record.title));
        assert!(recs.windows(2).all(|w| w[0].score >= w[1].score));
    }
}

#[test]
fn galactic_books_recommend_each_other() {
    let engine = Engine::from_records(catalog(), &Config::default().index).unwrap();
    let recs = engine.recommend("Foundation", 5).unwrap();
    let top_two: Vec<&str> = recs[..2].iter().map(|r| r.title.as_str()).collect();
    assert!(top_two.contains(&"Dune"));
    assert!(top_two.contains(&"Hyperion"));
}

#[test]
fn scraper_feeds_the_engine() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = config_in(dir.path());

    let listing = r#"<html><body>
        <a class="bookTitle" href="/b/1"><span>Book A</span></a><a class="authorName"><span>Auth1</span></a>
        <a class="bookTitle" href="/b/2"><span>Book B</span></a><a class="authorName"><span>Auth2</span></a>
        <a class="bookTitle" href="/b/3"><span>Book C</span></a><a class="authorName"><span>Auth3</span></a>
    </body></html>"#;
    let detail = |text: &str| {
        format!(r#"<div id="description"><span>teaser</span><span>{text}</span></div>"#)
    };
    let pages = HashMap::from([
        ("https://books.test/list".to_string(), listing.to_string()),
        ("https://books.test/b/1".to_string(), detail("space adventure")),
        ("https://books.test/b/2".to_string(), detail("space opera saga")),
    ]);
    let scraper = Scraper::new(CannedPages(pages), config.source.clone());

    let engine = Engine::bootstrap(&config, &scraper).unwrap();
    let third = engine.corpus().get(2).unwrap();
    assert_eq!(third.record.description, DESCRIPTION_UNAVAILABLE);

    let recs = engine.recommend("Book A", 5).unwrap();
    assert_eq!(recs[0].title, "Book B");
    assert_eq!(recs[1].title, "Book C");
}

#[test]
fn session_reports_miss_and_continues() {
    let engine = Engine::from_records(catalog(), &Config::default().index).unwrap();
    let mut session = Session::new(&engine, Config::default().query);

    assert!(matches!(session.handle("dune"), Reply::NotFound { .. }));
    assert_eq!(session.state(), SessionState::Prompting);
    assert_eq!(engine.corpus().len(), 7);

    let Reply::Recommendations(recs) = session.handle("Dune") else {
        panic!("expected recommendations for Dune");
    };
    assert_eq!(recs.len(), 5);

    assert_eq!(session.handle("exit"), Reply::Goodbye);
    assert_eq!(session.state(), SessionState::Terminated);
}

#[test]
fn engines_over_different_corpora_coexist() {
    let space = Engine::from_records(
        vec![
            BookRecord::new("Book A", "Auth1", "space adventure"),
            BookRecord::new("Book B", "Auth2", "space opera saga"),
            BookRecord::new("Book C", "Auth3", "cooking recipes"),
        ],
        &Config::default().index,
    )
    .unwrap();
    let classics = Engine::from_records(catalog(), &Config::default().index).unwrap();

    assert!(space.recommend("Dune", 5).is_err());
    assert!(classics.recommend("Book A", 5).is_err());
    assert_eq!(space.recommend("Book A", 5).unwrap()[0].title, "Book B");
}
