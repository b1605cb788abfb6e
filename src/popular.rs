//! Fetch, cache and render state of the popular-repositories view.
//!
//! [`PopularState`] is driven by two calls: [`PopularState::select`] when the
//! user picks a language (it tells the caller whether a fetch must be issued)
//! and [`PopularState::resolve`] when that fetch completes. Rendering reads
//! [`PopularState::status`], which is derived from the stored fields every time.

use crate::error::{FetchError, FETCH_FAILURE_MESSAGE};
use crate::language::Language;
use crate::log::{log_event, LogLevel};
use crate::repository::Repository;
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// Results per language. Entries are only ever added; every insert produces a
/// new map and leaves earlier snapshots untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultCache {
    entries: Rc<HashMap<Language, Rc<Vec<Repository>>>>,
}

impl ResultCache {
    pub fn get(&self, language: Language) -> Option<&Rc<Vec<Repository>>> {
        self.entries.get(&language)
    }

    pub fn contains(&self, language: Language) -> bool {
        self.entries.contains_key(&language)
    }

    #[must_use]
    pub fn with_entry(&self, language: Language, repos: Vec<Repository>) -> Self {
        let mut next = (*self.entries).clone();
        next.insert(language, Rc::new(repos));
        Self {
            entries: Rc::new(next),
        }
    }
}

/// What the view shows below the language navigation.
#[derive(Clone, Debug, PartialEq)]
pub enum Status {
    Loading,
    Failed(String),
    Ready(Rc<Vec<Repository>>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct PopularState {
    selected: Language,
    cache: ResultCache,
    error: Option<String>,
    in_flight: HashSet<Language>,
    log_level: LogLevel,
}

impl PopularState {
    pub fn new(log_level: LogLevel) -> Self {
        Self {
            selected: Language::default(),
            cache: ResultCache::default(),
            error: None,
            in_flight: HashSet::new(),
            log_level,
        }
    }

    pub fn selected(&self) -> Language {
        self.selected
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Switches to `language` and clears any error. Returns the language to
    /// fetch when nothing is cached or pending for it.
    pub fn select(&mut self, language: Language) -> Option<Language> {
        self.selected = language;
        self.error = None;

        log_event(
            self.log_level,
            LogLevel::Debug,
            "popular_select",
            json!({ "language": language.as_str() }),
        );

        if self.cache.contains(language) {
            log_event(
                self.log_level,
                LogLevel::Debug,
                "popular_cache_hit",
                json!({ "language": language.as_str() }),
            );
            return None;
        }

        if !self.in_flight.insert(language) {
            return None;
        }

        log_event(
            self.log_level,
            LogLevel::Info,
            "popular_fetch_start",
            json!({ "language": language.as_str() }),
        );
        Some(language)
    }

    /// Records the outcome of a fetch started by [`select`](Self::select).
    ///
    /// Results are cached even when the user has moved on. A failure always
    /// sets the error message and never caches anything.
    pub fn resolve(&mut self, language: Language, outcome: Result<Vec<Repository>, FetchError>) {
        self.in_flight.remove(&language);

        match outcome {
            Ok(repos) => {
                log_event(
                    self.log_level,
                    LogLevel::Info,
                    "popular_fetch_ok",
                    json!({
                        "language": language.as_str(),
                        "count": repos.len(),
                        "selected": language == self.selected,
                    }),
                );
                self.cache = self.cache.with_entry(language, repos);
            }
            Err(error) => {
                log_event(
                    self.log_level,
                    LogLevel::Warn,
                    "popular_fetch_failed",
                    json!({
                        "language": language.as_str(),
                        "error_class": error.class(),
                        "message": error.to_string(),
                        "selected": language == self.selected,
                    }),
                );
                self.error = Some(FETCH_FAILURE_MESSAGE.to_string());
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        !self.cache.contains(self.selected) && self.error.is_none()
    }

    pub fn status(&self) -> Status {
        match (self.error.as_ref(), self.cache.get(self.selected)) {
            (Some(message), _) => Status::Failed(message.clone()),
            (None, Some(repos)) => Status::Ready(Rc::clone(repos)),
            (None, None) => Status::Loading,
        }
    }
}

impl Default for PopularState {
    fn default() -> Self {
        Self::new(LogLevel::Warn)
    }
}
