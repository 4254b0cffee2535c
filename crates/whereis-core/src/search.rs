// crates/whereis-core/src/search.rs

//! # Matcher
//!
//! Resolves a normalized query against a [`Directory`] in strict stage order;
//! the first stage that produces a winner is authoritative:
//!
//! 1. exact building code
//! 2. exact full name or alias
//! 3. best fuzzy similarity over names and aliases, above a threshold
//! 4. otherwise [`MatchResult::NotFound`]
//!
//! Ties are never broken by iteration order. Two records sharing the top fuzzy
//! score (or the same exact name) resolve to `NotFound`, and so does a bare
//! word that several names contain ("hall"). This is intentional: an
//! ambiguous query gets a "not found" reply instead of an arbitrary pick.

use crate::error::{DirectoryError, Result};
use crate::model::{Building, Directory};
use crate::traits::NameMatch;

/// Default minimum score for [`SimilarityMetric::SorensenDice`].
pub const DEFAULT_MIN_SCORE: f64 = 0.6;

/// Default minimum score for [`SimilarityMetric::JaroWinkler`].
pub const JARO_WINKLER_MIN_SCORE: f64 = 0.85;

/// Scores closer than this are treated as equal.
const SCORE_EPSILON: f64 = 1e-9;

/// Outcome of a resolution. Ambiguity collapses to `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MatchResult {
    /// Canonical code of the matched building.
    Resolved(String),
    NotFound,
}

impl MatchResult {
    pub fn code(&self) -> Option<&str> {
        match self {
            MatchResult::Resolved(code) => Some(code),
            MatchResult::NotFound => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, MatchResult::Resolved(_))
    }
}

/// Symmetric string similarity in `[0.0, 1.0]` used by the fuzzy stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SimilarityMetric {
    /// Bigram overlap (Sørensen–Dice coefficient), whitespace ignored.
    #[default]
    SorensenDice,
    /// Jaro-Winkler, favouring shared prefixes.
    JaroWinkler,
}

impl SimilarityMetric {
    #[inline]
    pub fn score(self, a: &str, b: &str) -> f64 {
        match self {
            SimilarityMetric::SorensenDice => strsim::sorensen_dice(a, b),
            SimilarityMetric::JaroWinkler => strsim::jaro_winkler(a, b),
        }
    }

    /// Threshold that rejects single shared letters but accepts small typos.
    pub fn default_min_score(self) -> f64 {
        match self {
            SimilarityMetric::SorensenDice => DEFAULT_MIN_SCORE,
            SimilarityMetric::JaroWinkler => JARO_WINKLER_MIN_SCORE,
        }
    }
}

/// Fuzzy-stage tuning.
///
/// Fields are private so every instance carries a threshold in `(0.0, 1.0]`;
/// the only way to change it is the checked [`MatchConfig::with_min_score`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    metric: SimilarityMetric,
    min_score: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::for_metric(SimilarityMetric::default())
    }
}

impl MatchConfig {
    pub fn for_metric(metric: SimilarityMetric) -> Self {
        Self {
            metric,
            min_score: metric.default_min_score(),
        }
    }

    /// Replace the threshold. It must be finite and in `(0.0, 1.0]`; zero
    /// would accept queries with no overlap at all.
    pub fn with_min_score(mut self, min_score: f64) -> Result<Self> {
        if min_score.is_finite() && min_score > 0.0 && min_score <= 1.0 {
            self.min_score = min_score;
            Ok(self)
        } else {
            Err(DirectoryError::InvalidThreshold(min_score))
        }
    }

    pub fn metric(&self) -> SimilarityMetric {
        self.metric
    }

    /// Scores strictly below this yield `NotFound`.
    pub fn min_score(&self) -> f64 {
        self.min_score
    }
}

/// Resolve an already-normalized `query` against `dir`.
///
/// Pure: reads `dir` only and touches no shared state.
pub fn match_query(query: &str, dir: &Directory, config: &MatchConfig) -> MatchResult {
    if query.is_empty() {
        return MatchResult::NotFound;
    }

    // 1. Exact code (codes are unique, so at most one hit)
    if let Some(b) = dir.buildings().find(|b| b.code_key == query) {
        tracing::debug!(query, code = %b.code, "matched on building code");
        return MatchResult::Resolved(b.code.clone());
    }

    // 2. Exact name / alias
    match single(dir.buildings().filter(|b| b.is_named_key(query))) {
        Unique::One(b) => {
            tracing::debug!(query, code = %b.code, "matched on name or alias");
            return MatchResult::Resolved(b.code.clone());
        }
        Unique::Many => {
            tracing::debug!(query, "name shared by several buildings; ambiguous");
            return MatchResult::NotFound;
        }
        Unique::Zero => {}
    }

    // 3. Fuzzy
    fuzzy_match(query, dir, config)
}

fn fuzzy_match(query: &str, dir: &Directory, config: &MatchConfig) -> MatchResult {
    if is_shared_word(query, dir) {
        tracing::debug!(query, "word appears in several building names; ambiguous");
        return MatchResult::NotFound;
    }

    let mut best: Option<(&Building, f64)> = None;
    let mut tied = false;

    for b in dir.buildings() {
        let score = b
            .match_keys()
            .map(|key| config.metric.score(query, key))
            .fold(0.0_f64, f64::max);

        match best {
            Some((_, top)) if (score - top).abs() <= SCORE_EPSILON => tied = true,
            Some((_, top)) if score < top => {}
            _ => {
                best = Some((b, score));
                tied = false;
            }
        }
    }

    let Some((b, score)) = best else {
        return MatchResult::NotFound;
    };

    if score < config.min_score {
        tracing::debug!(query, score, min_score = config.min_score, "best fuzzy score below threshold");
        return MatchResult::NotFound;
    }
    if tied {
        tracing::debug!(query, score, "several buildings share the top fuzzy score; ambiguous");
        return MatchResult::NotFound;
    }

    tracing::debug!(query, code = %b.code, score, "fuzzy match");
    MatchResult::Resolved(b.code.clone())
}

/// A single-word query that is a whole word of two or more buildings' names
/// or aliases ("hall", "building") names none of them in particular.
fn is_shared_word(query: &str, dir: &Directory) -> bool {
    if query.contains(' ') {
        return false;
    }
    let holders = dir
        .buildings()
        .filter(|b| b.match_keys().any(|key| key.split(' ').any(|word| word == query)));
    matches!(single(holders), Unique::Many)
}

enum Unique<T> {
    Zero,
    One(T),
    Many,
}

fn single<T>(mut it: impl Iterator<Item = T>) -> Unique<T> {
    match (it.next(), it.next()) {
        (None, _) => Unique::Zero,
        (Some(x), None) => Unique::One(x),
        (Some(_), Some(_)) => Unique::Many,
    }
}
