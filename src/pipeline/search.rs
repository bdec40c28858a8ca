//! Fuzzy search index over normalized entry titles.
//!
//! The index is rebuilt on every data refresh and is stale as soon as the
//! entry collection changes. Matching is token based and tight:
//!
//! - the query and titles are split into whitespace separated tokens
//! - every query token must match (a word of the title starting with it)
//! - every occurrence is reported, wherever it sits in the title
//! - no edit distance is tolerated
//! - tokens shorter than [`MIN_MATCH_CHAR_LENGTH`] never produce highlights
//!
//! Results are sorted by relevance, scored with the Skim matcher; ties keep
//! the index order. Highlight ranges are inclusive `(start, end)` character
//! offsets into the display title, even where normalization expands a
//! character (Hangul syllables, some Hebrew and Devanagari letters).

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::domain::MenuEntry;

use super::normalize::normalize;

/// Shortest token that yields highlight ranges.
pub const MIN_MATCH_CHAR_LENGTH: usize = 2;

/// Inclusive character range `(start, end)` marking a matched span.
pub type HighlightRange = (usize, usize);

/// A title as stored in the index.
#[derive(Debug, Clone)]
struct IndexedTitle {
    id: String,
    /// Case-folded normalized title.
    folded: Vec<char>,
    /// Display character each `folded` character came from.
    origin: Vec<usize>,
    /// `(start, len)` character spans of the whitespace separated words.
    words: Vec<(usize, usize)>,
}

impl IndexedTitle {
    fn new(entry: &MenuEntry) -> Self {
        let folded = fold(&entry.normalized_title);
        let words = word_spans(&folded);
        Self {
            id: entry.id.clone(),
            origin: display_origins(&entry.title),
            folded,
            words,
        }
    }

    /// Display position of normalized character `i`.
    fn display_index(&self, i: usize) -> usize {
        self.origin.get(i).copied().unwrap_or(i)
    }

    /// Display character ranges of every word starting with `token`.
    fn prefix_matches(&self, token: &[char]) -> Vec<HighlightRange> {
        self.words
            .iter()
            .filter(|&&(start, len)| len >= token.len() && self.folded[start..start + token.len()] == *token)
            .map(|&(start, _)| (self.display_index(start), self.display_index(start + token.len() - 1)))
            .collect()
    }
}

/// Maps every character of `normalize(title)` to the title character it
/// was decomposed from. Stripped marks map nowhere.
fn display_origins(title: &str) -> Vec<usize> {
    let mut buf = [0_u8; 4];
    title
        .chars()
        .enumerate()
        .flat_map(|(i, c)| {
            let expanded = normalize(c.encode_utf8(&mut buf)).chars().count();
            std::iter::repeat(i).take(expanded)
        })
        .collect()
}

/// One search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub id: String,
    /// Union of the matched spans, in token then position order.
    pub ranges: Vec<HighlightRange>,
    pub score: i64,
}

/// Result of a query against the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was blank: show every entry, highlight nothing.
    Unfiltered,
    /// Matching entries in relevance order.
    Filtered(Vec<SearchHit>),
}

/// Token index over the normalized titles of a set of entries.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    titles: Vec<IndexedTitle>,
}

impl SearchIndex {
    /// Builds the index for `entries`, preserving their order for tie breaks.
    #[must_use]
    pub fn build(entries: &[MenuEntry]) -> Self {
        let _span = tracing::debug_span!("build_search_index", entries = entries.len()).entered();

        Self {
            titles: entries.iter().map(IndexedTitle::new).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Runs a raw user query.
    ///
    /// The query is trimmed and normalized first. A blank result means
    /// [`SearchOutcome::Unfiltered`]; an empty index matches nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use docindex::pipeline::ordering::project;
    /// use docindex::pipeline::search::{SearchIndex, SearchOutcome};
    /// use docindex::{Record, ViewState};
    ///
    /// let now = Utc::now();
    /// let records = vec![
    ///     Record::new("1", "Apple Pie", now),
    ///     Record::new("2", "Banana Bread", now),
    ///     Record::new("3", "Apricot", now),
    /// ];
    /// let index = SearchIndex::build(&project(&records, &ViewState::default()));
    ///
    /// let SearchOutcome::Filtered(hits) = index.query("ap") else { panic!("expected hits") };
    /// let mut ids: Vec<&str> = hits.iter().map(|h| h.id.as_str()).collect();
    /// ids.sort_unstable();
    /// assert_eq!(ids, ["1", "3"]);
    /// assert!(hits.iter().all(|h| h.ranges == vec![(0, 1)]));
    ///
    /// assert_eq!(index.query("   "), SearchOutcome::Unfiltered);
    /// ```
    #[must_use]
    pub fn query(&self, raw: &str) -> SearchOutcome {
        let normalized = normalize(raw.trim());
        if normalized.trim().is_empty() {
            return SearchOutcome::Unfiltered;
        }
        if self.is_empty() {
            return SearchOutcome::Filtered(vec![]);
        }

        SearchOutcome::Filtered(self.search(&normalized))
    }

    /// Searches with an already normalized query.
    ///
    /// Titles that fail a token, or whose matches are all shorter than
    /// [`MIN_MATCH_CHAR_LENGTH`], are left out.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let _span = tracing::debug_span!("search_index", query_len = query.len(), titles = self.titles.len()).entered();

        let tokens: Vec<Vec<char>> = query.split_whitespace().map(fold).collect();
        if tokens.is_empty() {
            return vec![];
        }

        let matcher = SkimMatcherV2::default();
        let mut hits: Vec<SearchHit> = self
            .titles
            .iter()
            .filter_map(|title| Self::match_title(title, &tokens, &matcher))
            .collect();

        hits.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::debug!(tokens = tokens.len(), hits = hits.len(), "search completed");
        hits
    }

    fn match_title(title: &IndexedTitle, tokens: &[Vec<char>], matcher: &SkimMatcherV2) -> Option<SearchHit> {
        let mut ranges = Vec::new();
        for token in tokens {
            let matches = title.prefix_matches(token);
            if matches.is_empty() {
                return None;
            }
            if token.len() >= MIN_MATCH_CHAR_LENGTH {
                ranges.extend(matches);
            }
        }

        if ranges.is_empty() {
            return None;
        }

        let text: String = title.folded.iter().collect();
        let score = tokens
            .iter()
            .map(|token| {
                let pattern: String = token.iter().collect();
                matcher.fuzzy_match(&text, &pattern).unwrap_or(0)
            })
            .sum();

        Some(SearchHit {
            id: title.id.clone(),
            ranges,
            score,
        })
    }
}

/// Lowercases `text` one character at a time, keeping character offsets stable.
fn fold(text: &str) -> Vec<char> {
    text.chars().map(|c| c.to_lowercase().next().unwrap_or(c)).collect()
}

fn word_spans(chars: &[char]) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;

    for (i, c) in chars.iter().enumerate() {
        match (c.is_whitespace(), start) {
            (false, None) => start = Some(i),
            (true, Some(s)) => {
                spans.push((s, i - s));
                start = None;
            }
            _ => {}
        }
    }

    if let Some(s) = start {
        spans.push((s, chars.len() - s));
    }

    spans
}
