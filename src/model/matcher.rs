// File: ./src/model/matcher.rs
// Search predicates used by `find`.
use crate::error::{HuhhhError, Result};
use crate::model::item::{Task, normalize_tag};

/// What a `find` argument asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Literal, case-sensitive substring of the description.
    Keyword(String),
    /// Normalized tag membership (`find #tag`).
    Tag(String),
}

impl SearchQuery {
    /// Interprets the argument of `find`. A leading `#` selects tag search.
    pub fn parse(text: &str) -> Result<Self> {
        let term = text.trim();
        if term.is_empty() {
            return Err(HuhhhError::EmptyKeyword);
        }
        if term.starts_with('#') {
            return normalize_tag(term)
                .map(SearchQuery::Tag)
                .ok_or_else(|| HuhhhError::InvalidTagToken(term.to_string()));
        }
        Ok(SearchQuery::Keyword(term.to_string()))
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            SearchQuery::Keyword(keyword) => task.contains_keyword(keyword),
            SearchQuery::Tag(tag) => task.has_tag(tag),
        }
    }
}

impl Task {
    pub fn contains_keyword(&self, keyword: &str) -> bool {
        self.description().contains(keyword)
    }
}
