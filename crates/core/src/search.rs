//! Substring search across the stub collections.
//!
//! Matching is case-insensitive. Each matching field adds a fixed weight to
//! the hit's score; hits are returned best first, ties in catalog order
//! (inventory, then orders, then samples).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Catalog;

const PRIMARY_MATCH: u32 = 50;
const SECONDARY_MATCH: u32 = 30;

/// Errors from building a [`SearchQuery`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search query is required")]
    EmptyQuery,
    #[error("unknown search type: {0}")]
    UnknownKind(String),
}

/// Which collection a hit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Inventory,
    Order,
    Sample,
}

impl RecordKind {
    pub const ALL: [Self; 3] = [Self::Inventory, Self::Order, Self::Sample];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inventory => "inventory",
            Self::Order => "order",
            Self::Sample => "sample",
        }
    }

    /// Listing page for records of this kind.
    #[must_use]
    pub const fn link(self) -> &'static str {
        match self {
            Self::Inventory => "/inventory",
            Self::Order => "/orders",
            Self::Sample => "/samples",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SearchError::UnknownKind(s.to_string()))
    }
}

/// A validated search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
    kinds: Vec<RecordKind>,
}

impl SearchQuery {
    /// Build a query from the raw `q` text and optional comma-separated kinds.
    ///
    /// An absent or empty kind list searches every kind.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::EmptyQuery` for blank text and
    /// `SearchError::UnknownKind` for an unrecognized kind.
    pub fn parse(text: &str, kinds: Option<&str>) -> Result<Self, SearchError> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let mut parsed = kinds
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|kind| !kind.is_empty())
            .map(RecordKind::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        if parsed.is_empty() {
            parsed = RecordKind::ALL.to_vec();
        }

        Ok(Self {
            needle,
            kinds: parsed,
        })
    }

    #[must_use]
    pub fn includes(&self, kind: RecordKind) -> bool {
        self.kinds.contains(&kind)
    }

    fn matches(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.needle)
    }
}

/// One search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub kind: RecordKind,
    pub title: String,
    pub description: String,
    pub link: String,
    pub score: u32,
}

impl SearchHit {
    fn new(kind: RecordKind, id: String, title: String, description: String, score: u32) -> Self {
        Self {
            id,
            kind,
            title,
            description,
            link: kind.link().to_string(),
            score,
        }
    }
}

impl Catalog {
    /// Run `query` against every included collection.
    #[must_use]
    pub fn search(&self, query: &SearchQuery) -> Vec<SearchHit> {
        let mut hits = Vec::new();

        if query.includes(RecordKind::Inventory) {
            for item in &self.inventory.items {
                if query.matches(&item.name) {
                    hits.push(SearchHit::new(
                        RecordKind::Inventory,
                        item.id.to_string(),
                        item.name.clone(),
                        format!("{} in stock", item.qty),
                        PRIMARY_MATCH,
                    ));
                }
            }
        }

        if query.includes(RecordKind::Order) {
            for order in &self.orders.orders {
                let score = weight(query.matches(order.id.as_str()), PRIMARY_MATCH)
                    + weight(query.matches(order.status.as_str()), SECONDARY_MATCH);
                if score > 0 {
                    hits.push(SearchHit::new(
                        RecordKind::Order,
                        order.id.to_string(),
                        order.id.to_string(),
                        order.status.as_str().to_string(),
                        score,
                    ));
                }
            }
        }

        if query.includes(RecordKind::Sample) {
            for sample in &self.samples.samples {
                let score = weight(query.matches(sample.id.as_str()), PRIMARY_MATCH)
                    + weight(query.matches(sample.kind.as_str()), SECONDARY_MATCH);
                if score > 0 {
                    hits.push(SearchHit::new(
                        RecordKind::Sample,
                        sample.id.to_string(),
                        sample.id.to_string(),
                        format!("{} sample", sample.kind.as_str()),
                        score,
                    ));
                }
            }
        }

        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits
    }
}

const fn weight(matched: bool, points: u32) -> u32 {
    if matched { points } else { 0 }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn search(q: &str, kinds: Option<&str>) -> Vec<SearchHit> {
        Catalog::stub().search(&SearchQuery::parse(q, kinds).unwrap())
    }

    #[test]
    fn test_blank_query_is_rejected() {
        assert_eq!(
            SearchQuery::parse("   ", None).unwrap_err(),
            SearchError::EmptyQuery
        );
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert_eq!(
            SearchQuery::parse("a", Some("inventory,visitor")).unwrap_err(),
            SearchError::UnknownKind("visitor".to_string())
        );
    }

    #[test]
    fn test_empty_kind_list_means_all() {
        let query = SearchQuery::parse("a", Some(" , ")).unwrap();
        assert!(RecordKind::ALL.iter().all(|kind| query.includes(*kind)));
    }

    #[test]
    fn test_case_insensitive_inventory_match() {
        let hits = search("BUFFER", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Buffer A");
        assert_eq!(hits[0].description, "10 in stock");
        assert_eq!(hits[0].link, "/inventory");
    }

    #[test]
    fn test_order_id_outranks_status() {
        let hits = search("1002", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "O-1002");
        assert_eq!(hits[0].score, 50);

        let hits = search("shipped", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].score, 30);
    }

    #[test]
    fn test_kind_filter() {
        let hits = search("s-", Some("sample"));
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|hit| hit.kind == RecordKind::Sample));
    }

    #[test]
    fn test_sorted_by_score_then_catalog_order() {
        // "a" hits "Buffer A" by name (50) and both samples by type (30 each).
        let hits = search("a", None);
        let ids: Vec<_> = hits.iter().map(|hit| hit.id.as_str()).collect();
        assert_eq!(ids, ["1", "S-001", "S-002"]);

        // "0" hits every order and sample id (50) but no inventory name.
        let hits = search("0", None);
        let ids: Vec<_> = hits.iter().map(|hit| hit.id.as_str()).collect();
        assert_eq!(ids, ["O-1001", "O-1002", "S-001", "S-002"]);
    }
}
