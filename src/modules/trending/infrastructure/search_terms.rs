use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tokio::sync::RwLock;

use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchTerm {
    pub term: String,
    pub added_at: DateTime<Utc>,
}

/// Bounded, most-recent-first history of search terms
///
/// Terms are de-duplicated case-insensitively; re-adding a term moves it to
/// the front with a fresh timestamp.
pub struct SearchTermStore {
    terms: RwLock<VecDeque<SearchTerm>>,
    capacity: usize,
}

impl SearchTermStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            terms: RwLock::new(VecDeque::new()),
            capacity: capacity.max(1),
        }
    }

    pub async fn add(&self, term: &str) -> AppResult<()> {
        let term = term.trim();
        if term.is_empty() {
            return Err(AppError::InvalidInput(
                "Search term must not be blank".to_string(),
            ));
        }

        let mut terms = self.terms.write().await;
        let key = term.to_lowercase();
        terms.retain(|existing| existing.term.to_lowercase() != key);
        terms.push_front(SearchTerm {
            term: term.to_string(),
            added_at: Utc::now(),
        });
        terms.truncate(self.capacity);
        Ok(())
    }

    /// Most recent first
    pub async fn recent(&self, limit: usize) -> Vec<SearchTerm> {
        self.terms.read().await.iter().take(limit).cloned().collect()
    }

    /// Terms containing `query` anywhere (case-insensitive), most recent first
    pub async fn suggestions(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.trim().to_lowercase();
        self.terms
            .read()
            .await
            .iter()
            .filter(|t| t.term.to_lowercase().contains(&needle))
            .take(limit)
            .map(|t| t.term.clone())
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.terms.read().await.len()
    }

    pub async fn clear(&self) {
        self.terms.write().await.clear();
    }
}
