use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::entities::{Movie, MovieRequest};
use super::value_objects::{MediaType, TimeWindow};
use crate::shared::errors::{AppError, AppResult};

/// Ordered set of labelled trending requests
///
/// Order defines both fetch order and display order. Labels are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingQuery {
    entries: Vec<(String, MovieRequest)>,
}

impl TrendingQuery {
    pub fn new(entries: Vec<(String, MovieRequest)>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for (label, _) in &entries {
            if label.trim().is_empty() {
                return Err(AppError::InvalidInput(
                    "Trending label must not be blank".to_string(),
                ));
            }
            if !seen.insert(label.as_str()) {
                return Err(AppError::InvalidInput(format!(
                    "Duplicate trending label: {}",
                    label
                )));
            }
        }
        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MovieRequest)> {
        self.entries
            .iter()
            .map(|(label, request)| (label.as_str(), request))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(label, _)| label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TrendingQuery {
    /// The five categories shown on the trending page
    fn default() -> Self {
        let entries = [
            ("Trending", MediaType::All, TimeWindow::Week),
            ("Trending in Movies", MediaType::Movie, TimeWindow::Day),
            ("Trending in TV", MediaType::Tv, TimeWindow::Day),
            ("Trending in Movies this week", MediaType::Movie, TimeWindow::Week),
            ("Trending in TV this week", MediaType::Tv, TimeWindow::Week),
        ];

        Self {
            entries: entries
                .into_iter()
                .map(|(label, media_type, time_window)| {
                    (label.to_string(), MovieRequest::new(media_type, time_window))
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingSection {
    pub label: String,
    pub movies: Vec<Movie>,
}

/// Ordered label → movies mapping produced by one fetch cycle
///
/// Never holds an empty section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrendingResults {
    sections: Vec<TrendingSection>,
}

impl TrendingResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a section. Returns false (and stores nothing) for an empty list.
    pub fn insert(&mut self, label: impl Into<String>, movies: Vec<Movie>) -> bool {
        if movies.is_empty() {
            return false;
        }

        let label = label.into();
        match self.sections.iter_mut().find(|s| s.label == label) {
            Some(section) => section.movies = movies,
            None => self.sections.push(TrendingSection { label, movies }),
        }
        true
    }

    pub fn get(&self, label: &str) -> Option<&[Movie]> {
        self.sections
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.movies.as_slice())
    }

    pub fn labels(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrendingSection> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn into_sections(self) -> Vec<TrendingSection> {
        self.sections
    }
}
