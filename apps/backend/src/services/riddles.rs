//! Riddle content providers.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;

use advent_core::{parse_riddles, Riddle};

use crate::error::{ApiError, Result};

/// Source of riddle content, one riddle per calendar day.
#[async_trait]
pub trait RiddleProvider: Send + Sync {
    /// Fetch the riddle for a day.
    async fn riddle_for_day(&self, day: u32) -> Result<Riddle>;
}

/// Provider backed by a fixed, validated set of riddles.
#[derive(Debug, Clone, Default)]
pub struct CatalogProvider {
    riddles: HashMap<u32, Riddle>,
}

impl CatalogProvider {
    /// Build a catalog from already validated riddles.
    pub fn new(riddles: Vec<Riddle>) -> Self {
        Self {
            riddles: riddles.into_iter().map(|r| (r.day, r)).collect(),
        }
    }

    /// Parse a JSON array of riddle payloads.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(parse_riddles(json)?))
    }

    /// Load a JSON array of riddle payloads from a file.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            ApiError::Provider(format!("cannot read {}: {}", path.display(), e))
        })?;
        let catalog = Self::from_json(&content)?;

        tracing::info!(
            "Loaded {} riddles from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Number of riddles in the catalog.
    pub fn len(&self) -> usize {
        self.riddles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.riddles.is_empty()
    }
}

#[async_trait]
impl RiddleProvider for CatalogProvider {
    async fn riddle_for_day(&self, day: u32) -> Result<Riddle> {
        self.riddles
            .get(&day)
            .cloned()
            .ok_or_else(|| ApiError::Provider(format!("no riddle for day {}", day)))
    }
}
