use shared::{Result, SharedError, Variant, VariantId};
use std::collections::BTreeMap;
use std::path::Path;

/// Read-only list of every known variant
pub trait VariantCatalog: Send + Sync {
    fn get(&self, id: VariantId) -> Option<&Variant>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Highest achievable score for a variant, if it is known
    fn max_score(&self, id: VariantId) -> Option<u32>;
}

/// Catalog held in memory, loaded once at startup
#[derive(Debug, Clone)]
pub struct StaticVariantCatalog {
    variants: BTreeMap<VariantId, Variant>,
    max_scores: BTreeMap<VariantId, u32>,
}

impl StaticVariantCatalog {
    /// Builds the catalog and resolves every max score up front. Duplicate
    /// ids and max scores that overflow are rejected.
    pub fn new(variants: Vec<Variant>, points_per_suit: u32) -> Result<Self> {
        let mut by_id = BTreeMap::new();
        let mut max_scores = BTreeMap::new();
        for variant in variants {
            let id = variant.id;
            let max_score = variant.max_score(points_per_suit).ok_or_else(|| {
                SharedError::Validation(format!(
                    "Max score of variant {} ({}) overflows: {} suits at {} points",
                    id, variant.name, variant.num_suits, points_per_suit
                ))
            })?;
            if let Some(existing) = by_id.insert(id, variant) {
                return Err(SharedError::Validation(format!(
                    "Duplicate variant id {} ({})",
                    id, existing.name
                )));
            }
            max_scores.insert(id, max_score);
        }

        Ok(Self {
            variants: by_id,
            max_scores,
        })
    }

    /// Loads a JSON array of variants
    pub fn from_json_file(path: impl AsRef<Path>, points_per_suit: u32) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SharedError::Internal(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let variants: Vec<Variant> = serde_json::from_str(&contents)?;
        log::info!("Loaded {} variants from {}", variants.len(), path.display());
        Self::new(variants, points_per_suit)
    }
}

impl VariantCatalog for StaticVariantCatalog {
    fn get(&self, id: VariantId) -> Option<&Variant> {
        self.variants.get(&id)
    }

    fn len(&self) -> usize {
        self.variants.len()
    }

    fn max_score(&self, id: VariantId) -> Option<u32> {
        self.max_scores.get(&id).copied()
    }
}
