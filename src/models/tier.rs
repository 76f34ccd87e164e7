// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Reward tiers and the ordered tier catalog.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;

/// A named achievement band, unlocked at `min_points`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    pub name: String,
    /// Inclusive threshold
    pub min_points: u64,
    /// Reward description shown when the tier is reached
    pub reward: String,
}

impl Tier {
    pub fn new(name: &str, min_points: u64, reward: &str) -> Self {
        Self {
            name: name.to_string(),
            min_points,
            reward: reward.to_string(),
        }
    }
}

/// Tiers sorted ascending by `min_points`. Never empty.
///
/// Misconfigured input (out of order, duplicate thresholds, a floor above
/// zero) is tolerated: it is sorted and logged, and the progression engine
/// falls back to safe values instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tier>", into = "Vec<Tier>")]
pub struct TierCatalog {
    tiers: Vec<Tier>,
}

impl TierCatalog {
    pub fn new(mut tiers: Vec<Tier>) -> Result<Self, CatalogError> {
        if tiers.is_empty() {
            return Err(CatalogError::NoTiers);
        }

        if tiers.windows(2).any(|w| w[0].min_points > w[1].min_points) {
            tracing::warn!("Tier catalog out of order, sorting by threshold");
            tiers.sort_by_key(|t| t.min_points);
        }

        if tiers[0].min_points != 0 {
            tracing::warn!(
                tier = %tiers[0].name,
                min_points = tiers[0].min_points,
                "First tier does not start at zero"
            );
        }

        for pair in tiers.windows(2) {
            if pair[0].min_points == pair[1].min_points {
                tracing::warn!(
                    first = %pair[0].name,
                    second = %pair[1].name,
                    min_points = pair[0].min_points,
                    "Duplicate tier threshold"
                );
            }
        }

        Ok(Self { tiers })
    }

    /// Wrap tiers already known to be sorted with a zero floor.
    pub(crate) fn from_builtin(tiers: Vec<Tier>) -> Self {
        debug_assert!(!tiers.is_empty());
        debug_assert!(tiers.windows(2).all(|w| w[0].min_points < w[1].min_points));
        Self { tiers }
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// The entry tier.
    pub fn first(&self) -> &Tier {
        &self.tiers[0]
    }

    /// The maximum tier.
    pub fn last(&self) -> &Tier {
        &self.tiers[self.tiers.len() - 1]
    }

    pub fn get(&self, index: usize) -> Option<&Tier> {
        self.tiers.get(index)
    }

    pub fn by_name(&self, name: &str) -> Option<&Tier> {
        self.tiers.iter().find(|t| t.name == name)
    }

    /// Index of the last tier whose threshold is at or below `points`.
    ///
    /// Points below a non-zero floor map to the first tier.
    pub fn index_for(&self, points: u64) -> usize {
        self.tiers
            .partition_point(|t| t.min_points <= points)
            .saturating_sub(1)
    }
}

impl TryFrom<Vec<Tier>> for TierCatalog {
    type Error = CatalogError;

    fn try_from(tiers: Vec<Tier>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

impl From<TierCatalog> for Vec<Tier> {
    fn from(catalog: TierCatalog) -> Self {
        catalog.tiers
    }
}
