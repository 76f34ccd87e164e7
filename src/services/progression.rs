// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tier progression engine.
//!
//! Pure derivations from a point total and the tier catalog. Nothing here
//! mutates a user record; results are recomputed on every read.

use serde::Serialize;

use crate::models::{Tier, TierCatalog};

/// Read-only progress view for the tier bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierProgress {
    pub current_tier: Tier,
    pub next_tier: Option<Tier>,
    pub points_to_next: u64,
    /// 0.0 to 100.0
    pub progress_percent: f64,
    pub is_max_tier: bool,
}

impl TierProgress {
    /// Message shown under the progress bar.
    pub fn status_line(&self) -> String {
        match &self.next_tier {
            Some(next) => format!("{} points to {}", self.points_to_next, next.name),
            None => "Maximum tier achieved".to_string(),
        }
    }
}

/// The last tier in catalog order whose threshold is at or below `points`.
pub fn current_tier(catalog: &TierCatalog, points: u64) -> &Tier {
    &catalog.tiers()[catalog.index_for(points)]
}

/// Compute the progress view for a point total.
pub fn progress(catalog: &TierCatalog, points: u64) -> TierProgress {
    let tiers = catalog.tiers();
    let index = catalog.index_for(points);
    let current = &tiers[index];

    // Below a non-zero floor: the floor itself is the next threshold.
    if points < current.min_points {
        return TierProgress {
            current_tier: current.clone(),
            next_tier: Some(current.clone()),
            points_to_next: current.min_points - points,
            progress_percent: 0.0,
            is_max_tier: false,
        };
    }

    let Some(next) = tiers[index + 1..].iter().find(|t| t.min_points > points) else {
        return TierProgress {
            current_tier: current.clone(),
            next_tier: None,
            points_to_next: 0,
            progress_percent: 100.0,
            is_max_tier: true,
        };
    };

    TierProgress {
        current_tier: current.clone(),
        next_tier: Some(next.clone()),
        points_to_next: next.min_points - points,
        progress_percent: band_percent(current.min_points, next.min_points, points),
        is_max_tier: false,
    }
}

/// Position of `points` inside `[floor, ceiling)` as a clamped percentage.
///
/// A zero-width band only comes from a misconfigured catalog and counts as
/// complete.
fn band_percent(floor: u64, ceiling: u64, points: u64) -> f64 {
    let span = ceiling.saturating_sub(floor);
    if span == 0 {
        tracing::warn!(floor, ceiling, "Zero-width tier band");
        return 100.0;
    }
    let earned = points.saturating_sub(floor);
    (earned as f64 / span as f64 * 100.0).clamp(0.0, 100.0)
}

/// The tier newly reached when a total moves from `before` to `after`.
///
/// Returns `None` when the tier is unchanged or went down.
pub fn tier_change(catalog: &TierCatalog, before: u64, after: u64) -> Option<&Tier> {
    let old = catalog.index_for(before);
    let new = catalog.index_for(after);
    (new > old).then(|| &catalog.tiers()[new])
}
