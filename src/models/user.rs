//! User record for storage and display.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{Team, Tier, TierCatalog};

/// The single local user. Created once by onboarding, mutated by
/// engagement activities, destroyed only by a reset.
///
/// The tier is never stored: it is derived from `points` on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Display name (may be None for an email-only sign-up)
    #[serde(default)]
    pub name: Option<String>,
    /// Email address (may be None if not shared)
    #[serde(default)]
    pub email: Option<String>,
    /// Followed team; None for a fast sign-in
    #[serde(default)]
    pub team: Option<Team>,
    /// Current spendable balance
    pub points: u64,
    /// Total ever earned, never decreases
    pub lifetime_points: u64,
    /// Year the account was created
    pub member_since: i32,
    /// Consecutive engagement counter
    #[serde(default)]
    pub streak: u32,
}

impl UserRecord {
    /// A record is usable only if it identifies the fan somehow.
    pub fn is_complete(&self) -> bool {
        has_text(&self.name) || has_text(&self.email)
    }

    /// Tier for the current balance (drives the progress bar).
    pub fn tier<'a>(&self, catalog: &'a TierCatalog) -> &'a Tier {
        crate::services::progression::current_tier(catalog, self.points)
    }

    /// Tier for lifetime earnings (the "lifetime achievement" badge).
    pub fn lifetime_tier<'a>(&self, catalog: &'a TierCatalog) -> &'a Tier {
        crate::services::progression::current_tier(catalog, self.lifetime_points)
    }

    /// Credit earned points to both the balance and lifetime total.
    pub fn award(&mut self, points: u64) {
        self.points = self.points.saturating_add(points);
        self.lifetime_points = self.lifetime_points.saturating_add(points);
        // Records written by older builds may have lifetime below balance.
        self.lifetime_points = self.lifetime_points.max(self.points);
    }

    /// Debit the balance. Lifetime earnings are unaffected.
    pub fn spend(&mut self, points: u64) -> Result<(), AppError> {
        if points > self.points {
            return Err(AppError::InsufficientPoints {
                balance: self.points,
                requested: points,
            });
        }
        self.points -= points;
        Ok(())
    }

    pub fn extend_streak(&mut self) {
        self.streak = self.streak.saturating_add(1);
    }

    pub fn break_streak(&mut self) {
        self.streak = 0;
    }
}

/// Account-creation form input. Nothing is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl SignUpForm {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}
