// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Team catalog entry.

use serde::{Deserialize, Serialize};

/// A team a fan can follow. Reference data, never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Unique catalog ID
    pub id: u32,
    /// Display name
    pub name: String,
    /// Primary brand color (e.g. "#1D428A")
    pub primary_color: String,
    /// Secondary brand color
    pub secondary_color: String,
    /// Display-only follower counter
    pub fan_count: u64,
}

/// Find a team by ID.
pub fn find_team(teams: &[Team], id: u32) -> Option<&Team> {
    teams.iter().find(|t| t.id == id)
}
