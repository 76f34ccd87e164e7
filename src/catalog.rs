// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static reference data: teams, reward tiers and quests.
//!
//! The built-in catalogs can be replaced at startup by a JSON file of the form
//! `{"teams": [...], "tiers": [...], "quests": [...]}`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::models::{Quest, QuestKind, Team, Tier, TierCatalog};

/// All reference data the core reads. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalogs {
    pub teams: Vec<Team>,
    pub tiers: TierCatalog,
    #[serde(default)]
    pub quests: Vec<Quest>,
}

impl Catalogs {
    /// The catalogs shipped with the app.
    pub fn builtin() -> Self {
        Self {
            teams: builtin_teams(),
            tiers: builtin_tiers(),
            quests: builtin_quests(),
        }
    }

    /// Load catalogs from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load catalogs from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self, CatalogError> {
        let catalogs: Catalogs = serde_json::from_str(json_data)
            .map_err(|e| CatalogError::ParseError(e.to_string()))?;

        let mut ids: Vec<u32> = catalogs.teams.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        if let Some(dup) = ids.windows(2).find(|w| w[0] == w[1]) {
            return Err(CatalogError::DuplicateTeam(dup[0]));
        }

        tracing::info!(
            teams = catalogs.teams.len(),
            tiers = catalogs.tiers.len(),
            quests = catalogs.quests.len(),
            "Loaded catalogs"
        );
        Ok(catalogs)
    }

    pub fn team(&self, id: u32) -> Option<&Team> {
        crate::models::team::find_team(&self.teams, id)
    }

    pub fn quest(&self, id: u32) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }
}

fn team(id: u32, name: &str, primary: &str, secondary: &str, fan_count: u64) -> Team {
    Team {
        id,
        name: name.to_string(),
        primary_color: primary.to_string(),
        secondary_color: secondary.to_string(),
        fan_count,
    }
}

fn builtin_teams() -> Vec<Team> {
    vec![
        team(1, "Thunder", "#007AC1", "#EF3B24", 128_400),
        team(2, "Storm", "#2C2A6B", "#8FD1F2", 96_250),
        team(3, "Blaze", "#E03A3E", "#FDB927", 143_900),
        team(4, "Titans", "#0C2340", "#4B92DB", 110_700),
        team(5, "Wolves", "#236192", "#9EA2A2", 87_300),
        team(6, "Falcons", "#A71930", "#000000", 101_050),
    ]
}

fn builtin_tiers() -> TierCatalog {
    TierCatalog::from_builtin(vec![
        Tier::new("Rookie", 0, "Welcome badge and team wallpaper"),
        Tier::new("Bronze", 250, "10% off team store merchandise"),
        Tier::new("Silver", 500, "Early access to ticket sales"),
        Tier::new("Gold", 1000, "Signed team poster"),
        Tier::new("Legend", 2500, "Meet-and-greet with the players"),
    ])
}

fn quest(id: u32, title: &str, description: &str, points: u64, kind: QuestKind) -> Quest {
    Quest {
        id,
        title: title.to_string(),
        description: description.to_string(),
        points,
        kind,
    }
}

fn builtin_quests() -> Vec<Quest> {
    vec![
        quest(1, "Daily check-in", "Open the app today", 10, QuestKind::Daily),
        quest(2, "Match predictor", "Predict the score of the next game", 25, QuestKind::Daily),
        quest(3, "Trivia night", "Answer five team trivia questions", 50, QuestKind::Weekly),
        quest(4, "Share the hype", "Share a highlight with a friend", 30, QuestKind::Weekly),
        quest(5, "Game day attendance", "Check in at the stadium", 200, QuestKind::Special),
    ]
}

/// Errors from catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse catalog: {0}")]
    ParseError(String),

    #[error("Tier catalog is empty")]
    NoTiers,

    #[error("Duplicate team id: {0}")]
    DuplicateTeam(u32),
}
