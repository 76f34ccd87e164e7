// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Quest catalog entry.

use serde::{Deserialize, Serialize};

/// How often a quest can be completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestKind {
    Daily,
    Weekly,
    Special,
}

/// An engagement activity worth a fixed number of fan points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Points awarded on completion
    pub points: u64,
    pub kind: QuestKind,
}
