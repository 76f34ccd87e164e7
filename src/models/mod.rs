// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod quest;
pub mod team;
pub mod tier;
pub mod user;

pub use quest::{Quest, QuestKind};
pub use team::Team;
pub use tier::{Tier, TierCatalog};
pub use user::{SignUpForm, UserRecord};
