// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User repository: the only path between the core and storage.
//!
//! Provides:
//! - `load` / `save` of the user record and the onboarding flag
//! - `reset` back to a new visitor
//! - the landing-page-seen flag

use crate::db::{keys, KeyValueStore};
use crate::error::Result;
use crate::models::UserRecord;

/// Typed access to the persisted user state.
#[derive(Debug, Clone)]
pub struct UserRepository<S> {
    store: S,
}

impl<S: KeyValueStore> UserRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Load the stored user.
    ///
    /// Returns `None` unless onboarding was completed, the record parses and
    /// it names the fan. A record that fails to parse is removed so later
    /// loads don't trip over it again.
    pub fn load(&self) -> Option<UserRecord> {
        if !self.flag(keys::ONBOARDING_COMPLETE) {
            return None;
        }

        let raw = match self.store.get(keys::USER) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored user");
                return None;
            }
        };

        let user: UserRecord = match serde_json::from_str(&raw) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "Stored user is corrupt, purging");
                if let Err(e) = self.store.remove(keys::USER) {
                    tracing::error!(error = %e, "Failed to purge corrupt user");
                }
                return None;
            }
        };

        if !user.is_complete() {
            tracing::debug!("Stored user has neither name nor email");
            return None;
        }

        Some(user)
    }

    /// Store the user and mark onboarding and the landing page as done.
    pub fn save(&self, user: &UserRecord) -> Result<()> {
        let json = serde_json::to_string(user)?;
        self.store.set(keys::USER, &json)?;
        self.store.set(keys::ONBOARDING_COMPLETE, keys::FLAG_SET)?;
        self.store.set(keys::LANDING_SEEN, keys::FLAG_SET)?;
        tracing::debug!(points = user.points, "User saved");
        Ok(())
    }

    /// Forget everything. Safe to call on an empty store.
    pub fn reset(&self) -> Result<()> {
        self.store.remove(keys::USER)?;
        self.store.remove(keys::ONBOARDING_COMPLETE)?;
        self.store.remove(keys::LANDING_SEEN)?;
        tracing::info!("Stored user state cleared");
        Ok(())
    }

    // ─── Landing Page ────────────────────────────────────────────

    pub fn has_seen_landing(&self) -> bool {
        self.flag(keys::LANDING_SEEN)
    }

    pub fn mark_landing_seen(&self) -> Result<()> {
        self.store.set(keys::LANDING_SEEN, keys::FLAG_SET)
    }

    pub fn clear_landing_seen(&self) -> Result<()> {
        self.store.remove(keys::LANDING_SEEN)
    }

    fn flag(&self, key: &str) -> bool {
        match self.store.get(key) {
            Ok(value) => value.as_deref() == Some(keys::FLAG_SET),
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read flag");
                false
            }
        }
    }
}
