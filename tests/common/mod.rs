// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use fanzone::catalog::Catalogs;
use fanzone::config::Config;
use fanzone::db::{KeyValueStore, MemoryStore};
use fanzone::error::AppError;
use fanzone::models::UserRecord;
use fanzone::services::{LaunchParams, Session};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A user record as activity producers would leave it.
#[allow(dead_code)]
pub fn make_user(points: u64, lifetime_points: u64) -> UserRecord {
    let catalogs = Catalogs::builtin();
    UserRecord {
        name: Some("Alex".to_string()),
        email: Some("alex@example.com".to_string()),
        team: catalogs.team(2).cloned(),
        points,
        lifetime_points,
        member_since: 2024,
        streak: 7,
    }
}

/// Start a session on a fresh in-memory store.
/// Returns the session and a handle to the same store.
#[allow(dead_code)]
pub fn new_session(config: Config, query: &str) -> (Session<MemoryStore>, MemoryStore) {
    let store = MemoryStore::new();
    let session = restart(config, &store, query);
    (session, store)
}

/// Start another session against an existing store.
#[allow(dead_code)]
pub fn restart(config: Config, store: &MemoryStore, query: &str) -> Session<MemoryStore> {
    Session::start(
        config,
        Catalogs::builtin(),
        store.clone(),
        &LaunchParams::from_query(query),
    )
    .expect("Session should start")
}

/// Memory store whose writes can be switched to fail.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct FailingStore {
    pub inner: MemoryStore,
    pub fail_writes: Arc<AtomicBool>,
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> fanzone::error::Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> fanzone::error::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::Storage("disk full".to_string()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> fanzone::error::Result<()> {
        self.inner.remove(key)
    }
}
