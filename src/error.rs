// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! Nothing in the core is fatal: callers that hit one of these can always
//! fall back to "no stored user" and restart onboarding.

use crate::catalog::CatalogError;
use crate::services::onboarding::OnboardingError;

/// Application error type shared by the storage bridge and the session.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Onboarding error: {0}")]
    Onboarding(#[from] OnboardingError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("No signed-in user")]
    NoActiveUser,

    #[error("Unknown quest: {0}")]
    UnknownQuest(u32),

    #[error("Insufficient points: balance {balance}, requested {requested}")]
    InsufficientPoints { balance: u64, requested: u64 },
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, AppError>;
