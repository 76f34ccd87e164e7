// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Fanzone: fan points, reward tiers and onboarding
//!
//! This crate provides the core of a fan-engagement app: the onboarding
//! flow that creates the local user, the tier progression engine, and the
//! storage bridge that keeps the user between visits.

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

pub use catalog::Catalogs;
pub use config::Config;
pub use db::{FileStore, KeyValueStore, MemoryStore, UserRepository};
pub use services::{LaunchParams, Session};
