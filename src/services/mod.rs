// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod launch;
pub mod onboarding;
pub mod progression;
pub mod session;

pub use launch::LaunchParams;
pub use onboarding::{CelebrationSignal, EntryPoint, Onboarding, OnboardingError, OnboardingStep};
pub use progression::TierProgress;
pub use session::{Dashboard, Session};
