// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Onboarding state machine.
//!
//! Walks a new visitor through:
//! 1. Entry-point selection (skipped for direct entries)
//! 2. Team selection
//! 3. Account creation
//!
//! and produces the initial user record. Nothing is persisted here; an
//! abandoned machine leaves no trace.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::models::team::find_team;
use crate::models::{SignUpForm, Team, UserRecord};

/// Points granted when an account is created.
pub const WELCOME_BONUS: u64 = 50;

/// Display name used when the sign-up form leaves the name blank.
pub const DEFAULT_DISPLAY_NAME: &str = "Fan";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OnboardingStep {
    EntryPointSelection,
    TeamSelection,
    AccountCreation,
    Complete,
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OnboardingStep::EntryPointSelection => "entry point selection",
            OnboardingStep::TeamSelection => "team selection",
            OnboardingStep::AccountCreation => "account creation",
            OnboardingStep::Complete => "complete",
        };
        f.write_str(name)
    }
}

/// Where the visitor came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryPoint {
    /// Deep link straight into sign-up; skips entry-point selection
    Direct,
    Referred,
    Landing,
}

impl EntryPoint {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "direct" => Some(EntryPoint::Direct),
            "referred" | "referral" => Some(EntryPoint::Referred),
            "landing" => Some(EntryPoint::Landing),
            _ => None,
        }
    }
}

/// One-shot "just finished onboarding" notification.
///
/// Clones share the same flag. `take` returns `true` at most once per
/// `raise`.
#[derive(Debug, Clone, Default)]
pub struct CelebrationSignal(Arc<AtomicBool>);

impl CelebrationSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Read and clear the flag.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

/// Errors from onboarding events.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OnboardingError {
    #[error("Cannot {event} during {state}")]
    InvalidTransition {
        state: OnboardingStep,
        event: &'static str,
    },

    #[error("Onboarding already complete")]
    AlreadyComplete,

    #[error("Unknown team: {0}")]
    UnknownTeam(u32),
}

/// The onboarding flow for one visitor.
#[derive(Debug, Clone)]
pub struct Onboarding {
    step: OnboardingStep,
    entry_point: Option<EntryPoint>,
    pending_team: Option<Team>,
    celebration: CelebrationSignal,
}

impl Onboarding {
    /// Start at entry-point selection.
    pub fn new(celebration: CelebrationSignal) -> Self {
        Self {
            step: OnboardingStep::EntryPointSelection,
            entry_point: None,
            pending_team: None,
            celebration,
        }
    }

    /// Start where the entry point dictates. A direct entry skips straight
    /// to team selection.
    pub fn for_entry(entry: Option<EntryPoint>, celebration: CelebrationSignal) -> Self {
        let mut onboarding = Self::new(celebration);
        if entry == Some(EntryPoint::Direct) {
            onboarding.step = OnboardingStep::TeamSelection;
            onboarding.entry_point = entry;
        }
        onboarding
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn entry_point(&self) -> Option<EntryPoint> {
        self.entry_point
    }

    pub fn pending_team(&self) -> Option<&Team> {
        self.pending_team.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.step == OnboardingStep::Complete
    }

    pub fn choose_entry_point(&mut self, entry: EntryPoint) -> Result<(), OnboardingError> {
        self.require_step(OnboardingStep::EntryPointSelection, "choose an entry point")?;
        self.entry_point = Some(entry);
        self.step = OnboardingStep::TeamSelection;
        tracing::debug!(?entry, "Entry point chosen");
        Ok(())
    }

    /// Pick a team from the catalog. The choice stays pending until sign-up.
    pub fn select_team(&mut self, team_id: u32, teams: &[Team]) -> Result<(), OnboardingError> {
        self.require_step(OnboardingStep::TeamSelection, "select a team")?;
        let team = find_team(teams, team_id).ok_or(OnboardingError::UnknownTeam(team_id))?;
        tracing::debug!(team = %team.name, "Team selected");
        self.pending_team = Some(team.clone());
        self.step = OnboardingStep::AccountCreation;
        Ok(())
    }

    /// Fast sign-in: go to account creation without picking a team.
    pub fn skip_team_selection(&mut self) -> Result<(), OnboardingError> {
        self.require_step(OnboardingStep::TeamSelection, "skip team selection")?;
        self.step = OnboardingStep::AccountCreation;
        Ok(())
    }

    /// Return to team selection. The pending team is kept.
    pub fn back(&mut self) -> Result<(), OnboardingError> {
        self.require_step(OnboardingStep::AccountCreation, "go back")?;
        self.step = OnboardingStep::TeamSelection;
        Ok(())
    }

    /// Create the account, stamping the current year as `member_since`.
    pub fn submit(&mut self, form: SignUpForm) -> Result<UserRecord, OnboardingError> {
        self.submit_at(form, chrono::Utc::now().year())
    }

    /// Create the account with an explicit membership year.
    pub fn submit_at(
        &mut self,
        form: SignUpForm,
        member_since: i32,
    ) -> Result<UserRecord, OnboardingError> {
        self.require_step(OnboardingStep::AccountCreation, "submit sign-up")?;

        let name = match form.name.trim() {
            "" => DEFAULT_DISPLAY_NAME.to_string(),
            name => name.to_string(),
        };
        let email = Some(form.email.trim().to_string()).filter(|e| !e.is_empty());

        let record = UserRecord {
            name: Some(name),
            email,
            team: self.pending_team.take(),
            points: WELCOME_BONUS,
            lifetime_points: WELCOME_BONUS,
            member_since,
            streak: 0,
        };

        self.step = OnboardingStep::Complete;
        self.celebration.raise();

        tracing::info!(
            team = record.team.as_ref().map(|t| t.name.as_str()),
            entry = ?self.entry_point,
            "Onboarding complete"
        );
        Ok(record)
    }

    fn require_step(
        &self,
        step: OnboardingStep,
        event: &'static str,
    ) -> Result<(), OnboardingError> {
        if self.step == OnboardingStep::Complete {
            return Err(OnboardingError::AlreadyComplete);
        }
        if self.step != step {
            return Err(OnboardingError::InvalidTransition {
                state: self.step,
                event,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalogs;

    fn storm_id(catalogs: &Catalogs) -> u32 {
        catalogs
            .teams
            .iter()
            .find(|t| t.name == "Storm")
            .map(|t| t.id)
            .unwrap()
    }

    #[test]
    fn test_full_flow_storm_alex() {
        let catalogs = Catalogs::builtin();
        let signal = CelebrationSignal::new();
        let mut flow = Onboarding::new(signal.clone());

        flow.choose_entry_point(EntryPoint::Landing).unwrap();
        assert_eq!(flow.step(), OnboardingStep::TeamSelection);

        flow.select_team(storm_id(&catalogs), &catalogs.teams).unwrap();
        assert_eq!(flow.step(), OnboardingStep::AccountCreation);
        assert!(!signal.take());

        let record = flow.submit_at(SignUpForm::new("Alex", ""), 2026).unwrap();
        assert_eq!(flow.step(), OnboardingStep::Complete);
        assert_eq!(record.name.as_deref(), Some("Alex"));
        assert_eq!(record.email, None);
        assert_eq!(record.points, 50);
        assert_eq!(record.lifetime_points, 50);
        assert_eq!(record.streak, 0);
        assert_eq!(record.member_since, 2026);
        assert_eq!(record.team.as_ref().map(|t| t.name.as_str()), Some("Storm"));
        assert_eq!(record.tier(&catalogs.tiers).name, "Rookie");

        assert!(signal.take());
        assert!(!signal.take());
    }

    #[test]
    fn test_direct_entry_starts_at_team_selection() {
        let flow = Onboarding::for_entry(Some(EntryPoint::Direct), CelebrationSignal::new());
        assert_eq!(flow.step(), OnboardingStep::TeamSelection);
        assert_eq!(flow.entry_point(), Some(EntryPoint::Direct));

        let flow = Onboarding::for_entry(Some(EntryPoint::Referred), CelebrationSignal::new());
        assert_eq!(flow.step(), OnboardingStep::EntryPointSelection);
    }

    #[test]
    fn test_blank_name_defaults_to_fan() {
        let mut flow = Onboarding::for_entry(Some(EntryPoint::Direct), CelebrationSignal::new());
        flow.skip_team_selection().unwrap();

        let record = flow.submit_at(SignUpForm::new("   ", ""), 2026).unwrap();
        assert_eq!(record.name.as_deref(), Some(DEFAULT_DISPLAY_NAME));
        assert!(record.team.is_none());
        assert!(record.is_complete());
    }

    #[test]
    fn test_back_preserves_pending_team() {
        let catalogs = Catalogs::builtin();
        let mut flow = Onboarding::for_entry(Some(EntryPoint::Direct), CelebrationSignal::new());
        flow.select_team(3, &catalogs.teams).unwrap();

        flow.back().unwrap();
        assert_eq!(flow.step(), OnboardingStep::TeamSelection);
        assert_eq!(flow.pending_team().map(|t| t.id), Some(3));

        flow.skip_team_selection().unwrap();
        let record = flow.submit_at(SignUpForm::default(), 2026).unwrap();
        assert_eq!(record.team.map(|t| t.id), Some(3));
    }

    #[test]
    fn test_unknown_team_leaves_state() {
        let catalogs = Catalogs::builtin();
        let mut flow = Onboarding::for_entry(Some(EntryPoint::Direct), CelebrationSignal::new());

        let err = flow.select_team(999, &catalogs.teams).unwrap_err();
        assert_eq!(err, OnboardingError::UnknownTeam(999));
        assert_eq!(flow.step(), OnboardingStep::TeamSelection);
        assert!(flow.pending_team().is_none());
    }

    #[test]
    fn test_invalid_transitions() {
        let mut flow = Onboarding::new(CelebrationSignal::new());

        assert_eq!(
            flow.back(),
            Err(OnboardingError::InvalidTransition {
                state: OnboardingStep::EntryPointSelection,
                event: "go back",
            })
        );
        assert!(flow.submit_at(SignUpForm::default(), 2026).is_err());
        assert_eq!(flow.step(), OnboardingStep::EntryPointSelection);
    }

    #[test]
    fn test_complete_is_terminal() {
        let signal = CelebrationSignal::new();
        let mut flow = Onboarding::for_entry(Some(EntryPoint::Direct), signal.clone());
        flow.skip_team_selection().unwrap();
        flow.submit_at(SignUpForm::new("Sam", "sam@example.com"), 2026).unwrap();
        assert!(signal.take());

        assert_eq!(
            flow.submit_at(SignUpForm::new("Sam", ""), 2026),
            Err(OnboardingError::AlreadyComplete)
        );
        assert_eq!(flow.back(), Err(OnboardingError::AlreadyComplete));
        assert!(!signal.take());
    }

    #[test]
    fn test_entry_point_parse() {
        assert_eq!(EntryPoint::parse("Direct"), Some(EntryPoint::Direct));
        assert_eq!(EntryPoint::parse("referral"), Some(EntryPoint::Referred));
        assert_eq!(EntryPoint::parse("nowhere"), None);
    }
}
