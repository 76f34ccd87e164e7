// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session orchestration.
//!
//! Ties together the repository, the onboarding flow and the progression
//! engine for the single local user:
//! 1. On start, honor a reset request or load the stored user
//! 2. With no user, run onboarding and save the record it produces
//! 3. Apply point awards as whole-record saves
//! 4. Derive the dashboard view on every read

use serde::Serialize;

use crate::catalog::Catalogs;
use crate::config::Config;
use crate::db::{KeyValueStore, UserRepository};
use crate::error::{AppError, Result};
use crate::models::{SignUpForm, Tier, UserRecord};
use crate::services::launch::LaunchParams;
use crate::services::onboarding::{
    CelebrationSignal, EntryPoint, Onboarding, OnboardingError, OnboardingStep,
};
use crate::services::progression::{self, TierProgress};

/// Everything the UI shell needs to render, derived fresh on each call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub user: Option<UserRecord>,
    pub current_tier: Option<Tier>,
    pub progress: Option<TierProgress>,
    pub lifetime_tier: Option<Tier>,
    pub onboarding_step: Option<OnboardingStep>,
    pub show_landing: bool,
}

/// One visitor's session against a store.
pub struct Session<S> {
    config: Config,
    catalogs: Catalogs,
    repo: UserRepository<S>,
    user: Option<UserRecord>,
    onboarding: Option<Onboarding>,
    celebration: CelebrationSignal,
}

impl<S: KeyValueStore> Session<S> {
    /// Open a session, restoring the stored user when there is one.
    pub fn start(
        config: Config,
        catalogs: Catalogs,
        store: S,
        params: &LaunchParams,
    ) -> Result<Self> {
        let repo = UserRepository::new(store);

        if config.always_show_landing {
            if let Err(e) = repo.clear_landing_seen() {
                tracing::warn!(error = %e, "Failed to clear landing flag");
            }
        }

        let mut session = Self {
            config,
            catalogs,
            repo,
            user: None,
            onboarding: None,
            celebration: CelebrationSignal::new(),
        };

        if params.reset {
            tracing::info!("Reset requested at launch");
            session.reset()?;
            return Ok(session);
        }

        session.user = session.repo.load();
        match &session.user {
            Some(user) => tracing::info!(points = user.points, "Restored user"),
            None => {
                tracing::info!(entry = ?params.entry, "No stored user, starting onboarding");
                session.onboarding = Some(Onboarding::for_entry(
                    params.entry,
                    session.celebration.clone(),
                ));
            }
        }

        Ok(session)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    pub fn repository(&self) -> &UserRepository<S> {
        &self.repo
    }

    pub fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }

    pub fn onboarding(&self) -> Option<&Onboarding> {
        self.onboarding.as_ref()
    }

    // ─── Onboarding ──────────────────────────────────────────────

    fn flow(&mut self) -> Result<&mut Onboarding> {
        self.onboarding
            .as_mut()
            .ok_or(AppError::Onboarding(OnboardingError::AlreadyComplete))
    }

    pub fn choose_entry_point(&mut self, entry: EntryPoint) -> Result<()> {
        Ok(self.flow()?.choose_entry_point(entry)?)
    }

    pub fn select_team(&mut self, team_id: u32) -> Result<()> {
        let flow = self
            .onboarding
            .as_mut()
            .ok_or(AppError::Onboarding(OnboardingError::AlreadyComplete))?;
        Ok(flow.select_team(team_id, &self.catalogs.teams)?)
    }

    pub fn skip_team_selection(&mut self) -> Result<()> {
        Ok(self.flow()?.skip_team_selection()?)
    }

    pub fn back(&mut self) -> Result<()> {
        Ok(self.flow()?.back()?)
    }

    /// Finish onboarding and persist the new user.
    ///
    /// If the save fails the flow is rolled back to account creation and no
    /// celebration is delivered, so the visitor can submit again.
    pub fn submit_sign_up(&mut self, form: SignUpForm) -> Result<&UserRecord> {
        let flow = self.flow()?;
        let before = flow.clone();
        let record = flow.submit(form)?;

        if let Err(e) = self.repo.save(&record) {
            tracing::warn!(error = %e, "Failed to save new user, onboarding rolled back");
            self.celebration.take();
            self.onboarding = Some(before);
            return Err(e);
        }

        self.onboarding = None;
        Ok(self.user.insert(record))
    }

    /// Read-and-clear the "just completed onboarding" notification.
    pub fn take_celebration(&self) -> bool {
        self.celebration.take()
    }

    /// Forget the user and restart onboarding from the beginning.
    pub fn reset(&mut self) -> Result<()> {
        self.repo.reset()?;
        self.user = None;
        self.celebration.take();
        self.onboarding = Some(Onboarding::new(self.celebration.clone()));
        Ok(())
    }

    // ─── Landing Page ────────────────────────────────────────────

    pub fn should_show_landing(&self) -> bool {
        self.config.always_show_landing || !self.repo.has_seen_landing()
    }

    pub fn mark_landing_seen(&self) -> Result<()> {
        self.repo.mark_landing_seen()
    }

    // ─── Points ──────────────────────────────────────────────────

    /// Credit points. Returns the tier newly reached, if any.
    pub fn award_points(&mut self, points: u64) -> Result<Option<Tier>> {
        let user = self.user.as_mut().ok_or(AppError::NoActiveUser)?;
        let before = user.points;
        user.award(points);
        self.repo.save(user)?;

        let reached = progression::tier_change(&self.catalogs.tiers, before, user.points).cloned();
        if let Some(tier) = &reached {
            tracing::info!(tier = %tier.name, points = user.points, "Tier reached");
        }
        Ok(reached)
    }

    /// Credit a catalog quest's points.
    pub fn complete_quest(&mut self, quest_id: u32) -> Result<Option<Tier>> {
        let points = self
            .catalogs
            .quest(quest_id)
            .map(|q| q.points)
            .ok_or(AppError::UnknownQuest(quest_id))?;
        tracing::debug!(quest_id, points, "Quest completed");
        self.award_points(points)
    }

    pub fn spend_points(&mut self, points: u64) -> Result<()> {
        let user = self.user.as_mut().ok_or(AppError::NoActiveUser)?;
        user.spend(points)?;
        self.repo.save(user)
    }

    pub fn extend_streak(&mut self) -> Result<u32> {
        let user = self.user.as_mut().ok_or(AppError::NoActiveUser)?;
        user.extend_streak();
        self.repo.save(user)?;
        Ok(user.streak)
    }

    pub fn break_streak(&mut self) -> Result<()> {
        let user = self.user.as_mut().ok_or(AppError::NoActiveUser)?;
        user.break_streak();
        self.repo.save(user)
    }

    // ─── Display ─────────────────────────────────────────────────

    pub fn dashboard(&self) -> Dashboard {
        let tiers = &self.catalogs.tiers;
        Dashboard {
            user: self.user.clone(),
            current_tier: self.user.as_ref().map(|u| u.tier(tiers).clone()),
            progress: self
                .user
                .as_ref()
                .map(|u| progression::progress(tiers, u.points)),
            lifetime_tier: self.user.as_ref().map(|u| u.lifetime_tier(tiers).clone()),
            onboarding_step: self.onboarding.as_ref().map(Onboarding::step),
            show_landing: self.should_show_landing(),
        }
    }
}
