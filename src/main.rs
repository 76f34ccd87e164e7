// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fanzone command-line driver
//!
//! Runs one session against the local store and prints the dashboard as
//! JSON. Usage:
//!
//! ```text
//! fanzone [--launch "?reset=1&entry=direct"] status
//! fanzone onboard [--team ID] [--name NAME] [--email EMAIL]
//! fanzone award POINTS | quest ID | spend POINTS | streak | reset
//! ```

use anyhow::{bail, Context};
use fanzone::{
    catalog::Catalogs,
    config::Config,
    db::FileStore,
    models::SignUpForm,
    services::{EntryPoint, LaunchParams, OnboardingStep, Session},
};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    init_logging(config.log_json)?;

    let catalogs = match &config.catalog_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading catalogs");
            Catalogs::load_from_file(path)
                .with_context(|| format!("Failed to load catalogs from {}", path.display()))?
        }
        None => Catalogs::builtin(),
    };

    let args: Vec<String> = env::args().skip(1).collect();
    let (launch, command) = parse_args(&args);

    let store = FileStore::open(&config.store_path);
    tracing::info!(store = %config.store_path.display(), "Starting Fanzone session");
    let mut session = Session::start(config, catalogs, store, &launch)?;

    match command.as_slice() {
        [] | ["status"] => {}
        ["onboard", rest @ ..] => onboard(&mut session, rest)?,
        ["award", points] => {
            if let Some(tier) = session.award_points(points.parse()?)? {
                eprintln!("Reached {}: {}", tier.name, tier.reward);
            }
        }
        ["quest", id] => {
            if let Some(tier) = session.complete_quest(id.parse()?)? {
                eprintln!("Reached {}: {}", tier.name, tier.reward);
            }
        }
        ["spend", points] => session.spend_points(points.parse()?)?,
        ["streak"] => {
            session.extend_streak()?;
        }
        ["reset"] => session.reset()?,
        other => bail!("unknown command: {}", other.join(" ")),
    }

    if session.take_celebration() {
        eprintln!("Welcome to the club!");
    }

    println!("{}", serde_json::to_string_pretty(&session.dashboard())?);
    Ok(())
}

/// Split `--launch QUERY` from the command words.
fn parse_args(args: &[String]) -> (LaunchParams, Vec<&str>) {
    let mut launch = LaunchParams::default();
    let mut command = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--launch" => {
                if let Some(value) = iter.next() {
                    launch = LaunchParams::from_query(value);
                }
            }
            other => command.push(other),
        }
    }
    (launch, command)
}

/// Drive the onboarding flow from flags in one go.
fn onboard<S: fanzone::KeyValueStore>(
    session: &mut Session<S>,
    args: &[&str],
) -> anyhow::Result<()> {
    let mut team = None;
    let mut form = SignUpForm::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match *arg {
            "--team" => team = iter.next().map(|v| v.parse::<u32>()).transpose()?,
            "--name" => form.name = iter.next().unwrap_or(&"").to_string(),
            "--email" => form.email = iter.next().unwrap_or(&"").to_string(),
            other => bail!("unknown onboard flag: {}", other),
        }
    }

    if session.onboarding().map(|o| o.step()) == Some(OnboardingStep::EntryPointSelection) {
        session.choose_entry_point(EntryPoint::Landing)?;
    }
    match team {
        Some(id) => session.select_team(id)?,
        None => session.skip_team_selection()?,
    }
    session.submit_sign_up(form)?;
    Ok(())
}

/// Initialize logging to stderr, as JSON lines or plain text.
fn init_logging(json: bool) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("fanzone=debug".parse()?)
        .add_directive("info".parse()?);

    if json {
        let format = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_current_span(true)
            .flatten_event(true);
        tracing_subscriber::registry().with(filter).with(format).init();
    } else {
        let format = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);
        tracing_subscriber::registry().with(filter).with(format).init();
    }
    Ok(())
}
