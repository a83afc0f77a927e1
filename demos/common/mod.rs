//! Shared setup for the demos

use anyhow::{Context as _, Result};
use decision_ai_auth0::{Context, User};
use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Deserialize)]
struct RuleInput {
    user: User,
    context: Context,
}

/// Install a fmt subscriber honouring `RUST_LOG`, INFO by default
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(LevelFilter::INFO.into()))
        .init();
}

/// `user` and `context` of a recorded Auth0 password login
pub fn rule_input() -> Result<(User, Context)> {
    let input: RuleInput = serde_json::from_str(include_str!("../data/rule_input.json"))
        .context("Failed to parse demos/data/rule_input.json")?;
    Ok((input.user, input.context))
}
