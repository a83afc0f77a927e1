//! Decision from an Auth0 rule
//!
//! Scores a recorded login and blocks it unless the decision is a good one.
//! Credentials are read by `LoginConfig::load` from `.env` or the
//! environment:
//!
//! ```text
//! DECISION_AI_API_KEY=... \
//! DECISION_AI_AUTH__USER_NAME=... \
//! DECISION_AI_AUTH__PASSWORD=... \
//! DECISION_AI_LOG_LEVEL=debug \
//! cargo run --example decision
//! ```

mod common;

use anyhow::Result;
use decision_ai_auth0::{Auth0, Auth0Options, LoginConfig};

#[tokio::main]
async fn main() -> Result<()> {
    common::init_tracing();

    let (user, context) = common::rule_input()?;
    let auth0 = Auth0::new(LoginConfig::load()?)?;

    match auth0.decision(&user, &context, &Auth0Options::default()).await {
        Ok(response) if Auth0::is_good_login(&response) => {
            println!("Login allowed for {}: {:?}", user.user_id, response.decision);
        }
        Ok(response) => {
            println!("Unauthorized: {}", serde_json::to_string_pretty(&response)?);
        }
        Err(err) => {
            println!("Decision failed: {}", err);
        }
    }

    Ok(())
}
