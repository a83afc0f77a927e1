//! Auto-decision with the rule callback
//!
//! The callback receives an error only when the API rejected the login;
//! outages of the decision service let the login through.
//!
//! Run with `cargo run --example auto_decision` after setting the
//! `DECISION_AI_*` variables (see the `decision` demo).

mod common;

use anyhow::Result;
use decision_ai_auth0::{Auth0, Auth0Options, LoginConfig};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    common::init_tracing();

    let (user, context) = common::rule_input()?;
    let auth0 = Auth0::new(LoginConfig::load()?)?;
    let options = Auth0Options::new()
        .with_timeout(Duration::from_secs(2))
        .with_privacy_mode(true);

    auth0
        .run_rule(
            user,
            context,
            |err, user, _context| match err {
                Some(err) => println!("Login of {} blocked: {}", user.user_id, err),
                None => println!("Login of {} continues", user.user_id),
            },
            &options,
        )
        .await;

    Ok(())
}
