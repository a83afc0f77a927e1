//! Report a failed login attempt
//!
//! Run with `cargo run --example auth_failure` after setting the
//! `DECISION_AI_*` variables (see the `decision` demo).

mod common;

use anyhow::Result;
use decision_ai_auth0::{Auth0, Auth0Options, LoginConfig};

#[tokio::main]
async fn main() -> Result<()> {
    common::init_tracing();

    let (user, context) = common::rule_input()?;
    let auth0 = Auth0::new(LoginConfig::load()?)?;

    match auth0.auth_failure(&user, &context, &Auth0Options::default()).await {
        Ok(response) => println!("{}", serde_json::to_string_pretty(&response)?),
        Err(err) => eprintln!("Failed to report the login failure: {}", err),
    }

    Ok(())
}
