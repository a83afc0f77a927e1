//! Authentication type derivation

use crate::types::{Context, User};
use decision_ai_core::AuthenticationType;

const METHOD_MFA: &str = "mfa";
const METHOD_FEDERATED: &str = "federated";

/// Derive how the user authenticated from the latest authentication method.
///
/// - no methods: unknown
/// - `mfa`: two factor
/// - `federated`: single sign-on through the context's connection, or social
///   sign-on when the identity is social or not linked to the user
/// - anything else with live SSO clients: client storage
/// - otherwise password (password-less logins included)
pub fn authentication_type(user: &User, context: &Context) -> Option<AuthenticationType> {
    // `max_by_key` keeps the last of equal timestamps
    let latest = context
        .authentication
        .methods
        .iter()
        .max_by_key(|method| method.timestamp)?;

    let authentication_type = match latest.name.as_str() {
        METHOD_MFA => AuthenticationType::TwoFactor,
        METHOD_FEDERATED => {
            let identity = context
                .connection
                .as_deref()
                .and_then(|connection| user.identity_for(connection));
            match identity {
                Some(identity) if !identity.is_social => AuthenticationType::SingleSignOn,
                _ => AuthenticationType::SocialSignOn,
            }
        }
        _ if context.sso.has_current_clients() => AuthenticationType::ClientStorage,
        _ => AuthenticationType::Password,
    };

    Some(authentication_type)
}
