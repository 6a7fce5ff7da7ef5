//! GraphQL authentication context
//!
//! The HTTP handler verifies the bearer token and attaches an [AuthUser] to the
//! request data. Resolvers read it back through [AuthExt].

use async_graphql::Context;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;

use crate::services::AuthService;

/// User context extracted from a verified JWT, available in GraphQL resolvers
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i64,
    pub username: String,
}

/// Token prefixes accepted in the Authorization header
const TOKEN_PREFIXES: &[&str] = &["Bearer ", "JWT "];

/// Extract the raw token from an `Authorization: Bearer <token>` or `JWT <token>` header
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    TOKEN_PREFIXES
        .iter()
        .find_map(|prefix| value.strip_prefix(prefix))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

/// Verify a token and build the resolver context for it
pub fn verify_token(auth: &AuthService, token: &str) -> anyhow::Result<AuthUser> {
    let claims = auth.validate_access_token(token)?;
    let user_id = claims
        .sub
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid subject in token: {}", claims.sub))?;

    Ok(AuthUser {
        user_id,
        username: claims.username,
    })
}

/// Extension trait to get the authenticated user from GraphQL context
pub trait AuthExt {
    /// Get the authenticated user if present, or None for anonymous requests
    fn try_auth_user(&self) -> Option<&AuthUser>;
}

impl<'a> AuthExt for Context<'a> {
    fn try_auth_user(&self) -> Option<&AuthUser> {
        self.data_opt::<AuthUser>()
    }
}
