//! Authentication mutations
//!
//! None of these require an existing session. Failures are returned in the
//! payload's `errors` list rather than as GraphQL errors.

use super::prelude::*;
use crate::services::RegisterInput;

#[derive(Default)]
pub struct AuthMutations;

#[Object]
impl AuthMutations {
    /// Register a new account and return a token for it
    async fn register(
        &self,
        ctx: &Context<'_>,
        username: String,
        email: String,
        password: String,
    ) -> Result<AuthPayload> {
        let auth = ctx.data_unchecked::<AuthService>();

        let input = RegisterInput {
            username,
            email,
            password,
        };

        match auth.register(input).await {
            Ok(result) => {
                tracing::info!(
                    user_id = result.user.id,
                    username = %result.user.username,
                    "User registered successfully"
                );
                Ok(AuthPayload::ok(result.token, User::from(result.user)))
            }
            Err(e) => {
                tracing::warn!(error = %e, "User registration failed");
                Ok(AuthPayload::failed(e.to_string()))
            }
        }
    }

    /// Exchange username and password for a token
    async fn token_auth(
        &self,
        ctx: &Context<'_>,
        username: String,
        password: String,
    ) -> Result<AuthPayload> {
        let auth = ctx.data_unchecked::<AuthService>();

        match auth.login(&username, &password).await {
            Ok(result) => {
                tracing::info!(
                    user_id = result.user.id,
                    username = %result.user.username,
                    "User logged in successfully"
                );
                Ok(AuthPayload::ok(result.token, User::from(result.user)))
            }
            Err(e) => {
                tracing::warn!(username = %username, error = %e, "Login failed");
                Ok(AuthPayload::failed(e.to_string()))
            }
        }
    }

    /// Check a token's signature and expiry
    async fn verify_token(&self, ctx: &Context<'_>, token: String) -> Result<VerifyTokenPayload> {
        let auth = ctx.data_unchecked::<AuthService>();

        Ok(match auth.validate_access_token(&token) {
            Ok(claims) => VerifyTokenPayload {
                success: true,
                errors: Vec::new(),
                username: Some(claims.username),
                exp: Some(claims.exp),
            },
            Err(e) => {
                tracing::debug!(error = %e, "Token verification failed");
                VerifyTokenPayload {
                    success: false,
                    errors: vec![e.to_string()],
                    username: None,
                    exp: None,
                }
            }
        })
    }
}
