//! Authentication service for user accounts and JWT handling
//!
//! Provides:
//! - User registration and login
//! - Password hashing with bcrypt
//! - JWT access token generation and validation

use anyhow::{Result, anyhow};
use base64::Engine;
use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::db::sqlite_helpers::is_unique_violation;
use crate::db::{CreateUser, Database, UserRecord};

/// Passwords shorter than this are rejected at registration
pub const MIN_PASSWORD_LENGTH: usize = 8;

const DUPLICATE_USERNAME: &str = "A user with that username already exists";

// ============================================================================
// JWT Claims
// ============================================================================

/// Claims structure for access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// User ID (subject)
    pub sub: String,
    /// Username
    pub username: String,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued at timestamp
    pub iat: i64,
}

// ============================================================================
// Auth Types
// ============================================================================

/// Registration input
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Result of a successful registration or login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: UserRecord,
    pub token: String,
}

// ============================================================================
// Configuration
// ============================================================================

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Access token lifetime in seconds (default: 5 minutes)
    pub access_token_lifetime: i64,
    /// Bcrypt cost factor
    pub bcrypt_cost: u32,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"...")
            .field("access_token_lifetime", &self.access_token_lifetime)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

impl AuthConfig {
    pub fn from_env() -> Self {
        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => secret.trim().to_string(),
            _ => {
                tracing::warn!("JWT_SECRET not set; generated a random secret, tokens will not survive a restart");
                generate_jwt_secret()
            }
        };

        Self {
            jwt_secret,
            access_token_lifetime: std::env::var("ACCESS_TOKEN_LIFETIME")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5 * 60),
            bcrypt_cost: std::env::var("BCRYPT_COST")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_COST),
        }
    }
}

fn generate_jwt_secret() -> String {
    let mut bytes = [0u8; 32];
    rand::RngCore::fill_bytes(&mut rand::thread_rng(), &mut bytes);
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

// ============================================================================
// Auth Service
// ============================================================================

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    db: Database,
    config: AuthConfig,
}

impl AuthService {
    /// Create a new auth service
    pub fn new(db: Database, config: AuthConfig) -> Self {
        Self { db, config }
    }

    // ========================================================================
    // User Registration
    // ========================================================================

    /// Register a new user and issue a token for it
    pub async fn register(&self, input: RegisterInput) -> Result<LoginResult> {
        let username = input.username.trim();
        if username.is_empty() {
            return Err(anyhow!("Username is required"));
        }
        if input.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(anyhow!(
                "Password must contain at least {} characters",
                MIN_PASSWORD_LENGTH
            ));
        }

        let users = self.db.users();
        if users.get_by_username(username).await?.is_some() {
            return Err(anyhow!(DUPLICATE_USERNAME));
        }

        let password_hash = self.hash_password(&input.password)?;
        // A concurrent registration can still win between the check and the insert
        let user = users
            .create(CreateUser {
                username: username.to_string(),
                email: input.email.trim().to_string(),
                password_hash,
                is_superuser: false,
            })
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    anyhow!(DUPLICATE_USERNAME)
                } else {
                    e
                }
            })?;

        let token = self.generate_token(&user)?;

        Ok(LoginResult { user, token })
    }

    // ========================================================================
    // Login
    // ========================================================================

    /// Login with username and password
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResult> {
        let users = self.db.users();

        let user = match users.get_by_username(username.trim()).await? {
            Some(u) => u,
            None => return Err(anyhow!("Please enter valid credentials")),
        };

        if !self.verify_password(password, &user.password_hash)? {
            return Err(anyhow!("Please enter valid credentials"));
        }

        // Disabled accounts are only reported once the password matches
        if !user.is_active {
            return Err(anyhow!("Account is disabled"));
        }

        let token = self.generate_token(&user)?;
        users.update_last_login(user.id).await?;

        Ok(LoginResult { user, token })
    }

    // ========================================================================
    // Token Management
    // ========================================================================

    /// Decode and validate an access token
    pub fn validate_access_token(&self, token: &str) -> Result<AccessTokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_aud = false;

        let token_data = decode::<AccessTokenClaims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| anyhow!("Invalid token: {}", e))?;

        Ok(token_data.claims)
    }

    // ========================================================================
    // Helper Methods
    // ========================================================================

    /// Hash a password with bcrypt
    fn hash_password(&self, password: &str) -> Result<String> {
        hash(password, self.config.bcrypt_cost)
            .map_err(|e| anyhow!("Failed to hash password: {}", e))
    }

    /// Verify a password against a hash
    fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        verify(password, hash).map_err(|e| anyhow!("Failed to verify password: {}", e))
    }

    /// Generate an access token for a user
    fn generate_token(&self, user: &UserRecord) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.config.access_token_lifetime);

        let claims = AccessTokenClaims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )
        .map_err(|e| anyhow!("Failed to create access token: {}", e))
    }
}
