//! Authentication service
//!
//! Email/password accounts with Argon2 hashing, short-lived JWT access
//! tokens and rotating refresh tokens held in Redis. Students and tutors
//! self-register; admin accounts are provisioned out of band.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::Config,
    constants::roles,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
};

/// Redis key prefix for stored refresh tokens
const REFRESH_KEY_PREFIX: &str = "refresh_token";

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub name: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Freshly issued access/refresh token pair
#[derive(Debug)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new student or tutor account
    pub async fn register(
        pool: &PgPool,
        name: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> AppResult<User> {
        // Admin accounts are provisioned out of band
        if !roles::SELF_REGISTER.contains(&role) {
            return Err(AppError::Validation(format!("Invalid role: {}", role)));
        }

        if UserRepository::find_by_email(pool, email).await?.is_some() {
            return Err(AppError::AlreadyExists(
                "Email already registered".to_string(),
            ));
        }

        let password_hash = Self::hash_password(password)?;
        let user = UserRepository::create(pool, name, email, &password_hash, role).await?;

        tracing::info!(user_id = %user.id, role = %user.role, "User registered");

        Ok(user)
    }

    /// Login with email and password
    pub async fn login(
        pool: &PgPool,
        mut redis: ConnectionManager,
        config: &Config,
        email: &str,
        password: &str,
    ) -> AppResult<(User, TokenPair)> {
        let user = UserRepository::find_by_email(pool, email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        let tokens = Self::issue_tokens(&mut redis, config, &user).await?;

        Ok((user, tokens))
    }

    /// Exchange a refresh token for a fresh token pair.
    ///
    /// The presented token is consumed even on a successful exchange, so a
    /// stolen-and-replayed refresh token dies on first reuse.
    pub async fn refresh_token(
        pool: &PgPool,
        mut redis: ConnectionManager,
        config: &Config,
        refresh_token: &str,
    ) -> AppResult<TokenPair> {
        let key = Self::find_refresh_key(&mut redis, refresh_token).await?;

        // Key layout: refresh_token:{user_id}:{token}
        let user_id = key
            .split(':')
            .nth(1)
            .and_then(|s| Uuid::parse_str(s).ok())
            .ok_or(AppError::InvalidToken)?;

        let user = UserRepository::find_by_id(pool, &user_id)
            .await?
            .ok_or(AppError::InvalidToken)?;

        redis.del::<_, ()>(&key).await?;

        Self::issue_tokens(&mut redis, config, &user).await
    }

    /// Logout, optionally revoking every stored refresh token for the user
    pub async fn logout(
        mut redis: ConnectionManager,
        user_id: &Uuid,
        all_sessions: bool,
    ) -> AppResult<()> {
        if all_sessions {
            let pattern = format!("{}:{}:*", REFRESH_KEY_PREFIX, user_id);
            let keys: Vec<String> = redis::cmd("KEYS")
                .arg(&pattern)
                .query_async(&mut redis)
                .await?;

            for key in keys {
                redis.del::<_, ()>(&key).await?;
            }
        }

        Ok(())
    }

    /// Verify JWT token and extract claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Mint an access token and store a new refresh token in Redis
    async fn issue_tokens(
        redis: &mut ConnectionManager,
        config: &Config,
        user: &User,
    ) -> AppResult<TokenPair> {
        let (access_token, expires_in) = Self::generate_access_token(user, config)?;
        let refresh_token = Uuid::new_v4().to_string();

        let key = format!("{}:{}:{}", REFRESH_KEY_PREFIX, user.id, refresh_token);
        let ttl = config.jwt.refresh_token_expiry_days * 24 * 60 * 60;
        redis.set_ex::<_, _, ()>(&key, "1", ttl as u64).await?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in,
        })
    }

    /// Locate the Redis key holding a presented refresh token
    async fn find_refresh_key(
        redis: &mut ConnectionManager,
        refresh_token: &str,
    ) -> AppResult<String> {
        let pattern = format!("{}:*:{}", REFRESH_KEY_PREFIX, refresh_token);
        let mut keys: Vec<String> = redis::cmd("KEYS")
            .arg(&pattern)
            .query_async(redis)
            .await?;

        keys.pop().ok_or(AppError::InvalidToken)
    }

    /// Hash password using Argon2
    fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Build and sign the JWT access token
    fn generate_access_token(user: &User, config: &Config) -> AppResult<(String, i64)> {
        let now = Utc::now();
        let expires_in = config.jwt.expiry_hours * 3600;

        let claims = Claims {
            sub: user.id.to_string(),
            name: user.name.clone(),
            role: user.role.clone(),
            exp: (now + Duration::hours(config.jwt.expiry_hours)).timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok((token, expires_in))
    }
}
