// src/infrastructure/security/token.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
    ports::{security::AuthGuard, time::Clock},
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

type HmacSha256 = Hmac<Sha256>;

const TOKEN_PREFIX: &str = "sg1";
const MIN_SECRET_LEN: usize = 32;

/// Verifies bearer tokens of the form `sg1.<user_id>.<expires_unix>.<sig>`,
/// where `sig` is the URL-safe base64 HMAC-SHA256 of the preceding payload.
/// Tokens are stateless; expiry is the only revocation mechanism.
#[derive(Clone)]
pub struct HmacTokenGuard {
    secret: Arc<Vec<u8>>,
    clock: Arc<dyn Clock>,
}

impl HmacTokenGuard {
    pub fn new(secret: &str, clock: Arc<dyn Clock>) -> ApplicationResult<Self> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(ApplicationError::infrastructure(format!(
                "token secret must be at least {MIN_SECRET_LEN} bytes"
            )));
        }
        Ok(Self {
            secret: Arc::new(secret.as_bytes().to_vec()),
            clock,
        })
    }

    /// Signs a token for `user_id`. Issuance flows live outside this core;
    /// this exists for operational tooling and tests.
    pub fn issue(&self, user_id: UserId, ttl: Duration) -> ApplicationResult<String> {
        let expires_at = self.clock.now() + ttl;
        let payload = format!(
            "{TOKEN_PREFIX}.{}.{}",
            i64::from(user_id),
            expires_at.timestamp()
        );
        let signature = URL_SAFE_NO_PAD.encode(self.sign(payload.as_bytes())?);
        Ok(format!("{payload}.{signature}"))
    }

    fn sign(&self, payload: &[u8]) -> ApplicationResult<Vec<u8>> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        mac.update(payload);
        Ok(mac.finalize().into_bytes().to_vec())
    }

    fn verify_signature(&self, payload: &str, signature: &str) -> ApplicationResult<()> {
        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| ApplicationError::unauthenticated("malformed token signature"))?;
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| ApplicationError::unauthenticated("invalid token signature"))
    }
}

fn parse_payload(payload: &str) -> ApplicationResult<(i64, i64)> {
    let mut parts = payload.split('.');
    let prefix = parts.next();
    let user_id = parts.next().and_then(|v| v.parse::<i64>().ok());
    let expires = parts.next().and_then(|v| v.parse::<i64>().ok());

    match (prefix, user_id, expires, parts.next()) {
        (Some(TOKEN_PREFIX), Some(user_id), Some(expires), None) => Ok((user_id, expires)),
        _ => Err(ApplicationError::unauthenticated("malformed token")),
    }
}

#[async_trait]
impl AuthGuard for HmacTokenGuard {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let (payload, signature) = token
            .rsplit_once('.')
            .ok_or_else(|| ApplicationError::unauthenticated("malformed token"))?;

        self.verify_signature(payload, signature)?;
        let (user_id, expires) = parse_payload(payload)?;

        let expires_at = DateTime::<Utc>::from_timestamp(expires, 0)
            .ok_or_else(|| ApplicationError::unauthenticated("malformed token expiry"))?;
        if self.clock.now() >= expires_at {
            return Err(ApplicationError::unauthenticated("token expired"));
        }

        let id = UserId::new(user_id)
            .map_err(|_| ApplicationError::unauthenticated("malformed token subject"))?;

        Ok(AuthenticatedUser { id, expires_at })
    }
}
