//! Main token service implementation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, Header, Validation};
use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::domain::entities::{
    Claims, IssuedToken, Scope, TokenData, TokenSubject, UNBOUNDED_LIFETIME_DAYS,
};
use crate::errors::{DomainError, TokenError, VerificationFailure};
use crate::repositories::{SettingsRepository, UserRepository};

use super::clock::{Clock, SystemClock};
use super::config::{parse_optional_lifetime, TokenServiceConfig};
use super::key_generator::{KeyGenerator, OsKeyGenerator};
use super::scope::peek_scope;
use super::secrets::SecretTable;

/// Service for issuing and verifying session tokens
///
/// Owns one signing secret per scope for the lifetime of the process. Share
/// a single instance behind an `Arc`; issuance and verification take `&self`.
pub struct TokenService<S: ?Sized, U: ?Sized> {
    secrets: SecretTable,
    /// Session lifetime in milliseconds, adjustable at runtime
    session_duration_ms: AtomicI64,
    settings: Arc<S>,
    users: Arc<U>,
    clock: Arc<dyn Clock>,
    validation: Validation,
}

impl<S, U> TokenService<S, U>
where
    S: SettingsRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    /// Creates a new token service instance
    ///
    /// Generates the per-process session secret and loads (or creates and
    /// persists) the kubeconfig secret.
    ///
    /// # Arguments
    ///
    /// * `session_duration` - Session lifetime as a duration string, e.g. "8h"
    /// * `settings` - Settings repository holding the durable secret
    /// * `users` - User repository consulted for revocation
    ///
    /// # Returns
    ///
    /// A new `TokenService` instance or an error if the duration is invalid,
    /// key generation fails or settings cannot be read or written
    pub async fn new(
        session_duration: &str,
        settings: Arc<S>,
        users: Arc<U>,
    ) -> Result<Self, DomainError> {
        Self::with_dependencies(
            TokenServiceConfig::new(session_duration),
            settings,
            users,
            &OsKeyGenerator,
            Arc::new(SystemClock),
        )
        .await
    }

    /// Creates a token service with an explicit key generator and clock
    pub async fn with_dependencies(
        config: TokenServiceConfig,
        settings: Arc<S>,
        users: Arc<U>,
        key_generator: &dyn KeyGenerator,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, DomainError> {
        let session_duration = config.parse_session_duration()?;
        let secrets = SecretTable::bootstrap(settings.as_ref(), key_generator).await?;

        debug!(
            session_duration_secs = session_duration.num_seconds(),
            "Token service initialized"
        );

        Ok(Self {
            secrets,
            session_duration_ms: AtomicI64::new(session_duration.num_milliseconds()),
            settings,
            users,
            clock,
            validation: Self::build_validation(),
        })
    }

    /// HS256 only; no registered claim is mandatory and `exp` is checked
    /// against the service clock instead of the library's wall clock.
    fn build_validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.required_spec_claims = HashSet::new();
        validation.leeway = 0;
        validation
    }

    /// Current session lifetime used for new session tokens
    pub fn user_session_duration(&self) -> Duration {
        Duration::milliseconds(self.session_duration_ms.load(Ordering::Acquire))
    }

    /// Changes the session lifetime for tokens issued from now on
    ///
    /// Tokens already issued keep the expiry they were signed with.
    pub fn set_user_session_duration(&self, duration: Duration) {
        self.session_duration_ms
            .store(duration.num_milliseconds(), Ordering::Release);
        info!(
            session_duration_secs = duration.num_seconds(),
            "User session duration updated"
        );
    }

    /// Generates a session token for a user who just logged in
    ///
    /// # Arguments
    ///
    /// * `subject` - The authenticated identity
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - The signed token and the expiry embedded in it
    /// * `Err(DomainError)` - Settings could not be read or signing failed
    pub async fn generate_token(&self, subject: &TokenSubject) -> Result<IssuedToken, DomainError> {
        let expires_at = expiry_after(self.clock.now(), self.user_session_duration())?;
        self.generate_scoped_token(subject, Some(expires_at), Scope::Default)
            .await
    }

    /// Generates a token for an exported kubeconfig file
    ///
    /// The lifetime comes from the `kubeconfig_expiry` setting; "0" yields a
    /// token without expiry.
    pub async fn generate_kubeconfig_token(
        &self,
        subject: &TokenSubject,
    ) -> Result<IssuedToken, DomainError> {
        let settings = self
            .settings
            .settings()
            .await
            .map_err(|e| DomainError::storage("failed fetching settings", e))?;

        let expires_at = parse_optional_lifetime(&settings.kubeconfig_expiry)?
            .map(|lifetime| expiry_after(self.clock.now(), lifetime))
            .transpose()?;

        self.generate_scoped_token(subject, expires_at, Scope::KubeConfig)
            .await
    }

    /// Generates a token for an explicit scope and expiry
    ///
    /// # Arguments
    ///
    /// * `subject` - The identity the token represents
    /// * `expires_at` - Expiry instant, `None` for a token that never expires
    /// * `scope` - Scope selecting the signing secret
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - The signed token; `expires_at` matches the `exp` claim
    /// * `Err(DomainError)` - Settings could not be read or signing failed
    pub async fn generate_scoped_token(
        &self,
        subject: &TokenSubject,
        expires_at: Option<DateTime<Utc>>,
        scope: Scope,
    ) -> Result<IssuedToken, DomainError> {
        let secret = self.secrets.get(scope);

        let settings = self
            .settings
            .settings()
            .await
            .map_err(|e| DomainError::storage("failed fetching settings", e))?;

        let now = self.clock.now();
        let mut expires_at = expires_at;

        if settings.is_desktop_extension {
            info!("Detected desktop extension mode, issuing non-expiring session");
            expires_at = Some(expiry_after(now, Duration::days(UNBOUNDED_LIFETIME_DAYS))?);
        }

        let claims = Claims::new(subject, scope, now, expires_at);
        let token = encode(&Header::new(Algorithm::HS256), &claims, secret.encoding_key())
            .map_err(|e| {
                error!("Failed to sign {} token: {}", scope, e);
                DomainError::Token(TokenError::TokenGenerationFailed)
            })?;

        Ok(IssuedToken {
            token,
            expires_at: claims.expires_at(),
        })
    }

    /// Parses a token and verifies its validity
    ///
    /// Checks, in order: signature (with the secret of the scope the token
    /// claims), expiry, and that the user's credentials were not invalidated
    /// after the token was issued.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenData)` - The identity carried by the token
    /// * `Err(DomainError)` - Always `TokenError::InvalidToken`, whatever the cause
    pub async fn parse_and_verify_token(&self, token: &str) -> Result<TokenData, DomainError> {
        match self.verify(token).await {
            Ok(claims) => Ok(TokenData::from_claims(claims, token)),
            Err(failure) => {
                debug!(reason = %failure, "Rejected token");
                Err(DomainError::Token(TokenError::from(failure)))
            }
        }
    }

    async fn verify(&self, token: &str) -> Result<Claims, VerificationFailure> {
        let scope = peek_scope(token);
        let secret = self.secrets.get(scope);

        let claims = decode::<Claims>(token, secret.decoding_key(), &self.validation)?.claims;

        if claims.is_expired_at(self.clock.now()) {
            return Err(VerificationFailure::Expired {
                expired_at: claims.exp.unwrap_or_default(),
            });
        }

        let user = self
            .users
            .find_by_id(claims.user_id())
            .await
            .map_err(|e| VerificationFailure::UserLookup {
                user_id: claims.id,
                reason: e.to_string(),
            })?
            .ok_or_else(|| VerificationFailure::UserLookup {
                user_id: claims.id,
                reason: "user not found".to_string(),
            })?;

        if user.token_issue_at > claims.iat {
            return Err(VerificationFailure::Revoked {
                issued_at: claims.iat,
                invalidated_at: user.token_issue_at,
            });
        }

        Ok(claims)
    }
}

/// `now + lifetime`, failing instead of overflowing the calendar
fn expiry_after(now: DateTime<Utc>, lifetime: Duration) -> Result<DateTime<Utc>, DomainError> {
    now.checked_add_signed(lifetime).ok_or_else(|| {
        error!(
            lifetime_secs = lifetime.num_seconds(),
            "Token lifetime overflows the representable date range"
        );
        DomainError::Token(TokenError::TokenGenerationFailed)
    })
}
