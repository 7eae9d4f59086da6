//! Shared fixtures for token service tests

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::entities::{TokenSubject, User, UserId, UserRole};
use crate::errors::{DomainError, TokenError};
use crate::repositories::{MockSettingsRepository, MockUserRepository};
use crate::services::token::{Clock, KeyGenerator, TokenService, TokenServiceConfig};

pub const DEFAULT_SECRET: [u8; 32] = [0x11; 32];
pub const KUBE_SECRET: [u8; 32] = [0x22; 32];

pub type TestService = TokenService<MockSettingsRepository, MockUserRepository>;

/// Clock that only moves when told to
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now = *now + by;
    }

    pub fn set(&self, at: DateTime<Utc>) {
        *self.now.lock().unwrap() = at;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Hands out pre-seeded keys in order, then fails
pub struct SequenceKeyGenerator {
    keys: Mutex<VecDeque<Vec<u8>>>,
}

impl SequenceKeyGenerator {
    pub fn new(keys: impl IntoIterator<Item = Vec<u8>>) -> Self {
        Self {
            keys: Mutex::new(keys.into_iter().collect()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.keys.lock().unwrap().len()
    }
}

impl KeyGenerator for SequenceKeyGenerator {
    fn generate(&self, _size: usize) -> Result<Vec<u8>, DomainError> {
        self.keys
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(DomainError::Token(TokenError::SecretGenerationFailed))
    }
}

/// Entropy source that is always exhausted
pub struct FailingKeyGenerator;

impl KeyGenerator for FailingKeyGenerator {
    fn generate(&self, _size: usize) -> Result<Vec<u8>, DomainError> {
        Err(DomainError::Token(TokenError::SecretGenerationFailed))
    }
}

pub struct TestContext {
    pub service: TestService,
    pub settings: Arc<MockSettingsRepository>,
    pub users: Arc<MockUserRepository>,
    pub clock: Arc<ManualClock>,
}

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

pub fn alice() -> TokenSubject {
    TokenSubject::new(UserId(42), "alice", UserRole::ADMINISTRATOR)
}

pub fn bob() -> TokenSubject {
    TokenSubject::new(UserId(7), "bob", UserRole::STANDARD).with_force_change_password(true)
}

/// Service with known secrets, a manual clock and alice and bob registered
pub async fn context(session_duration: &str) -> TestContext {
    context_with_settings(session_duration, MockSettingsRepository::new()).await
}

pub async fn context_with_settings(
    session_duration: &str,
    settings: MockSettingsRepository,
) -> TestContext {
    let settings = Arc::new(settings);
    let users = Arc::new(
        MockUserRepository::with_users([
            User::new(UserId(42), "alice", UserRole::ADMINISTRATOR),
            User::new(UserId(7), "bob", UserRole::STANDARD),
        ])
        .await,
    );
    let clock = Arc::new(ManualClock::new(start_time()));
    let keys = SequenceKeyGenerator::new([DEFAULT_SECRET.to_vec(), KUBE_SECRET.to_vec()]);

    let service = TokenService::with_dependencies(
        TokenServiceConfig::new(session_duration),
        settings.clone(),
        users.clone(),
        &keys,
        clock.clone(),
    )
    .await
    .expect("service should start");

    TestContext {
        service,
        settings,
        users,
        clock,
    }
}

/// Signs arbitrary claims with an arbitrary algorithm and secret
pub fn forge(secret: &[u8], algorithm: Algorithm, claims: &serde_json::Value) -> String {
    encode(&Header::new(algorithm), claims, &EncodingKey::from_secret(secret)).unwrap()
}

/// Decodes the payload segment of a compact token
pub fn payload_of(token: &str) -> serde_json::Value {
    let payload = token.split('.').nth(1).expect("token has a payload");
    let bytes = URL_SAFE_NO_PAD.decode(payload).expect("payload is base64url");
    serde_json::from_slice(&bytes).expect("payload is JSON")
}
