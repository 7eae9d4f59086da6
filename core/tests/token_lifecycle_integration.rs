//! Integration tests for the token lifecycle through the public API
//!
//! Uses small in-test repositories so only exported items are exercised.

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use sg_core::{
    Clock, DomainError, OsKeyGenerator, Settings, SettingsRepository, TokenService,
    TokenServiceConfig, TokenSubject, User, UserId, UserRepository, UserRole,
};
use sg_shared::errors::{error_codes, IntoErrorResponse};

#[derive(Default)]
struct SharedSettings(Mutex<Settings>);

#[async_trait]
impl SettingsRepository for SharedSettings {
    async fn settings(&self) -> Result<Settings, DomainError> {
        Ok(self.0.lock().unwrap().clone())
    }

    async fn update_settings(&self, settings: Settings) -> Result<(), DomainError> {
        *self.0.lock().unwrap() = settings;
        Ok(())
    }
}

#[derive(Default)]
struct Users(Mutex<HashMap<UserId, User>>);

#[async_trait]
impl UserRepository for Users {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.0.lock().unwrap().get(&id).cloned())
    }
}

struct FixedClock(Mutex<DateTime<Utc>>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

fn users_with_alice() -> Arc<Users> {
    let users = Users::default();
    users.0.lock().unwrap().insert(
        UserId(42),
        User::new(UserId(42), "alice", UserRole::ADMINISTRATOR),
    );
    Arc::new(users)
}

#[tokio::test]
async fn test_session_lifecycle_with_controlled_clock() {
    let start = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let clock = Arc::new(FixedClock(Mutex::new(start)));
    let users = users_with_alice();

    let service = TokenService::with_dependencies(
        TokenServiceConfig::new("24h"),
        Arc::new(SharedSettings::default()),
        users.clone(),
        &OsKeyGenerator,
        clock.clone(),
    )
    .await
    .unwrap();

    let alice = TokenSubject::new(UserId(42), "alice", UserRole::ADMINISTRATOR);
    let issued = service.generate_token(&alice).await.unwrap();
    assert_eq!(issued.expires_at, Some(start + Duration::hours(24)));

    let data = service.parse_and_verify_token(&issued.token).await.unwrap();
    assert_eq!(data.id, UserId(42));
    assert_eq!(data.username, "alice");
    assert_eq!(data.role, UserRole::ADMINISTRATOR);

    *clock.0.lock().unwrap() = start + Duration::hours(25);
    let err = service.parse_and_verify_token(&issued.token).await.unwrap_err();
    assert!(err.is_invalid_token());
    assert_eq!(err.to_error_response().error, error_codes::UNAUTHORIZED);
}

#[tokio::test]
async fn test_restart_keeps_kubeconfig_tokens_only() {
    let settings = Arc::new(SharedSettings::default());
    let users = users_with_alice();
    let alice = TokenSubject::new(UserId(42), "alice", UserRole::ADMINISTRATOR);

    let before = TokenService::new("8h", settings.clone(), users.clone())
        .await
        .unwrap();
    let session = before.generate_token(&alice).await.unwrap();
    let kube = before.generate_kubeconfig_token(&alice).await.unwrap();
    assert!(kube.never_expires());

    let after = TokenService::new("8h", settings.clone(), users)
        .await
        .unwrap();

    assert!(after.parse_and_verify_token(&kube.token).await.is_ok());
    assert!(after
        .parse_and_verify_token(&session.token)
        .await
        .unwrap_err()
        .is_invalid_token());
}

#[tokio::test]
async fn test_invalid_session_duration_is_rejected_at_construction() {
    let result = TokenService::new(
        "forever",
        Arc::new(SharedSettings::default()),
        users_with_alice(),
    )
    .await;

    match result {
        Err(err) => {
            assert!(err.to_string().contains("forever"));
            assert_eq!(err.to_error_response().error, error_codes::AUTH_UNAVAILABLE);
        }
        Ok(_) => panic!("construction should fail"),
    }
}
