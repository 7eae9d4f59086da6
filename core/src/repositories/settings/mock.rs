//! Mock implementation of SettingsRepository for testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::Settings;
use crate::errors::DomainError;

use super::SettingsRepository;

/// Mock settings repository for testing
///
/// Share one instance (behind an `Arc`) between services to emulate a
/// settings database that survives a process restart.
pub struct MockSettingsRepository {
    settings: RwLock<Settings>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl MockSettingsRepository {
    /// Create a new mock repository holding default settings
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a mock repository holding the given settings
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(settings),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            reads: AtomicUsize::new(0),
            writes: AtomicUsize::new(0),
        }
    }

    /// Set whether reads should fail
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Set whether writes should fail
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Toggle desktop-extension mode
    pub async fn set_desktop_extension(&self, enabled: bool) {
        self.settings.write().await.is_desktop_extension = enabled;
    }

    /// Snapshot of the stored settings
    pub async fn snapshot(&self) -> Settings {
        self.settings.read().await.clone()
    }

    /// Number of reads served
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of writes accepted
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl Default for MockSettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsRepository for MockSettingsRepository {
    async fn settings(&self) -> Result<Settings, DomainError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::storage("mock settings read", "backend unavailable"));
        }
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.settings.read().await.clone())
    }

    async fn update_settings(&self, settings: Settings) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::storage("mock settings write", "backend unavailable"));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        *self.settings.write().await = settings;
        Ok(())
    }
}
