//! Settings repository module.

mod r#trait;
pub use r#trait::SettingsRepository;

#[cfg(test)]
mod mock;
#[cfg(test)]
pub use mock::MockSettingsRepository;
