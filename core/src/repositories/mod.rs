pub mod settings;
pub mod user;

pub use settings::SettingsRepository;
pub use user::UserRepository;

#[cfg(test)]
pub use settings::MockSettingsRepository;
#[cfg(test)]
pub use user::MockUserRepository;
