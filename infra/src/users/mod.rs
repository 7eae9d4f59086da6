//! User storage

mod memory;

pub use memory::InMemoryUserRepository;
