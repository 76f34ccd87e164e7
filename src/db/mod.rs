//! Storage layer: a string key-value store and the user repository on top.

pub mod file;
pub mod memory;
pub mod repository;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use repository::UserRepository;

use crate::error::Result;

/// Key names as constants.
pub mod keys {
    pub const ONBOARDING_COMPLETE: &str = "fanzone.onboardingComplete";
    /// Serialized user record (JSON)
    pub const USER: &str = "fanzone.user";
    pub const LANDING_SEEN: &str = "fanzone.hasSeenLanding";

    /// Stored value of a set flag.
    pub const FLAG_SET: &str = "true";
}

/// Durable string-valued key-value storage.
///
/// Every write replaces the whole value for a key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
