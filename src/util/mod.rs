//! Standalone helpers with no shared state.

pub mod email;
pub mod hash;

pub use email::validate_email;
pub use hash::{generate_hash, generate_hash_default, HashAlgorithm};
