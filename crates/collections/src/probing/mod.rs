use thiserror::Error;

mod hash_set;
mod prime;
mod slot;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProbeSetError {
    #[error("Duplicate key insertion is not allowed, {key} is already stored at slot {slot}")]
    DuplicateKey { key: i32, slot: usize },

    /// Every slot on the key's probe chain was occupied
    #[error("Max probing limit reached for key {key} after {probes} probes")]
    ProbeLimitReached { key: i32, probes: usize },

    #[error("Key {key} not found")]
    KeyNotFound { key: i32 },

    #[error("Initial capacity must be in 1..={max}, got: {capacity}", max = i32::MAX)]
    InvalidCapacity { capacity: usize },

    /// The table cannot grow past `usize::MAX` slots
    #[error("Cannot grow a table of {capacity} slots any further")]
    CapacityOverflow { capacity: usize },

    #[error("Load factor must be in (0, 1], got: {load_factor}")]
    InvalidLoadFactor { load_factor: f64 },
}

pub use hash_set::{DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR, Iter, MAX_CAPACITY, ProbingHashSet};
pub use prime::{is_prime, next_prime};
pub use slot::Slot;
