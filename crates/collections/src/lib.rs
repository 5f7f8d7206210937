mod macros;
pub mod probing;

pub use probing::{ProbeSetError, ProbingHashSet, Slot};
