//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory decision repository (tests, development)
//! - `storage` - YAML file decision repository
//! - `clock` - System and fixed clocks

pub mod clock;
pub mod memory;
pub mod storage;

pub use clock::{FixedClock, SystemClock};
pub use memory::InMemoryDecisionRepository;
pub use storage::FileDecisionRepository;
