//! Counter board feature module.
//!
//! Owns the canonical list of counters and its transition contract.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `model.rs` - Counter records, the ordered list and the id allocator
//! - `state.rs` - Snapshot handed to the views
//! - `intent.rs` - The five mutations a view can request
//! - `reducer.rs` - State transitions (pure, copy-on-write)

mod intent;
mod model;
mod reducer;
mod state;

pub use intent::CountersIntent;
pub use model::{Counter, CounterId, CounterList, IdAllocator};
pub use reducer::CountersReducer;
pub use state::{CountersState, DEFAULT_COUNTER_COUNT};
