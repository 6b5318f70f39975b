use crate::ui::counters::model::{CounterId, CounterList, IdAllocator};
use crate::ui::mvi::UiState;

/// Seed size used when nothing is configured.
pub const DEFAULT_COUNTER_COUNT: usize = 4;

/// Snapshot of the counter board.
///
/// `ids.max_id()` is never below the largest id in `counters`; the
/// reducer is the only code that builds a new snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CountersState {
    pub(super) counters: CounterList,
    pub(super) ids: IdAllocator,
}

impl UiState for CountersState {}

impl CountersState {
    /// `count` counters with ids `1..=count`, all at zero.
    pub fn seeded(count: usize) -> Self {
        Self {
            counters: CounterList::seeded(count),
            ids: IdAllocator::starting_after(count as u64),
        }
    }

    pub fn counters(&self) -> &CounterList {
        &self.counters
    }

    pub fn ids(&self) -> IdAllocator {
        self.ids
    }

    /// Derived on every call, never cached.
    pub fn total_active(&self) -> usize {
        self.counters.total_active()
    }

    pub fn value_of(&self, id: CounterId) -> Option<i64> {
        self.counters.find(id).map(|counter| counter.value)
    }
}
