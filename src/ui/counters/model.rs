use std::fmt;
use std::sync::Arc;

/// Identifier of a counter. Assigned once by [`IdAllocator`] and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CounterId(u64);

impl CounterId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CounterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single counter. Values have no floor and may go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    pub id: CounterId,
    pub value: i64,
}

impl Counter {
    pub fn new(id: CounterId) -> Self {
        Self { id, value: 0 }
    }

    /// Copy of this counter with a different value.
    pub fn with_value(&self, value: i64) -> Self {
        Self { id: self.id, value }
    }

    /// Counters above zero are the ones the summary reports.
    pub fn is_active(&self) -> bool {
        self.value > 0
    }
}

/// Ordered counters; position is display order.
///
/// Entries are shared behind `Arc` and never edited. A transition builds a
/// new list that reuses the `Arc` of every entry it did not change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CounterList(Vec<Arc<Counter>>);

impl CounterList {
    /// Counters `1..=count`, all at zero.
    pub fn seeded(count: usize) -> Self {
        (1..=count as u64)
            .map(|raw| Arc::new(Counter::new(CounterId::new(raw))))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arc<Counter>> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Counter>> {
        self.0.get(index)
    }

    pub fn find(&self, id: CounterId) -> Option<&Arc<Counter>> {
        self.0.iter().find(|counter| counter.id == id)
    }

    pub fn position(&self, id: CounterId) -> Option<usize> {
        self.0.iter().position(|counter| counter.id == id)
    }

    pub fn ids(&self) -> Vec<CounterId> {
        self.0.iter().map(|counter| counter.id).collect()
    }

    /// Number of counters with a positive value.
    pub fn total_active(&self) -> usize {
        self.0.iter().filter(|counter| counter.is_active()).count()
    }
}

impl FromIterator<Arc<Counter>> for CounterList {
    fn from_iter<T: IntoIterator<Item = Arc<Counter>>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CounterList {
    type Item = &'a Arc<Counter>;
    type IntoIter = std::slice::Iter<'a, Arc<Counter>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Tracks the highest id ever issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdAllocator {
    max_id: u64,
}

impl IdAllocator {
    pub const fn starting_after(max_id: u64) -> Self {
        Self { max_id }
    }

    pub fn max_id(&self) -> u64 {
        self.max_id
    }

    /// Next id and the allocator that has issued it.
    /// `None` once the id space is exhausted.
    #[must_use]
    pub fn issue(self) -> Option<(CounterId, Self)> {
        let next = self.max_id.checked_add(1)?;
        Some((CounterId::new(next), Self { max_id: next }))
    }
}
