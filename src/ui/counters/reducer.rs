//! Reducer for the counter board.

use std::sync::Arc;

use crate::ui::mvi::Reducer;

use super::intent::CountersIntent;
use super::model::{Counter, CounterId};
use super::state::CountersState;

/// Copy-on-write transitions over [`CountersState`].
///
/// Unknown ids leave the state untouched. Entries an intent does not change
/// keep their `Arc`, so a snapshot comparison only sees what really moved.
pub struct CountersReducer;

impl Reducer for CountersReducer {
    type State = CountersState;
    type Intent = CountersIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CountersIntent::Increment { id } => {
                replace_value(state, id, |value| value.saturating_add(1))
            }
            CountersIntent::Decrement { id } => {
                replace_value(state, id, |value| value.saturating_sub(1))
            }
            CountersIntent::ResetAll => CountersState {
                counters: state
                    .counters
                    .iter()
                    .map(|counter| Arc::new(counter.with_value(0)))
                    .collect(),
                ids: state.ids,
            },
            CountersIntent::AddCounter => match state.ids.issue() {
                Some((id, ids)) => CountersState {
                    counters: state
                        .counters
                        .iter()
                        .cloned()
                        .chain(std::iter::once(Arc::new(Counter::new(id))))
                        .collect(),
                    ids,
                },
                None => state,
            },
            CountersIntent::Delete { id } => {
                if state.counters.find(id).is_none() {
                    return state;
                }
                CountersState {
                    counters: state
                        .counters
                        .iter()
                        .filter(|counter| counter.id != id)
                        .cloned()
                        .collect(),
                    ids: state.ids,
                }
            }
        }
    }
}

fn replace_value(
    state: CountersState,
    id: CounterId,
    update: impl FnOnce(i64) -> i64,
) -> CountersState {
    let Some(current) = state.counters.find(id) else {
        return state;
    };
    let updated = Arc::new(current.with_value(update(current.value)));
    let counters = state
        .counters
        .iter()
        .map(|counter| {
            if counter.id == id {
                Arc::clone(&updated)
            } else {
                Arc::clone(counter)
            }
        })
        .collect();
    CountersState {
        counters,
        ids: state.ids,
    }
}
