mod common;

use std::sync::Arc;

use common::id;
use tally::ui::counters::{CountersIntent, CountersReducer, CountersState};
use tally::ui::mvi::Reducer;

fn apply(state: CountersState, intents: &[CountersIntent]) -> CountersState {
    intents
        .iter()
        .fold(state, |state, intent| CountersReducer::reduce(state, *intent))
}

#[test]
fn fresh_seed_has_no_active_counters() {
    for count in [0, 1, 4, 50] {
        let state = CountersState::seeded(count);
        assert_eq!(state.counters().len(), count);
        assert_eq!(state.total_active(), 0);
        assert_eq!(state.ids().max_id(), count as u64);
    }
}

#[test]
fn increment_then_decrement_restores_value() {
    let state = apply(
        CountersState::seeded(4),
        &[
            CountersIntent::Increment { id: id(2) },
            CountersIntent::Increment { id: id(2) },
        ],
    );
    let before = state.value_of(id(2));
    let state = apply(
        state,
        &[
            CountersIntent::Increment { id: id(2) },
            CountersIntent::Decrement { id: id(2) },
        ],
    );
    assert_eq!(state.value_of(id(2)), before);
}

#[test]
fn reset_is_idempotent() {
    let state = apply(
        CountersState::seeded(3),
        &[
            CountersIntent::Increment { id: id(1) },
            CountersIntent::Decrement { id: id(3) },
        ],
    );
    let once = CountersReducer::reduce(state, CountersIntent::ResetAll);
    let twice = CountersReducer::reduce(once.clone(), CountersIntent::ResetAll);
    assert_eq!(once, twice);
    assert!(twice.counters().iter().all(|counter| counter.value == 0));
}

#[test]
fn reset_keeps_ids_and_order() {
    let state = apply(
        CountersState::seeded(4),
        &[
            CountersIntent::Delete { id: id(2) },
            CountersIntent::Increment { id: id(4) },
            CountersIntent::ResetAll,
        ],
    );
    assert_eq!(state.counters().ids(), vec![id(1), id(3), id(4)]);
}

#[test]
fn add_never_reuses_a_deleted_id() {
    let state = apply(
        CountersState::seeded(4),
        &[CountersIntent::Delete { id: id(3) }, CountersIntent::AddCounter],
    );
    assert_eq!(state.counters().ids(), vec![id(1), id(2), id(4), id(5)]);
    assert_eq!(state.ids().max_id(), 5);
}

#[test]
fn add_after_deleting_the_newest_still_moves_forward() {
    let state = apply(
        CountersState::seeded(4),
        &[
            CountersIntent::Delete { id: id(4) },
            CountersIntent::AddCounter,
            CountersIntent::Delete { id: id(5) },
            CountersIntent::AddCounter,
        ],
    );
    assert_eq!(state.counters().ids(), vec![id(1), id(2), id(3), id(6)]);
}

#[test]
fn delete_removes_exactly_one_and_keeps_order() {
    let state = CountersReducer::reduce(
        CountersState::seeded(4),
        CountersIntent::Delete { id: id(2) },
    );
    assert_eq!(state.counters().ids(), vec![id(1), id(3), id(4)]);
}

#[test]
fn add_to_empty_board() {
    let state = CountersReducer::reduce(CountersState::seeded(0), CountersIntent::AddCounter);
    assert_eq!(state.counters().ids(), vec![id(1)]);
}

#[test]
fn stale_ids_are_ignored_after_delete() {
    let state = apply(
        CountersState::seeded(3),
        &[
            CountersIntent::Delete { id: id(1) },
            // Controls of the deleted row fired before the redraw.
            CountersIntent::Increment { id: id(1) },
            CountersIntent::Delete { id: id(1) },
        ],
    );
    assert_eq!(state.counters().ids(), vec![id(2), id(3)]);
    assert_eq!(state.total_active(), 0);
}

#[test]
fn unchanged_entries_are_shared_between_snapshots() {
    let before = CountersState::seeded(4);
    let after = CountersReducer::reduce(before.clone(), CountersIntent::Delete { id: id(2) });
    let old: Vec<_> = before.counters().iter().collect();
    let new: Vec<_> = after.counters().iter().collect();
    assert!(Arc::ptr_eq(old[0], new[0]));
    assert!(Arc::ptr_eq(old[2], new[1]));
    assert!(Arc::ptr_eq(old[3], new[2]));
}

#[test]
fn increment_and_reset_scenario() {
    let mut state = CountersState::seeded(4);
    for _ in 0..3 {
        state = CountersReducer::reduce(state, CountersIntent::Increment { id: id(1) });
    }
    assert_eq!(state.value_of(id(1)), Some(3));
    assert_eq!(state.total_active(), 1);

    state = CountersReducer::reduce(state, CountersIntent::Increment { id: id(3) });
    assert_eq!(state.total_active(), 2);

    state = CountersReducer::reduce(state, CountersIntent::ResetAll);
    assert_eq!(state.total_active(), 0);
    assert!(state.counters().iter().all(|counter| counter.value == 0));
}

#[test]
fn negative_values_do_not_count_as_active() {
    let state = apply(
        CountersState::seeded(2),
        &[
            CountersIntent::Decrement { id: id(1) },
            CountersIntent::Decrement { id: id(1) },
        ],
    );
    assert_eq!(state.value_of(id(1)), Some(-2));
    assert_eq!(state.total_active(), 0);
}
