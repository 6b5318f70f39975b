use crate::ui::counter_list::{Control, CounterCallbacks, CounterListProps, CounterListView};
use crate::ui::counters::{CounterId, CountersReducer, CountersState};
use crate::ui::header::SummaryProps;
use crate::ui::layout::body_rect;
use crate::ui::mvi::Store;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    /// Sole owner of the counter state (MVI pattern).
    store: Store<CountersReducer>,
    /// Handlers the list view binds its controls to; they only queue intents.
    callbacks: CounterCallbacks,
    /// Keyboard focus row. Clamped to the list after every transition.
    selected: usize,
}

impl App {
    pub fn new(initial_counters: usize) -> Self {
        let mut store = Store::<CountersReducer>::new(CountersState::seeded(initial_counters));
        store.subscribe(|state, revision| {
            tracing::debug!(
                revision,
                counters = state.counters().len(),
                total_active = state.total_active(),
                "state transition"
            );
        });
        let callbacks = CounterCallbacks::dispatching(store.sender());
        tracing::info!(counters = initial_counters, "counter board seeded");
        Self {
            should_quit: false,
            size: None,
            store,
            callbacks,
            selected: 0,
        }
    }

    pub fn state(&self) -> &CountersState {
        self.store.state()
    }

    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn selected(&self) -> Option<usize> {
        if self.state().counters().is_empty() {
            None
        } else {
            Some(self.selected)
        }
    }

    /// Id of the focused counter, resolved against the current list.
    pub fn selected_id(&self) -> Option<CounterId> {
        let index = self.selected()?;
        self.state().counters().get(index).map(|counter| counter.id)
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.state().counters().len();
        if len == 0 {
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
    }

    pub fn summary_props(&self) -> SummaryProps {
        SummaryProps {
            total_active: self.state().total_active(),
        }
    }

    pub fn list_view(&self) -> CounterListView<'_> {
        CounterListView::new(
            CounterListProps {
                counters: self.state().counters(),
                selected: self.selected(),
            },
            &self.callbacks,
        )
    }

    /// Fire the callback bound to `control`. The intent is queued, not applied.
    pub fn activate(&self, control: Control) {
        self.callbacks.activate(control);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Area the list view was last laid out in.
    pub fn body_area(&self) -> Option<Rect> {
        let (cols, rows) = self.size?;
        Some(body_rect(Rect::new(0, 0, cols, rows)))
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(body) = self.body_area() else {
            return;
        };
        let position = Position::new(mouse.column, mouse.row);
        if let Some(control) = self.list_view().click(body, position) {
            tracing::debug!(?control, "control clicked");
        }
    }

    /// Apply the oldest queued intent. Each `Some` is one transition and
    /// warrants exactly one redraw.
    pub fn apply_next(&mut self) -> Option<u64> {
        let revision = self.store.apply_next()?;
        self.clamp_selection();
        Some(revision)
    }

    /// Apply everything queued so far. Returns how many intents were applied.
    pub fn settle(&mut self) -> usize {
        let mut applied = 0;
        while self.apply_next().is_some() {
            applied += 1;
        }
        applied
    }

    fn clamp_selection(&mut self) {
        let len = self.state().counters().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
