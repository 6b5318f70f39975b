//! List view of the counter board.
//!
//! The view is a pure function of its props: the current `CounterList`, the
//! selected row and the callback set. Control geometry comes from
//! [`control_regions`], which both drawing and mouse hit-testing use, so a
//! click always lands on the control that was drawn at that cell.

use crate::ui::counters::{CounterId, CounterList, CountersIntent};
use crate::ui::mvi::IntentSender;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, BADGE_NEGATIVE, BADGE_POSITIVE, BADGE_TEXT, BADGE_ZERO,
    CONTROL_TEXT, GLOBAL_BORDER, HEADER_SEPARATOR, STATUS_ERROR,
};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};

const RESET_LABEL: &str = "[ Reset ]";
const ADD_LABEL: &str = "[ Add counter ]";
const INCREMENT_LABEL: &str = "[+]";
const DECREMENT_LABEL: &str = "[-]";
const DELETE_LABEL: &str = "[Delete]";
const EMPTY_HINT: &str = "No counters. Press 'a' to add one.";
const MIN_VALUE_WIDTH: usize = 4;
/// Toolbar line plus one blank line before the first counter row.
const TOOLBAR_ROWS: u16 = 2;
const GAP: u16 = 1;

/// A clickable element of the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Increment(CounterId),
    Decrement(CounterId),
    Delete(CounterId),
    Reset,
    NewCounter,
}

impl Control {
    fn label(self) -> &'static str {
        match self {
            Control::Increment(_) => INCREMENT_LABEL,
            Control::Decrement(_) => DECREMENT_LABEL,
            Control::Delete(_) => DELETE_LABEL,
            Control::Reset => RESET_LABEL,
            Control::NewCounter => ADD_LABEL,
        }
    }

    fn style(self) -> Style {
        match self {
            Control::Delete(_) => Style::default().fg(STATUS_ERROR),
            Control::Reset | Control::NewCounter => {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            }
            Control::Increment(_) | Control::Decrement(_) => Style::default().fg(CONTROL_TEXT),
        }
    }
}

type IdCallback = Box<dyn Fn(CounterId)>;
type Callback = Box<dyn Fn()>;

/// The five handlers the list view binds its controls to.
pub struct CounterCallbacks {
    on_increment: IdCallback,
    on_decrement: IdCallback,
    on_reset: Callback,
    on_new_counter: Callback,
    on_delete: IdCallback,
}

impl CounterCallbacks {
    pub fn new(
        on_increment: impl Fn(CounterId) + 'static,
        on_decrement: impl Fn(CounterId) + 'static,
        on_reset: impl Fn() + 'static,
        on_new_counter: impl Fn() + 'static,
        on_delete: impl Fn(CounterId) + 'static,
    ) -> Self {
        Self {
            on_increment: Box::new(on_increment),
            on_decrement: Box::new(on_decrement),
            on_reset: Box::new(on_reset),
            on_new_counter: Box::new(on_new_counter),
            on_delete: Box::new(on_delete),
        }
    }

    /// Callbacks that queue the matching intent on a store.
    pub fn dispatching(tx: IntentSender<CountersIntent>) -> Self {
        let increment = tx.clone();
        let decrement = tx.clone();
        let reset = tx.clone();
        let new_counter = tx.clone();
        let delete = tx;
        Self::new(
            move |id| {
                let _ = increment.send(CountersIntent::Increment { id });
            },
            move |id| {
                let _ = decrement.send(CountersIntent::Decrement { id });
            },
            move || {
                let _ = reset.send(CountersIntent::ResetAll);
            },
            move || {
                let _ = new_counter.send(CountersIntent::AddCounter);
            },
            move |id| {
                let _ = delete.send(CountersIntent::Delete { id });
            },
        )
    }

    /// Invoke the handler bound to `control`.
    pub fn activate(&self, control: Control) {
        match control {
            Control::Increment(id) => (self.on_increment)(id),
            Control::Decrement(id) => (self.on_decrement)(id),
            Control::Delete(id) => (self.on_delete)(id),
            Control::Reset => (self.on_reset)(),
            Control::NewCounter => (self.on_new_counter)(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CounterListProps<'a> {
    pub counters: &'a CounterList,
    /// Keyboard focus row, if any.
    pub selected: Option<usize>,
}

pub struct CounterListView<'a> {
    props: CounterListProps<'a>,
    callbacks: &'a CounterCallbacks,
}

impl<'a> CounterListView<'a> {
    pub fn new(props: CounterListProps<'a>, callbacks: &'a CounterCallbacks) -> Self {
        Self { props, callbacks }
    }

    /// Regions of every control drawn into `area`.
    pub fn regions(&self, area: Rect) -> Vec<(Rect, Control)> {
        control_regions(area, self.props.counters, self.props.selected)
    }

    /// Hit-test a click at `position` and fire the bound callback.
    pub fn click(&self, area: Rect, position: Position) -> Option<Control> {
        let control = self
            .regions(area)
            .into_iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, control)| control)?;
        self.callbacks.activate(control);
        Some(control)
    }
}

impl Widget for &CounterListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = list_block();
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width < 2 || inner.height == 0 {
            return;
        }

        let counters = self.props.counters;
        let rows = VisibleRows::new(inner, counters.len(), self.props.selected);
        if counters.is_empty() && rows.capacity > 0 {
            buf.set_stringn(
                inner.x + 1,
                rows.first_y,
                EMPTY_HINT,
                inner.width.saturating_sub(1) as usize,
                Style::default().fg(HEADER_SEPARATOR),
            );
        }

        let value_width = value_width(counters);
        for index in rows.indices() {
            let Some(counter) = counters.get(index) else {
                continue;
            };
            let y = rows.y_of(index);
            if self.props.selected == Some(index) {
                buf.set_style(
                    Rect::new(inner.x, y, inner.width, 1),
                    Style::default().bg(ACTIVE_HIGHLIGHT),
                );
            }
            let badge = format!("{:^width$}", counter.value, width = value_width);
            buf.set_stringn(
                inner.x + 1,
                y,
                badge,
                inner.width.saturating_sub(1) as usize,
                badge_style(counter.value),
            );
        }

        for (rect, control) in control_regions(area, counters, self.props.selected) {
            buf.set_string(rect.x, rect.y, control.label(), control.style());
        }
    }
}

fn list_block() -> Block<'static> {
    Block::default()
        .title(" Counters ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn badge_style(value: i64) -> Style {
    let background = match value {
        0 => BADGE_ZERO,
        v if v > 0 => BADGE_POSITIVE,
        _ => BADGE_NEGATIVE,
    };
    Style::default()
        .fg(BADGE_TEXT)
        .bg(background)
        .add_modifier(Modifier::BOLD)
}

/// Badge width: widest value plus one cell of padding on each side.
fn value_width(counters: &CounterList) -> usize {
    counters
        .iter()
        .map(|counter| counter.value.to_string().len())
        .max()
        .unwrap_or(0)
        .max(MIN_VALUE_WIDTH)
        + 2
}

/// Window of counter rows that fits below the toolbar, scrolled so the
/// selected row stays visible.
struct VisibleRows {
    first_y: u16,
    offset: usize,
    count: usize,
    capacity: usize,
}

impl VisibleRows {
    fn new(inner: Rect, len: usize, selected: Option<usize>) -> Self {
        let capacity = inner.height.saturating_sub(TOOLBAR_ROWS) as usize;
        let offset = selected
            .map(|index| (index + 1).saturating_sub(capacity))
            .unwrap_or(0);
        let count = capacity.min(len.saturating_sub(offset));
        Self {
            first_y: inner.y + TOOLBAR_ROWS,
            offset,
            count,
            capacity,
        }
    }

    fn indices(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.count
    }

    fn y_of(&self, index: usize) -> u16 {
        self.first_y + (index - self.offset) as u16
    }
}

/// Screen rectangles of the toolbar and per-row controls inside `area`.
///
/// Controls that would not fit horizontally are left out; rows scrolled out
/// of view have no regions.
pub fn control_regions(
    area: Rect,
    counters: &CounterList,
    selected: Option<usize>,
) -> Vec<(Rect, Control)> {
    let inner = list_block().inner(area);
    let mut regions = Vec::new();
    if inner.height == 0 || inner.width == 0 {
        return regions;
    }

    let mut x = inner.x + 1;
    for control in [Control::Reset, Control::NewCounter] {
        place(&mut regions, &mut x, inner.y, inner, control);
    }

    let value_width = value_width(counters) as u16;
    let rows = VisibleRows::new(inner, counters.len(), selected);
    for index in rows.indices() {
        let Some(counter) = counters.get(index) else {
            continue;
        };
        let y = rows.y_of(index);
        let mut x = inner.x + 1 + value_width + GAP;
        for control in [
            Control::Increment(counter.id),
            Control::Decrement(counter.id),
            Control::Delete(counter.id),
        ] {
            place(&mut regions, &mut x, y, inner, control);
        }
    }
    regions
}

fn place(regions: &mut Vec<(Rect, Control)>, x: &mut u16, y: u16, inner: Rect, control: Control) {
    let width = control.label().chars().count() as u16;
    if x.saturating_add(width) <= inner.right() {
        regions.push((Rect::new(*x, y, width, 1), control));
    }
    *x = x.saturating_add(width + GAP);
}
