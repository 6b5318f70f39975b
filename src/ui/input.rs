use crate::ui::app::App;
use crate::ui::counter_list::Control;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the board to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    SelectUp,
    SelectDown,
    Increment,
    Decrement,
    Delete,
    Reset,
    AddCounter,
    Quit,
}

impl KeyAction {
    pub const ALL: [KeyAction; 8] = [
        KeyAction::SelectUp,
        KeyAction::SelectDown,
        KeyAction::Increment,
        KeyAction::Decrement,
        KeyAction::Delete,
        KeyAction::Reset,
        KeyAction::AddCounter,
        KeyAction::Quit,
    ];

    /// Keys bound to this action. The first one is shown in the footer.
    pub fn bindings(self) -> &'static [KeyCode] {
        match self {
            KeyAction::SelectUp => &[KeyCode::Up, KeyCode::Char('k')],
            KeyAction::SelectDown => &[KeyCode::Down, KeyCode::Char('j')],
            KeyAction::Increment => &[KeyCode::Char('+'), KeyCode::Char('='), KeyCode::Right],
            KeyAction::Decrement => &[KeyCode::Char('-'), KeyCode::Left],
            KeyAction::Delete => &[KeyCode::Char('d'), KeyCode::Delete],
            KeyAction::Reset => &[KeyCode::Char('r')],
            KeyAction::AddCounter => &[KeyCode::Char('a'), KeyCode::Char('n')],
            KeyAction::Quit => &[KeyCode::Char('q'), KeyCode::Esc],
        }
    }

    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if is_ctrl_char(key, 'c') {
            return Some(KeyAction::Quit);
        }
        Self::ALL
            .into_iter()
            .find(|action| action.bindings().contains(&key.code))
    }
}

/// Footer hints: actions sharing a hint are shown as `a/b: label`.
pub const KEY_HINTS: [(&[KeyAction], &str); 6] = [
    (&[KeyAction::SelectUp, KeyAction::SelectDown], "Select"),
    (&[KeyAction::Increment, KeyAction::Decrement], "Change"),
    (&[KeyAction::Delete], "Delete"),
    (&[KeyAction::Reset], "Reset"),
    (&[KeyAction::AddCounter], "Add"),
    (&[KeyAction::Quit], "Quit"),
];

pub fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::Char(ch) => ch.to_string(),
        other => format!("{other:?}"),
    }
}

/// Rendered hint line, built from the live bindings.
pub fn hint_line() -> String {
    let hints: Vec<String> = KEY_HINTS
        .iter()
        .map(|(actions, label)| {
            let keys: Vec<String> = actions
                .iter()
                .filter_map(|action| action.bindings().first().copied())
                .map(key_label)
                .collect();
            format!("{}: {}", keys.join("/"), label)
        })
        .collect();
    format!(" {}", hints.join(" │ "))
}

/// Map a key press to a selection move, a control activation or quit.
///
/// Per-counter keys act on the focused row's id as it is in the current
/// list; nothing is applied here, the intent waits in the store's queue.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    let Some(action) = KeyAction::from_key(key) else {
        return;
    };

    match action {
        KeyAction::Quit => app.request_quit(),
        KeyAction::SelectUp => app.move_selection(-1),
        KeyAction::SelectDown => app.move_selection(1),
        KeyAction::Increment => {
            if let Some(id) = app.selected_id() {
                app.activate(Control::Increment(id));
            }
        }
        KeyAction::Decrement => {
            if let Some(id) = app.selected_id() {
                app.activate(Control::Decrement(id));
            }
        }
        KeyAction::Delete => {
            if let Some(id) = app.selected_id() {
                app.activate(Control::Delete(id));
            }
        }
        KeyAction::Reset => app.activate(Control::Reset),
        KeyAction::AddCounter => app.activate(Control::NewCounter),
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
