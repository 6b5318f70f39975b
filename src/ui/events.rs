use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, MouseEvent};

use crate::shutdown::ShutdownHandle;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
    /// Terminal input failed; the input thread has stopped.
    Error(io::Error),
}

impl AppEvent {
    /// Translate one terminal read. Events the board does not use map to `None`.
    pub fn from_terminal(read: io::Result<Event>) -> Option<Self> {
        match read {
            Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
            Ok(Event::Mouse(mouse)) => Some(AppEvent::Mouse(mouse)),
            Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
            Ok(_) => None,
            Err(err) => {
                tracing::error!(%err, "terminal event read failed");
                Some(AppEvent::Error(err))
            }
        }
    }
}

/// Forwards terminal input from a background thread.
///
/// The thread never touches application state; everything it reads is
/// handed to the UI thread over a channel, including the error that ends it.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(poll_interval: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || loop {
            if shutdown.is_shutting_down() {
                let _ = tx.send(AppEvent::Shutdown);
                break;
            }

            // Short poll timeout so the shutdown flag is checked frequently
            let ready = match event::poll(poll_interval) {
                Ok(ready) => ready,
                Err(err) => {
                    tracing::error!(%err, "terminal event poll failed");
                    let _ = tx.send(AppEvent::Error(err));
                    break;
                }
            };
            if !ready {
                continue;
            }

            let Some(event) = AppEvent::from_terminal(event::read()) else {
                continue;
            };
            let fatal = matches!(event, AppEvent::Error(_));
            if tx.send(event).is_err() || fatal {
                break;
            }
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
