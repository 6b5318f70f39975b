use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;

/// Run the counter board until the user quits or a shutdown signal arrives.
///
/// A terminal input failure ends the loop with that error once the
/// terminal has been restored.
pub fn run(config: &Config, shutdown: ShutdownHandle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(config.ui.mouse)?;
    let poll_interval = config.ui.poll_interval();
    let mut app = App::new(config.counters.initial);
    let events = EventHandler::new(poll_interval, shutdown.clone());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    terminal.draw(|frame| draw(frame, &app))?;

    while !app.should_quit() {
        let redraw = handle_event(&mut app, events.next(poll_interval))?;

        // One redraw per applied intent
        let mut drawn = false;
        while app.apply_next().is_some() {
            terminal.draw(|frame| draw(frame, &app))?;
            drawn = true;
        }
        if redraw && !drawn && !app.should_quit() {
            terminal.draw(|frame| draw(frame, &app))?;
        }
    }

    // Stops the input thread on a user quit as well
    shutdown.signal();
    drop(guard);
    tracing::info!(revision = app.revision(), "counter board closed");
    Ok(())
}

/// Feed one event into the app. Returns whether the frame needs a redraw
/// even if no intent gets applied.
fn handle_event(app: &mut App, event: Result<AppEvent, RecvTimeoutError>) -> io::Result<bool> {
    match event {
        Ok(AppEvent::Key(key)) => {
            handle_key(app, key);
            Ok(true)
        }
        Ok(AppEvent::Mouse(mouse)) => {
            app.on_mouse(mouse);
            Ok(false)
        }
        Ok(AppEvent::Resize(cols, rows)) => {
            app.on_resize(cols, rows);
            Ok(true)
        }
        Ok(AppEvent::Shutdown) => {
            tracing::info!("shutdown signal received");
            app.request_quit();
            Ok(false)
        }
        Ok(AppEvent::Error(err)) => Err(err),
        Err(RecvTimeoutError::Timeout) => Ok(false),
        Err(RecvTimeoutError::Disconnected) => Err(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "terminal input thread stopped",
        )),
    }
}
