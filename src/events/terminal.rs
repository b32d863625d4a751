use crate::state::State;
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{
    io,
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

/// Specify terminal event poll rate in milliseconds. Kept well below the
/// shortest frame duration so frames advance on time.
///
const TICK_RATE_IN_MS: u64 = 20;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel. The polling thread
/// owns the only sender, so `handle_next` fails once that thread stops.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        Handler::with_source(read_key)
    }

    /// Return new instance polling `source` for key presses. The thread
    /// exits, and the channel disconnects, on the first source error.
    ///
    pub fn with_source<F>(mut source: F) -> Self
    where
        F: FnMut(Duration) -> io::Result<Option<KeyEvent>> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match source(tick_rate) {
                Ok(Some(key)) => {
                    if tx.send(Event::Input(key)).is_err() {
                        break;
                    }
                }
                Ok(None) => (),
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            if tx.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => {
                if is_exit_key(&key) {
                    debug!("Processing exit terminal event '{:?}'...", key);
                    return Ok(false);
                }
                Ok(true)
            }
            Event::Tick => {
                let now = Instant::now();
                state.tick(now);
                Ok(!state.should_exit(now))
            }
        }
    }
}

/// Wait up to `timeout` for a crossterm key event.
///
fn read_key(timeout: Duration) -> io::Result<Option<KeyEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        CrosstermEvent::Key(key) => Ok(Some(key)),
        _ => Ok(None),
    }
}

/// Whether the key press asks to leave the banner.
///
pub fn is_exit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    matches!(
        (key.code, key.modifiers),
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _) | (KeyCode::Esc, _)
    )
}
