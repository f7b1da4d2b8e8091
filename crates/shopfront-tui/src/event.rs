//! Terminal event reader running in a background tokio task.
//!
//! Merges crossterm input with two timers: a tick that drives the loader
//! animation and the detail view's hide delay, and a render cadence.
//! Everything arrives on one `tokio::sync::mpsc` channel.

use std::time::Duration;

use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind,
};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Events produced by the terminal event reader.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed. Releases and repeats are filtered out.
    Key(KeyEvent),
    /// A click or scroll. Pointer motion is filtered out.
    Mouse(MouseEvent),
    /// The terminal was resized; the next draw picks up the new size.
    Resize,
    /// Loader animation frame and hide-timer check.
    Tick,
    /// Redraw request.
    Render,
}

/// Map a raw crossterm event to the events screens act on.
fn translate(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => None,
            _ => Some(Event::Mouse(mouse)),
        },
        CrosstermEvent::Resize(..) => Some(Event::Resize),
        _ => None,
    }
}

/// Reads terminal events in a background task and sends them over a channel.
pub struct EventReader {
    rx: mpsc::UnboundedReceiver<Event>,
    cancel: CancellationToken,
}

impl EventReader {
    /// Spawn the background reader.
    ///
    /// - `tick_rate`: interval for [`Event::Tick`]; it bounds how late the
    ///   detail loader can hide after its delay elapses
    /// - `render_rate`: interval for [`Event::Render`]
    pub fn new(tick_rate: Duration, render_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let task_cancel = cancel.clone();
        tokio::spawn(async move {
            let mut input = EventStream::new();
            let mut ticks = tokio::time::interval(tick_rate);
            let mut renders = tokio::time::interval(render_rate);
            ticks.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            renders.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                let event = tokio::select! {
                    () = task_cancel.cancelled() => break,
                    _ = ticks.tick() => Event::Tick,
                    _ = renders.tick() => Event::Render,
                    Some(Ok(raw)) = input.next() => match translate(raw) {
                        Some(event) => event,
                        None => continue,
                    },
                };

                // Receiver gone: the app has shut down.
                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { rx, cancel }
    }

    /// Receive the next event. Returns `None` if the reader has stopped.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    /// Signal the background reader to stop.
    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Drop for EventReader {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
