//! Generic runtime for session orchestration.
//!
//! The Runtime drives the widget event loop, coordinating between:
//! - [`Session`]: conversation state machine
//! - [`Driver`]: platform-specific input and rendering
//! - [`Transport`]: the assistant service
//!
//! Transport calls and settle timers run as spawned tasks. Their outcomes come
//! back through a channel and are folded into the session as ordinary
//! [`SessionEvent`]s, so the session is only ever touched from this loop.

use std::{sync::Arc, time::Duration};

use tokio::sync::mpsc;

use crate::{Driver, Message, Session, SessionAction, SessionEvent, Transport};

/// Generic runtime that orchestrates Session, Driver, and Transport.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
/// - `T`: Assistant transport
pub struct Runtime<D, T>
where
    D: Driver,
    T: Transport,
{
    driver: D,
    session: Session,
    transport: Arc<T>,
    completions_tx: mpsc::UnboundedSender<SessionEvent>,
    completions_rx: mpsc::UnboundedReceiver<SessionEvent>,
}

impl<D, T> Runtime<D, T>
where
    D: Driver,
    T: Transport,
{
    /// Create a new runtime around an existing session.
    pub fn new(driver: D, transport: Arc<T>, session: Session) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self { driver, session, transport, completions_tx, completions_rx }
    }

    /// Run the event loop until the session asks to quit.
    ///
    /// Each cycle waits for either driver input or a completion, hands it to
    /// the session, and executes the resulting actions. Completions take
    /// priority so a reply is never starved by a busy input source.
    ///
    /// Returns the final session state. Requests still in flight are left
    /// running and their outcomes are discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<Session, D::Error> {
        self.driver.render(&self.session)?;

        loop {
            let event = tokio::select! {
                biased;

                Some(event) = self.completions_rx.recv() => Some(event),
                polled = self.driver.poll_event() => polled?,
            };

            let Some(event) = event else {
                continue;
            };

            let actions = self.session.handle(event);
            if self.process_actions(actions)? {
                break;
            }
        }

        self.driver.stop();
        Ok(self.session)
    }

    /// Execute actions returned by the Session.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, actions: Vec<SessionAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                SessionAction::Render => self.driver.render(&self.session)?,
                SessionAction::Quit => return Ok(true),
                SessionAction::Scroll(scroll) => self.driver.scroll(scroll),
                SessionAction::PostMessage { turn, message, history } => {
                    self.post_message(turn, message, history);
                },
                SessionAction::ScheduleSettle { turn, after } => {
                    self.schedule_settle(turn, after);
                },
            }
        }
        Ok(false)
    }

    /// Spawn the transport call for `turn` and report its outcome.
    fn post_message(&self, turn: u64, message: String, history: Vec<Message>) {
        let transport = Arc::clone(&self.transport);
        let completions = self.completions_tx.clone();

        tokio::spawn(async move {
            let event = match transport.post_message(&message, &history).await {
                Ok(reply) => SessionEvent::ReplyReceived { turn, reply },
                Err(e) => SessionEvent::ReplyFailed { turn, reason: e.to_string() },
            };
            if completions.send(event).is_err() {
                tracing::debug!(turn, "runtime gone before reply arrived");
            }
        });
    }

    /// Deliver `Settled` for `turn` after `after` has elapsed.
    fn schedule_settle(&self, turn: u64, after: Duration) {
        let completions = self.completions_tx.clone();

        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            if completions.send(SessionEvent::Settled { turn }).is_err() {
                tracing::debug!(turn, "runtime gone before settle fired");
            }
        });
    }
}
