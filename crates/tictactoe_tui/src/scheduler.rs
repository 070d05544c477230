//! Delayed delivery of computer moves.
//!
//! Each ticket gets its own timer task. When it fires, the ticket is sent
//! back over a channel that the UI loop drains, so the engine is only ever
//! touched from that loop.

use std::time::Duration;
use tictactoe_core::MoveTicket;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, instrument};

/// Delays computer moves to emulate deliberation.
#[derive(Debug)]
pub struct ComputerMoveScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<MoveTicket>,
    rx: mpsc::UnboundedReceiver<MoveTicket>,
}

impl ComputerMoveScheduler {
    /// Creates a scheduler with a fixed delay.
    pub fn new(delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { delay, tx, rx }
    }

    /// The thinking delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Delivers `ticket` after the delay. Must be called within a tokio runtime.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&self, ticket: MoveTicket) {
        let tx = self.tx.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            sleep(delay).await;
            if tx.send(ticket).is_err() {
                debug!("Scheduler dropped before computer move fired");
            }
        });
    }

    /// Tickets whose delay has elapsed, oldest first. Never blocks.
    pub fn ready(&mut self) -> Vec<MoveTicket> {
        let mut tickets = Vec::new();
        while let Ok(ticket) = self.rx.try_recv() {
            tickets.push(ticket);
        }
        tickets
    }

    /// Waits for the next ticket.
    pub async fn next(&mut self) -> Option<MoveTicket> {
        self.rx.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{GameEngine, GameEvent, Mode};

    fn ticket() -> MoveTicket {
        let mut engine = GameEngine::seeded(3);
        engine.start_game(Mode::HumanVsComputer);
        engine.apply_move(4).unwrap();
        engine
            .drain_events()
            .into_iter()
            .find_map(|e| match e {
                GameEvent::ComputerMoveRequested(t) => Some(t),
                _ => None,
            })
            .unwrap()
    }

    #[tokio::test]
    async fn test_ticket_not_ready_before_delay() {
        let mut scheduler = ComputerMoveScheduler::new(Duration::from_secs(60));
        scheduler.schedule(ticket());
        assert!(scheduler.ready().is_empty());
    }

    #[tokio::test]
    async fn test_ticket_delivered_after_delay() {
        let mut scheduler = ComputerMoveScheduler::new(Duration::from_millis(10));
        let t = ticket();
        scheduler.schedule(t);

        let delivered = tokio::time::timeout(Duration::from_secs(5), scheduler.next())
            .await
            .unwrap();
        assert_eq!(delivered, Some(t));
        assert!(scheduler.ready().is_empty());
    }
}
