//! Confirmation gate for heavy elements.
//!
//! Building a nucleus with dozens of nucleons is slow on weak hardware, so
//! picking such an element opens a countdown; only once it has run out can
//! the request be confirmed. The gate is a plain state machine driven by
//! one-second ticks. Whoever owns the real timer calls [`ConfirmationGate::tick`]
//! with the ticket it was handed so a superseded timer cannot advance a newer
//! request.

use serde::Serialize;

/// A deferred element selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PendingElement {
    pub atomic_number: u32,
    pub neutrons: u32,
    /// Seconds left before confirmation is allowed.
    pub remaining: u32,
    /// Identifies the countdown this request belongs to.
    pub ticket: u64,
}

impl PendingElement {
    pub fn can_confirm(&self) -> bool {
        self.remaining == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmError {
    NothingPending,
    CountdownRunning { remaining: u32 },
}

#[derive(Debug, Default)]
pub struct ConfirmationGate {
    pending: Option<PendingElement>,
    next_ticket: u64,
}

impl ConfirmationGate {
    /// Open (or restart) the gate. Any earlier request is discarded.
    pub fn open(&mut self, atomic_number: u32, neutrons: u32, countdown_secs: u32) -> PendingElement {
        self.next_ticket += 1;
        let pending = PendingElement {
            atomic_number,
            neutrons,
            remaining: countdown_secs,
            ticket: self.next_ticket,
        };
        self.pending = Some(pending);
        pending
    }

    pub fn pending(&self) -> Option<&PendingElement> {
        self.pending.as_ref()
    }

    /// Count one second off the request holding `ticket`. Returns the
    /// remaining seconds, or `None` when the ticket is stale and its timer
    /// should stop.
    pub fn tick(&mut self, ticket: u64) -> Option<u32> {
        let pending = self.pending.as_mut().filter(|p| p.ticket == ticket)?;
        pending.remaining = pending.remaining.saturating_sub(1);
        Some(pending.remaining)
    }

    /// Whether a timer holding `ticket` should keep running.
    pub fn is_counting(&self, ticket: u64) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|p| p.ticket == ticket && p.remaining > 0)
    }

    /// Hand out the request if its countdown has elapsed. A running
    /// countdown leaves the request in place.
    pub fn confirm(&mut self) -> Result<PendingElement, ConfirmError> {
        match self.pending {
            None => Err(ConfirmError::NothingPending),
            Some(p) if !p.can_confirm() => Err(ConfirmError::CountdownRunning {
                remaining: p.remaining,
            }),
            Some(p) => {
                self.pending = None;
                Ok(p)
            }
        }
    }

    pub fn cancel(&mut self) -> Option<PendingElement> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_requires_elapsed_countdown() {
        let mut gate = ConfirmationGate::default();
        assert_eq!(gate.confirm(), Err(ConfirmError::NothingPending));

        let ticket = gate.open(92, 146, 5).ticket;
        for expected in (1..5).rev() {
            assert_eq!(gate.tick(ticket), Some(expected));
            assert_eq!(
                gate.confirm(),
                Err(ConfirmError::CountdownRunning { remaining: expected })
            );
        }
        assert!(gate.is_counting(ticket));
        assert_eq!(gate.tick(ticket), Some(0));
        assert!(!gate.is_counting(ticket));

        let confirmed = gate.confirm().unwrap();
        assert_eq!((confirmed.atomic_number, confirmed.neutrons), (92, 146));
        assert!(gate.pending().is_none());
    }

    #[test]
    fn test_superseded_ticket_is_stale() {
        let mut gate = ConfirmationGate::default();
        let first = gate.open(80, 122, 5).ticket;
        let second = gate.open(90, 142, 5).ticket;
        assert_ne!(first, second);
        assert_eq!(gate.tick(first), None);
        assert!(!gate.is_counting(first));
        assert_eq!(gate.pending().map(|p| p.remaining), Some(5));
        assert_eq!(gate.tick(second), Some(4));
    }

    #[test]
    fn test_cancel_clears_request() {
        let mut gate = ConfirmationGate::default();
        let ticket = gate.open(100, 157, 5).ticket;
        assert_eq!(gate.cancel().map(|p| p.atomic_number), Some(100));
        assert!(gate.pending().is_none());
        assert_eq!(gate.tick(ticket), None);
        assert_eq!(gate.cancel(), None);
    }

    #[test]
    fn test_zero_countdown_confirms_immediately() {
        let mut gate = ConfirmationGate::default();
        gate.open(85, 125, 0);
        assert!(gate.confirm().is_ok());
    }
}
