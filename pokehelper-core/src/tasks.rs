//! Tickets for simulated background work.
//!
//! Each search or breeding calculation is issued a [`Ticket`]. Starting a new
//! task of the same kind supersedes the pending one, and a completion only
//! lands when it carries the ticket that is still pending, so the most recent
//! request always wins regardless of timer order.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Search,
    Breeding,
}

impl TaskKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Breeding => "breeding",
        }
    }
}

/// Handle identifying one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    pub kind: TaskKind,
    pub id: u64,
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind.label(), self.id)
    }
}

/// Monotonic ticket source; ids are never reused within a session.
#[derive(Debug, Clone, Default)]
pub struct TicketMint {
    next: u64,
}

impl TicketMint {
    pub fn issue(&mut self, kind: TaskKind) -> Ticket {
        self.next += 1;
        Ticket {
            kind,
            id: self.next,
        }
    }
}

/// The single pending task of one kind, with the request it will complete.
#[derive(Debug, Clone)]
pub struct TaskSlot<T> {
    pending: Option<(Ticket, T)>,
}

impl<T> Default for TaskSlot<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> TaskSlot<T> {
    /// Make `ticket` the pending task, returning the ticket it superseded.
    pub fn start(&mut self, ticket: Ticket, request: T) -> Option<Ticket> {
        self.pending
            .replace((ticket, request))
            .map(|(superseded, _)| superseded)
    }

    /// Claim the request if `ticket` is still the pending one.
    pub fn take_if(&mut self, ticket: Ticket) -> Option<T> {
        match &self.pending {
            Some((pending, _)) if *pending == ticket => {
                self.pending.take().map(|(_, request)| request)
            }
            _ => None,
        }
    }

    /// Drop the pending task, returning its ticket.
    pub fn cancel(&mut self) -> Option<Ticket> {
        self.pending.take().map(|(ticket, _)| ticket)
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn ticket(&self) -> Option<Ticket> {
        self.pending.as_ref().map(|(ticket, _)| *ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_increase_across_kinds() {
        let mut mint = TicketMint::default();
        let a = mint.issue(TaskKind::Search);
        let b = mint.issue(TaskKind::Breeding);
        let c = mint.issue(TaskKind::Search);
        assert!(a.id < b.id && b.id < c.id);
        assert_eq!(c.to_string(), "search#3");
    }

    #[test]
    fn newer_ticket_supersedes_older() {
        let mut mint = TicketMint::default();
        let mut slot = TaskSlot::default();
        let first = mint.issue(TaskKind::Search);
        let second = mint.issue(TaskKind::Search);
        assert_eq!(slot.start(first, "ultra"), None);
        assert_eq!(slot.start(second, "rare"), Some(first));
        assert_eq!(slot.take_if(first), None);
        assert!(slot.is_pending());
        assert_eq!(slot.take_if(second), Some("rare"));
        assert!(!slot.is_pending());
        assert_eq!(slot.take_if(second), None);
    }

    #[test]
    fn cancel_drops_pending_request() {
        let mut mint = TicketMint::default();
        let mut slot = TaskSlot::default();
        let ticket = mint.issue(TaskKind::Breeding);
        slot.start(ticket, 42_u32);
        assert_eq!(slot.ticket(), Some(ticket));
        assert_eq!(slot.cancel(), Some(ticket));
        assert_eq!(slot.take_if(ticket), None);
        assert_eq!(slot.cancel(), None);
    }
}
