//! Request tickets and response ordering.
//!
//! Actions may overlap: a slow `/click` can resolve after a later
//! `/upgrade`. The policy decides whether the late response still renders.

#[cfg(test)]
#[path = "sequencer_test.rs"]
mod sequencer_test;

/// How overlapping responses are reconciled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderingPolicy {
    /// Every successful response renders; whichever resolves last wins.
    #[default]
    LastWriteWins,
    /// A response renders only if no newer request has rendered yet.
    LatestRequest,
}

/// Sequence number issued to one request. Tickets start at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub fn seq(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, Default)]
pub struct RequestSequencer {
    policy: OrderingPolicy,
    issued: u64,
    rendered: Option<Ticket>,
}

impl RequestSequencer {
    #[must_use]
    pub fn new(policy: OrderingPolicy) -> Self {
        Self { policy, issued: 0, rendered: None }
    }

    #[must_use]
    pub fn policy(&self) -> OrderingPolicy {
        self.policy
    }

    /// Issue the ticket for a new request.
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Decide whether the response for `ticket` may render, and record it
    /// as rendered if so.
    pub fn accept(&mut self, ticket: Ticket) -> bool {
        let fresh = match (self.policy, self.rendered) {
            (OrderingPolicy::LastWriteWins, _) | (OrderingPolicy::LatestRequest, None) => true,
            (OrderingPolicy::LatestRequest, Some(last)) => ticket > last,
        };
        if fresh {
            self.rendered = Some(self.rendered.map_or(ticket, |last| last.max(ticket)));
        }
        fresh
    }

    /// Most recent ticket whose response rendered.
    #[must_use]
    pub fn last_rendered(&self) -> Option<Ticket> {
        self.rendered
    }
}
