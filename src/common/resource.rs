//! Per-resource fetch state.
//!
//! Every store resource carries its own `loading`/`error` pair plus a
//! monotonic request sequence. A fetch takes a ticket with [`Resource::begin`]
//! and may only write its outcome back while that ticket is still the latest
//! one issued, so a slow response that lost the race is dropped instead of
//! overwriting newer state. Synchronous resets (filter setters, logout) call
//! [`Resource::invalidate`] to retire any in-flight ticket immediately.

use tracing::debug;

use super::error::StoreError;

/// Opaque handle tying an in-flight request to the resource state it is
/// allowed to update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone)]
pub struct Resource<T> {
    data: T,
    loading: bool,
    error: Option<StoreError>,
    seq: u64,
}

impl<T: Default> Default for Resource<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Resource<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            loading: false,
            error: None,
            seq: 0,
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    /// Direct access for local-only mutations (optimistic patches, dismissals).
    /// Does not touch the request sequence.
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&StoreError> {
        self.error.as_ref()
    }

    /// Starts a new request: clears the previous error, raises `loading`, and
    /// returns the ticket the response must present to be applied.
    pub fn begin(&mut self) -> RequestTicket {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        RequestTicket(self.seq)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.seq
    }

    /// Applies a fetch outcome, replacing the data wholesale on success.
    /// Returns `false` when the ticket is stale and the outcome was dropped.
    pub fn resolve(&mut self, ticket: RequestTicket, result: Result<T, StoreError>) -> bool {
        if !self.is_current(ticket) {
            debug!(ticket = ticket.0, current = self.seq, "dropping stale response");
            return false;
        }
        self.loading = false;
        match result {
            Ok(data) => self.data = data,
            Err(e) => self.error = Some(e),
        }
        true
    }

    /// Applies a successful outcome through a closure, for responses that
    /// amend rather than replace the data (e.g. load-more concatenation).
    pub fn apply<F: FnOnce(&mut T)>(&mut self, ticket: RequestTicket, f: F) -> bool {
        if !self.is_current(ticket) {
            debug!(ticket = ticket.0, current = self.seq, "dropping stale response");
            return false;
        }
        self.loading = false;
        self.error = None;
        f(&mut self.data);
        true
    }

    pub fn fail(&mut self, ticket: RequestTicket, error: StoreError) -> bool {
        if !self.is_current(ticket) {
            debug!(ticket = ticket.0, current = self.seq, "dropping stale failure");
            return false;
        }
        self.loading = false;
        self.error = Some(error);
        true
    }

    /// Retires any in-flight ticket without touching the data. Responses for
    /// tickets issued before this call will be dropped on arrival.
    pub fn invalidate(&mut self) {
        self.seq += 1;
        self.loading = false;
    }

    /// Synchronous reset: invalidates in-flight requests and replaces the data.
    pub fn reset(&mut self, data: T) {
        self.invalidate();
        self.data = data;
        self.error = None;
    }
}
