use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    PaymentFailed,
    PaymentSuccess,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::PaymentFailed => "/payment-failed",
            Destination::PaymentSuccess => "/payment-success",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    PaymentDetails,
    Done(Destination),
}

/// Where the app currently is. Navigating to the current route is a no-op,
/// so the two failure paths can both fire without harm.
#[derive(Debug)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            current: Route::PaymentDetails,
            history: Vec::new(),
        }
    }

    /// Returns true if the route changed.
    pub fn navigate(&mut self, dest: Destination) -> bool {
        let next = Route::Done(dest);
        if self.current == next {
            debug!(path = dest.path(), "already there, navigation ignored");
            return false;
        }
        info!(path = dest.path(), "navigate");
        self.history.push(self.current);
        self.current = next;
        true
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
