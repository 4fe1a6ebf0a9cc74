//! Current-location state shared with the view layer
//!
//! Exactly one [`Navigation`] is active at a time. It is replaced wholesale
//! on every committed resolution; readers get an `Arc` snapshot that never
//! changes underneath them. Resolutions are sequenced so a result that was
//! superseded while in flight can never overwrite a fresher one.

use std::sync::Arc;

use crate::breadcrumb::Crumb;
use crate::matcher::MatchResult;

/// A committed resolution: the match, its trail and its sequence number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub sequence: u64,
    pub route: MatchResult,
    pub trail: Vec<Crumb>,
}

/// Sequence number handed out when a resolution starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResolutionTicket(u64);

impl ResolutionTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Single-writer holder of the active [`Navigation`]
#[derive(Debug, Default)]
pub struct NavigationContext {
    issued: u64,
    committed: u64,
    current: Option<Arc<Navigation>>,
}

impl NavigationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a resolution; any ticket issued earlier becomes stale
    pub fn begin(&mut self) -> ResolutionTicket {
        self.issued += 1;
        ResolutionTicket(self.issued)
    }

    /// Installs a resolution unless a newer one has started since
    ///
    /// Each ticket commits at most once. Returns `false` (and leaves the
    /// context untouched) for stale or already committed tickets.
    ///
    /// # Examples
    ///
    /// ```
    /// use desk_router::{NavigationContext, RouteNode, RouteTree};
    ///
    /// let tree = RouteTree::build(vec![
    ///     RouteNode::new("a").with_name("A"),
    ///     RouteNode::new("b").with_name("B"),
    /// ])
    /// .unwrap();
    /// let mut context = NavigationContext::new();
    ///
    /// let slow = context.begin();
    /// let fast = context.begin();
    /// assert!(context.commit(fast, tree.find("/b").unwrap(), Vec::new()));
    /// assert!(!context.commit(slow, tree.find("/a").unwrap(), Vec::new()));
    ///
    /// assert_eq!(context.current().unwrap().route.name(), Some("B"));
    /// ```
    pub fn commit(&mut self, ticket: ResolutionTicket, route: MatchResult, trail: Vec<Crumb>) -> bool {
        if ticket.0 != self.issued || ticket.0 == self.committed {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.issued,
                committed = self.committed,
                path = route.path(),
                "discarding stale resolution"
            );
            return false;
        }

        self.install(ticket, route, trail);
        true
    }

    /// Atomically replaces the active match and trail
    pub fn update(&mut self, route: MatchResult, trail: Vec<Crumb>) -> Arc<Navigation> {
        let ticket = self.begin();
        self.install(ticket, route, trail)
    }

    fn install(&mut self, ticket: ResolutionTicket, route: MatchResult, trail: Vec<Crumb>) -> Arc<Navigation> {
        let navigation = Arc::new(Navigation {
            sequence: ticket.0,
            route,
            trail,
        });
        self.committed = ticket.0;
        self.current = Some(Arc::clone(&navigation));
        navigation
    }

    /// The active navigation, if any resolution has been committed
    pub fn current(&self) -> Option<Arc<Navigation>> {
        self.current.clone()
    }

    /// Sequence number of the most recently issued ticket
    pub fn latest_sequence(&self) -> u64 {
        self.issued
    }
}
