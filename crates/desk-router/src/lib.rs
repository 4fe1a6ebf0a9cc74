//! # Desk Router
//!
//! Hierarchical route resolution and breadcrumb derivation for single-page
//! navigation trees:
//! - Nested route nodes (`/frappedesk` → `tickets/:ticketId`)
//! - Dynamic parameters (`:ticketId`), bound verbatim
//! - Index nodes carrying default-path redirects
//! - Literal and named redirects, chased from the root with a hop limit
//! - Per-node breadcrumb functions evaluated against the matched context
//! - A sequenced navigation context and a pluggable history seam
//!
//! ## Matching Semantics
//!
//! - **Declaration order wins**: siblings are tried in the order declared,
//!   with backtracking when a subtree cannot consume the remaining path
//! - **Trailing slashes, doubled slashes, query strings and fragments** are
//!   ignored: `/tickets/42/?tab=1` resolves like `/tickets/42`
//! - **Pure functions**: redirect and breadcrumb callbacks only see the
//!   [`RouteContext`] they are given
//!
//! ## Example
//!
//! ```
//! use desk_router::{BreadcrumbResolver, Crumb, RouteNode, RouteTree};
//!
//! let tree = RouteTree::build(vec![RouteNode::new("/frappedesk")
//!     .with_name("Desk")
//!     .with_children(vec![
//!         RouteNode::index().with_redirect(|_| "/frappedesk/tickets".into()),
//!         RouteNode::new("tickets").with_name("DeskTickets"),
//!         RouteNode::new("tickets/:ticketId")
//!             .with_name("DeskTicket")
//!             .forward_params()
//!             .with_breadcrumb(|ctx| {
//!                 vec![
//!                     Crumb::link("Tickets", "/frappedesk/tickets"),
//!                     Crumb::current(ctx.param("ticketId").unwrap_or_default()),
//!                 ]
//!             }),
//!     ])])
//! .unwrap();
//!
//! let route = tree.find("/frappedesk").unwrap();
//! assert_eq!(route.path(), "/frappedesk/tickets");
//!
//! let route = tree.find("/frappedesk/tickets/42").unwrap();
//! assert_eq!(route.param("ticketId"), Some("42"));
//! assert_eq!(BreadcrumbResolver::resolve(&route).len(), 2);
//! ```

use std::collections::HashMap;

// ============================================================================
// Module Declarations
// ============================================================================

mod breadcrumb;
mod config;
mod error;
mod matcher;
pub mod navigation;
pub mod path;
pub mod route;
mod tree;

pub use breadcrumb::{BreadcrumbResolver, Crumb};
pub use config::{RouterConfig, RoutingConfig};
pub use error::RouterError;
pub use matcher::{MatchResult, Matcher, DEFAULT_MAX_REDIRECTS};
pub use navigation::{
    History, MemoryHistory, Navigation, NavigationContext, Navigator, ResolutionTicket,
};
pub use path::{normalize_path, tokenize};
pub use route::{ComponentRef, PropsMode, RedirectTarget, RouteContext, RouteNode, Segment};
pub use tree::RouteTree;

// ============================================================================
// Core Types
// ============================================================================

/// Path parameters bound during matching (parameter name → raw token)
pub type Params = HashMap<String, String>;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, RouterError>;
