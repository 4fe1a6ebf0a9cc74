//! Navigation state, the history seam and the navigator that ties them to matching

pub mod context;
pub mod history;

pub use context::{Navigation, NavigationContext, ResolutionTicket};
pub use history::{History, MemoryHistory};

use std::sync::Arc;

use crate::breadcrumb::BreadcrumbResolver;
use crate::matcher::Matcher;
use crate::Result;

/// Drives resolutions from navigation requests
///
/// Every request runs the same pipeline: resolve (chasing redirects), derive
/// the breadcrumb trail, record the final location in history, then replace
/// the active entry of the [`NavigationContext`]. A failed resolution touches neither history
/// nor context; the error goes back to the caller.
///
/// # Examples
///
/// ```
/// use desk_router::{History, Matcher, MemoryHistory, Navigator, RouteNode, RouteTree};
///
/// let tree = RouteTree::build(vec![RouteNode::new("/frappedesk").with_children(vec![
///     RouteNode::index().with_redirect(|_| "/frappedesk/tickets".into()),
///     RouteNode::new("tickets").with_name("DeskTickets"),
/// ])])
/// .unwrap();
///
/// let mut navigator = Navigator::new(Matcher::new(&tree), MemoryHistory::new("/frappedesk"));
/// let navigation = navigator.sync().unwrap();
///
/// assert_eq!(navigation.route.name(), Some("DeskTickets"));
/// assert_eq!(navigator.history().location(), "/frappedesk/tickets");
/// ```
#[derive(Debug)]
pub struct Navigator<'t, H: History> {
    matcher: Matcher<'t>,
    history: H,
    context: NavigationContext,
}

/// How a resolved location is written to history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryMode {
    Push,
    Replace,
    /// Replace only when the resolved location differs from the current one
    Sync,
}

impl<'t, H: History> Navigator<'t, H> {
    pub fn new(matcher: Matcher<'t>, history: H) -> Self {
        Self {
            matcher,
            history,
            context: NavigationContext::new(),
        }
    }

    /// Navigates to `path`, adding a history entry
    pub fn push(&mut self, path: &str) -> Result<Arc<Navigation>> {
        self.navigate(path, HistoryMode::Push)
    }

    /// Navigates to `path`, overwriting the current history entry
    pub fn replace(&mut self, path: &str) -> Result<Arc<Navigation>> {
        self.navigate(path, HistoryMode::Replace)
    }

    /// Resolves whatever location history currently holds
    ///
    /// Used on startup and after the host moves through history. A redirected
    /// location replaces the entry that triggered it.
    pub fn sync(&mut self) -> Result<Arc<Navigation>> {
        let location = self.history.location();
        self.navigate(&location, HistoryMode::Sync)
    }

    /// The active navigation
    pub fn current(&self) -> Option<Arc<Navigation>> {
        self.context.current()
    }

    pub fn context(&self) -> &NavigationContext {
        &self.context
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    pub fn matcher(&self) -> &Matcher<'t> {
        &self.matcher
    }

    fn navigate(&mut self, path: &str, mode: HistoryMode) -> Result<Arc<Navigation>> {
        let route = self.matcher.resolve(path)?;
        let trail = BreadcrumbResolver::resolve(&route);
        let location = self.matcher.href(route.path());

        match mode {
            HistoryMode::Push => self.history.push(&location),
            HistoryMode::Replace => self.history.replace(&location),
            HistoryMode::Sync => {
                if crate::path::normalize_path(&self.history.location()) != location {
                    self.history.replace(&location);
                }
            }
        }

        let navigation = self.context.update(route, trail);
        tracing::debug!(?mode, %location, sequence = navigation.sequence, "navigation committed");
        Ok(navigation)
    }
}
