//! Declarative route nodes
//!
//! A [`RouteNode`] describes one step of the navigation tree: the path
//! segment(s) it consumes, the component it renders, and the optional
//! redirect and breadcrumb functions evaluated against a [`RouteContext`].
//! Nodes are built once with the `with_*` builder methods and never mutated
//! after the tree is constructed.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::segment::{format_segments, parse_segments, Segment};
use crate::breadcrumb::Crumb;
use crate::Params;

/// Redirect callback: computes where a terminal match should go instead
pub type RedirectFn = dyn Fn(&RouteContext<'_>) -> RedirectTarget + Send + Sync;

/// Breadcrumb callback: computes the complete crumb list for a node
pub type BreadcrumbFn = dyn Fn(&RouteContext<'_>) -> Vec<Crumb> + Send + Sync;

/// Opaque handle to the view rendered for a node
///
/// Never resolved by the router; the view layer decides what it means.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentRef(String);

impl ComponentRef {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a node receives the extracted params as component props
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropsMode {
    #[default]
    None,
    ForwardParams,
}

/// Where a redirect points
///
/// # Examples
///
/// ```
/// use desk_router::RedirectTarget;
///
/// let target: RedirectTarget = "/frappedesk/tickets".into();
/// assert_eq!(target, RedirectTarget::Path("/frappedesk/tickets".to_string()));
///
/// let target = RedirectTarget::named("DeskTicket").with_param("ticketId", "42");
/// assert!(matches!(target, RedirectTarget::Named { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectTarget {
    /// Literal path, resolved from the tree root
    Path(String),
    /// Named route with parameters substituted into its declared segments
    Named { name: String, params: Params },
}

impl RedirectTarget {
    pub fn named(name: impl Into<String>) -> Self {
        RedirectTarget::Named {
            name: name.into(),
            params: Params::new(),
        }
    }

    /// Adds a parameter to a named target (no-op for literal paths)
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let RedirectTarget::Named { ref mut params, .. } = self {
            params.insert(key.into(), value.into());
        }
        self
    }
}

impl From<&str> for RedirectTarget {
    fn from(path: &str) -> Self {
        RedirectTarget::Path(path.to_string())
    }
}

impl From<String> for RedirectTarget {
    fn from(path: String) -> Self {
        RedirectTarget::Path(path)
    }
}

/// Read-only view handed to redirect and breadcrumb functions
///
/// Carries the extracted params and the matched chain from the root down to
/// the node being evaluated. Functions receive everything they need through
/// this value; there is no ambient navigation state.
#[derive(Debug, Clone, Copy)]
pub struct RouteContext<'a> {
    params: &'a Params,
    chain: &'a [Arc<RouteNode>],
}

impl<'a> RouteContext<'a> {
    pub fn new(params: &'a Params, chain: &'a [Arc<RouteNode>]) -> Self {
        Self { params, chain }
    }

    pub fn params(&self) -> &'a Params {
        self.params
    }

    /// Value bound to a parameter, if any
    pub fn param(&self, name: &str) -> Option<&'a str> {
        self.params.get(name).map(String::as_str)
    }

    /// Matched nodes, root first
    pub fn chain(&self) -> &'a [Arc<RouteNode>] {
        self.chain
    }

    /// Names of the matched nodes, root first (unnamed nodes are skipped)
    pub fn names(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.chain.iter().filter_map(|node| node.name())
    }

    /// The node this context is scoped to
    pub fn node(&self) -> Option<&'a RouteNode> {
        self.chain.last().map(Arc::as_ref)
    }
}

/// One node of the navigation tree
#[derive(Clone)]
pub struct RouteNode {
    path: String,
    segments: Vec<Segment>,
    name: Option<String>,
    component: Option<ComponentRef>,
    children: Vec<Arc<RouteNode>>,
    redirect: Option<Arc<RedirectFn>>,
    props: PropsMode,
    breadcrumb: Option<Arc<BreadcrumbFn>>,
    metadata: HashMap<String, String>,
}

impl RouteNode {
    /// Creates a node for a declared path
    ///
    /// The path may span several tokens (`tickets/:ticketId`); an empty path
    /// declares an index node.
    ///
    /// # Examples
    ///
    /// ```
    /// use desk_router::RouteNode;
    ///
    /// let node = RouteNode::new("tickets/:ticketId").with_name("DeskTicket");
    /// assert_eq!(node.pattern(), "/tickets/:ticketId");
    /// assert_eq!(node.param_names().collect::<Vec<_>>(), vec!["ticketId"]);
    /// ```
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let segments = parse_segments(&path);
        Self {
            path,
            segments,
            name: None,
            component: None,
            children: Vec::new(),
            redirect: None,
            props: PropsMode::None,
            breadcrumb: None,
            metadata: HashMap::new(),
        }
    }

    /// Creates an index node: matches only once every token is consumed
    pub fn index() -> Self {
        Self::new("")
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(ComponentRef::new(component));
        self
    }

    pub fn with_props(mut self, props: PropsMode) -> Self {
        self.props = props;
        self
    }

    /// Shorthand for `with_props(PropsMode::ForwardParams)`
    pub fn forward_params(self) -> Self {
        self.with_props(PropsMode::ForwardParams)
    }

    /// Sets the redirect evaluated when this node terminates a match
    ///
    /// # Examples
    ///
    /// ```
    /// use desk_router::RouteNode;
    ///
    /// let node = RouteNode::index().with_redirect(|_| "/frappedesk/tickets".into());
    /// assert!(node.has_redirect());
    /// ```
    pub fn with_redirect<F>(mut self, redirect: F) -> Self
    where
        F: Fn(&RouteContext<'_>) -> RedirectTarget + Send + Sync + 'static,
    {
        self.redirect = Some(Arc::new(redirect));
        self
    }

    /// Sets the breadcrumb function; its output is this node's complete contribution
    pub fn with_breadcrumb<F>(mut self, breadcrumb: F) -> Self
    where
        F: Fn(&RouteContext<'_>) -> Vec<Crumb> + Send + Sync + 'static,
    {
        self.breadcrumb = Some(Arc::new(breadcrumb));
        self
    }

    pub fn with_child(mut self, child: RouteNode) -> Self {
        self.children.push(Arc::new(child));
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = RouteNode>,
    {
        self.children.extend(children.into_iter().map(Arc::new));
        self
    }

    /// Sets an opaque metadata entry (titles, permissions, ...)
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The path as declared
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The declared path in canonical `/a/:b` form
    pub fn pattern(&self) -> String {
        format_segments(&self.segments)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::param_name)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn component(&self) -> Option<&ComponentRef> {
        self.component.as_ref()
    }

    pub fn children(&self) -> &[Arc<RouteNode>] {
        &self.children
    }

    pub fn props(&self) -> PropsMode {
        self.props
    }

    pub fn is_index(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn has_redirect(&self) -> bool {
        self.redirect.is_some()
    }

    pub fn has_breadcrumb(&self) -> bool {
        self.breadcrumb.is_some()
    }

    pub fn get_meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    pub fn has_meta(&self, key: &str) -> bool {
        self.metadata.contains_key(key)
    }

    /// Evaluates the redirect function, if any
    pub fn redirect_target(&self, ctx: &RouteContext<'_>) -> Option<RedirectTarget> {
        self.redirect.as_ref().map(|redirect| redirect(ctx))
    }

    /// Evaluates the breadcrumb function, if any
    pub fn breadcrumbs(&self, ctx: &RouteContext<'_>) -> Option<Vec<Crumb>> {
        self.breadcrumb.as_ref().map(|breadcrumb| breadcrumb(ctx))
    }

    /// Matches this node's segments against the front of `tokens`
    ///
    /// Binds parameters into `params` and returns the unconsumed tokens.
    /// Index nodes consume nothing and are handled by the matcher.
    pub(crate) fn match_prefix<'t>(
        &self,
        tokens: &'t [&'t str],
        params: &mut Params,
        case_insensitive: bool,
    ) -> Option<&'t [&'t str]> {
        if tokens.len() < self.segments.len() {
            return None;
        }

        let (head, rest) = tokens.split_at(self.segments.len());
        let all_match = self
            .segments
            .iter()
            .zip(head)
            .all(|(segment, token)| segment.matches(token, case_insensitive));

        if !all_match {
            return None;
        }

        params.extend(
            self.segments
                .iter()
                .zip(head)
                .filter_map(|(segment, token)| {
                    segment
                        .param_name()
                        .map(|name| (name.to_string(), token.to_string()))
                }),
        );
        Some(rest)
    }
}

impl fmt::Debug for RouteNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteNode")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("component", &self.component)
            .field("props", &self.props)
            .field("redirect", &self.redirect.is_some())
            .field("breadcrumb", &self.breadcrumb.is_some())
            .field("children", &self.children)
            .finish()
    }
}
