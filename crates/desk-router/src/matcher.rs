//! Path resolution against a [`RouteTree`]
//!
//! The matcher walks the tree depth-first in declaration order, binds path
//! parameters, backtracks when a subtree cannot consume the remaining tokens,
//! and chases redirects from the root until a non-redirecting node terminates
//! the match or the hop limit is exceeded.
//!
//! ## Matching rules
//!
//! - First structural match wins; literal segments get no precedence over
//!   parametric siblings declared before them
//! - Index nodes (empty path) match only once every token is consumed
//! - A node that consumes the last token terminates the chain unless one of
//!   its children is an index node, which then becomes the terminal node
//! - A redirect on the terminal node is evaluated with the context built so
//!   far and the resulting path is resolved again from the root

use std::sync::Arc;

use crate::config::RoutingConfig;
use crate::path::{join_tokens, tokenize};
use crate::route::{PropsMode, RedirectTarget, RouteContext, RouteNode};
use crate::tree::RouteTree;
use crate::{Params, Result, RouterError};

/// Redirect hops followed before giving up with [`RouterError::RedirectLoop`]
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Outcome of a successful resolution
///
/// Holds the matched chain (root first), the bound params and the final
/// concrete path after redirects. Two results are equal when they point at
/// the same tree nodes with the same params and path.
#[derive(Debug, Clone)]
pub struct MatchResult {
    chain: Vec<Arc<RouteNode>>,
    params: Params,
    path: String,
}

impl MatchResult {
    /// Matched nodes, root first
    pub fn chain(&self) -> &[Arc<RouteNode>] {
        &self.chain
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Concrete path of the resolved location, e.g. `/frappedesk/tickets/42`
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Terminal node of the chain
    pub fn leaf(&self) -> Option<&RouteNode> {
        self.chain.last().map(Arc::as_ref)
    }

    /// Name of the terminal node
    pub fn name(&self) -> Option<&str> {
        self.leaf().and_then(RouteNode::name)
    }

    /// Context covering the whole chain
    pub fn context(&self) -> RouteContext<'_> {
        RouteContext::new(&self.params, &self.chain)
    }

    /// Context truncated to the node at `depth` and its ancestors
    pub fn context_at(&self, depth: usize) -> Option<RouteContext<'_>> {
        (depth < self.chain.len()).then(|| RouteContext::new(&self.params, &self.chain[..=depth]))
    }

    /// Params to hand the component at `depth` as props
    ///
    /// `Some` only when that node forwards params.
    pub fn props_for(&self, depth: usize) -> Option<&Params> {
        self.chain
            .get(depth)
            .filter(|node| node.props() == PropsMode::ForwardParams)
            .map(|_| &self.params)
    }

    /// Params to hand the terminal component as props
    pub fn leaf_props(&self) -> Option<&Params> {
        self.props_for(self.chain.len().checked_sub(1)?)
    }
}

impl PartialEq for MatchResult {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
            && self.params == other.params
            && self.chain.len() == other.chain.len()
            && self
                .chain
                .iter()
                .zip(&other.chain)
                .all(|(a, b)| Arc::ptr_eq(a, b))
    }
}

impl Eq for MatchResult {}

/// Resolves paths against a borrowed tree
#[derive(Debug, Clone)]
pub struct Matcher<'t> {
    tree: &'t RouteTree,
    max_redirects: usize,
    case_insensitive: bool,
    base_tokens: Vec<String>,
}

impl<'t> Matcher<'t> {
    /// Creates a matcher with default settings (case-sensitive, 10 redirect hops, no base path)
    pub fn new(tree: &'t RouteTree) -> Self {
        Self {
            tree,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            case_insensitive: false,
            base_tokens: Vec::new(),
        }
    }

    /// Creates a matcher from the `[routing]` configuration section
    pub fn with_config(tree: &'t RouteTree, config: &RoutingConfig) -> Self {
        Self::new(tree)
            .with_max_redirects(config.max_redirects)
            .with_case_sensitivity(config.case_insensitive)
            .with_base_path(config.base_path.as_deref().unwrap_or(""))
    }

    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    pub fn with_case_sensitivity(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Prefix every incoming path must carry; stripped before matching
    pub fn with_base_path(mut self, base_path: &str) -> Self {
        self.base_tokens = tokenize(base_path).into_iter().map(String::from).collect();
        self
    }

    pub fn tree(&self) -> &'t RouteTree {
        self.tree
    }

    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    /// Full location for an app-relative path (prefixes the base path)
    ///
    /// # Examples
    ///
    /// ```
    /// use desk_router::{Matcher, RouteTree};
    ///
    /// let tree = RouteTree::build(Vec::new()).unwrap();
    /// let matcher = Matcher::new(&tree).with_base_path("/helpdesk");
    /// assert_eq!(matcher.href("/tickets/42"), "/helpdesk/tickets/42");
    /// assert_eq!(matcher.href("/"), "/helpdesk");
    /// ```
    pub fn href(&self, path: &str) -> String {
        let tokens: Vec<&str> = self
            .base_tokens
            .iter()
            .map(String::as_str)
            .chain(tokenize(path))
            .collect();
        join_tokens(&tokens)
    }

    /// Resolves an incoming location to a [`MatchResult`]
    ///
    /// Query strings and fragments are ignored, trailing slashes are
    /// insignificant, and redirects are followed up to the configured limit.
    ///
    /// # Errors
    ///
    /// - [`RouterError::NotFound`] when no chain matches (or the path lies
    ///   outside the base path)
    /// - [`RouterError::RedirectLoop`] when more than `max_redirects`
    ///   redirects would be followed
    /// - [`RouterError::UnknownRouteName`], [`RouterError::MissingRouteParam`]
    ///   or [`RouterError::InvalidRouteParam`] when a named redirect cannot be
    ///   turned into a path
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn resolve(&self, path: &str) -> Result<MatchResult> {
        let tokens = tokenize(path);
        let tokens = self
            .strip_base(&tokens)
            .ok_or_else(|| RouterError::NotFound {
                path: join_tokens(&tokens),
            })?;

        let mut target = join_tokens(tokens);
        let mut hops = 0;

        loop {
            let tokens = tokenize(&target);
            let mut chain = Vec::new();
            let params = self
                .walk(self.tree.roots(), &tokens, &mut chain, &Params::new())
                .ok_or_else(|| RouterError::NotFound {
                    path: target.clone(),
                })?;

            let ctx = RouteContext::new(&params, &chain);
            let redirect = chain.last().and_then(|node| node.redirect_target(&ctx));

            let Some(redirect) = redirect else {
                tracing::debug!(path = %target, route = ?chain.last().and_then(|n| n.name()), redirects = hops, "route resolved");
                return Ok(MatchResult {
                    chain,
                    params,
                    path: target,
                });
            };

            if hops == self.max_redirects {
                tracing::warn!(path, limit = self.max_redirects, "redirect limit exceeded");
                return Err(RouterError::RedirectLoop {
                    path: path.to_string(),
                    limit: self.max_redirects,
                });
            }

            let next = join_tokens(&tokenize(&self.redirect_path(redirect)?));
            hops += 1;
            tracing::trace!(from = %target, to = %next, hop = hops, "following redirect");
            target = next;
        }
    }

    /// Turns a redirect target into a concrete app-relative path
    fn redirect_path(&self, redirect: RedirectTarget) -> Result<String> {
        match redirect {
            RedirectTarget::Path(path) => Ok(path),
            RedirectTarget::Named { name, params } => self.tree.url_for(&name, &params),
        }
    }

    fn strip_base<'p>(&self, tokens: &'p [&'p str]) -> Option<&'p [&'p str]> {
        if tokens.len() < self.base_tokens.len() {
            return None;
        }

        let (head, rest) = tokens.split_at(self.base_tokens.len());
        let on_base = head.iter().zip(&self.base_tokens).all(|(token, base)| {
            if self.case_insensitive {
                token.eq_ignore_ascii_case(base)
            } else {
                *token == base.as_str()
            }
        });

        on_base.then_some(rest)
    }

    /// Depth-first, declaration-order search with backtracking
    ///
    /// On success `chain` holds the matched nodes and the bound params are
    /// returned. On failure `chain` is left as it was on entry.
    fn walk(
        &self,
        nodes: &[Arc<RouteNode>],
        tokens: &[&str],
        chain: &mut Vec<Arc<RouteNode>>,
        params: &Params,
    ) -> Option<Params> {
        for node in nodes {
            if node.is_index() {
                if tokens.is_empty() {
                    chain.push(Arc::clone(node));
                    return Some(params.clone());
                }
                continue;
            }

            let mut bound = params.clone();
            let rest = match node.match_prefix(tokens, &mut bound, self.case_insensitive) {
                Some(rest) => rest,
                None => continue,
            };

            chain.push(Arc::clone(node));

            // Children first: with no tokens left only an index child can match
            if let Some(found) = self.walk(node.children(), rest, chain, &bound) {
                return Some(found);
            }
            if rest.is_empty() {
                return Some(bound);
            }

            chain.pop();
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::RouteNode;

    fn names(result: &MatchResult) -> Vec<&str> {
        result.context().names().collect()
    }

    #[test]
    fn test_backtracks_into_next_sibling() {
        // First `tickets` subtree cannot consume `/tickets/new/x`; the second can.
        let tree = RouteTree::build(vec![
            RouteNode::new("tickets").with_name("A").with_child(RouteNode::new(":id").with_name("AId")),
            RouteNode::new("tickets/new/:templateId").with_name("B"),
        ])
        .unwrap();

        let result = tree.find("/tickets/new/7").unwrap();
        assert_eq!(names(&result), vec!["B"]);
        assert_eq!(result.param("templateId"), Some("7"));
        assert_eq!(result.param("id"), None);
    }

    #[test]
    fn test_declaration_order_beats_specificity() {
        let tree = RouteTree::build(vec![
            RouteNode::new("tickets/:ticketId").with_name("Ticket"),
            RouteNode::new("tickets/new").with_name("NewTicket"),
        ])
        .unwrap();

        let result = tree.find("/tickets/new").unwrap();
        assert_eq!(result.name(), Some("Ticket"));
        assert_eq!(result.param("ticketId"), Some("new"));
    }

    #[test]
    fn test_parent_terminates_without_index_child() {
        let tree = RouteTree::build(vec![RouteNode::new("support")
            .with_name("Portal")
            .with_child(RouteNode::new("tickets").with_name("PortalTickets"))])
        .unwrap();

        let result = tree.find("/support").unwrap();
        assert_eq!(names(&result), vec!["Portal"]);
    }

    #[test]
    fn test_index_child_without_redirect_terminates() {
        let tree = RouteTree::build(vec![RouteNode::new("support")
            .with_name("Portal")
            .with_child(RouteNode::index().with_name("PortalHome"))])
        .unwrap();

        let result = tree.find("/support/").unwrap();
        assert_eq!(names(&result), vec!["Portal", "PortalHome"]);
        assert_eq!(result.path(), "/support");
    }

    #[test]
    fn test_case_insensitive_literals() {
        let tree = RouteTree::build(vec![RouteNode::new("Tickets/:id").with_name("T")]).unwrap();
        let matcher = Matcher::new(&tree).with_case_sensitivity(true);

        let result = matcher.resolve("/tickets/AbC").unwrap();
        assert_eq!(result.param("id"), Some("AbC"));
        assert!(Matcher::new(&tree).resolve("/tickets/AbC").is_err());
    }

    #[test]
    fn test_base_path() {
        let tree = RouteTree::build(vec![RouteNode::new("tickets").with_name("T")]).unwrap();
        let matcher = Matcher::new(&tree).with_base_path("/helpdesk/");

        assert_eq!(matcher.resolve("/helpdesk/tickets").unwrap().path(), "/tickets");
        assert_eq!(
            matcher.resolve("/tickets"),
            Err(RouterError::NotFound {
                path: "/tickets".to_string()
            })
        );
    }

    #[test]
    fn test_props_forwarding() {
        let tree = RouteTree::build(vec![RouteNode::new("tickets")
            .with_child(RouteNode::new(":ticketId").forward_params())])
        .unwrap();

        let result = tree.find("/tickets/3").unwrap();
        assert_eq!(result.props_for(0), None);
        assert_eq!(result.props_for(1).and_then(|p| p.get("ticketId")), Some(&"3".to_string()));
        assert_eq!(result.leaf_props(), result.props_for(1));
        assert_eq!(result.props_for(2), None);
    }

    #[test]
    fn test_redirect_context_sees_params() {
        let tree = RouteTree::build(vec![
            RouteNode::new("t/:id").with_redirect(|ctx| {
                format!("/tickets/{}", ctx.param("id").unwrap_or_default()).into()
            }),
            RouteNode::new("tickets/:ticketId").with_name("Ticket"),
        ])
        .unwrap();

        let result = tree.find("/t/99").unwrap();
        assert_eq!(result.name(), Some("Ticket"));
        assert_eq!(result.param("ticketId"), Some("99"));
        assert_eq!(result.param("id"), None);
    }

    #[test]
    fn test_named_redirect_errors_surface() {
        let tree = RouteTree::build(vec![
            RouteNode::new("old").with_redirect(|_| RedirectTarget::named("Gone")),
        ])
        .unwrap();

        assert_eq!(
            tree.find("/old"),
            Err(RouterError::UnknownRouteName {
                name: "Gone".to_string()
            })
        );
    }

    #[test]
    fn test_zero_redirect_limit() {
        let tree = RouteTree::build(vec![
            RouteNode::new("a").with_redirect(|_| "/b".into()),
            RouteNode::new("b").with_name("B"),
        ])
        .unwrap();

        let matcher = Matcher::new(&tree).with_max_redirects(0);
        assert!(matches!(
            matcher.resolve("/a"),
            Err(RouterError::RedirectLoop { limit: 0, .. })
        ));
        assert_eq!(matcher.resolve("/b").unwrap().name(), Some("B"));
    }
}
