//! Breadcrumb trail derivation
//!
//! Each node may declare a breadcrumb function returning its *complete* list
//! of crumbs. The trail for a match is the root-to-leaf concatenation of
//! those lists; nodes without a function contribute nothing, and no merging
//! or deduplication happens.

use serde::{Deserialize, Serialize};

use crate::matcher::MatchResult;

/// One entry of a breadcrumb trail
///
/// A crumb without a path is not navigable (typically the current page).
///
/// # Examples
///
/// ```
/// use desk_router::Crumb;
///
/// let crumb = Crumb::link("Tickets", "/frappedesk/tickets");
/// assert!(crumb.is_navigable());
///
/// let crumb = Crumb::current("42");
/// assert_eq!(crumb.path, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crumb {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Crumb {
    /// Navigable crumb
    pub fn link(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: Some(path.into()),
        }
    }

    /// Non-navigable crumb
    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: None,
        }
    }

    pub fn is_navigable(&self) -> bool {
        self.path.is_some()
    }
}

/// Computes breadcrumb trails for resolved matches
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadcrumbResolver;

impl BreadcrumbResolver {
    /// Builds the trail for a match
    ///
    /// Every breadcrumb function sees the full params but a chain truncated
    /// to its own node and ancestors.
    ///
    /// # Examples
    ///
    /// ```
    /// use desk_router::{BreadcrumbResolver, Crumb, RouteNode, RouteTree};
    ///
    /// let tree = RouteTree::build(vec![RouteNode::new("tickets").with_child(
    ///     RouteNode::new(":ticketId").with_breadcrumb(|ctx| {
    ///         vec![
    ///             Crumb::link("Tickets", "/tickets"),
    ///             Crumb::current(ctx.param("ticketId").unwrap_or_default()),
    ///         ]
    ///     }),
    /// )])
    /// .unwrap();
    ///
    /// let route = tree.find("/tickets/42").unwrap();
    /// assert_eq!(
    ///     BreadcrumbResolver::resolve(&route),
    ///     vec![Crumb::link("Tickets", "/tickets"), Crumb::current("42")]
    /// );
    /// ```
    pub fn resolve(route: &MatchResult) -> Vec<Crumb> {
        (0..route.chain().len())
            .filter_map(|depth| {
                let ctx = route.context_at(depth)?;
                ctx.node()?.breadcrumbs(&ctx)
            })
            .flatten()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RouteNode, RouteTree};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nodes_without_function_contribute_nothing() {
        let tree = RouteTree::build(vec![RouteNode::new("settings")
            .with_child(RouteNode::new("agents").with_name("Agents"))])
        .unwrap();

        let route = tree.find("/settings/agents").unwrap();
        assert!(BreadcrumbResolver::resolve(&route).is_empty());
    }

    #[test]
    fn test_concatenates_root_to_leaf_without_dedup() {
        let tree = RouteTree::build(vec![RouteNode::new("settings")
            .with_breadcrumb(|_| vec![Crumb::link("Settings", "/settings")])
            .with_child(RouteNode::new("sla").with_breadcrumb(|_| {
                vec![Crumb::link("Settings", "/settings"), Crumb::current("Support Policies")]
            }))])
        .unwrap();

        let route = tree.find("/settings/sla").unwrap();
        assert_eq!(
            BreadcrumbResolver::resolve(&route),
            vec![
                Crumb::link("Settings", "/settings"),
                Crumb::link("Settings", "/settings"),
                Crumb::current("Support Policies"),
            ]
        );
    }

    #[test]
    fn test_context_is_truncated_per_node() {
        let tree = RouteTree::build(vec![RouteNode::new("a")
            .with_name("A")
            .with_breadcrumb(|ctx| {
                vec![Crumb::current(ctx.names().collect::<Vec<_>>().join(">"))]
            })
            .with_child(RouteNode::new(":b").with_name("B").with_breadcrumb(|ctx| {
                vec![Crumb::current(format!(
                    "{}:{}",
                    ctx.names().collect::<Vec<_>>().join(">"),
                    ctx.param("b").unwrap_or_default()
                ))]
            }))])
        .unwrap();

        let route = tree.find("/a/x").unwrap();
        assert_eq!(
            BreadcrumbResolver::resolve(&route),
            vec![Crumb::current("A"), Crumb::current("A>B:x")]
        );
    }

    #[test]
    fn test_crumb_serialization_skips_missing_path() {
        let json = serde_json::to_string(&Crumb::current("42")).unwrap();
        assert_eq!(json, r#"{"label":"42"}"#);

        let crumb: Crumb = serde_json::from_str(r#"{"label":"Tickets","path":"/tickets"}"#).unwrap();
        assert_eq!(crumb, Crumb::link("Tickets", "/tickets"));
    }
}
