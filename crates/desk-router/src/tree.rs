//! Route tree storage and validation
//!
//! The tree owns the declared top-level nodes in declaration order plus a
//! name index used for named redirects and URL generation. Traversal lives in
//! [`crate::matcher`]; this module only stores and validates.

use std::collections::HashMap;
use std::sync::Arc;

use crate::matcher::{MatchResult, Matcher};
use crate::route::{format_segments, RouteNode, Segment};
use crate::{Params, Result, RouterError};

/// Characters a parameter value may not contain in a generated path
const PARAM_VALUE_RESERVED: [char; 4] = ['/', '\\', '?', '#'];

/// A named node together with the full segment chain leading to it
#[derive(Debug, Clone)]
struct NamedRoute {
    node: Arc<RouteNode>,
    segments: Vec<Segment>,
}

/// Immutable, validated forest of route nodes
#[derive(Debug, Clone)]
pub struct RouteTree {
    roots: Vec<Arc<RouteNode>>,
    named: HashMap<String, NamedRoute>,
    len: usize,
}

impl RouteTree {
    /// Builds a tree from top-level nodes, validating names and segments
    ///
    /// Fails with [`RouterError::DuplicateRouteName`] when two nodes at any
    /// depth share a name, and [`RouterError::InvalidSegment`] for a bare `:`.
    ///
    /// # Examples
    ///
    /// ```
    /// use desk_router::{RouteNode, RouteTree, RouterError};
    ///
    /// let tree = RouteTree::build(vec![
    ///     RouteNode::new("tickets").with_name("Tickets"),
    ///     RouteNode::new("contacts").with_name("Contacts"),
    /// ])
    /// .unwrap();
    /// assert_eq!(tree.len(), 2);
    ///
    /// let err = RouteTree::build(vec![
    ///     RouteNode::new("tickets").with_name("Tickets"),
    ///     RouteNode::new("archive").with_child(RouteNode::new("tickets").with_name("Tickets")),
    /// ])
    /// .unwrap_err();
    /// assert_eq!(err, RouterError::DuplicateRouteName { name: "Tickets".to_string() });
    /// ```
    pub fn build<I>(nodes: I) -> Result<Self>
    where
        I: IntoIterator<Item = RouteNode>,
    {
        let roots: Vec<Arc<RouteNode>> = nodes.into_iter().map(Arc::new).collect();
        let mut named = HashMap::new();
        let mut len = 0;

        for root in &roots {
            index_node(root, &[], &mut named, &mut len)?;
        }

        tracing::debug!(nodes = len, named = named.len(), "route tree built");

        Ok(Self { roots, named, len })
    }

    /// Top-level nodes in declaration order
    pub fn roots(&self) -> &[Arc<RouteNode>] {
        &self.roots
    }

    /// Total number of nodes at every depth
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resolves a path with default matcher settings
    ///
    /// # Examples
    ///
    /// ```
    /// use desk_router::{RouteNode, RouteTree};
    ///
    /// let tree = RouteTree::build(vec![
    ///     RouteNode::new("tickets").with_child(RouteNode::new(":ticketId").with_name("Ticket")),
    /// ])
    /// .unwrap();
    ///
    /// let route = tree.find("/tickets/42").unwrap();
    /// assert_eq!(route.param("ticketId"), Some("42"));
    /// ```
    pub fn find(&self, path: &str) -> Result<MatchResult> {
        Matcher::new(self).resolve(path)
    }

    /// Looks up a node by its declared name
    pub fn get(&self, name: &str) -> Option<&Arc<RouteNode>> {
        self.named.get(name).map(|named| &named.node)
    }

    /// Full `/a/:b` pattern of a named node, including all ancestors
    pub fn pattern_for(&self, name: &str) -> Option<String> {
        self.named
            .get(name)
            .map(|named| format_segments(&named.segments))
    }

    /// Names declared anywhere in the tree
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.named.keys().map(String::as_str)
    }

    /// Generates the concrete path of a named node
    ///
    /// Each parametric segment on the node's ancestor chain is replaced with
    /// the value from `params`. Values must be a single path token: one
    /// containing `/`, `\`, `?` or `#` fails with
    /// [`RouterError::InvalidRouteParam`].
    ///
    /// # Examples
    ///
    /// ```
    /// use desk_router::{Params, RouteNode, RouteTree};
    ///
    /// let tree = RouteTree::build(vec![
    ///     RouteNode::new("/support").with_children(vec![
    ///         RouteNode::new("tickets/:ticketId").with_name("PortalTicket"),
    ///     ]),
    /// ])
    /// .unwrap();
    ///
    /// let mut params = Params::new();
    /// params.insert("ticketId".to_string(), "42".to_string());
    /// assert_eq!(tree.url_for("PortalTicket", &params).unwrap(), "/support/tickets/42");
    /// ```
    pub fn url_for(&self, name: &str, params: &Params) -> Result<String> {
        let named = self
            .named
            .get(name)
            .ok_or_else(|| RouterError::UnknownRouteName {
                name: name.to_string(),
            })?;

        let tokens = named
            .segments
            .iter()
            .map(|segment| match segment {
                Segment::Static(literal) => Ok(literal.as_str()),
                Segment::Param(param) => {
                    let value = params
                        .get(param)
                        .map(String::as_str)
                        .filter(|value| !value.is_empty())
                        .ok_or_else(|| RouterError::MissingRouteParam {
                            name: name.to_string(),
                            param: param.clone(),
                        })?;

                    // Separators and suffix markers would re-tokenize differently
                    if value.contains(PARAM_VALUE_RESERVED) {
                        return Err(RouterError::InvalidRouteParam {
                            name: name.to_string(),
                            param: param.clone(),
                            value: value.to_string(),
                        });
                    }
                    Ok(value)
                }
            })
            .collect::<Result<Vec<&str>>>()?;

        Ok(crate::path::join_tokens(&tokens))
    }
}

/// Depth-first validation and name indexing
fn index_node(
    node: &Arc<RouteNode>,
    parent_segments: &[Segment],
    named: &mut HashMap<String, NamedRoute>,
    len: &mut usize,
) -> Result<()> {
    if let Some(segment) = node
        .segments()
        .iter()
        .find(|segment| segment.param_name() == Some(""))
    {
        return Err(RouterError::InvalidSegment {
            path: node.path().to_string(),
            segment: segment.to_string(),
        });
    }

    let segments: Vec<Segment> = parent_segments
        .iter()
        .chain(node.segments())
        .cloned()
        .collect();

    if let Some(name) = node.name() {
        if named.contains_key(name) {
            return Err(RouterError::DuplicateRouteName {
                name: name.to_string(),
            });
        }
        named.insert(
            name.to_string(),
            NamedRoute {
                node: Arc::clone(node),
                segments: segments.clone(),
            },
        );
    }

    *len += 1;

    node.children()
        .iter()
        .try_for_each(|child| index_node(child, &segments, named, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desk_tree() -> RouteTree {
        RouteTree::build(vec![RouteNode::new("/frappedesk")
            .with_name("Desk")
            .with_children(vec![
                RouteNode::index().with_redirect(|_| "/frappedesk/tickets".into()),
                RouteNode::new("tickets").with_name("DeskTickets"),
                RouteNode::new("tickets/:ticketId").with_name("DeskTicket"),
                RouteNode::new("settings").with_name("Settings").with_children(vec![
                    RouteNode::new("sla/:slaId").with_name("SlaPolicy"),
                ]),
            ])])
        .unwrap()
    }

    #[test]
    fn test_build_counts_every_depth() {
        let tree = desk_tree();
        assert_eq!(tree.len(), 6);
        assert_eq!(tree.roots().len(), 1);
        assert_eq!(tree.names().count(), 5);
    }

    #[test]
    fn test_unnamed_nodes_never_collide() {
        let tree = RouteTree::build(vec![
            RouteNode::index().with_redirect(|_| "/a".into()),
            RouteNode::index().with_redirect(|_| "/b".into()),
        ]);
        assert!(tree.is_ok());
    }

    #[test]
    fn test_duplicate_name_in_deep_subtree() {
        let err = RouteTree::build(vec![
            RouteNode::new("a").with_name("Same"),
            RouteNode::new("b").with_child(
                RouteNode::new("c").with_child(RouteNode::new("d").with_name("Same")),
            ),
        ])
        .unwrap_err();
        assert!(err.is_build_error());
    }

    #[test]
    fn test_bare_marker_rejected() {
        let err = RouteTree::build(vec![RouteNode::new("tickets/:")]).unwrap_err();
        assert_eq!(
            err,
            RouterError::InvalidSegment {
                path: "tickets/:".to_string(),
                segment: ":".to_string(),
            }
        );
    }

    #[test]
    fn test_pattern_for_includes_ancestors() {
        let tree = desk_tree();
        assert_eq!(
            tree.pattern_for("SlaPolicy"),
            Some("/frappedesk/settings/sla/:slaId".to_string())
        );
        assert_eq!(tree.pattern_for("Desk"), Some("/frappedesk".to_string()));
        assert_eq!(tree.pattern_for("Nope"), None);
    }

    #[test]
    fn test_url_for_errors() {
        let tree = desk_tree();
        assert_eq!(
            tree.url_for("Missing", &Params::new()),
            Err(RouterError::UnknownRouteName {
                name: "Missing".to_string()
            })
        );
        assert_eq!(
            tree.url_for("DeskTicket", &Params::new()),
            Err(RouterError::MissingRouteParam {
                name: "DeskTicket".to_string(),
                param: "ticketId".to_string(),
            })
        );
    }

    #[test]
    fn test_get_by_name() {
        let tree = desk_tree();
        let node = tree.get("DeskTickets").unwrap();
        assert_eq!(node.path(), "tickets");
    }
}
