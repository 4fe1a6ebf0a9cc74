use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use desk_router::{RouteNode, RouteTree};
use serde::Serialize;

/// Serializable view of one declared node
#[derive(Debug, Serialize)]
pub struct RouteEntry {
    pub pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    pub redirect: bool,
    pub breadcrumbs: bool,
    pub props: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteEntry>,
}

impl RouteEntry {
    pub fn from_node(node: &RouteNode) -> Self {
        Self {
            pattern: node.pattern(),
            name: node.name().map(str::to_string),
            component: node.component().map(|c| c.to_string()),
            redirect: node.has_redirect(),
            breadcrumbs: node.has_breadcrumb(),
            props: node.props() == desk_router::PropsMode::ForwardParams,
            children: node.children().iter().map(|child| Self::from_node(child)).collect(),
        }
    }
}

pub fn execute(tree: &RouteTree, json: bool) -> Result<()> {
    if json {
        let entries: Vec<RouteEntry> = tree
            .roots()
            .iter()
            .map(|node| RouteEntry::from_node(node))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{}", "Route tree".green().bold());
    println!("{} nodes, {} named", tree.len(), tree.names().count());
    println!();

    print_nodes(tree.roots(), 0);
    Ok(())
}

fn print_nodes(nodes: &[Arc<RouteNode>], depth: usize) {
    for node in nodes {
        let indent = "  ".repeat(depth);
        let pattern = if node.is_index() {
            "(index)".dimmed().to_string()
        } else {
            node.pattern().cyan().to_string()
        };

        let mut flags = Vec::new();
        if node.has_redirect() {
            flags.push("redirect");
        }
        if node.has_breadcrumb() {
            flags.push("breadcrumbs");
        }
        if node.props() == desk_router::PropsMode::ForwardParams {
            flags.push("props");
        }

        print!("{}{}", indent, pattern);
        if let Some(name) = node.name() {
            print!(" {}", name.yellow());
        }
        if !flags.is_empty() {
            print!(" {}", format!("[{}]", flags.join(", ")).dimmed());
        }
        println!();

        print_nodes(node.children(), depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_mirrors_tree_shape() {
        let tree = crate::routes::helpdesk().unwrap();
        let entries: Vec<RouteEntry> = tree.roots().iter().map(|n| RouteEntry::from_node(n)).collect();

        assert_eq!(entries.len(), 7);
        let desk = entries.iter().find(|e| e.name.as_deref() == Some("Desk")).unwrap();
        assert_eq!(desk.children.len(), 6);
        assert!(desk.children[0].redirect);
        assert_eq!(desk.children[0].pattern, "/");
    }
}
