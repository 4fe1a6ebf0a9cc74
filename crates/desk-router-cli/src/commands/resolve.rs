use std::collections::BTreeMap;

use anyhow::Result;
use colored::Colorize;
use desk_router::{BreadcrumbResolver, Crumb, MatchResult, Matcher, RouteTree, RoutingConfig};
use serde::Serialize;

/// Machine-readable outcome of one resolution
#[derive(Debug, Serialize)]
pub struct ResolveReport {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub chain: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trail: Vec<Crumb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResolveReport {
    pub fn matched(input: &str, route: &MatchResult) -> Self {
        Self {
            input: input.to_string(),
            path: Some(route.path().to_string()),
            route: route.name().map(str::to_string),
            chain: route.chain().iter().map(|node| node.pattern()).collect(),
            params: route
                .params()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            trail: BreadcrumbResolver::resolve(route),
            error: None,
        }
    }

    pub fn failed(input: &str, error: impl ToString) -> Self {
        Self {
            input: input.to_string(),
            path: None,
            route: None,
            chain: Vec::new(),
            params: BTreeMap::new(),
            trail: Vec::new(),
            error: Some(error.to_string()),
        }
    }
}

pub fn execute(tree: &RouteTree, config: &RoutingConfig, paths: &[String], json: bool) -> Result<()> {
    let matcher = Matcher::with_config(tree, config);

    let reports: Vec<ResolveReport> = paths
        .iter()
        .map(|input| match matcher.resolve(input) {
            Ok(route) => ResolveReport::matched(input, &route),
            Err(err) => ResolveReport::failed(input, err),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        print_report(&matcher, report);
    }

    Ok(())
}

fn print_report(matcher: &Matcher<'_>, report: &ResolveReport) {
    println!("{} {}", "→".cyan(), report.input.bold());

    if let Some(error) = &report.error {
        println!("  {} {}", "✗".red(), error.red());
        println!();
        return;
    }

    if let Some(path) = &report.path {
        println!("  {} {}", "path:".dimmed(), matcher.href(path).green());
    }
    println!(
        "  {} {}",
        "route:".dimmed(),
        report.route.as_deref().unwrap_or("(unnamed)").yellow()
    );
    println!("  {} {}", "chain:".dimmed(), report.chain.join(" › "));

    for (name, value) in &report.params {
        println!("  {} {} = {}", "param:".dimmed(), name.cyan(), value);
    }

    if !report.trail.is_empty() {
        let trail: Vec<String> = report
            .trail
            .iter()
            .map(|crumb| match &crumb.path {
                Some(path) => format!("{} ({})", crumb.label, path.dimmed()),
                None => crumb.label.bold().to_string(),
            })
            .collect();
        println!("  {} {}", "trail:".dimmed(), trail.join(" / "));
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_for_ticket() {
        let tree = crate::routes::helpdesk().unwrap();
        let route = tree.find("/frappedesk/tickets/42").unwrap();
        let report = ResolveReport::matched("/frappedesk/tickets/42", &route);

        assert_eq!(report.route.as_deref(), Some("DeskTicket"));
        assert_eq!(report.chain, vec!["/frappedesk", "/tickets/:ticketId"]);
        assert_eq!(report.params.get("ticketId").map(String::as_str), Some("42"));
        assert_eq!(report.trail.len(), 2);
    }

    #[test]
    fn test_failed_report_serializes_error_only() {
        let report = ResolveReport::failed("/nope", "no route matches /nope");
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "input": "/nope", "error": "no route matches /nope" })
        );
    }
}
