//! Integration tests for navigation state
//!
//! Covers the navigator pipeline (resolve → trail → history → context) and
//! the sequencing rules that keep stale resolutions out of the context.

use desk_router::*;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

#[fixture]
fn tree() -> RouteTree {
    RouteTree::build(vec![
        RouteNode::new("/frappedesk/login").with_name("DeskLogin"),
        RouteNode::new("/frappedesk").with_name("Desk").with_children(vec![
            RouteNode::index().with_redirect(|_| "/frappedesk/tickets".into()),
            RouteNode::new("tickets").with_name("DeskTickets"),
            RouteNode::new("tickets/:ticketId")
                .with_name("DeskTicket")
                .forward_params()
                .with_breadcrumb(|ctx| {
                    vec![
                        Crumb::link("Tickets", "/frappedesk/tickets"),
                        Crumb::current(ctx.param("ticketId").unwrap_or_default()),
                    ]
                }),
        ]),
    ])
    .unwrap()
}

#[rstest]
fn test_startup_sync_follows_index_redirect(tree: RouteTree) {
    let mut navigator = Navigator::new(Matcher::new(&tree), MemoryHistory::new("/frappedesk/"));

    let navigation = navigator.sync().unwrap();
    assert_eq!(navigation.route.name(), Some("DeskTickets"));
    assert_eq!(navigator.history().entries(), &["/frappedesk/tickets"]);
}

#[rstest]
fn test_sync_leaves_equivalent_location_alone(tree: RouteTree) {
    let mut navigator = Navigator::new(Matcher::new(&tree), MemoryHistory::new("/frappedesk/tickets/"));

    navigator.sync().unwrap();
    assert_eq!(navigator.history().location(), "/frappedesk/tickets/");
}

#[rstest]
fn test_push_sequence_and_trail(tree: RouteTree) {
    let mut navigator = Navigator::new(Matcher::new(&tree), MemoryHistory::default());

    let first = navigator.push("/frappedesk/tickets").unwrap();
    let second = navigator.push("/frappedesk/tickets/42?tab=activity").unwrap();

    assert!(second.sequence > first.sequence);
    assert_eq!(
        second.trail,
        vec![
            Crumb::link("Tickets", "/frappedesk/tickets"),
            Crumb::current("42"),
        ]
    );
    assert_eq!(second.route.leaf_props().map(|p| p.len()), Some(1));
    assert_eq!(
        navigator.history().entries(),
        &["/", "/frappedesk/tickets", "/frappedesk/tickets/42"]
    );
    assert_eq!(navigator.current(), Some(second));
}

#[rstest]
fn test_trail_replaced_not_merged(tree: RouteTree) {
    let mut navigator = Navigator::new(Matcher::new(&tree), MemoryHistory::default());

    navigator.push("/frappedesk/tickets/42").unwrap();
    let navigation = navigator.push("/frappedesk/login").unwrap();

    assert!(navigation.trail.is_empty());
    assert!(navigation.route.params().is_empty());
}

#[rstest]
fn test_failed_push_reports_error(tree: RouteTree) {
    let mut navigator = Navigator::new(Matcher::new(&tree), MemoryHistory::default());
    navigator.push("/frappedesk/tickets/1").unwrap();

    assert_eq!(
        navigator.push("/support/tickets"),
        Err(RouterError::NotFound {
            path: "/support/tickets".to_string()
        })
    );
    assert_eq!(navigator.current().unwrap().route.param("ticketId"), Some("1"));
    assert_eq!(navigator.history().location(), "/frappedesk/tickets/1");
}

#[rstest]
fn test_base_path_round_trip(tree: RouteTree) {
    let config = RoutingConfig {
        base_path: Some("/helpdesk".to_string()),
        ..RoutingConfig::default()
    };
    let mut navigator = Navigator::new(
        Matcher::with_config(&tree, &config),
        MemoryHistory::new("/helpdesk/frappedesk"),
    );

    let navigation = navigator.sync().unwrap();
    assert_eq!(navigation.route.path(), "/frappedesk/tickets");
    assert_eq!(navigator.history().location(), "/helpdesk/frappedesk/tickets");
}

#[rstest]
fn test_superseded_resolution_is_discarded(tree: RouteTree) {
    let mut context = NavigationContext::new();

    let slow = context.begin();
    let fast = context.begin();

    assert!(context.commit(fast, tree.find("/frappedesk/tickets/2").unwrap(), Vec::new()));
    assert!(!context.commit(slow, tree.find("/frappedesk/tickets/1").unwrap(), Vec::new()));

    let current = context.current().unwrap();
    assert_eq!(current.sequence, fast.sequence());
    assert_eq!(current.route.param("ticketId"), Some("2"));
}

#[rstest]
fn test_ticket_cannot_commit_twice_after_newer_begin(tree: RouteTree) {
    let mut context = NavigationContext::new();

    let ticket = context.begin();
    assert!(context.commit(ticket, tree.find("/frappedesk/login").unwrap(), Vec::new()));

    context.begin();
    assert!(!context.commit(ticket, tree.find("/frappedesk/tickets").unwrap(), Vec::new()));
    assert_eq!(context.current().unwrap().route.name(), Some("DeskLogin"));
}
