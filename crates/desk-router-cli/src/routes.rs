//! Helpdesk navigation tree
//!
//! Agent desk under `/frappedesk`, customer portal under `/support`, plus the
//! standalone auth pages for both.

use anyhow::Result;
use desk_router::{Crumb, RouteContext, RouteNode, RouteTree};

/// Builds the helpdesk route tree
pub fn helpdesk() -> Result<RouteTree> {
    let mut routes = auth_routes();
    routes.push(desk_routes());
    routes.push(portal_routes());

    Ok(RouteTree::build(routes)?)
}

fn auth_routes() -> Vec<RouteNode> {
    vec![
        RouteNode::new("/frappedesk/login")
            .with_name("DeskLogin")
            .with_component("auth/Login"),
        RouteNode::new("/support/login")
            .with_name("PortalLogin")
            .with_component("auth/Login"),
        RouteNode::new("/frappedesk/signup")
            .with_name("DeskSignup")
            .with_component("auth/Signup"),
        RouteNode::new("/support/signup")
            .with_name("PortalSignup")
            .with_component("auth/Signup"),
        RouteNode::new("/support/verify/:requestKey")
            .with_name("Verify Account")
            .with_component("auth/VerifyAccount")
            .forward_params(),
    ]
}

fn desk_routes() -> RouteNode {
    RouteNode::new("/frappedesk")
        .with_name("Desk")
        .with_component("desk/Desk")
        .with_children(vec![
            RouteNode::index().with_redirect(|_| "/frappedesk/tickets".into()),
            RouteNode::new("tickets")
                .with_name("DeskTickets")
                .with_component("desk/Tickets"),
            RouteNode::new("tickets/:ticketId")
                .with_name("DeskTicket")
                .with_component("desk/Ticket")
                .forward_params()
                .with_breadcrumb(|ctx| detail_trail(ctx, "Tickets", "/frappedesk/tickets", "ticketId")),
            RouteNode::new("contacts")
                .with_name("Contacts")
                .with_component("desk/Contacts"),
            RouteNode::new("contacts/:contactId")
                .with_name("Contact")
                .with_component("desk/Contact")
                .forward_params()
                .with_breadcrumb(|ctx| {
                    detail_trail(ctx, "Contacts", "/frappedesk/contacts", "contactId")
                }),
            settings_routes(),
        ])
}

fn settings_routes() -> RouteNode {
    RouteNode::new("settings")
        .with_name("Settings")
        .with_component("desk/settings/Settings")
        .with_children(vec![
            RouteNode::index().with_redirect(|_| "/frappedesk/settings/agents".into()),
            RouteNode::new("agents")
                .with_name("Agents")
                .with_component("desk/settings/agent/Agents")
                .with_meta("title", "Agents"),
            RouteNode::new("sla")
                .with_name("SlaPolicies")
                .with_component("desk/settings/sla/SlaPolicies")
                .with_meta("title", "Support Policies"),
            RouteNode::new("sla/new")
                .with_name("NewSlaPolicy")
                .with_component("desk/settings/sla/SlaPolicy")
                .with_meta("title", "New Support Policy"),
            RouteNode::new("sla/:slaId")
                .with_name("SlaPolicy")
                .with_component("desk/settings/sla/SlaPolicy")
                .forward_params(),
        ])
}

fn portal_routes() -> RouteNode {
    RouteNode::new("/support")
        .with_name("Portal")
        .with_component("portal/Portal")
        .with_children(vec![
            RouteNode::new("tickets")
                .with_name("ProtalTickets")
                .with_component("portal/Tickets"),
            RouteNode::new("tickets/:ticketId")
                .with_name("PortalTicket")
                .with_component("portal/Ticket")
                .forward_params(),
            RouteNode::new("tickets/new/:templateId")
                .with_name("TemplatedNewTicket")
                .with_component("portal/NewTicket")
                .forward_params(),
            // Shadowed by `tickets/:ticketId`, which is declared first
            RouteNode::new("tickets/new")
                .with_name("DefaultNewTicket")
                .with_component("portal/NewTicket"),
            RouteNode::new("impersonate")
                .with_name("Impersonate")
                .with_component("portal/Impersonate"),
        ])
}

/// `[List, <id>]` trail shared by the desk detail pages
fn detail_trail(ctx: &RouteContext<'_>, list: &str, list_path: &str, param: &str) -> Vec<Crumb> {
    vec![
        Crumb::link(list, list_path),
        Crumb::current(ctx.param(param).unwrap_or_default()),
    ]
}
