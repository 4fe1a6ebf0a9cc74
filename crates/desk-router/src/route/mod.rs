//! Route declaration module
//!
//! Contains the declarative building blocks of a navigation tree:
//! - `segment`: parsing declared paths into static / parametric segments
//! - `node`: route nodes with their redirect, breadcrumb and props settings

pub mod node;
pub mod segment;

// Re-export commonly used types
pub use node::{
    BreadcrumbFn, ComponentRef, PropsMode, RedirectFn, RedirectTarget, RouteContext, RouteNode,
};
pub use segment::{classify_segment, format_segments, parse_segments, Segment};
