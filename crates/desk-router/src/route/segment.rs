//! Segment parsing for declared route paths
//!
//! Pure functional parsing of declared paths (`tickets/:ticketId`) into typed segments.
//! All functions are **pure**: same input → same output, no side effects.

use std::fmt;

/// Marker that turns a declared segment into a path parameter
pub const PARAM_MARKER: char = ':';

/// A single declared path segment
///
/// # Examples
///
/// ```
/// use desk_router::route::segment::{classify_segment, Segment};
///
/// let seg = classify_segment("tickets");
/// assert_eq!(seg, Segment::Static("tickets".to_string()));
///
/// let seg = classify_segment(":ticketId");
/// assert_eq!(seg, Segment::Param("ticketId".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Literal text, matches only the identical token
    Static(String),
    /// Parameter, matches any non-empty token and binds it under the name
    Param(String),
}

impl Segment {
    /// Parameter name for parametric segments
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Param(name) => Some(name),
            Segment::Static(_) => None,
        }
    }

    /// Checks a single path token against this segment
    ///
    /// # Examples
    ///
    /// ```
    /// use desk_router::route::segment::Segment;
    ///
    /// let seg = Segment::Static("tickets".to_string());
    /// assert!(seg.matches("tickets", false));
    /// assert!(!seg.matches("Tickets", false));
    /// assert!(seg.matches("Tickets", true));
    ///
    /// let seg = Segment::Param("id".to_string());
    /// assert!(seg.matches("42", false));
    /// assert!(!seg.matches("", false));
    /// ```
    pub fn matches(&self, token: &str, case_insensitive: bool) -> bool {
        match self {
            Segment::Static(literal) if case_insensitive => literal.eq_ignore_ascii_case(token),
            Segment::Static(literal) => literal == token,
            Segment::Param(_) => !token.is_empty(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Static(literal) => f.write_str(literal),
            Segment::Param(name) => write!(f, "{}{}", PARAM_MARKER, name),
        }
    }
}

/// Classifies a declared segment (pure function)
///
/// A leading `:` makes the segment parametric; everything else is literal.
/// A bare `:` yields `Param("")`, which tree construction rejects.
pub fn classify_segment(segment: &str) -> Segment {
    match segment.strip_prefix(PARAM_MARKER) {
        Some(name) => Segment::Param(name.to_string()),
        None => Segment::Static(segment.to_string()),
    }
}

/// Parses a declared path into its segments
///
/// Leading, trailing and doubled slashes are insignificant, so `""` and `"/"`
/// both parse to the empty list that marks an index node.
///
/// # Examples
///
/// ```
/// use desk_router::route::segment::{parse_segments, Segment};
///
/// let segments = parse_segments("/tickets/new/:templateId");
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[2], Segment::Param("templateId".to_string()));
///
/// assert!(parse_segments("").is_empty());
/// ```
pub fn parse_segments(path: &str) -> Vec<Segment> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(classify_segment)
        .collect()
}

/// Renders segments back into a `/a/:b` pattern (`/` when empty)
pub fn format_segments<'a, I>(segments: I) -> String
where
    I: IntoIterator<Item = &'a Segment>,
{
    let pattern: String = segments
        .into_iter()
        .map(|segment| format!("/{}", segment))
        .collect();

    if pattern.is_empty() {
        "/".to_string()
    } else {
        pattern
    }
}
