/// Errors produced while building a route tree or resolving a path
///
/// Build-time variants (`DuplicateRouteName`, `InvalidSegment`) are fatal to
/// tree construction. Everything else is a resolution outcome the caller is
/// expected to handle, typically by rendering a not-found or error view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    /// Two nodes anywhere in the tree declare the same name
    #[error("duplicate route name: {name}")]
    DuplicateRouteName { name: String },

    /// A declared path contains a segment that can never match (e.g. a bare `:`)
    #[error("invalid segment {segment:?} in route path {path:?}")]
    InvalidSegment { path: String, segment: String },

    /// No chain of nodes matches the path
    #[error("no route matches {path}")]
    NotFound { path: String },

    /// Following redirects exceeded the configured hop limit
    #[error("redirect loop while resolving {path}: more than {limit} redirects")]
    RedirectLoop { path: String, limit: usize },

    /// A named redirect or URL lookup referenced a name no node declares
    #[error("unknown route name: {name}")]
    UnknownRouteName { name: String },

    /// URL generation for a named route lacked a value for one of its parameters
    #[error("missing parameter {param:?} for route {name}")]
    MissingRouteParam { name: String, param: String },

    /// A parameter value would change how the generated path tokenizes
    #[error("invalid value {value:?} for parameter {param:?} of route {name}")]
    InvalidRouteParam {
        name: String,
        param: String,
        value: String,
    },
}

impl RouterError {
    /// True for failures that can only happen while building a tree
    pub fn is_build_error(&self) -> bool {
        matches!(
            self,
            RouterError::DuplicateRouteName { .. } | RouterError::InvalidSegment { .. }
        )
    }
}
