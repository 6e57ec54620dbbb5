//! Validation errors raised while resolving product input

use thiserror::Error;

/// Reasons a generation request is rejected before any rendering happens
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A mandatory field (product name, or the keyword in quick mode) was empty
    #[error("missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    /// Brand color was not a `#RGB` / `#RRGGBB` hex value
    #[error("invalid brand color '{0}': expected a hex color such as #2C3E50")]
    InvalidBrandColor(String),
}

impl ResolveError {
    pub(crate) fn missing(field: &'static str) -> Self {
        ResolveError::MissingRequiredField { field }
    }
}
