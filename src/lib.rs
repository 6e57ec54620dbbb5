//! Product detail page generator
//!
//! Turns a handful of product attributes (or a single keyword) into a styled,
//! standalone HTML landing page plus a JSON record of the inputs used.
//!
//! ```no_run
//! use detail_page::{generate, InputMode};
//!
//! let page = generate(InputMode::Keyword("프리미엄 무선 이어폰".to_string())).unwrap();
//! assert!(page.html.contains("₩298,500"));
//! ```

pub mod conl_ser;
pub mod error;
pub mod export;
pub mod render;
pub mod resolve;
pub mod theme;
pub mod types;

pub use error::ResolveError;
pub use export::{write_exports, ExportPaths, ProjectInfo};
pub use render::render_page;
pub use resolve::resolve_attributes;
pub use theme::{theme_for, Theme};
pub use types::*;

/// Result of one generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub attributes: ProductAttributes,
    pub html: String,
}

/// Resolve the input and render it. Nothing is rendered when resolution fails.
pub fn generate(mode: InputMode) -> Result<Generation, ResolveError> {
    let attributes = resolve_attributes(mode)?;
    let html = render_page(&attributes);
    Ok(Generation { attributes, html })
}
