//! # mathmix
//!
//! Renders mixed content (plain text, rich-text markup and inline LaTeX) into
//! an ordered list of display segments a host UI can paint without parsing
//! anything again.
//!
//! ## Pipeline
//!
//! 1. A fixed set of HTML entities is decoded (`&nbsp;`, `&lt;`, `&gt;`, `&amp;`).
//! 2. The content is classified: anything containing a markup tag is treated
//!    as markup, everything else as plain text whose `\n` become line breaks.
//! 3. Block math `\[...\]` is rewritten to inline `$...$`.
//! 4. The scanner walks the `$...$` spans. Each formula body is normalized
//!    (see [`normalize`]) and handed to a [`MathRenderer`]; the text between
//!    spans becomes text, markup or line-break segments.
//!
//! A formula the renderer rejects is shown as its literal LaTeX instead. So is
//! any formula containing accented letters, since authors often wrap ordinary
//! Vietnamese prose in `$`.
//!
//! ## Quick Start
//!
//! ```rust
//! use mathmix::{parse_content, ContentSegment};
//!
//! let segments = parse_content("Giá trị $x^2$ là 4");
//!
//! assert_eq!(segments[0], ContentSegment::PlainText("Giá trị ".into()));
//! assert!(matches!(segments[1], ContentSegment::MathMarkup(_)));
//! assert_eq!(segments[2], ContentSegment::PlainText(" là 4".into()));
//! ```
//!
//! ## Trust boundary
//!
//! Markup is passed through, not sanitized. [`ContentSegment::RawMarkup`] and
//! [`ContentSegment::MathMarkup`] are meant to be inserted unescaped, so only
//! feed this crate content from trusted authors.
//!
//! ## Features
//!
//! - `mathml`: Enable the MathML backend (requires `latex2mathml` crate)
//! - `wasm`: Enable WebAssembly bindings (requires `wasm-bindgen`)

pub mod ast;
pub mod config;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod render;

// WASM module (only with feature)
#[cfg(feature = "wasm")]
pub mod wasm;

// Convenience re-exports
pub use ast::{ContentMode, ContentSegment};
pub use config::Config;
pub use error::{ConfigError, Error, RenderError, Result};
pub use normalize::normalize_formula;
pub use parser::{parse_content, parse_content_with, ParseConfig};
pub use render::{create_renderer, render_html, HtmlConfig, MathBackend, MathRenderer};

/// Parse content and render it to HTML in one step.
///
/// # Example
///
/// ```rust
/// use mathmix::render;
///
/// let html = render("a\nb", None);
/// assert!(html.contains("<span>a</span><br/><span>b</span>"));
/// ```
pub fn render(input: &str, config: Option<&Config>) -> String {
    let default = Config::default();
    let config = config.unwrap_or(&default);
    let math = create_renderer(config.html.math_backend);
    let segments = parse_content_with(input, &config.parse, math.as_ref());
    render::html::HtmlWriter::new(&config.html, math.as_ref()).render(&segments)
}
