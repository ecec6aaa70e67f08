//! Math rendering backends.
//!
//! The segmenter treats a backend as an opaque typesetting engine: it hands
//! over one normalized formula and either gets markup back or an error, and
//! any error degrades that formula to its literal text.

mod katex;
mod mathml;

pub use self::katex::KaTeXRenderer;
pub use self::mathml::MathMLRenderer;

use crate::error::{ConfigError, Result};
use serde::Deserialize;
use std::str::FromStr;

/// Math rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum MathBackend {
    /// Output raw LaTeX for KaTeX to render client-side.
    #[default]
    KaTeX,
    /// Convert to MathML for native browser rendering.
    MathML,
    /// Output raw LaTeX for MathJax to render client-side.
    MathJax,
}

impl FromStr for MathBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "katex" => Ok(MathBackend::KaTeX),
            "mathml" => Ok(MathBackend::MathML),
            "mathjax" => Ok(MathBackend::MathJax),
            other => Err(ConfigError::Invalid(format!("unknown math backend `{}`", other))),
        }
    }
}

impl TryFrom<String> for MathBackend {
    type Error = ConfigError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

/// Trait for math renderers.
pub trait MathRenderer {
    /// Typeset one normalized formula.
    fn render(&self, latex: &str) -> Result<String>;

    /// Get any required HTML head content (scripts, styles).
    fn head_content(&self) -> Option<String>;
}

/// Create a math renderer for the given backend.
pub fn create_renderer(backend: MathBackend) -> Box<dyn MathRenderer> {
    match backend {
        MathBackend::KaTeX => Box::new(KaTeXRenderer::new()),
        MathBackend::MathJax => Box::new(KaTeXRenderer::new_mathjax()),
        MathBackend::MathML => Box::new(MathMLRenderer::new()),
    }
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_str() {
        assert_eq!("katex".parse::<MathBackend>().unwrap(), MathBackend::KaTeX);
        assert_eq!("MathML".parse::<MathBackend>().unwrap(), MathBackend::MathML);
        assert_eq!("mathjax".parse::<MathBackend>().unwrap(), MathBackend::MathJax);
        assert!("asciimath".parse::<MathBackend>().is_err());
    }

    #[test]
    fn test_create_renderer() {
        let renderer = create_renderer(MathBackend::KaTeX);
        assert!(renderer.render("x^2").unwrap().contains("x^2"));
        assert!(renderer.head_content().unwrap().contains("katex"));
    }
}
