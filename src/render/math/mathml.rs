//! MathML renderer.

use super::MathRenderer;
use crate::error::Result;

/// Renderer that converts LaTeX to MathML.
///
/// With the `mathml` feature a formula the converter rejects is reported as
/// [`RenderError::Math`](crate::error::RenderError::Math). Without it, output
/// falls back to the client-side passthrough form.
pub struct MathMLRenderer {
    #[cfg(feature = "mathml")]
    _phantom: std::marker::PhantomData<()>,
}

impl MathMLRenderer {
    /// Create a new MathML renderer.
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "mathml")]
            _phantom: std::marker::PhantomData,
        }
    }
}

impl Default for MathMLRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MathRenderer for MathMLRenderer {
    fn render(&self, latex: &str) -> Result<String> {
        #[cfg(feature = "mathml")]
        {
            latex2mathml::latex_to_mathml(latex, latex2mathml::DisplayStyle::Inline)
                .map_err(|e| crate::error::RenderError::Math(e.to_string()).into())
        }

        #[cfg(not(feature = "mathml"))]
        {
            Ok(format!(
                r#"<span class="math inline">\({}\)</span>"#,
                super::escape_html(latex)
            ))
        }
    }

    fn head_content(&self) -> Option<String> {
        Some(MATHML_STYLES.to_string())
    }
}

const MATHML_STYLES: &str = r#"<style>
math {
    font-size: 1.1em;
}
</style>"#;
