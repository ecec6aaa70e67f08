//! HTML writer for parsed segments.
//!
//! Mirrors what a host UI does with the segment list: text becomes escaped
//! text, markup and typeset math are inserted verbatim, breaks become `<br/>`.

use crate::ast::ContentSegment;
use crate::render::math::{create_renderer, escape_html, MathBackend, MathRenderer};
use serde::Deserialize;

/// Configuration for HTML rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HtmlConfig {
    /// Math rendering backend.
    pub math_backend: MathBackend,
    /// Whether to generate a complete HTML document or just the fragment.
    pub standalone: bool,
    /// Document title (for standalone mode).
    pub title: Option<String>,
    /// Additional CSS to include.
    pub custom_css: Option<String>,
    /// CSS class prefix for styling.
    pub class_prefix: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            math_backend: MathBackend::KaTeX,
            standalone: false,
            title: None,
            custom_css: None,
            class_prefix: "math".to_string(),
        }
    }
}

/// Render parsed segments to HTML.
pub fn render_html(segments: &[ContentSegment], config: &HtmlConfig) -> String {
    let math = create_renderer(config.math_backend);
    HtmlWriter::new(config, math.as_ref()).render(segments)
}

pub(crate) struct HtmlWriter<'a> {
    config: &'a HtmlConfig,
    math: &'a dyn MathRenderer,
    output: String,
}

impl<'a> HtmlWriter<'a> {
    pub(crate) fn new(config: &'a HtmlConfig, math: &'a dyn MathRenderer) -> Self {
        Self {
            config,
            math,
            output: String::new(),
        }
    }

    pub(crate) fn render(mut self, segments: &[ContentSegment]) -> String {
        if self.config.standalone {
            self.render_standalone(segments);
        } else {
            self.render_fragment(segments);
        }
        self.output
    }

    fn render_standalone(&mut self, segments: &[ContentSegment]) {
        let title = self.config.title.as_deref().unwrap_or("Document");

        self.output.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        self.output.push_str("<meta charset=\"UTF-8\">\n");
        self.output
            .push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        self.output
            .push_str(&format!("<title>{}</title>\n", escape_html(title)));

        if let Some(head) = self.math.head_content() {
            self.output.push_str(&head);
            self.output.push('\n');
        }

        self.output.push_str(&self.default_styles());

        if let Some(ref css) = self.config.custom_css {
            self.output.push_str("<style>\n");
            self.output.push_str(css);
            self.output.push_str("\n</style>\n");
        }

        self.output.push_str("</head>\n<body>\n");
        self.render_fragment(segments);
        self.output.push_str("\n</body>\n</html>");
    }

    fn render_fragment(&mut self, segments: &[ContentSegment]) {
        self.output.push_str(&format!(
            "<div class=\"{}-renderer\" style=\"line-height: 1.6\">",
            self.config.class_prefix
        ));
        for segment in segments {
            self.render_segment(segment);
        }
        self.output.push_str("</div>");
    }

    fn render_segment(&mut self, segment: &ContentSegment) {
        match segment {
            ContentSegment::PlainText(text) => {
                self.output.push_str("<span>");
                self.output.push_str(&escape_html(text));
                self.output.push_str("</span>");
            }
            ContentSegment::FormulaFallback(formula) => {
                self.output.push_str(&format!(
                    "<span class=\"{}-fallback\">",
                    self.config.class_prefix
                ));
                self.output.push_str(&escape_html(formula));
                self.output.push_str("</span>");
            }
            // Trusted input only: inserted without escaping
            ContentSegment::RawMarkup(html) | ContentSegment::MathMarkup(html) => {
                self.output.push_str("<span>");
                self.output.push_str(html);
                self.output.push_str("</span>");
            }
            ContentSegment::LineBreak => self.output.push_str("<br/>"),
        }
    }

    fn default_styles(&self) -> String {
        let root = format!(".{}-renderer", self.config.class_prefix);
        DEFAULT_STYLES.replace(".renderer", &root)
    }
}

/// Styles for markup pasted from word processors, scoped under `.renderer`.
const DEFAULT_STYLES: &str = r#"<style>
.renderer * { list-style: none; }
.renderer strong, .renderer b { font-weight: bold; }
.renderer em, .renderer i { font-style: italic; }
.renderer u { text-decoration: underline; }
.renderer del { text-decoration: line-through; }
.renderer sub { vertical-align: sub; font-size: smaller; }
.renderer sup { vertical-align: super; font-size: smaller; }
.renderer mark { background-color: #fef08a; padding: 1px 3px; }
.renderer ul { margin-left: 20px; padding-left: 0; list-style-type: disc !important; list-style-position: outside !important; }
.renderer ol { margin-left: 20px; padding-left: 0; list-style-type: decimal !important; list-style-position: outside !important; }
.renderer li { margin: 4px 0; display: list-item !important; list-style-type: inherit !important; list-style-position: inherit !important; padding-left: 4px; }
.renderer .word-table { border-collapse: collapse !important; margin: 10px auto !important; border: 2px solid #333 !important; width: auto !important; min-width: 200px !important; max-width: 100% !important; }
.renderer .word-table-cell { border: 1px solid #333 !important; padding: 8px 12px !important; text-align: center !important; background-color: #f9f9f9 !important; vertical-align: middle !important; }
.renderer .word-table-header { border: 2px solid #333 !important; padding: 8px 12px !important; text-align: center !important; background-color: #d0d0d0 !important; font-weight: bold !important; vertical-align: middle !important; }
.renderer table, .renderer th, .renderer td { border: 1px solid; padding: 5px; }
@media (max-width: 768px) {
  .renderer .word-table { font-size: 12px !important; min-width: 150px !important; }
  .renderer .word-table-cell, .renderer .word-table-header { padding: 4px 6px !important; }
}
</style>
"#;
