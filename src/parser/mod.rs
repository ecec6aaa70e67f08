//! Parser for mixed text, markup and `$...$` math.

mod lexer;
mod preprocess;
mod segment;

pub use lexer::BREAK_MARKER;
pub use preprocess::{decode_entities, normalize_delimiters, tidy_markup_breaks};
pub use segment::{looks_like_prose, Segmenter};

use crate::ast::{ContentMode, ContentSegment};
use crate::render::math::{KaTeXRenderer, MathRenderer};
use serde::Deserialize;

/// Configuration for parsing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseConfig {
    /// Skip typesetting for formula bodies that contain prose letters.
    pub prose_fallback: bool,
    /// Strip edge break tags and collapse long break runs in markup input.
    pub tidy_markup_breaks: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            prose_fallback: true,
            tidy_markup_breaks: true,
        }
    }
}

/// Decide how the gaps of an entity-decoded input are packaged.
pub fn classify(input: &str) -> ContentMode {
    if lexer::contains_tag(input) {
        ContentMode::Markup
    } else {
        ContentMode::Plain
    }
}

/// Parse content with the default configuration and the KaTeX renderer.
pub fn parse_content(input: &str) -> Vec<ContentSegment> {
    parse_content_with(input, &ParseConfig::default(), &KaTeXRenderer::new())
}

/// Parse content into display segments.
///
/// Never fails: formulas the renderer rejects come back as
/// [`ContentSegment::FormulaFallback`].
pub fn parse_content_with(
    input: &str,
    config: &ParseConfig,
    renderer: &dyn MathRenderer,
) -> Vec<ContentSegment> {
    if input.is_empty() {
        return Vec::new();
    }

    let decoded = decode_entities(input);
    let mode = classify(&decoded);
    tracing::trace!(?mode, len = decoded.len(), "classified content");

    let delimited = normalize_delimiters(&decoded);
    let prepared = match mode {
        ContentMode::Markup if config.tidy_markup_breaks => tidy_markup_breaks(&delimited),
        ContentMode::Markup => delimited,
        ContentMode::Plain => preprocess::mark_line_breaks(&delimited),
    };

    Segmenter::new(&prepared, mode, renderer)
        .prose_fallback(config.prose_fallback)
        .run()
}
