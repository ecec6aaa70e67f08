//! Output segments and the transient parse structures that produce them.

use serde::Serialize;
use std::ops::Range;

/// One renderable unit of parsed content.
///
/// A host UI maps `PlainText` and `FormulaFallback` to text nodes, `RawMarkup`
/// and `MathMarkup` to unescaped fragment insertion, and `LineBreak` to a
/// line-break element.
///
/// `RawMarkup` and `MathMarkup` are inserted without escaping, so content must
/// come from a trusted source before it reaches the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ContentSegment {
    /// Literal text displayed as-is
    PlainText(String),
    /// A rich-text fragment inserted into the document tree verbatim
    RawMarkup(String),
    /// Typeset markup for one formula
    MathMarkup(String),
    /// The normalized formula body, shown when typesetting failed or was skipped
    FormulaFallback(String),
    /// An explicit line break
    LineBreak,
}

impl ContentSegment {
    /// The string payload, if the segment has one.
    pub fn value(&self) -> Option<&str> {
        match self {
            ContentSegment::PlainText(s)
            | ContentSegment::RawMarkup(s)
            | ContentSegment::MathMarkup(s)
            | ContentSegment::FormulaFallback(s) => Some(s),
            ContentSegment::LineBreak => None,
        }
    }

    /// Whether this segment came from a formula span.
    pub fn is_formula(&self) -> bool {
        matches!(
            self,
            ContentSegment::MathMarkup(_) | ContentSegment::FormulaFallback(_)
        )
    }
}

/// How non-formula gaps are packaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMode {
    /// The input carries markup tags; gaps become `RawMarkup` or `PlainText`
    Markup,
    /// Plain text; `\n` is rewritten to the break marker and split on
    Plain,
}

/// A `$...$` pair located by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormulaSpan<'a> {
    /// Byte offset of the opening `$`
    pub start: usize,
    /// Byte offset just past the closing `$`
    pub end: usize,
    /// The text strictly between the delimiters
    pub body: &'a str,
}

impl FormulaSpan<'_> {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}
