//! Splits normalized content into formula spans and the gaps between them.

use crate::ast::{ContentMode, ContentSegment, FormulaSpan};
use crate::normalize::normalize_formula;
use crate::parser::lexer::{contains_tag, next_formula, split_on_marker, BREAK_MARKER};
use crate::render::math::MathRenderer;

/// Lowest and highest letters of the prose range.
///
/// Spans U+00E0..=U+1EF9, which covers the Vietnamese alphabet's accented
/// letters (and everything between them, Greek and Cyrillic included).
const PROSE_RANGE: std::ops::RangeInclusive<char> = '\u{e0}'..='\u{1ef9}';

/// Whether a formula body contains a letter from the prose range, compared
/// without regard to case.
///
/// A character matches if it, its lowercase or its uppercase mapping falls in
/// the range, so `µ` counts through its uppercase Greek `Μ`.
///
/// Authors use `$` loosely, so a "formula" with accented letters is taken as
/// prose and never typeset, even when it is a real formula with a unit label.
pub fn looks_like_prose(formula: &str) -> bool {
    formula.chars().any(|c| {
        PROSE_RANGE.contains(&c)
            || c.to_lowercase().any(|lower| PROSE_RANGE.contains(&lower))
            || c.to_uppercase().any(|upper| PROSE_RANGE.contains(&upper))
    })
}

/// Single-use scanner over one normalized input.
pub struct Segmenter<'a> {
    input: &'a str,
    mode: ContentMode,
    renderer: &'a dyn MathRenderer,
    prose_fallback: bool,
    cursor: usize,
    segments: Vec<ContentSegment>,
}

impl<'a> Segmenter<'a> {
    pub fn new(input: &'a str, mode: ContentMode, renderer: &'a dyn MathRenderer) -> Self {
        Self {
            input,
            mode,
            renderer,
            prose_fallback: true,
            cursor: 0,
            segments: Vec::new(),
        }
    }

    /// Toggle the prose heuristic for formula bodies.
    pub fn prose_fallback(mut self, enabled: bool) -> Self {
        self.prose_fallback = enabled;
        self
    }

    /// Scan the whole input and return the segments in source order.
    pub fn run(mut self) -> Vec<ContentSegment> {
        let input = self.input;

        while let Some(span) = next_formula(input, self.cursor) {
            tracing::trace!(start = span.start, end = span.end, "formula span");
            self.push_gap(&input[self.cursor..span.start]);
            self.push_formula(span);
            self.cursor = span.end;
        }

        self.push_gap(&input[self.cursor..]);
        self.segments
    }

    fn push_gap(&mut self, gap: &str) {
        if gap.trim().is_empty() {
            return;
        }

        match self.mode {
            ContentMode::Markup if contains_tag(gap) => {
                self.segments.push(ContentSegment::RawMarkup(gap.to_string()));
            }
            ContentMode::Markup => {
                self.segments.push(ContentSegment::PlainText(gap.to_string()));
            }
            ContentMode::Plain if gap.contains(BREAK_MARKER) => self.push_lines(gap),
            ContentMode::Plain => {
                self.segments.push(ContentSegment::PlainText(gap.to_string()));
            }
        }
    }

    /// One `LineBreak` per marker; blank lines between markers are dropped.
    fn push_lines(&mut self, gap: &str) {
        let lines = split_on_marker(gap);
        let last = lines.len() - 1;

        for (i, line) in lines.into_iter().enumerate() {
            if !line.trim().is_empty() {
                self.segments.push(ContentSegment::PlainText(line.to_string()));
            }
            if i < last {
                self.segments.push(ContentSegment::LineBreak);
            }
        }
    }

    fn push_formula(&mut self, span: FormulaSpan<'_>) {
        let formula = normalize_formula(span.body);

        if self.prose_fallback && looks_like_prose(&formula) {
            tracing::debug!(formula = %formula, "prose letters in formula, skipping typesetting");
            self.segments.push(ContentSegment::FormulaFallback(formula));
            return;
        }

        let segment = match self.renderer.render(&formula) {
            Ok(markup) => ContentSegment::MathMarkup(markup),
            Err(e) => {
                tracing::warn!(formula = %formula, error = %e, "failed to render formula");
                ContentSegment::FormulaFallback(formula)
            }
        };
        self.segments.push(segment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RenderError, Result};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use ContentSegment::*;

    /// Wraps formulas in brackets and records every call.
    #[derive(Default)]
    struct Recording {
        calls: RefCell<Vec<String>>,
    }

    impl MathRenderer for Recording {
        fn render(&self, latex: &str) -> Result<String> {
            self.calls.borrow_mut().push(latex.to_string());
            Ok(format!("[{}]", latex))
        }

        fn head_content(&self) -> Option<String> {
            None
        }
    }

    struct Rejecting;

    impl MathRenderer for Rejecting {
        fn render(&self, latex: &str) -> Result<String> {
            Err(RenderError::Math(format!("cannot parse `{}`", latex)).into())
        }

        fn head_content(&self) -> Option<String> {
            None
        }
    }

    fn plain(input: &str) -> Vec<ContentSegment> {
        Segmenter::new(input, ContentMode::Plain, &Recording::default()).run()
    }

    fn text(s: &str) -> ContentSegment {
        PlainText(s.to_string())
    }

    #[test]
    fn test_text_math_text() {
        assert_eq!(
            plain("Giá trị $x^2$ là 4"),
            vec![text("Giá trị "), MathMarkup("[x^2]".into()), text(" là 4")]
        );
    }

    #[test]
    fn test_single_marker_gap() {
        assert_eq!(
            plain("$a$<br/>$b$"),
            vec![MathMarkup("[a]".into()), LineBreak, MathMarkup("[b]".into())]
        );
    }

    #[test]
    fn test_leading_and_trailing_markers() {
        assert_eq!(
            plain("$a$<br/>next"),
            vec![MathMarkup("[a]".into()), LineBreak, text("next")]
        );
        assert_eq!(
            plain("before<br/>$a$"),
            vec![text("before"), LineBreak, MathMarkup("[a]".into())]
        );
    }

    #[test]
    fn test_consecutive_markers_keep_one_break_each() {
        assert_eq!(
            plain("a<br/><br/>b<br/>"),
            vec![text("a"), LineBreak, LineBreak, text("b"), LineBreak]
        );
    }

    #[test]
    fn test_blank_gaps_are_skipped() {
        assert_eq!(
            plain("$a$   $b$"),
            vec![MathMarkup("[a]".into()), MathMarkup("[b]".into())]
        );
    }

    #[test]
    fn test_unmatched_dollar_stays_in_final_gap() {
        assert_eq!(
            plain("$a$ costs $5"),
            vec![MathMarkup("[a]".into()), text(" costs $5")]
        );
    }

    #[test]
    fn test_empty_formula_is_rendered() {
        let renderer = Recording::default();
        let segments = Segmenter::new("$$", ContentMode::Plain, &renderer).run();
        assert_eq!(segments, vec![MathMarkup("[]".into())]);
        assert_eq!(*renderer.calls.borrow(), vec![String::new()]);
    }

    #[test]
    fn test_renderer_failure_falls_back() {
        let segments =
            Segmenter::new("x $\\frac{1$ y $z$", ContentMode::Plain, &Rejecting).run();
        assert_eq!(
            segments,
            vec![
                text("x "),
                FormulaFallback("\\frac{1".into()),
                text(" y "),
                FormulaFallback("z".into()),
            ]
        );
    }

    #[test]
    fn test_prose_formula_is_never_rendered() {
        let renderer = Recording::default();
        let segments =
            Segmenter::new("$x = 5 cm$ và $\\text{mét}$", ContentMode::Plain, &renderer).run();
        assert_eq!(
            segments,
            vec![
                MathMarkup("[x = 5 cm]".into()),
                text(" và "),
                FormulaFallback("\\text{mét}".into()),
            ]
        );
        assert_eq!(*renderer.calls.borrow(), vec!["x = 5 cm".to_string()]);
    }

    #[test]
    fn test_prose_heuristic_suppresses_real_formula_with_unit_label() {
        // Known heuristic boundary: a legitimate formula with a Vietnamese
        // unit label is shown as literal text.
        let segments = plain("$v = 3\\,\\text{mét/giây}$");
        assert_eq!(segments, vec![FormulaFallback("v = 3\\,\\text{mét/giây}".into())]);
    }

    #[test]
    fn test_prose_fallback_disabled() {
        let segments = Segmenter::new("$\\text{mét}$", ContentMode::Plain, &Recording::default())
            .prose_fallback(false)
            .run();
        assert_eq!(segments, vec![MathMarkup("[\\text{mét}]".into())]);
    }

    #[test]
    fn test_markup_gaps() {
        let renderer = Recording::default();
        let segments =
            Segmenter::new("<b>Cho</b> $x$ thỏa mãn $y$<br/>", ContentMode::Markup, &renderer).run();
        assert_eq!(
            segments,
            vec![
                RawMarkup("<b>Cho</b> ".into()),
                MathMarkup("[x]".into()),
                text(" thỏa mãn "),
                MathMarkup("[y]".into()),
                RawMarkup("<br/>".into()),
            ]
        );
    }

    #[test]
    fn test_looks_like_prose() {
        assert!(looks_like_prose("đúng"));
        assert!(looks_like_prose("Ấn"));
        assert!(looks_like_prose("À"));
        assert!(looks_like_prose("\\alpha + α"));
        assert!(!looks_like_prose("x^2 + \\frac{1}{2}"));
        assert!(!looks_like_prose("a \\times b"));
    }

    #[test]
    fn test_looks_like_prose_folds_through_uppercase() {
        assert!(looks_like_prose("5 \u{b5}m"));
        assert!(!looks_like_prose("5 \\mu m"));
    }
}
