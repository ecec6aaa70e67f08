//! Low-level scanners for formula delimiters and markup tags.

use crate::ast::FormulaSpan;
use nom::{
    bytes::complete::{tag, tag_no_case, take_while},
    character::complete::char,
    combinator::{opt, recognize},
    sequence::{delimited, tuple},
    IResult,
};

/// Break token that plain mode substitutes for `\n`.
pub const BREAK_MARKER: &str = "<br/>";

/// Characters a formula body may not span.
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Parse `$body$` where the body holds no `$` and no line terminator.
pub fn inline_math(input: &str) -> IResult<&str, &str> {
    delimited(
        char('$'),
        take_while(|c: char| c != '$' && !is_line_terminator(c)),
        char('$'),
    )(input)
}

/// Parse a single markup tag: `<`, any non-`>` run, `>`.
pub fn markup_tag(input: &str) -> IResult<&str, &str> {
    recognize(tuple((tag("<"), take_while(|c: char| c != '>'), tag(">"))))(input)
}

/// Parse a `<br>`, `<br/>` or `<br />` tag, in any letter case.
pub fn break_tag(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        tag("<"),
        tag_no_case("br"),
        take_while(char::is_whitespace),
        opt(char('/')),
        tag(">"),
    )))(input)
}

/// Whether `input` contains anything shaped like a markup tag.
///
/// A tag exists iff some `>` follows the first `<`, so only that opener is
/// tried.
pub fn contains_tag(input: &str) -> bool {
    input
        .find('<')
        .map_or(false, |pos| markup_tag(&input[pos..]).is_ok())
}

/// Find the first formula span at or after byte offset `from`.
///
/// A `$` that cannot open a span is skipped and the search resumes at the
/// next `$`, which may itself open a span.
pub fn next_formula(input: &str, from: usize) -> Option<FormulaSpan<'_>> {
    let mut search = from;
    while let Some(offset) = input[search..].find('$') {
        let start = search + offset;
        if let Ok((rest, body)) = inline_math(&input[start..]) {
            return Some(FormulaSpan {
                start,
                end: input.len() - rest.len(),
                body,
            });
        }
        search = start + 1;
    }
    None
}

/// Split text on every break marker, dropping the markers.
pub fn split_on_marker(input: &str) -> Vec<&str> {
    input.split(BREAK_MARKER).collect()
}
