//! Text rewrites applied before scanning: entity decoding, block-math
//! delimiters, plain-mode line breaks and markup break cleanup.

use crate::parser::lexer::{break_tag, BREAK_MARKER};

/// The only entities decoded. Anything else is left as written.
static ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&amp;", "&"),
];

/// Decode the fixed entity table in a single left-to-right pass.
pub fn decode_entities(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut remaining = input;

    while let Some(pos) = remaining.find('&') {
        output.push_str(&remaining[..pos]);
        let candidate = &remaining[pos..];

        match ENTITIES
            .iter()
            .find(|(entity, _)| candidate.starts_with(entity))
        {
            Some((entity, literal)) => {
                output.push_str(literal);
                remaining = &candidate[entity.len()..];
            }
            None => {
                output.push('&');
                remaining = &candidate[1..];
            }
        }
    }

    output.push_str(remaining);
    output
}

/// Turn `\[` and `\]` into `$` so one scanner handles block and inline math.
///
/// Balance is not checked; an odd `$` count is tolerated downstream.
pub fn normalize_delimiters(input: &str) -> String {
    input.replace("\\[", "$").replace("\\]", "$")
}

/// Replace every `\n` with the break marker for plain-mode segmentation.
pub fn mark_line_breaks(input: &str) -> String {
    input.replace('\n', BREAK_MARKER)
}

/// Strip break tags hugging either end of a markup fragment and collapse
/// runs of three or more consecutive break tags into two.
pub fn tidy_markup_breaks(input: &str) -> String {
    let trimmed = strip_trailing_breaks(strip_leading_breaks(input));
    collapse_break_runs(trimmed)
}

fn strip_leading_breaks(mut input: &str) -> &str {
    while let Ok((rest, _)) = break_tag(input.trim_start()) {
        input = rest;
    }
    input
}

fn strip_trailing_breaks(mut input: &str) -> &str {
    while let Some(start) = trailing_break_start(input) {
        input = input[..start].trim_end();
    }
    input
}

/// Byte offset of a break tag that ends exactly at the end of `input`.
fn trailing_break_start(input: &str) -> Option<usize> {
    let start = input.rfind('<')?;
    match break_tag(&input[start..]) {
        Ok(("", _)) => Some(start),
        _ => None,
    }
}

fn collapse_break_runs(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut remaining = input;

    while let Some(pos) = remaining.find('<') {
        output.push_str(&remaining[..pos]);
        let mut run = &remaining[pos..];
        let mut count = 0;
        while let Ok((rest, _)) = break_tag(run) {
            run = rest;
            count += 1;
        }

        match count {
            0 => {
                output.push('<');
                remaining = &remaining[pos + 1..];
                continue;
            }
            1 | 2 => output.push_str(&remaining[pos..remaining.len() - run.len()]),
            _ => output.push_str("<br/><br/>"),
        }
        remaining = run;
    }

    output.push_str(remaining);
    output
}
