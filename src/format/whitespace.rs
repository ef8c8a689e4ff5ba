//! Whitespace normalization for itinerary text.
//!
//! Implements the three whitespace stages of the pipeline:
//! 1. `convert_control_chars`: Vertical tabs, form feeds and carriage
//!    returns become newlines
//! 2. `collapse_blank_lines`: Runs of blank lines collapse to one
//! 3. `trim_excess_whitespace`: Interior space/tab runs collapse to a single
//!    space and lines are trimmed (runs last, after token substitution)

use crate::parser::patterns::WS_RUN_RE;

/// Replace vertical-tab, form-feed and carriage-return characters with
/// newlines, codepoint by codepoint. All other characters pass through.
#[must_use]
pub fn convert_control_chars(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '\u{000B}' | '\u{000C}' | '\r' => '\n',
            other => other,
        })
        .collect()
}

/// Collapse consecutive blank lines to at most one blank line.
///
/// A line is blank if it trims to empty. Runs of 2+ blank lines become
/// exactly one empty line; non-blank lines pass through unchanged and reset
/// the run.
#[must_use]
pub fn collapse_blank_lines(text: &str) -> String {
    let mut result: Vec<&str> = Vec::new();
    let mut blank_run = 0usize;

    for line in text.split('\n') {
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run == 1 {
                result.push("");
            }
        } else {
            blank_run = 0;
            result.push(line);
        }
    }

    result.join("\n")
}

/// Collapse interior space/tab runs to a single space and trim each line.
///
/// Runs after token substitution so spacing introduced by substituted text
/// is normalized as well.
#[must_use]
pub fn trim_excess_whitespace(text: &str) -> String {
    text.split('\n')
        .map(|line| WS_RUN_RE.replace_all(line, " ").trim().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
