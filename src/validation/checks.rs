//! Lint checks for data file sources.
//!
//! Each check takes the source text and returns a `ValidationResult`.
//! Every construct flagged here still parses (the loader is permissive
//! by contract), so all diagnostics are warnings, never rejections.

use super::warning::{Diagnostic, ValidationResult};

/// Lines whose leading indentation mixes tabs and spaces.
///
/// Indentation depth is a raw character count, so a tab and a space weigh
/// the same; mixing them nests correctly by count but rarely by intent.
pub fn check_mixed_indentation(source: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (number, line, white) in content_lines(source) {
        let indent: Vec<char> = line.chars().take(white).collect();
        if indent.contains(&'\t') && indent.contains(&' ') {
            result.push(
                Diagnostic::warning(
                    "grove::lint::mixed-indentation",
                    number,
                    "Leading indentation mixes tabs and spaces",
                )
                .with_help("Indentation depth counts characters, not columns; pick one style"),
            );
        }
    }

    result
}

/// Quoted tokens with no closing quote before end of line.
///
/// The token still takes the rest of the line as its content, which is
/// usually more than the author meant to quote.
pub fn check_unterminated_quotes(source: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (number, line, white) in content_lines(source) {
        if has_unterminated_quote(line, white) {
            result.push(
                Diagnostic::warning(
                    "grove::lint::unterminated-quote",
                    number,
                    "Quoted token has no closing quote",
                )
                .with_help("The token runs to the end of the line; add a closing \""),
            );
        }
    }

    result
}

/// Lines ending in whitespace.
///
/// Round-trip writing preserves it byte-exact, which is usually not what
/// the author wanted to preserve.
pub fn check_trailing_whitespace(source: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (number, line, _) in content_lines(source) {
        if line.chars().next_back().is_some_and(|ch| ch <= ' ') {
            result.push(Diagnostic::warning(
                "grove::lint::trailing-whitespace",
                number,
                "Line ends with whitespace",
            ));
        }
    }

    result
}

/// Iterate the token-bearing lines of a source: skips blank and
/// comment-only lines, which produce no nodes and need no lints. Yields
/// (1-based line number, line, leading whitespace count).
fn content_lines(source: &str) -> impl Iterator<Item = (usize, &str, usize)> {
    source.lines().enumerate().filter_map(|(index, line)| {
        let mut white = 0;
        for ch in line.chars() {
            if ch <= ' ' {
                white += 1;
            } else if ch == '#' {
                return None;
            } else {
                return Some((index + 1, line, white));
            }
        }
        None
    })
}

/// Run the tokenizer's quote rules over a line and report whether a
/// quoted token ran off the end of the line unclosed.
fn has_unterminated_quote(line: &str, start: usize) -> bool {
    let chars: Vec<char> = line.chars().collect();
    let length = chars.len();

    let mut i = start;
    while i < length {
        let quoted = chars[i] == '"';
        if quoted {
            i += 1;
        }

        while i < length && (if quoted { chars[i] != '"' } else { chars[i] > ' ' }) {
            i += 1;
        }

        if i == length {
            return quoted;
        }

        if quoted {
            i += 1;
        }
        while i < length && chars[i] <= ' ' {
            i += 1;
        }
    }

    false
}
