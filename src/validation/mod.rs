//! Lint system for data file sources.
//!
//! Runs a suite of advisory checks against raw source text and reports
//! warnings. The parser itself never rejects input (every non-blank,
//! non-comment line produces a node), so these diagnostics exist to
//! surface constructs that parse fine but rarely mean what they look
//! like. Used by `grove validate`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

/// Run all lint checks against a data file source.
pub fn validate_source(source: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_mixed_indentation(source));
    result.merge(checks::check_unterminated_quotes(source));
    result.merge(checks::check_trailing_whitespace(source));

    result
}

/// Print diagnostics for one file to stderr.
pub fn print_diagnostics(name: &str, result: &ValidationResult) {
    for d in result.iter() {
        eprintln!("  {}:{}: {}[{}]: {}", name, d.line, d.severity, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_source() {
        let result = validate_source("ship \"Kestrel\"\n\tbunks 12\n");
        assert!(result.is_ok());
    }

    #[test]
    fn test_all_checks_run() {
        // One line trips all three lints at once.
        let source = "\t a \"unfinished \n";
        let result = validate_source(source);

        let codes: Vec<&str> = result.iter().map(|d| d.code.as_str()).collect();
        assert!(codes.contains(&"grove::lint::mixed-indentation"));
        assert!(codes.contains(&"grove::lint::unterminated-quote"));
        assert!(codes.contains(&"grove::lint::trailing-whitespace"));
    }

    #[test]
    fn test_warnings_do_not_affect_parsing() {
        // The same source that warns still parses to a full tree.
        let source = "\t a \"unfinished \n";
        let doc = crate::parser::Document::parse(source);

        assert_eq!(doc.nodes().len(), 1);
    }
}
