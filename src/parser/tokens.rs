//! Per-line token scanning.

/// Scan one line into tokens, starting at character offset `start` (the
/// position just past the leading indentation).
///
/// A `"` begins a quoted token: everything up to the next `"` (or end of
/// line, for an unterminated quote) is the token's content, whitespace
/// included, with the delimiting quotes excluded. There is no escape
/// mechanism. Any other character begins a bare token ending at the next
/// whitespace. Whitespace here means any character with a code point at
/// or below the space character.
pub(crate) fn scan_line(line: &str, start: usize) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let length = chars.len();
    let mut tokens = Vec::new();

    let mut i = start;
    while i < length {
        let quoted = chars[i] == '"';
        if quoted {
            i += 1;
        }

        let mut token = String::new();
        while i < length && (if quoted { chars[i] != '"' } else { chars[i] > ' ' }) {
            token.push(chars[i]);
            i += 1;
        }
        tokens.push(token);

        if i < length {
            // Consume the closing quote, then the gap before the next token.
            if quoted {
                i += 1;
            }
            while i < length && chars[i] <= ' ' {
                i += 1;
            }
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bare_tokens() {
        assert_eq!(scan_line("ship Kestrel", 0), vec!["ship", "Kestrel"]);
    }

    #[test]
    fn test_quoted_token_keeps_whitespace() {
        assert_eq!(
            scan_line("ship \"Star Barge\"", 0),
            vec!["ship", "Star Barge"]
        );
    }

    #[test]
    fn test_quoted_token_leading_trailing_spaces() {
        assert_eq!(scan_line("\"  padded  \"", 0), vec!["  padded  "]);
    }

    #[test]
    fn test_unterminated_quote_takes_rest_of_line() {
        assert_eq!(
            scan_line("name \"no closing quote here", 0),
            vec!["name", "no closing quote here"]
        );
    }

    #[test]
    fn test_empty_quoted_token() {
        assert_eq!(scan_line("key \"\"", 0), vec!["key", ""]);
    }

    #[test]
    fn test_start_offset_skips_indentation() {
        assert_eq!(scan_line("\t\tbunks 12", 2), vec!["bunks", "12"]);
    }

    #[test]
    fn test_start_at_end_of_line() {
        assert_eq!(scan_line("abc", 3), Vec::<String>::new());
    }

    #[test]
    fn test_multiple_spaces_and_tabs_between_tokens() {
        assert_eq!(scan_line("a  \t b", 0), vec!["a", "b"]);
    }

    #[test]
    fn test_quote_closing_then_more_content() {
        // The character right after a closing quote starts a new bare token.
        assert_eq!(scan_line("\"ab\"cd", 0), vec!["ab", "cd"]);
    }

    #[test]
    fn test_inline_hash_is_not_a_comment() {
        // Only a leading # suppresses a line; mid-line it is token content.
        assert_eq!(
            scan_line("colour #ff00ff # trailing", 0),
            vec!["colour", "#ff00ff", "#", "trailing"]
        );
    }
}
