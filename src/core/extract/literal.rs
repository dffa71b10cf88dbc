//! String constant evaluation for Python literal nodes.
//!
//! Only literals the interpreter would fold into a plain `str` constant are
//! evaluated. Byte strings, f-strings and t-strings yield `None`.

use tree_sitter::Node;

/// Evaluate a `string` or `concatenated_string` node to its text value.
pub fn string_constant(node: Node<'_>, source: &[u8]) -> Option<String> {
    match node.kind() {
        "string" => string_literal_value(node.utf8_text(source).ok()?),
        "concatenated_string" => {
            let mut cursor = node.walk();
            let mut value = String::new();
            for part in node.named_children(&mut cursor) {
                match part.kind() {
                    "string" => {
                        let text = part.utf8_text(source).ok()?;
                        value.push_str(&string_literal_value(text)?);
                    }
                    "comment" => {}
                    _ => return None,
                }
            }
            Some(value)
        }
        _ => None,
    }
}

/// Evaluate the source text of a single string literal, prefix and quotes included.
///
/// # Examples
///
/// ```
/// use sample_env::core::extract::literal::string_literal_value;
///
/// assert_eq!(string_literal_value(r#""API_KEY""#).as_deref(), Some("API_KEY"));
/// assert_eq!(string_literal_value(r"r'a\b'").as_deref(), Some(r"a\b"));
/// assert_eq!(string_literal_value(r#"f"{x}""#), None);
/// assert_eq!(string_literal_value(r#"b"KEY""#), None);
/// ```
pub fn string_literal_value(text: &str) -> Option<String> {
    let quote_start = text.find(['"', '\''])?;
    let (prefix, quoted) = text.split_at(quote_start);

    let prefix = prefix.to_ascii_lowercase();
    if prefix.contains(['f', 'b', 't']) {
        return None;
    }
    let raw = prefix.contains('r');

    let delimiter = if quoted.starts_with("\"\"\"") || quoted.starts_with("'''") {
        &quoted[..3]
    } else {
        &quoted[..1]
    };
    if quoted.len() < delimiter.len() * 2 || !quoted.ends_with(delimiter) {
        return None;
    }
    let body = &quoted[delimiter.len()..quoted.len() - delimiter.len()];

    if raw {
        Some(body.to_string())
    } else {
        unescape(body)
    }
}

/// Decode backslash escapes the way a non-raw Python `str` literal does.
/// Unrecognized escapes keep their backslash. Named escapes (`\N{...}`)
/// need the Unicode name table, so such literals are not evaluated.
fn unescape(body: &str) -> Option<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(next) = chars.next() else {
            out.push('\\');
            break;
        };
        match next {
            '\n' => {}
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0c}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\u{0b}'),
            'N' => return None,
            '0'..='7' => {
                let mut digits = String::from(next);
                while digits.len() < 3 {
                    match chars.peek() {
                        Some(d @ '0'..='7') => {
                            digits.push(*d);
                            chars.next();
                        }
                        _ => break,
                    }
                }
                match u32::from_str_radix(&digits, 8).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push('\\');
                        out.push_str(&digits);
                    }
                }
            }
            'x' | 'u' | 'U' => {
                let width = match next {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let digits: String = chars.clone().take(width).collect();
                let is_hex = digits.len() == width && digits.chars().all(|d| d.is_ascii_hexdigit());
                let decoded = is_hex
                    .then(|| u32::from_str_radix(&digits, 16).ok())
                    .flatten()
                    .and_then(char::from_u32);
                match decoded {
                    Some(decoded) => {
                        out.push(decoded);
                        for _ in 0..width {
                            chars.next();
                        }
                    }
                    None => {
                        out.push('\\');
                        out.push(next);
                    }
                }
            }
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }

    Some(out)
}
