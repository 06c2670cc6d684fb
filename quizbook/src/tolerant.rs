//! Relaxed JSON preprocessing.
//!
//! Hand-written quiz files often carry a byte-order mark, `//` or `/* */`
//! comments, and trailing commas. [`relax`] removes those so the text can be
//! handed to a strict JSON parser. Quoted strings are copied through
//! untouched, so values like `"http://example.com"` or `"a /* b */ c"`
//! survive.

const BOM: char = '\u{feff}';

/// Strip a leading BOM, comments and trailing commas outside of strings.
///
/// An unterminated block comment is left in place so the parser reports it.
pub fn relax(text: &str) -> String {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    drop_trailing_commas(&strip_comments(text))
}

fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.char_indices().peekable();
    let mut in_string = false;

    while let Some((i, ch)) = chars.next() {
        if in_string {
            out.push(ch);
            match ch {
                '\\' => {
                    if let Some((_, escaped)) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match (ch, chars.peek().map(|&(_, next)| next)) {
            ('"', _) => {
                in_string = true;
                out.push(ch);
            }
            ('/', Some('/')) => {
                // Keep the newline itself.
                while chars.next_if(|&(_, c)| c != '\n').is_some() {}
            }
            ('/', Some('*')) => match text[i + 2..].find("*/") {
                Some(offset) => {
                    let end = i + 2 + offset + 2;
                    while chars.next_if(|&(j, _)| j < end).is_some() {}
                    out.push(' ');
                }
                None => {
                    out.push_str(&text[i..]);
                    break;
                }
            },
            _ => out.push(ch),
        }
    }
    out
}

fn drop_trailing_commas(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.char_indices();
    let mut in_string = false;

    while let Some((i, ch)) = chars.next() {
        if in_string {
            out.push(ch);
            match ch {
                '\\' => {
                    if let Some((_, escaped)) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => {
                in_string = true;
                out.push(ch);
            }
            ',' if text[i + 1..].trim_start().starts_with([']', '}']) => {}
            _ => out.push(ch),
        }
    }
    out
}
