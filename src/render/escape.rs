//! HTML escaping for text content and attribute values.

use super::AttributeEscaping;

/// Escape text content for embedding in HTML.
///
/// Replaces `&`, `<`, `>`, `"` and `'`. Escaping is applied exactly once:
/// already-escaped input is escaped again.
pub fn escape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    escape_html_into(&mut output, input);
    output
}

/// Escape text content into an existing buffer.
///
/// Returns the number of characters replaced.
pub fn escape_html_into(output: &mut String, input: &str) -> usize {
    let mut replaced = 0;
    for c in input.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            _ => {
                output.push(c);
                continue;
            }
        }
        replaced += 1;
    }
    replaced
}

/// Write an attribute value destined for a double-quoted attribute.
///
/// `Verbatim` inserts the value unchanged, so a value containing `"`
/// breaks out of its attribute. `Quote` replaces `&` and `"`.
pub fn escape_attr_into(output: &mut String, value: &str, mode: AttributeEscaping) {
    match mode {
        AttributeEscaping::Verbatim => output.push_str(value),
        AttributeEscaping::Quote => {
            for c in value.chars() {
                match c {
                    '&' => output.push_str("&amp;"),
                    '"' => output.push_str("&quot;"),
                    _ => output.push(c),
                }
            }
        }
    }
}
