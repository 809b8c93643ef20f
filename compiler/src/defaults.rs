//! Default value normalisation.
//!
//! Array defaults are written as `[a, b, "c, d"]`; the list is split like a
//! single lazily-quoted CSV record. Textual defaults may be single- or
//! double-quoted in the source and always come out double-quoted.

use lazy_static::lazy_static;
use msgidl_schema::is_textual_type;
use regex::Regex;

lazy_static! {
    static ref OUTER_BRACKETS:      Regex = Regex::new(r"^\[|\]$").unwrap();
    static ref OUTER_DOUBLE_QUOTES: Regex = Regex::new(r#"^"|"$"#).unwrap();
    static ref OUTER_SINGLE_QUOTES: Regex = Regex::new(r"^'|'$").unwrap();
    static ref DOUBLE_QUOTE:        Regex = Regex::new(r#"\\?""#).unwrap();
    static ref SINGLE_QUOTE:        Regex = Regex::new(r"\\?'").unwrap();
}

/// Remove one `[` at the start and one `]` at the end.
pub fn strip_brackets(text: &str) -> String {
    OUTER_BRACKETS.replace_all(text, "").into_owned()
}

/// Split an array default into its element literals.
pub fn split_default_values(type_name: &str, text: &str) -> Vec<String> {
    let values = split_record(&strip_brackets(text));
    if is_textual_type(type_name) {
        values.iter().map(|v| quote_text(v)).collect()
    } else {
        values
    }
}

/// Normalise a scalar default.
pub fn sanitize_default(type_name: &str, text: &str) -> String {
    if !is_textual_type(type_name) {
        return text.to_string();
    }
    quote_text(&OUTER_DOUBLE_QUOTES.replace_all(text, ""))
}

/// Canonical double-quoted form of a textual literal whose outer double
/// quotes are already gone.
fn quote_text(value: &str) -> String {
    if value.is_empty() {
        return "\"\"".to_string();
    }
    let value = OUTER_SINGLE_QUOTES.replace_all(value, "");
    let value = DOUBLE_QUOTE.replace_all(&value, r#"\""#);
    let value = SINGLE_QUOTE.replace_all(&value, "'");
    format!("\"{}\"", value)
}

/// Split one comma separated record. Leading whitespace of every value is
/// dropped. A value starting with `"` runs to the next `"` followed by a comma
/// or the end of input, `""` inside it stands for one quote and any other
/// stray quote is kept as is.
fn split_record(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut values = Vec::new();
    let mut chars = text.chars().peekable();
    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let mut value = String::new();
        let mut more = false;
        if chars.next_if_eq(&'"').is_some() {
            while let Some(c) = chars.next() {
                if c != '"' {
                    value.push(c);
                    continue;
                }
                match chars.peek() {
                    Some('"') => {
                        chars.next();
                        value.push('"');
                    }
                    Some(',') | None => break,
                    Some(_) => value.push('"'),
                }
            }
            // Anything between the closing quote and the comma is kept.
            for c in chars.by_ref() {
                if c == ',' {
                    more = true;
                    break;
                }
                value.push(c);
            }
        } else {
            for c in chars.by_ref() {
                if c == ',' {
                    more = true;
                    break;
                }
                value.push(c);
            }
        }
        values.push(value);

        if !more {
            return values;
        }
    }
}
