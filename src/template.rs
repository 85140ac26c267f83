//! Positional placeholder substitution for request bodies.
//!
//! A request body carries one `{}` placeholder per replace axis, in
//! axis order. `{{` and `}}` escape literal braces. A placeholder count
//! that does not match the tuple arity is rejected rather than padded
//! or truncated.

use crate::errors::SweepError;

/// Substitute `values` into `template`, left to right.
pub fn render(template: &str, values: &[String]) -> Result<String, SweepError> {
    let placeholders = placeholder_count(template);
    if placeholders != values.len() {
        return Err(SweepError::TemplateArity {
            placeholders,
            arity: values.len(),
        });
    }

    let substituted: usize = values.iter().map(String::len).sum();
    let mut out = String::with_capacity(template.len() + substituted);
    let mut next = values.iter();
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' if chars.peek() == Some(&'}') => {
                chars.next();
                // Arity was checked up front, so a value is present.
                if let Some(value) = next.next() {
                    out.push_str(value);
                }
            }
            _ => out.push(c),
        }
    }
    Ok(out)
}

/// Count `{}` placeholders, honoring `{{`/`}}` escapes. A lone brace
/// not forming a placeholder or escape is treated as a literal.
pub fn placeholder_count(template: &str) -> usize {
    let mut count = 0;
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
            }
            '{' if chars.peek() == Some(&'}') => {
                chars.next();
                count += 1;
            }
            _ => {}
        }
    }
    count
}
