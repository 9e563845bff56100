//! Pull a JSON payload out of free-form model output.

use serde_json::Value as JsonValue;

use crate::error::ParseFailure;

/// Parse a service response as JSON.
///
/// The whole (trimmed) text is tried first. If that fails, the first balanced
/// `{...}` or `[...]` span is cut out and parsed instead, which handles
/// markdown fences and chatty preambles around the payload.
pub fn extract_json(text: &str) -> Result<JsonValue, ParseFailure> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseFailure::NoJson);
    }

    if let Ok(value) = serde_json::from_str(trimmed) {
        return Ok(value);
    }

    let span = first_balanced_span(trimmed).ok_or(ParseFailure::NoJson)?;
    serde_json::from_str(span).map_err(|e| ParseFailure::InvalidJson(e.to_string()))
}

/// Find the first balanced object or array, skipping brackets inside strings.
fn first_balanced_span(text: &str) -> Option<&str> {
    let start = text.find(['{', '['])?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' | '[' => depth += 1,
            '}' | ']' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + c.len_utf8();
                    return Some(&text[start..end]);
                }
            }
            _ => {}
        }
    }

    None
}
