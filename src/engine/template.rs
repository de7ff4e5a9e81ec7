//! Strict `{name}` placeholder substitution.
//!
//! This is the engine's core correctness guarantee: no rendered output ever
//! contains a literal unsubstituted `{...}` token. An unterminated `{` or an
//! empty `{}` is treated as literal text, not as a placeholder.

use std::collections::BTreeMap;

use crate::domain::error::PathError;

/// Scan a template for `{name}` placeholders, in order of appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            break;
        };
        let name = &after[..end];
        if !name.is_empty() {
            found.push(name);
        }
        rest = &after[end + 1..];
    }
    found
}

/// Substitute every `{name}` placeholder in `template` from `variables`.
///
/// `context` names the template being rendered, for error reporting only.
/// Fails with [`PathError::UnresolvedVariable`] if any placeholder has no
/// entry in `variables`. Deterministic: the same template and variables
/// always produce byte-identical output.
pub fn render(
    context: &str,
    template: &str,
    variables: &BTreeMap<String, String>,
) -> Result<String, PathError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return Ok(out);
        };
        let name = &after[..end];
        if name.is_empty() {
            out.push_str("{}");
        } else {
            match variables.get(name) {
                Some(value) => out.push_str(value),
                None => {
                    return Err(PathError::UnresolvedVariable {
                        name: name.to_string(),
                        context: context.to_string(),
                    });
                }
            }
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Rewrite directory separators to `separator`.
///
/// Applied to path-template text and to path-bearing variable values (roots
/// and path segments); identifier values and the filename are never
/// rewritten.
pub fn normalize_separators(template: &str, separator: char) -> String {
    match separator {
        '\\' => template.replace('/', "\\"),
        _ => template.replace('\\', &separator.to_string()),
    }
}
