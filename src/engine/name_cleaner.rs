//! Identifier cleaning driven by configured regex rules.
//!
//! Studio identifiers often embed redundant prefixes (a shot code carrying
//! project and episode tokens); cleaning strips those down to the canonical
//! short form used inside path templates.

use crate::domain::config::NameRule;
use crate::domain::error::PathError;

/// Apply a cleaning rule to a raw identifier.
///
/// If `raw` matches the rule's pattern, returns the replacement expression
/// with its capture references substituted. Identifiers that do not match are
/// returned unchanged, so already-clean values survive another pass
/// untouched. A missing rule is the identity.
///
/// `field` names the identifier being cleaned ("sequence", "shot",
/// "episode"), for error reporting only.
pub fn clean(raw: &str, field: &str, rule: Option<&NameRule>) -> Result<String, PathError> {
    let Some(rule) = rule else {
        return Ok(raw.to_string());
    };
    let regex = rule.compile().map_err(|reason| PathError::invalid_name_rule(field, reason))?;
    match regex.captures(raw) {
        Some(captures) => {
            let mut cleaned = String::new();
            captures.expand(&rule.replacement, &mut cleaned);
            Ok(cleaned)
        }
        None => Ok(raw.to_string()),
    }
}
