//! Resolves user-supplied skip filters against the check registry.

use std::collections::HashSet;

use regex::Regex;

use crate::checks::{CheckDefinition, CheckRegistry};
use crate::error::{Result, TsvGuardError};

/// Turns skip filters into the active subset of the registry.
///
/// Each filter is tried as an exact code first; anything else is compiled as a
/// regular expression anchored to the full code (`^(?:pattern)$`) and excludes
/// every registered code it matches. The surviving checks keep registry order.
/// Stateless: the same filters against the same registry always produce the
/// same active set.
///
/// # Errors
/// Returns an error when a filter is neither a registered code nor a valid
/// regular expression.
pub fn select<'a>(
    registry: &'a CheckRegistry,
    skip_patterns: &[String],
) -> Result<Vec<&'a CheckDefinition>> {
    let mut excluded: HashSet<&'static str> = HashSet::new();

    for pattern in skip_patterns {
        if registry.contains(pattern) {
            excluded.insert(registry.lookup(pattern)?.code());
            continue;
        }

        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
            TsvGuardError::InvalidFilter {
                pattern: pattern.clone(),
                source,
            }
        })?;
        excluded.extend(registry.codes().filter(|code| regex.is_match(code)));
    }

    Ok(registry
        .all()
        .filter(|check| !excluded.contains(check.code()))
        .collect())
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
