use crate::error::{Result, TextoriumError};
use crate::model::Snippet;

/// Finds the position of the snippet `selector` refers to.
///
/// An exact id match wins. Otherwise the selector may be a unique prefix of
/// an id, with or without the `id-` prefix, so `textorium view k3j9` works.
pub fn resolve_position(snippets: &[Snippet], selector: &str) -> Result<usize> {
    let selector = selector.trim();
    if selector.is_empty() {
        return Err(TextoriumError::Api("Snippet id is required".to_string()));
    }

    if let Some(pos) = snippets.iter().position(|s| s.id == selector) {
        return Ok(pos);
    }

    let matches: Vec<usize> = snippets
        .iter()
        .enumerate()
        .filter(|(_, s)| {
            s.id.starts_with(selector)
                || s.id
                    .strip_prefix("id-")
                    .is_some_and(|rest| rest.starts_with(selector))
        })
        .map(|(pos, _)| pos)
        .collect();

    match matches.as_slice() {
        [pos] => Ok(*pos),
        [] => Err(TextoriumError::SnippetNotFound(selector.to_string())),
        _ => Err(TextoriumError::Api(format!(
            "Id prefix '{}' matches {} snippets",
            selector,
            matches.len()
        ))),
    }
}

/// Resolves several selectors, rejecting duplicates so each snippet is acted
/// on once. Order follows the selectors.
pub fn resolve_positions<I: AsRef<str>>(snippets: &[Snippet], selectors: &[I]) -> Result<Vec<usize>> {
    if selectors.is_empty() {
        return Err(TextoriumError::Api("Snippet id is required".to_string()));
    }
    let mut positions = Vec::with_capacity(selectors.len());
    for selector in selectors {
        let pos = resolve_position(snippets, selector.as_ref())?;
        if !positions.contains(&pos) {
            positions.push(pos);
        }
    }
    Ok(positions)
}
