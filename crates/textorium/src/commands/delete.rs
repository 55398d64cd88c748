use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnippetStore;

use super::helpers::resolve_positions;

/// Removes snippets permanently.
pub fn run<S: SnippetStore, I: AsRef<str>>(store: &mut S, ids: &[I]) -> Result<CmdResult> {
    let snippets = store.load_snippets()?;
    let positions = resolve_positions(&snippets, ids)?;

    let (removed, kept): (Vec<_>, Vec<_>) = snippets
        .into_iter()
        .enumerate()
        .partition(|(pos, _)| positions.contains(pos));
    let kept: Vec<_> = kept.into_iter().map(|(_, s)| s).collect();
    let removed: Vec<_> = removed.into_iter().map(|(_, s)| s).collect();

    store.save_snippets(&kept)?;

    let mut result = CmdResult::default();
    for snippet in &removed {
        result.add_message(CmdMessage::success(format!(
            "Snippet deleted: {}",
            snippet.title
        )));
    }
    Ok(result.with_affected(removed))
}
